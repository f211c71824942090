//! HTTP/JSON surface for the predict-and-sweep form

pub mod handlers;

use crate::context::AppContext;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn create_router(ctx: AppContext) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/options", get(handlers::form_options))
        .route("/predict", post(handlers::predict));

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::test_context;
    use crate::context::PredictionView;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use cropyield_types::FormOptions;
    use tower::ServiceExt;

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn predict_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/predict")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_model() {
        let app = create_router(test_context());
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["model"], "kenya");
    }

    #[tokio::test]
    async fn options_lists_dataset_choices() {
        let app = create_router(test_context());
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/options")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let options: FormOptions = serde_json::from_value(body_json(resp).await).unwrap();
        assert_eq!(options.items, vec!["Maize", "Wheat"]);
        assert_eq!(options.areas, vec!["India", "Kenya"]);
    }

    #[tokio::test]
    async fn predict_returns_three_series() {
        let app = create_router(test_context());
        let resp = app
            .oneshot(predict_request(serde_json::json!({
                "item": "Maize",
                "area": "Kenya",
                "rainfall": 600.0,
                "temperature": 20
            })))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let view: PredictionView = serde_json::from_value(body_json(resp).await).unwrap();
        assert_eq!(view.formatted, "620.00 tonnes /area");
        assert_eq!(view.chart.series.len(), 3);
        assert!(view.chart.series.iter().all(|s| s.x.len() == 20));
    }

    #[tokio::test]
    async fn invalid_form_returns_422() {
        let app = create_router(test_context());
        let resp = app
            .oneshot(predict_request(serde_json::json!({
                "item": "Maize",
                "area": "Kenya",
                "temperature": 60
            })))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(resp).await["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn oversized_rainfall_is_rejected_as_input() {
        let app = create_router(test_context());
        let resp = app
            .oneshot(predict_request(serde_json::json!({
                "item": "Maize",
                "area": "Kenya",
                "rainfall": 1.7e308
            })))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(resp).await["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn malformed_body_returns_json_error() {
        for body in [
            serde_json::json!({"item": "Maize", "area": "Kenya", "temperature": 20.5}),
            serde_json::json!({"item": "Maize"}),
        ] {
            let app = create_router(test_context());
            let resp = app.oneshot(predict_request(body)).await.unwrap();

            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
            let json = body_json(resp).await;
            assert_eq!(json["code"], "INVALID_INPUT");
            assert!(json["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request body:"));
        }
    }

    #[tokio::test]
    async fn missing_content_type_returns_json_error() {
        let app = create_router(test_context());
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/predict")
                    .body(Body::from(r#"{"item":"Maize","area":"Kenya"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(resp).await["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn unknown_category_returns_422() {
        let app = create_router(test_context());
        let resp = app
            .oneshot(predict_request(serde_json::json!({
                "item": "Maize",
                "area": "India"
            })))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(resp).await;
        assert_eq!(json["code"], "UNKNOWN_CATEGORY");
        assert_eq!(json["error"], "Unknown category: area India");
    }
}
