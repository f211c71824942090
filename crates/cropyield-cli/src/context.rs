//! Process-wide read-only state shared by both surfaces

use crate::config::AppConfig;
use crate::error::PredictError;
use cropyield_model::{LoadResult, PolynomialPipeline, Predictor, ReferenceDataset};
use cropyield_sweep::{analyze, SensitivityChart, SensitivityReport};
use cropyield_types::{FormOptions, InputForm, YieldEstimate, YIELD_UNIT};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Model, reference dataset and derived options, loaded once at startup.
#[derive(Clone)]
pub struct AppContext {
    pub predictor: Predictor,
    pub dataset: Arc<ReferenceDataset>,
    pub version: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

/// Result of one predict action, ready for display or serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionView {
    pub prediction: YieldEstimate,
    /// e.g. `37073.14 tonnes /area`
    pub formatted: String,
    pub unit: String,
    pub report: SensitivityReport,
    pub chart: SensitivityChart,
}

impl AppContext {
    /// Load the pipeline artifact and the reference dataset named in `config`.
    pub fn load(config: &AppConfig) -> LoadResult<Self> {
        let pipeline = PolynomialPipeline::load(&config.model.path)?;
        let dataset = ReferenceDataset::load(&config.dataset.path)?;

        // Offered choices the model cannot encode fail at predict time.
        for item in dataset.items().iter().filter(|i| !pipeline.knows_item(i)) {
            warn!(item = %item, "Dataset item is not in the model vocabulary");
        }
        for area in dataset.areas().iter().filter(|a| !pipeline.knows_area(a)) {
            warn!(area = %area, "Dataset area is not in the model vocabulary");
        }

        let context = Self::new(Predictor::from_model(pipeline), dataset);
        info!(
            model = context.predictor.model_name(),
            items = context.dataset.items().len(),
            areas = context.dataset.areas().len(),
            "Application context ready"
        );
        Ok(context)
    }

    pub fn new(predictor: Predictor, dataset: ReferenceDataset) -> Self {
        Self {
            predictor,
            dataset: Arc::new(dataset),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: chrono::Utc::now(),
        }
    }

    pub fn options(&self) -> &FormOptions {
        self.dataset.options()
    }

    /// Validate the form, then predict and sweep.
    pub fn predict(&self, form: &InputForm) -> Result<PredictionView, PredictError> {
        let record = form.resolve(self.options())?;
        let report = analyze(&self.predictor, &record)?;
        let chart = SensitivityChart::from_report(&report);

        Ok(PredictionView {
            prediction: report.prediction,
            formatted: report.prediction.formatted(),
            unit: YIELD_UNIT.to_string(),
            report,
            chart,
        })
    }

    /// Human-readable time since startup
    pub fn uptime(&self) -> String {
        let secs = (chrono::Utc::now() - self.started_at).num_seconds();

        if secs < 60 {
            format!("{}s", secs)
        } else if secs < 3600 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else if secs < 86400 {
            format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
        } else {
            format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
        }
    }
}
