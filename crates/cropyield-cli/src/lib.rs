//! Crop Yield CLI library
//!
//! Hosts the predict-and-sweep form on two surfaces:
//! - a terminal front end (`cropyield options`, `cropyield predict`)
//! - an HTTP/JSON API (`cropyield serve`) for page and chart collaborators
//!
//! Both share one [`AppContext`], loaded once at startup and read-only after.

#![deny(unsafe_code)]

pub mod api;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod output;
pub mod server;

pub use config::AppConfig;
pub use context::{AppContext, PredictionView};
pub use error::{ApiError, CliError, CliResult, PredictError};
pub use server::Server;
