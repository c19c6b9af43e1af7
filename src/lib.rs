pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod store;

pub use config::PipelineConfig;
pub use error::{CurveKitError, Result};
