use thiserror::Error;

/// Top-level error type for curvekit.
#[derive(Debug, Error)]
pub enum CurveKitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised while validating a pipeline configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("evaluation parameter must be finite, got {0}")]
    NonFiniteParameter(f64),
}

/// Errors related to curve store lookups.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Convenience type alias for results using [`CurveKitError`].
pub type Result<T> = std::result::Result<T, CurveKitError>;
