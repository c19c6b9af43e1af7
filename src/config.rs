use std::f64::consts::FRAC_PI_4;

use crate::error::ConfigError;

/// Number of curves generated when no count is given.
pub const DEFAULT_COUNT: usize = 20;

/// Run-level settings for [`crate::operations::Pipeline`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Number of curves to generate.
    pub count: usize,
    /// Parameter every curve is evaluated at.
    pub parameter: f64,
}

impl PipelineConfig {
    /// Creates the default configuration: 20 curves evaluated at `pi/4`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            count: DEFAULT_COUNT,
            parameter: FRAC_PI_4,
        }
    }

    /// Sets the number of curves to generate.
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the evaluation parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: f64) -> Self {
        self.parameter = parameter;
        self
    }

    /// Checks that the configuration can be run.
    ///
    /// # Errors
    ///
    /// Returns an error if the evaluation parameter is NaN or infinite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.parameter.is_finite() {
            return Err(ConfigError::NonFiniteParameter(self.parameter));
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.count, 20);
        assert!((config.parameter - FRAC_PI_4).abs() < 1e-15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_overrides() {
        let config = PipelineConfig::new().with_count(3).with_parameter(1.5);
        assert_eq!(config.count, 3);
        assert!((config.parameter - 1.5).abs() < 1e-15);
    }

    #[test]
    fn rejects_non_finite_parameter() {
        let config = PipelineConfig::new().with_parameter(f64::INFINITY);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFiniteParameter(f64::INFINITY))
        );
        assert!(PipelineConfig::new().with_parameter(f64::NAN).validate().is_err());
    }
}
