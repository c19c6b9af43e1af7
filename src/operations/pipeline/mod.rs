mod evaluate;
mod filter;
mod populate;
mod report;

pub use evaluate::{EvaluateAll, EvaluationRecord};
pub use filter::{CircleEntry, CircleView, FilterCircles};
pub use populate::Populate;
pub use report::Report;

use rand::Rng;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::operations::CurveFactory;
use crate::store::CurveStore;

/// Generate, evaluate, filter, aggregate, sort.
///
/// Steps run strictly in that order. The radius sum is taken from the
/// filtered view before it is sorted.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Creates a new pipeline.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Generates `config.count` curves from `factory` and reports on them.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn run<R: Rng>(&self, factory: &mut CurveFactory<R>) -> Result<Report> {
        self.config.validate()?;
        let mut store = CurveStore::new();
        Populate::new(self.config.count).execute(factory, &mut store);
        self.run_on(&store)
    }

    /// Reports on an already populated store.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn run_on(&self, store: &CurveStore) -> Result<Report> {
        self.config.validate()?;
        let evaluations = EvaluateAll::new(self.config.parameter).execute(store);

        let mut circles = FilterCircles::new().execute(store);
        let sum_of_radii = circles.sum_radii();
        circles.sort_by_radius();

        tracing::debug!(
            curves = evaluations.len(),
            circles = circles.len(),
            sum_of_radii,
            "pipeline finished"
        );

        Ok(Report {
            parameter: self.config.parameter,
            evaluations,
            sorted_radii: circles.radii(),
            sum_of_radii,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, CurveKitError};
    use crate::geometry::{Circle, CurveKind, Ellipse, Helix};

    #[test]
    fn one_of_each_variant() {
        let mut store = CurveStore::new();
        store.add(Circle::at_origin(5.0));
        store.add(Ellipse::at_origin(2.0, 3.0));
        store.add(Helix::at_origin(1.0, 4.0));

        let report = Pipeline::new(PipelineConfig::default())
            .run_on(&store)
            .unwrap();
        assert_eq!(report.evaluations.len(), 3);
        assert_eq!(report.sorted_radii, vec![5.0]);
        assert!((report.sum_of_radii - 5.0).abs() < 1e-12);
    }

    #[test]
    fn run_generates_configured_count() {
        let config = PipelineConfig::new().with_count(37);
        let report = Pipeline::new(config)
            .run(&mut CurveFactory::from_seed(21))
            .unwrap();
        assert_eq!(report.evaluations.len(), 37);

        let circle_count = report
            .evaluations
            .iter()
            .filter(|r| r.kind == CurveKind::Circle)
            .count();
        assert_eq!(report.sorted_radii.len(), circle_count);
        let total: f64 = report.sorted_radii.iter().sum();
        assert!((total - report.sum_of_radii).abs() < 1e-9);
    }

    #[test]
    fn same_seed_same_report() {
        let pipeline = Pipeline::new(PipelineConfig::default());
        let a = pipeline.run(&mut CurveFactory::from_seed(4)).unwrap();
        let b = pipeline.run(&mut CurveFactory::from_seed(4)).unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let pipeline = Pipeline::new(PipelineConfig::new().with_parameter(f64::NAN));
        let err = pipeline.run(&mut CurveFactory::from_seed(1)).unwrap_err();
        assert!(matches!(
            err,
            CurveKitError::Config(ConfigError::NonFiniteParameter(_))
        ));
    }
}
