use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::geometry::{Circle, CurveKind, CurveShape, Ellipse, Helix};
use crate::math::{Point3, PARAMETER_RANGE};

/// Produces randomly typed, randomly parameterized curves.
///
/// The random source is injected and consumed sequentially. Each call to
/// [`CurveFactory::generate`] draws the variant first, then the center
/// `x, y, z`, then the shape parameters in declaration order. Centers are
/// signed in `[-10, 10)`; shape parameters are folded to `[0, 10]`.
#[derive(Debug, Clone)]
pub struct CurveFactory<R> {
    rng: R,
}

impl<R: Rng> CurveFactory<R> {
    /// Creates a factory drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates one curve of a uniformly chosen variant.
    pub fn generate(&mut self) -> CurveShape {
        let kind = CurveKind::ALL[self.rng.gen_range(0..CurveKind::ALL.len())];
        let center = Point3::new(self.signed(), self.signed(), self.signed());
        tracing::trace!(%kind, ?center, "generating curve");
        match kind {
            CurveKind::Circle => Circle::new(center, self.magnitude()).into(),
            CurveKind::Ellipse => {
                let a = self.magnitude();
                let b = self.magnitude();
                Ellipse::new(center, a, b).into()
            }
            CurveKind::Helix => {
                let radius = self.magnitude();
                let pitch = self.magnitude();
                Helix::new(center, radius, pitch).into()
            }
        }
    }

    fn signed(&mut self) -> f64 {
        self.rng.gen_range(-PARAMETER_RANGE..PARAMETER_RANGE)
    }

    fn magnitude(&mut self) -> f64 {
        self.signed().abs()
    }
}

impl CurveFactory<ChaCha8Rng> {
    /// Creates a reproducible factory from a fixed seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a factory seeded once from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}
