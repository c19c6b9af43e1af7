use crate::math::{Point3, Tangent3};

use super::{Curve, CurveKind};

/// A circle in the plane `z = center.z`.
///
/// `P(t) = center + (r * cos(t), r * sin(t), 0)`
///
/// A zero radius is accepted and degenerates to the center point.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point3,
    radius: f64,
}

impl Circle {
    /// Creates a new circle around `center`.
    #[must_use]
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Creates a new circle centered at the origin.
    #[must_use]
    pub fn at_origin(radius: f64) -> Self {
        Self::new(Point3::origin(), radius)
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Curve for Circle {
    fn evaluate(&self, t: f64) -> Point3 {
        let (sin, cos) = t.sin_cos();
        self.center + Tangent3::new(self.radius * cos, self.radius * sin, 0.0)
    }

    fn tangent(&self, t: f64) -> Tangent3 {
        let (sin, cos) = t.sin_cos();
        Tangent3::new(-self.radius * sin, self.radius * cos, 0.0)
    }

    fn center(&self) -> &Point3 {
        &self.center
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Circle
    }

    fn is_closed(&self) -> bool {
        true
    }
}
