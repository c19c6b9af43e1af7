use crate::math::{Point3, Tangent3};

use super::{Curve, CurveKind};

/// An axis-aligned ellipse in the plane `z = center.z`.
///
/// `P(t) = center + (a * cos(t), b * sin(t), 0)`
///
/// `a` runs along X and `b` along Y; neither is required to be the larger.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    center: Point3,
    semi_axis_a: f64,
    semi_axis_b: f64,
}

impl Ellipse {
    /// Creates a new ellipse around `center`.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the ellipse
    /// * `semi_axis_a` - Semi-axis along X
    /// * `semi_axis_b` - Semi-axis along Y
    #[must_use]
    pub fn new(center: Point3, semi_axis_a: f64, semi_axis_b: f64) -> Self {
        Self {
            center,
            semi_axis_a,
            semi_axis_b,
        }
    }

    /// Creates a new ellipse centered at the origin.
    #[must_use]
    pub fn at_origin(semi_axis_a: f64, semi_axis_b: f64) -> Self {
        Self::new(Point3::origin(), semi_axis_a, semi_axis_b)
    }

    /// Returns the semi-axis along X.
    #[must_use]
    pub fn semi_axis_a(&self) -> f64 {
        self.semi_axis_a
    }

    /// Returns the semi-axis along Y.
    #[must_use]
    pub fn semi_axis_b(&self) -> f64 {
        self.semi_axis_b
    }
}

impl Curve for Ellipse {
    fn evaluate(&self, t: f64) -> Point3 {
        let (sin, cos) = t.sin_cos();
        self.center + Tangent3::new(self.semi_axis_a * cos, self.semi_axis_b * sin, 0.0)
    }

    fn tangent(&self, t: f64) -> Tangent3 {
        let (sin, cos) = t.sin_cos();
        Tangent3::new(-self.semi_axis_a * sin, self.semi_axis_b * cos, 0.0)
    }

    fn center(&self) -> &Point3 {
        &self.center
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Ellipse
    }

    fn is_closed(&self) -> bool {
        true
    }
}
