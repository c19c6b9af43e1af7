use std::f64::consts::TAU;

use crate::math::{Point3, Tangent3, TOLERANCE};

use super::{Curve, CurveKind};

/// A circular helix rising along +Z.
///
/// `P(t) = center + (r * cos(t), r * sin(t), t * pitch / 2pi)`
///
/// `pitch` is the height gained per full revolution. A zero radius
/// degenerates to a vertical line through the center.
#[derive(Debug, Clone, PartialEq)]
pub struct Helix {
    center: Point3,
    radius: f64,
    pitch: f64,
}

impl Helix {
    /// Creates a new helix starting at `center`.
    #[must_use]
    pub fn new(center: Point3, radius: f64, pitch: f64) -> Self {
        Self {
            center,
            radius,
            pitch,
        }
    }

    /// Creates a new helix starting at the origin.
    #[must_use]
    pub fn at_origin(radius: f64, pitch: f64) -> Self {
        Self::new(Point3::origin(), radius, pitch)
    }

    /// Returns the radius of the helix.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the pitch (rise per revolution).
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Rise per radian of `t`.
    #[must_use]
    pub fn z_rate(&self) -> f64 {
        self.pitch / TAU
    }
}

impl Curve for Helix {
    fn evaluate(&self, t: f64) -> Point3 {
        let (sin, cos) = t.sin_cos();
        self.center + Tangent3::new(self.radius * cos, self.radius * sin, t * self.z_rate())
    }

    fn tangent(&self, t: f64) -> Tangent3 {
        let (sin, cos) = t.sin_cos();
        Tangent3::new(-self.radius * sin, self.radius * cos, self.z_rate())
    }

    fn center(&self) -> &Point3 {
        &self.center
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Helix
    }

    fn is_closed(&self) -> bool {
        self.pitch.abs() < TOLERANCE
    }
}
