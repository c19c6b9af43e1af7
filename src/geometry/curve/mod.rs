mod circle;
mod ellipse;
mod helix;

use std::fmt;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use helix::Helix;

use crate::math::{Point3, Tangent3};

/// Discriminant identifying which variant a curve is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Circle,
    Ellipse,
    Helix,
}

impl CurveKind {
    /// All variants, in the order the generator indexes them.
    pub const ALL: [Self; 3] = [Self::Circle, Self::Ellipse, Self::Helix];

    /// Human-readable variant name used in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Ellipse => "Ellipse",
            Self::Helix => "Helix",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Trait for parametric curves in 3D space.
///
/// Evaluation is total: every finite `t` is valid and no call can fail.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    fn evaluate(&self, t: f64) -> Point3;

    /// Computes the first derivative of [`Curve::evaluate`] at `t`.
    ///
    /// The vector is not normalized; its length is the parametric speed.
    fn tangent(&self, t: f64) -> Tangent3;

    /// Returns the reference offset of the curve.
    fn center(&self) -> &Point3;

    /// Returns the variant discriminant.
    fn kind(&self) -> CurveKind;

    /// Returns whether the curve returns to its start after one revolution.
    fn is_closed(&self) -> bool;
}

/// A curve of any supported variant.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveShape {
    /// A circle in a plane parallel to XY.
    Circle(Circle),
    /// An axis-aligned ellipse in a plane parallel to XY.
    Ellipse(Ellipse),
    /// A helix climbing along +Z.
    Helix(Helix),
}

impl CurveShape {
    /// Returns the circle if this shape is one.
    #[must_use]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Self::Circle(circle) => Some(circle),
            Self::Ellipse(_) | Self::Helix(_) => None,
        }
    }
}

impl Curve for CurveShape {
    fn evaluate(&self, t: f64) -> Point3 {
        match self {
            Self::Circle(c) => c.evaluate(t),
            Self::Ellipse(e) => e.evaluate(t),
            Self::Helix(h) => h.evaluate(t),
        }
    }

    fn tangent(&self, t: f64) -> Tangent3 {
        match self {
            Self::Circle(c) => c.tangent(t),
            Self::Ellipse(e) => e.tangent(t),
            Self::Helix(h) => h.tangent(t),
        }
    }

    fn center(&self) -> &Point3 {
        match self {
            Self::Circle(c) => c.center(),
            Self::Ellipse(e) => e.center(),
            Self::Helix(h) => h.center(),
        }
    }

    fn kind(&self) -> CurveKind {
        match self {
            Self::Circle(_) => CurveKind::Circle,
            Self::Ellipse(_) => CurveKind::Ellipse,
            Self::Helix(_) => CurveKind::Helix,
        }
    }

    fn is_closed(&self) -> bool {
        match self {
            Self::Circle(c) => c.is_closed(),
            Self::Ellipse(e) => e.is_closed(),
            Self::Helix(h) => h.is_closed(),
        }
    }
}

impl From<Circle> for CurveShape {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

impl From<Ellipse> for CurveShape {
    fn from(e: Ellipse) -> Self {
        Self::Ellipse(e)
    }
}

impl From<Helix> for CurveShape {
    fn from(h: Helix) -> Self {
        Self::Helix(h)
    }
}
