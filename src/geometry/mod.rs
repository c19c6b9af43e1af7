pub mod curve;

pub use curve::{Circle, Curve, CurveKind, CurveShape, Ellipse, Helix};
