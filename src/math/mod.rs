/// A position in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A first-derivative (rate) vector in 3D space.
///
/// Kept distinct from [`Point3`]: subtracting two points yields a `Tangent3`,
/// adding one to a point yields a point, and adding two points does not compile.
pub type Tangent3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Half-width of the interval random curve parameters are drawn from.
pub const PARAMETER_RANGE: f64 = 10.0;
