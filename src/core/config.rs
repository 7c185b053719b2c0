/// Tolerance for approximate comparisons (`almost_eq`, `is_normalized`).
pub const EPSILON: f64 = 1e-5;
/// Below this, a squared length or a determinant-like quantity is treated as degenerate.
pub const ZERO_TOLERANCE: f64 = 1e-6;

/// The default scalar used by the non-generic aliases in the prelude.
#[cfg(not(feature = "double-precision"))]
pub type Real = f32;
#[cfg(feature = "double-precision")]
pub type Real = f64;
