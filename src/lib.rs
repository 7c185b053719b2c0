//! Allocation-free linear algebra for graphics, physics and games: vectors, quaternions,
//! 4x4 matrices, planes, colours and bounding volumes, generic over `f32` and `f64`.
//!
//! Most callers only need the prelude:
//!
//! ```
//! use vectormath::core::prelude::*;
//!
//! let q = Quaternion::rotation_axis(Vec3::UNIT_Y, std::f32::consts::FRAC_PI_2)?;
//! let v = Vec3::UNIT_X.transform(q);
//! assert!(v.almost_eq(Vec3::new(0.0, 0.0, -1.0)));
//! # Ok::<(), MathError>(())
//! ```

pub mod core;
pub mod util;
