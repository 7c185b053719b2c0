use std::error::Error;
use tracing_subscriber::fmt::time::OffsetTime;

pub mod assert;
pub mod bounds;
pub mod colour;
pub mod frustum;
pub mod linalg;
pub mod matrix;
pub mod plane;
pub mod quaternion;

pub mod vm_float {
    use crate::core::config::{EPSILON, ZERO_TOLERANCE};
    use num_traits::{Float, FloatConst};
    use std::fmt::{Debug, Display};
    use std::iter::Sum;

    /// The scalar types every vector, matrix and volume in this crate is generic over.
    ///
    /// Implemented for [`f32`] and [`f64`]. The tolerances are the values from
    /// [`config`](crate::core::config) converted to the scalar type.
    pub trait Scalar:
        Float + FloatConst + Default + Debug + Display + Sum + Send + Sync + 'static
    {
        const ZERO: Self;
        const ONE: Self;
        const NEG_ONE: Self;
        const TOLERANCE: Self;
        const ZERO_TOLERANCE: Self;
        const HALF: Self;
        const TWO: Self;

        /// Converts a literal, rounding to the nearest representable value.
        fn from_f64_lossy(value: f64) -> Self;

        /// True when `|self|` is below [`ZERO_TOLERANCE`](Scalar::ZERO_TOLERANCE).
        fn is_near_zero(self) -> bool {
            self.abs() < Self::ZERO_TOLERANCE
        }

        /// True when `self`, read as a squared length, can be divided out: strictly positive
        /// and finite. Short vectors still qualify; only an exact zero, an overflow or a NaN
        /// does not.
        fn is_divisible_length_sq(self) -> bool {
            self > Self::ZERO && self.is_finite()
        }

        /// True when `self` and `rhs` differ by less than [`TOLERANCE`](Scalar::TOLERANCE).
        ///
        /// ```
        /// use vectormath::core::prelude::*;
        /// assert!(1.0_f32.almost_eq(1.0 + 1e-7));
        /// assert!(!1.0_f32.almost_eq(1.001));
        /// ```
        fn almost_eq(self, rhs: Self) -> bool {
            (self - rhs).abs() < Self::TOLERANCE
        }

        /// Like `signum()`, but zero (of either sign) maps to one.
        fn sign_or_one(self) -> Self {
            if self < Self::zero() {
                -Self::one()
            } else {
                Self::one()
            }
        }
    }

    impl Scalar for f32 {
        const ZERO: f32 = 0.0;
        const ONE: f32 = 1.0;
        const NEG_ONE: f32 = -1.0;
        #[allow(clippy::cast_possible_truncation)]
        const TOLERANCE: f32 = EPSILON as f32;
        #[allow(clippy::cast_possible_truncation)]
        const ZERO_TOLERANCE: f32 = ZERO_TOLERANCE as f32;
        const HALF: f32 = 0.5;
        const TWO: f32 = 2.0;

        #[allow(clippy::cast_possible_truncation)]
        fn from_f64_lossy(value: f64) -> Self {
            value as f32
        }
    }

    impl Scalar for f64 {
        const ZERO: f64 = 0.0;
        const ONE: f64 = 1.0;
        const NEG_ONE: f64 = -1.0;
        const TOLERANCE: f64 = EPSILON;
        const ZERO_TOLERANCE: f64 = ZERO_TOLERANCE;
        const HALF: f64 = 0.5;
        const TWO: f64 = 2.0;

        fn from_f64_lossy(value: f64) -> Self {
            value
        }
    }

    /// Clamps `value` into `[min, max]`. NaN passes through unchanged.
    pub fn clamp<T: Scalar>(value: T, min: T, max: T) -> T {
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }
}

/// Installs a stderr `tracing` subscriber with microsecond UTC timestamps and source locations.
///
/// Host applications call this once at startup; later calls return an error and leave the
/// first subscriber in place.
pub fn setup_log() -> Result<(), Box<dyn Error + Send + Sync>> {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(std::io::stderr)
        .try_init()
}
