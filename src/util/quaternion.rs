#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::vm_float::clamp;
use num_traits::{One, Zero};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A rotation (or, when not unit length, a scaled rotation) stored as `x, y, z, w` with the
/// scalar part last.
///
/// Multiplication is the Hamilton product: `a * b` applies `b` first, then `a`.
///
/// # Examples
///
/// ```
/// use vectormath::core::prelude::*;
/// use std::f64::consts::FRAC_PI_2;
///
/// let yaw = Quaternion::rotation_axis(Vec3::UNIT_Y, FRAC_PI_2)?;
/// let pitch = Quaternion::rotation_axis(Vec3::UNIT_X, FRAC_PI_2)?;
///
/// // Pitch first, then yaw.
/// let v = Vec3::<f64>::UNIT_Z.transform(yaw * pitch);
/// check_almost_eq!(v, Vec3::UNIT_Z.transform(pitch).transform(yaw));
/// # Ok::<(), MathError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quaternion<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Scalar> Quaternion<T> {
    pub const IDENTITY: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);
    pub const ONE: Self = Self::new(T::ONE, T::ONE, T::ONE, T::ONE);

    #[must_use]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// The vector part `(x, y, z)`.
    pub fn xyz(&self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }
    /// Euclidean norm over all four components. Returns exactly zero when the squared length is
    /// within zero tolerance.
    pub fn length(&self) -> T {
        let len_sq = self.length_squared();
        if len_sq.is_near_zero() {
            T::ZERO
        } else {
            len_sq.sqrt()
        }
    }

    /// Scales to unit length in place. Any non-zero quaternion is normalised, however short; a
    /// zero quaternion is left as it is.
    pub fn normalize(&mut self) {
        let len_sq = self.length_squared();
        if !len_sq.is_divisible_length_sq() {
            warn!("Quaternion::normalize(): zero-length quaternion {self}, leaving unchanged");
            return;
        }
        *self *= T::one() / len_sq.sqrt();
    }
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
    pub fn try_normalized(self) -> Result<Self, MathError> {
        if !self.length_squared().is_divisible_length_sq() {
            Err(MathError::ZeroLengthQuaternion)
        } else {
            Ok(self.normalized())
        }
    }
    pub fn is_normalized(&self) -> bool {
        (self.length_squared() - T::one()).abs() < T::TOLERANCE
    }

    /// Exact comparison with [`IDENTITY`](Quaternion::IDENTITY); a quaternion that is merely
    /// close to the identity reports `false`.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Negates the vector part in place. For a unit quaternion this is the inverse rotation.
    pub fn conjugate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }
    #[must_use]
    pub fn conjugated(mut self) -> Self {
        self.conjugate();
        self
    }

    /// Inverts in place: the conjugate divided by the squared length. A zero quaternion is left
    /// as it is.
    pub fn invert(&mut self) {
        let len_sq = self.length_squared();
        if !len_sq.is_divisible_length_sq() {
            warn!("Quaternion::invert(): zero-length quaternion {self}, leaving unchanged");
            return;
        }
        self.conjugate();
        *self *= T::one() / len_sq;
    }
    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.invert();
        self
    }
    pub fn try_inverted(self) -> Result<Self, MathError> {
        if !self.length_squared().is_divisible_length_sq() {
            Err(MathError::ZeroLengthQuaternion)
        } else {
            Ok(self.inverted())
        }
    }

    /// The rotation angle in radians, in `[0, 2π]`. Assumes a unit quaternion.
    pub fn angle(&self) -> T {
        T::TWO * clamp(self.w, -T::one(), T::one()).acos()
    }

    /// The normalised rotation axis. Falls back to [`Vec3::UNIT_X`] when the vector part is
    /// exactly zero and the axis is undefined; small rotations keep their axis.
    pub fn axis(&self) -> Vec3<T> {
        let v = self.xyz();
        if !v.length_squared().is_divisible_length_sq() {
            Vec3::UNIT_X
        } else {
            v.normalized()
        }
    }

    /// Blends component-wise towards `to` and renormalises. When the two quaternions lie in
    /// opposite hemispheres `to` is negated first, so the blend takes the short way round.
    #[must_use]
    pub fn lerp(&self, to: Self, t: T) -> Self {
        let inverse = T::one() - t;
        let result = if self.dot(to) >= T::ZERO {
            *self * inverse + to * t
        } else {
            *self * inverse - to * t
        };
        result.normalized()
    }

    /// Spherical interpolation towards `to`.
    ///
    /// Nearly parallel inputs fall back to a linear blend, which avoids dividing by a vanishing
    /// `sin θ`. The result is renormalised.
    ///
    /// ```
    /// use vectormath::core::prelude::*;
    /// use std::f32::consts::FRAC_PI_2;
    /// let from = Quaternion::<f32>::IDENTITY;
    /// let to = Quaternion::rotation_axis(Vec3::UNIT_Z, FRAC_PI_2)?;
    /// let half = from.slerp(to, 0.5);
    /// check_almost_eq!(half.angle(), FRAC_PI_2 / 2.0);
    /// # Ok::<(), MathError>(())
    /// ```
    #[must_use]
    pub fn slerp(&self, to: Self, t: T) -> Self {
        let dot = self.dot(to);
        let sign = dot.sign_or_one();
        let (inverse, opposite) = if dot.abs() > T::one() - T::ZERO_TOLERANCE {
            (T::one() - t, t * sign)
        } else {
            let theta = dot.abs().acos();
            let inv_sin = T::one() / theta.sin();
            (
                ((T::one() - t) * theta).sin() * inv_sin,
                (t * theta).sin() * inv_sin * sign,
            )
        };
        (*self * inverse + to * opposite).normalized()
    }

    /// A unit quaternion rotating `angle` radians about `axis` (right-hand rule). The axis does
    /// not need to be normalised.
    pub fn rotation_axis(axis: Vec3<T>, angle: T) -> Result<Self, MathError> {
        let axis = axis
            .try_normalized()
            .map_err(|_| MathError::ZeroLengthAxis)?;
        let (sin, cos) = (angle * T::HALF).sin_cos();
        let v = axis * sin;
        Ok(Self::new(v.x(), v.y(), v.z(), cos))
    }

    /// Rotation from Euler angles: `roll` about Z is applied first, then `pitch` about X, then
    /// `yaw` about Y.
    pub fn rotation_yaw_pitch_roll(yaw: T, pitch: T, roll: T) -> Self {
        let (sy, cy) = (yaw * T::HALF).sin_cos();
        let (sp, cp) = (pitch * T::HALF).sin_cos();
        let (sr, cr) = (roll * T::HALF).sin_cos();
        Self::new(
            cy * sp * cr + sy * cp * sr,
            sy * cp * cr - cy * sp * sr,
            cy * cp * sr - sy * sp * cr,
            cy * cp * cr + sy * sp * sr,
        )
    }

    /// Extracts the rotation from the upper-left 3x3 of `m`, which must be orthonormal (no
    /// scale or shear).
    pub fn from_rotation_matrix(m: &Mat4<T>) -> Self {
        let trace = m.m11 + m.m22 + m.m33;
        if trace > T::ZERO {
            let root = (trace + T::one()).sqrt();
            let half = T::HALF / root;
            Self::new(
                (m.m23 - m.m32) * half,
                (m.m31 - m.m13) * half,
                (m.m12 - m.m21) * half,
                root * T::HALF,
            )
        } else if m.m11 >= m.m22 && m.m11 >= m.m33 {
            let root = (T::one() + m.m11 - m.m22 - m.m33).sqrt();
            let half = T::HALF / root;
            Self::new(
                root * T::HALF,
                (m.m12 + m.m21) * half,
                (m.m13 + m.m31) * half,
                (m.m23 - m.m32) * half,
            )
        } else if m.m22 > m.m33 {
            let root = (T::one() + m.m22 - m.m11 - m.m33).sqrt();
            let half = T::HALF / root;
            Self::new(
                (m.m21 + m.m12) * half,
                root * T::HALF,
                (m.m32 + m.m23) * half,
                (m.m31 - m.m13) * half,
            )
        } else {
            let root = (T::one() + m.m33 - m.m11 - m.m22).sqrt();
            let half = T::HALF / root;
            Self::new(
                (m.m31 + m.m13) * half,
                (m.m32 + m.m23) * half,
                root * T::HALF,
                (m.m12 - m.m21) * half,
            )
        }
    }

    pub fn almost_eq(&self, rhs: Self) -> bool {
        self.x.almost_eq(rhs.x)
            && self.y.almost_eq(rhs.y)
            && self.z.almost_eq(rhs.z)
            && self.w.almost_eq(rhs.w)
    }
}

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> Zero for Quaternion<T> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
impl<T: Scalar> One for Quaternion<T> {
    fn one() -> Self {
        Self::IDENTITY
    }
}

impl<T> From<[T; 4]> for Quaternion<T> {
    fn from(value: [T; 4]) -> Self {
        let [x, y, z, w] = value;
        Self { x, y, z, w }
    }
}
impl<T: Scalar> From<Vec4<T>> for Quaternion<T> {
    fn from(value: Vec4<T>) -> Self {
        Self::new(value.x(), value.y(), value.z(), value.w())
    }
}
impl<T: Scalar> From<Quaternion<T>> for Vec4<T> {
    fn from(value: Quaternion<T>) -> Self {
        Vec4::new(value.x, value.y, value.z, value.w)
    }
}

impl<T: Scalar> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            write!(
                f,
                "quat({0:.4$}, {1:.4$}, {2:.4$}, {3:.4$})",
                self.x, self.y, self.z, self.w, p
            )
        } else {
            write!(f, "quat({}, {}, {}, {})", self.x, self.y, self.z, self.w)
        }
    }
}

impl<T: Scalar> Add<Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T>;

    fn add(self, rhs: Quaternion<T>) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}
impl<T: Scalar> AddAssign<Quaternion<T>> for Quaternion<T> {
    fn add_assign(&mut self, rhs: Quaternion<T>) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> Sub<Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T>;

    fn sub(self, rhs: Quaternion<T>) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}
impl<T: Scalar> SubAssign<Quaternion<T>> for Quaternion<T> {
    fn sub_assign(&mut self, rhs: Quaternion<T>) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Mul<Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T>;

    fn mul(self, rhs: Quaternion<T>) -> Self::Output {
        let (lx, ly, lz, lw) = (self.x, self.y, self.z, self.w);
        let (rx, ry, rz, rw) = (rhs.x, rhs.y, rhs.z, rhs.w);
        // Vector part of lhs × rhs.
        let a = ly * rz - lz * ry;
        let b = lz * rx - lx * rz;
        let c = lx * ry - ly * rx;
        let d = lx * rx + ly * ry + lz * rz;
        Self::new(
            lx * rw + rx * lw + a,
            ly * rw + ry * lw + b,
            lz * rw + rz * lw + c,
            lw * rw - d,
        )
    }
}
impl<T: Scalar> MulAssign<Quaternion<T>> for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Quaternion<T>) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Mul<T> for Quaternion<T> {
    type Output = Quaternion<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}
impl<T: Scalar> MulAssign<T> for Quaternion<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Neg for Quaternion<T> {
    type Output = Quaternion<T>;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}
