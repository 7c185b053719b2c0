#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::vm_float::clamp;
use num_traits::Zero;
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

/// A fixed-size vector of `N` scalar components.
///
/// Everything that does not depend on the arity (arithmetic, lengths, normalisation,
/// comparisons) is implemented once for all `N`. Named constructors, component accessors and
/// the transforms live on the aliases [`Vec2`], [`Vec3`] and [`Vec4`].
///
/// # Examples
///
/// ```
/// use vectormath::core::prelude::*;
///
/// let v1 = Vec3::new(3.0_f32, 4.0, 0.0);
/// let v2 = Vec3::new(1.0, 2.0, 3.0);
///
/// assert_eq!(v1 + v2, Vec3::new(4.0, 6.0, 3.0));
/// assert_eq!(v1.length(), 5.0);
/// assert_eq!(v1.dot(v2), 11.0);
/// ```
///
/// # Equality
/// [`PartialEq`] is exact, component by component. Use [`almost_eq`](Vector::almost_eq) to
/// compare with [`EPSILON`](crate::core::config::EPSILON) tolerance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector<T, const N: usize>([T; N]);

pub type Vec2<T> = Vector<T, 2>;
pub type Vec3<T> = Vector<T, 3>;
pub type Vec4<T> = Vector<T, 4>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    #[must_use]
    pub const fn from_array(components: [T; N]) -> Self {
        Self(components)
    }

    /// Creates a vector with every component set to `value`.
    #[must_use]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    fn map(self, f: impl Fn(T) -> T) -> Self {
        Self(self.0.map(f))
    }
    fn zip_with(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        Self(std::array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }
    fn all_pairs(&self, rhs: &Self, f: impl Fn(T, T) -> bool) -> bool {
        self.0.iter().zip(rhs.0.iter()).all(|(&a, &b)| f(a, b))
    }

    /// Calculates the dot product of this vector with another vector.
    ///
    /// # Examples
    /// ```
    /// use vectormath::core::prelude::*;
    /// let a = Vec3::new(1.0_f32, 0.0, 0.0);
    /// let b = Vec3::new(0.0_f32, 1.0, 0.0);
    /// assert_eq!(a.dot(b), 0.0);
    /// assert_eq!(a.dot(a), 1.0);
    /// ```
    pub fn dot(&self, other: Self) -> T {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(&a, &b)| a * b)
            .sum()
    }

    /// Returns the squared length. Cheaper than [`length`](Vector::length) when only
    /// comparing magnitudes.
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    pub fn distance(&self, other: Self) -> T {
        (*self - other).length()
    }
    pub fn distance_squared(&self, other: Self) -> T {
        (*self - other).length_squared()
    }

    /// Scales the vector to unit length in place.
    ///
    /// Any non-zero vector is normalised, however short. A zero vector, or one whose squared
    /// length overflows, is left untouched. Use [`try_normalized`](Vector::try_normalized) when
    /// that case needs handling.
    pub fn normalize(&mut self) {
        let len_sq = self.length_squared();
        if !len_sq.is_divisible_length_sq() {
            return;
        }
        *self *= T::one() / len_sq.sqrt();
    }

    /// Returns a unit-length copy, or the vector unchanged when it cannot be normalised.
    ///
    /// # Examples
    /// ```
    /// use vectormath::core::prelude::*;
    /// let v = Vec2::new(3.0_f32, 4.0).normalized();
    /// check_almost_eq!(v, Vec2::new(0.6, 0.8));
    /// assert_eq!(Vec2::<f32>::ZERO.normalized(), Vec2::ZERO);
    /// ```
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn try_normalized(self) -> Result<Self, MathError> {
        if !self.length_squared().is_divisible_length_sq() {
            Err(MathError::ZeroLengthVector)
        } else {
            Ok(self.normalized())
        }
    }

    /// True when the squared length is within [`EPSILON`](crate::core::config::EPSILON) of 1.
    pub fn is_normalized(&self) -> bool {
        (self.length_squared() - T::one()).abs() < T::TOLERANCE
    }

    /// Exact comparison against the zero vector.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|c| *c == T::ZERO)
    }
    pub fn is_nan(&self) -> bool {
        self.0.iter().any(|c| c.is_nan())
    }
    pub fn is_infinite(&self) -> bool {
        self.0.iter().any(|c| c.is_infinite())
    }
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    pub fn negate(&mut self) {
        *self = -*self;
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        self.map(T::abs)
    }

    /// Linearly interpolates towards `to`. `t` is not clamped, so values outside `[0, 1]`
    /// extrapolate.
    ///
    /// # Examples
    /// ```
    /// use vectormath::core::prelude::*;
    /// let a = Vec2::new(0.0_f32, 0.0);
    /// let b = Vec2::new(10.0, 20.0);
    /// assert_eq!(a.lerp(b, 0.5), Vec2::new(5.0, 10.0));
    /// assert_eq!(a.lerp(b, 2.0), Vec2::new(20.0, 40.0));
    /// ```
    #[must_use]
    pub fn lerp(&self, to: Self, t: T) -> Self {
        self.zip_with(to, |a, b| lerp(a, b, t))
    }

    #[must_use]
    pub fn min(&self, other: Self) -> Self {
        self.zip_with(other, T::min)
    }
    #[must_use]
    pub fn max(&self, other: Self) -> Self {
        self.zip_with(other, T::max)
    }
    /// Clamps each component into the matching components of `min` and `max`.
    #[must_use]
    pub fn clamp(&self, min: Self, max: Self) -> Self {
        Self(std::array::from_fn(|i| clamp(self.0[i], min.0[i], max.0[i])))
    }

    pub fn min_component(&self) -> T {
        self.0.iter().copied().fold(T::infinity(), T::min)
    }
    pub fn max_component(&self) -> T {
        self.0.iter().copied().fold(T::neg_infinity(), T::max)
    }

    /// Multiplies each component of this vector by the corresponding component of `other`.
    /// Equivalent to `*self * other`.
    #[must_use]
    pub fn component_wise(&self, other: Self) -> Self {
        *self * other
    }
    #[must_use]
    pub fn component_wise_div(&self, other: Self) -> Self {
        *self / other
    }

    /// True when every component is strictly less than the matching component of `other`.
    ///
    /// This is a product order: two vectors can be neither `all_lt` nor `all_ge` each other.
    pub fn all_lt(&self, other: &Self) -> bool {
        self.all_pairs(other, |a, b| a < b)
    }
    pub fn all_le(&self, other: &Self) -> bool {
        self.all_pairs(other, |a, b| a <= b)
    }
    pub fn all_gt(&self, other: &Self) -> bool {
        self.all_pairs(other, |a, b| a > b)
    }
    pub fn all_ge(&self, other: &Self) -> bool {
        self.all_pairs(other, |a, b| a >= b)
    }

    /// True when every component is within [`EPSILON`](crate::core::config::EPSILON) of the
    /// matching component of `rhs`.
    pub fn almost_eq(&self, rhs: Self) -> bool {
        self.all_pairs(&rhs, T::almost_eq)
    }
}

impl<T: Scalar> Vector<T, 2> {
    pub const ZERO: Self = Self([T::ZERO; 2]);
    pub const ONE: Self = Self([T::ONE; 2]);
    pub const UNIT_X: Self = Self([T::ONE, T::ZERO]);
    pub const UNIT_Y: Self = Self([T::ZERO, T::ONE]);
    pub const UP: Self = Self::UNIT_Y;
    pub const DOWN: Self = Self([T::ZERO, T::NEG_ONE]);
    pub const LEFT: Self = Self([T::NEG_ONE, T::ZERO]);
    pub const RIGHT: Self = Self::UNIT_X;

    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }

    pub fn x(&self) -> T {
        self.0[0]
    }
    pub fn y(&self) -> T {
        self.0[1]
    }

    /// Rotates the vector, treated as lying in the XY plane, by `rotation`. The Z component of
    /// the result is discarded.
    #[must_use]
    pub fn transform(&self, rotation: Quaternion<T>) -> Self {
        let [x, y, _] = rotate(rotation, self.x(), self.y(), T::ZERO);
        Self::new(x, y)
    }

    /// Transforms the point `(x, y, 0, 1)` by `m`, without a perspective divide.
    pub fn transform_mat4(&self, m: &Mat4<T>) -> Vec4<T> {
        Vec4::new(self.x(), self.y(), T::ZERO, T::ONE).transform_mat4(m)
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub const ZERO: Self = Self([T::ZERO; 3]);
    pub const ONE: Self = Self([T::ONE; 3]);
    pub const UNIT_X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    pub const UNIT_Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    pub const UNIT_Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
    pub const UP: Self = Self::UNIT_Y;
    pub const DOWN: Self = Self([T::ZERO, T::NEG_ONE, T::ZERO]);
    pub const LEFT: Self = Self([T::NEG_ONE, T::ZERO, T::ZERO]);
    pub const RIGHT: Self = Self::UNIT_X;
    pub const FORWARD: Self = Self::UNIT_Z;
    pub const BACK: Self = Self([T::ZERO, T::ZERO, T::NEG_ONE]);

    #[must_use]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }

    pub fn x(&self) -> T {
        self.0[0]
    }
    pub fn y(&self) -> T {
        self.0[1]
    }
    pub fn z(&self) -> T {
        self.0[2]
    }

    /// Calculates the cross product `self × other`.
    ///
    /// The result is perpendicular to both inputs and follows the right-hand rule:
    ///
    /// ```
    /// use vectormath::core::prelude::*;
    /// assert_eq!(Vec3::<f32>::UNIT_X.cross(Vec3::UNIT_Y), Vec3::UNIT_Z);
    /// assert_eq!(Vec3::<f32>::UNIT_Y.cross(Vec3::UNIT_X), -Vec3::UNIT_Z);
    /// ```
    #[must_use]
    pub fn cross(&self, other: Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    /// Rotates the vector by `rotation`.
    ///
    /// ```
    /// use vectormath::core::prelude::*;
    /// use std::f32::consts::FRAC_PI_2;
    /// let q = Quaternion::rotation_axis(Vec3::UNIT_Y, FRAC_PI_2)?;
    /// check_almost_eq!(Vec3::UNIT_X.transform(q), Vec3::new(0.0, 0.0, -1.0));
    /// # Ok::<(), MathError>(())
    /// ```
    #[must_use]
    pub fn transform(&self, rotation: Quaternion<T>) -> Self {
        Self(rotate(rotation, self.x(), self.y(), self.z()))
    }

    /// Transforms the point `(x, y, z, 1)` by `m` and divides through by the resulting `w`.
    #[must_use]
    pub fn transform_coordinate(&self, m: &Mat4<T>) -> Self {
        let v = self.extend(T::ONE).transform_mat4(m);
        v.xyz() / v.w()
    }

    /// Transforms the direction `(x, y, z, 0)` by `m`, so translation has no effect.
    #[must_use]
    pub fn transform_normal(&self, m: &Mat4<T>) -> Self {
        self.extend(T::ZERO).transform_mat4(m).xyz()
    }

    pub fn extend(&self, w: T) -> Vec4<T> {
        Vec4::new(self.x(), self.y(), self.z(), w)
    }
}

impl<T: Scalar> Vector<T, 4> {
    pub const ZERO: Self = Self([T::ZERO; 4]);
    pub const ONE: Self = Self([T::ONE; 4]);
    pub const UNIT_X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    pub const UNIT_Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    pub const UNIT_Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    pub const UNIT_W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);

    #[must_use]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }

    pub fn x(&self) -> T {
        self.0[0]
    }
    pub fn y(&self) -> T {
        self.0[1]
    }
    pub fn z(&self) -> T {
        self.0[2]
    }
    pub fn w(&self) -> T {
        self.0[3]
    }
    pub fn xyz(&self) -> Vec3<T> {
        Vec3::new(self.x(), self.y(), self.z())
    }

    /// Rotates the `xyz` part by `rotation`; `w` passes through unchanged.
    #[must_use]
    pub fn transform(&self, rotation: Quaternion<T>) -> Self {
        self.xyz().transform(rotation).extend(self.w())
    }

    /// Multiplies this row vector by `m`.
    #[must_use]
    pub fn transform_mat4(&self, m: &Mat4<T>) -> Self {
        let [x, y, z, w] = self.0;
        Self::new(
            x * m.m11 + y * m.m21 + z * m.m31 + w * m.m41,
            x * m.m12 + y * m.m22 + z * m.m32 + w * m.m42,
            x * m.m13 + y * m.m23 + z * m.m33 + w * m.m43,
            x * m.m14 + y * m.m24 + z * m.m34 + w * m.m44,
        )
    }
}

// Rotation matrix terms of a (unit) quaternion, applied to a row vector.
fn rotate<T: Scalar>(q: Quaternion<T>, x: T, y: T, z: T) -> [T; 3] {
    let x2 = q.x + q.x;
    let y2 = q.y + q.y;
    let z2 = q.z + q.z;
    let wx = q.w * x2;
    let wy = q.w * y2;
    let wz = q.w * z2;
    let xx = q.x * x2;
    let xy = q.x * y2;
    let xz = q.x * z2;
    let yy = q.y * y2;
    let yz = q.y * z2;
    let zz = q.z * z2;
    [
        x * (T::ONE - yy - zz) + y * (xy - wz) + z * (xz + wy),
        x * (xy + wz) + y * (T::ONE - xx - zz) + z * (yz - wx),
        x * (xz - wy) + y * (yz + wx) + z * (T::ONE - xx - yy),
    ]
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::splat(T::ZERO)
    }
}

impl<T: Scalar, const N: usize> Zero for Vector<T, N> {
    fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    fn is_zero(&self) -> bool {
        Vector::is_zero(self)
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}
impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        let components = self
            .0
            .iter()
            .map(|c| match precision {
                Some(p) => format!("{c:.p$}"),
                None => format!("{c}"),
            })
            .join(", ");
        write!(f, "vec({components})")
    }
}

// Component-wise operators by vector and by scalar, with assigning variants.
macro_rules! impl_vector_op {
    ($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident, $op:tt) => {
        impl<T: Scalar, const N: usize> $trait<Vector<T, N>> for Vector<T, N> {
            type Output = Vector<T, N>;

            fn $fn(self, rhs: Vector<T, N>) -> Self::Output {
                self.zip_with(rhs, |a, b| a $op b)
            }
        }
        impl<T: Scalar, const N: usize> $trait<T> for Vector<T, N> {
            type Output = Vector<T, N>;

            fn $fn(self, rhs: T) -> Self::Output {
                self.map(|a| a $op rhs)
            }
        }
        impl<T: Scalar, const N: usize> $assign_trait<Vector<T, N>> for Vector<T, N> {
            fn $assign_fn(&mut self, rhs: Vector<T, N>) {
                *self = *self $op rhs;
            }
        }
        impl<T: Scalar, const N: usize> $assign_trait<T> for Vector<T, N> {
            fn $assign_fn(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_vector_op!(Add, add, AddAssign, add_assign, +);
impl_vector_op!(Sub, sub, SubAssign, sub_assign, -);
impl_vector_op!(Mul, mul, MulAssign, mul_assign, *);
impl_vector_op!(Div, div, DivAssign, div_assign, /);

macro_rules! impl_scalar_lhs {
    ($t:ty) => {
        impl<const N: usize> Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn mul(self, rhs: Vector<$t, N>) -> Self::Output {
                rhs * self
            }
        }
        impl<const N: usize> Mul<&Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn mul(self, rhs: &Vector<$t, N>) -> Self::Output {
                *rhs * self
            }
        }
    };
}

impl_scalar_lhs!(f32);
impl_scalar_lhs!(f64);

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T, N>;

    fn neg(self) -> Self::Output {
        self.map(|a| -a)
    }
}
impl<T: Scalar, const N: usize> Neg for &Vector<T, N> {
    type Output = Vector<T, N>;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl<T: Scalar, const N: usize> Sum<Vector<T, N>> for Vector<T, N> {
    fn sum<I: Iterator<Item = Vector<T, N>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}

/// Linear interpolation between two values; `t` is not clamped.
///
/// # Examples
/// ```
/// use vectormath::core::prelude::*;
/// assert_eq!(linalg::lerp(2.0_f32, 4.0, 0.5), 3.0);
/// assert_eq!(linalg::lerp(2.0_f32, 4.0, 1.5), 5.0);
/// ```
pub fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
    a + t * (b - a)
}

/// Cubic Hermite step: 0 below 0, 1 above 1, and `3t² - 2t³` in between.
///
/// # Examples
/// ```
/// use vectormath::core::prelude::*;
/// assert_eq!(linalg::smooth_step(-1.0_f32), 0.0);
/// assert_eq!(linalg::smooth_step(0.5_f32), 0.5);
/// assert_eq!(linalg::smooth_step(2.0_f32), 1.0);
/// ```
pub fn smooth_step<T: Scalar>(t: T) -> T {
    if t <= T::ZERO {
        T::ZERO
    } else if t >= T::ONE {
        T::ONE
    } else {
        t * t * (T::from_f64_lossy(3.0) - T::TWO * t)
    }
}

/// Quintic step with zero first and second derivatives at both ends: `6t⁵ - 15t⁴ + 10t³`.
pub fn smoother_step<T: Scalar>(t: T) -> T {
    if t <= T::ZERO {
        T::ZERO
    } else if t >= T::ONE {
        T::ONE
    } else {
        let six = T::from_f64_lossy(6.0);
        let fifteen = T::from_f64_lossy(15.0);
        let ten = T::from_f64_lossy(10.0);
        t * t * t * (t * (t * six - fifteen) + ten)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::f32::consts::{FRAC_PI_2, PI};

    // ==================== Basic Operations ====================

    #[test]
    fn construction_and_access() {
        let v = Vec3::new(1.0_f32, 2.0, 3.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v, Vec3::from_array([1.0, 2.0, 3.0]));
        assert_eq!(v, Vec3::from([1.0, 2.0, 3.0]));
        assert_eq!(<[f32; 3]>::from(v), [1.0, 2.0, 3.0]);
        assert_eq!(Vec4::<f64>::splat(2.5), Vec4::new(2.5, 2.5, 2.5, 2.5));
        assert_eq!(Vec2::<f32>::default(), Vec2::ZERO);

        let mut w = v;
        w[2] = 7.0;
        assert_eq!(w, Vec3::new(1.0, 2.0, 7.0));
        for c in w.iter_mut() {
            *c *= 2.0;
        }
        assert_eq!(w.to_array(), [2.0, 4.0, 14.0]);
        assert_eq!(w.into_iter().sum::<f32>(), 20.0);
        assert_eq!((&w).into_iter().count(), 3);
    }

    #[test]
    fn named_constants() {
        assert_eq!(Vec2::<f32>::UP, Vec2::new(0.0, 1.0));
        assert_eq!(Vec2::<f32>::LEFT, Vec2::new(-1.0, 0.0));
        assert_eq!(Vec3::<f64>::FORWARD, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(Vec3::<f64>::BACK, -Vec3::FORWARD);
        assert_eq!(Vec3::<f32>::DOWN, -Vec3::UP);
        assert_eq!(Vec4::<f32>::UNIT_W, Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Vec4::<f32>::ONE.dot(Vec4::ONE), 4.0);
    }

    #[test]
    fn arithmetic() {
        let a = Vec3::new(1.0_f32, 2.0, 3.0);
        let b = Vec3::new(4.0_f32, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vec3::new(4.0, 2.5, 2.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * &a, a * 2.0);
        assert_eq!(a + 1.0, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(a - 1.0, Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(-&a, -a);
        assert_eq!(a.component_wise(b), a * b);
        assert_eq!(b.component_wise_div(a), b / a);

        let mut c = a;
        c += b;
        c -= Vec3::ONE;
        c *= 2.0;
        c /= Vec3::splat(2.0);
        assert_eq!(c, Vec3::new(4.0, 6.0, 8.0));
        c.negate();
        assert_eq!(c, Vec3::new(-4.0, -6.0, -8.0));
        assert_eq!(c.abs(), Vec3::new(4.0, 6.0, 8.0));

        let total: Vec2<f64> = [Vec2::UNIT_X, Vec2::UNIT_Y, Vec2::ONE].into_iter().sum();
        assert_eq!(total, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn lengths_and_distances() {
        let v = Vec3::new(2.0_f64, 3.0, 6.0);
        assert_eq!(v.length_squared(), 49.0);
        assert_eq!(v.length(), 7.0);
        assert_eq!(Vec2::new(1.0_f32, 1.0).distance(Vec2::new(4.0, 5.0)), 5.0);
        assert_eq!(
            Vec2::new(1.0_f32, 1.0).distance_squared(Vec2::new(4.0, 5.0)),
            25.0
        );
        assert_eq!(Vec4::<f32>::ZERO.length(), 0.0);
    }

    // ==================== Normalisation ====================

    #[test]
    fn normalize_in_place() {
        let mut v = Vec3::new(0.0_f32, 3.0, 4.0);
        v.normalize();
        check_almost_eq!(v, Vec3::new(0.0, 0.6, 0.8));
        check!(v.is_normalized());
    }

    #[test]
    fn normalize_zero_vector_is_untouched() {
        let mut v = Vec3::<f32>::ZERO;
        v.normalize();
        assert_eq!(v, Vec3::ZERO);
        assert!(!v.is_nan());

        let underflow = Vec2::new(1e-30_f32, 0.0);
        assert_eq!(underflow.normalized(), underflow);
        assert_eq!(underflow.try_normalized(), Err(MathError::ZeroLengthVector));
        assert_eq!(
            Vec3::<f64>::ZERO.try_normalized(),
            Err(MathError::ZeroLengthVector)
        );
    }

    #[test]
    fn normalize_short_vectors() {
        let v = Vec3::new(5e-4_f64, 0.0, 0.0);
        check_almost_eq!(v.normalized(), Vec3::UNIT_X);
        check_almost_eq!(v.try_normalized().unwrap(), Vec3::UNIT_X);

        let v = Vec3::new(1e-4_f32, -1e-4, 0.5e-4);
        check!(v.normalized().is_normalized());
        check_almost_eq!(v.normalized().length(), 1.0);

        let v = Vec2::new(0.0_f32, -2e-4);
        check_almost_eq!(v.try_normalized().unwrap(), Vec2::new(0.0, -1.0));
        let v = Vec4::new(3e-4_f64, 0.0, 4e-4, 0.0);
        check_almost_eq!(v.normalized(), Vec4::new(0.6, 0.0, 0.8, 0.0));
    }

    #[test]
    fn normalized_has_unit_length() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let v = Vec3::new(
                rng.gen_range(-100.0_f32..100.0),
                rng.gen_range(-100.0_f32..100.0),
                rng.gen_range(-100.0_f32..100.0),
            );
            if v.length_squared() < 1e-3 {
                continue;
            }
            let n = v.try_normalized().unwrap();
            check!(n.is_normalized(), format!("{v} -> {n}"));
            check!((n.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn predicates() {
        check!(Vec3::<f32>::ZERO.is_zero());
        check_false!(Vec3::new(0.0_f32, 1e-30, 0.0).is_zero());
        check!(Vec2::new(f32::NAN, 0.0).is_nan());
        check!(Vec2::new(0.0, f32::INFINITY).is_infinite());
        check_false!(Vec2::new(0.0, f32::INFINITY).is_finite());
        check!(Vec4::<f64>::UNIT_Z.is_normalized());
        check_false!(Vec4::<f64>::ONE.is_normalized());
        check!(num_traits::Zero::is_zero(&Vec4::<f64>::zero()));
    }

    // ==================== Comparisons ====================

    #[test]
    fn product_order_comparisons() {
        let a = Vec3::new(1.0_f32, 2.0, 3.0);
        let b = Vec3::new(2.0_f32, 3.0, 4.0);
        let c = Vec3::new(2.0_f32, 1.0, 4.0);
        check!(a.all_lt(&b));
        check!(a.all_le(&a));
        check!(b.all_gt(&a));
        check!(b.all_ge(&b));
        check_false!(a.all_lt(&a));
        // Neither ordered before nor after.
        check_false!(a.all_lt(&c));
        check_false!(a.all_ge(&c));
    }

    #[test]
    fn almost_eq_tolerance() {
        let a = Vec3::new(1.0_f32, 2.0, 3.0);
        check!(a.almost_eq(a + 1e-6));
        check_false!(a.almost_eq(a + Vec3::new(0.0, 0.0, 1e-3)));
    }

    #[test]
    fn min_max_clamp() {
        let a = Vec3::new(1.0_f32, 5.0, -2.0);
        let b = Vec3::new(3.0_f32, 0.0, -1.0);
        assert_eq!(a.min(b), Vec3::new(1.0, 0.0, -2.0));
        assert_eq!(a.max(b), Vec3::new(3.0, 5.0, -1.0));
        assert_eq!(a.clamp(Vec3::ZERO, Vec3::splat(2.0)), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(a.min_component(), -2.0);
        assert_eq!(a.max_component(), 5.0);
    }

    #[test]
    fn lerp_vectors() {
        let a = Vec3::new(0.0_f64, 10.0, -4.0);
        let b = Vec3::new(10.0_f64, 20.0, 4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.25), Vec3::new(2.5, 12.5, -2.0));
    }

    // ==================== Vec3 ====================

    #[test]
    fn cross_product_properties() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let a = Vec3::new(
                rng.gen_range(-10.0_f64..10.0),
                rng.gen_range(-10.0_f64..10.0),
                rng.gen_range(-10.0_f64..10.0),
            );
            let b = Vec3::new(
                rng.gen_range(-10.0_f64..10.0),
                rng.gen_range(-10.0_f64..10.0),
                rng.gen_range(-10.0_f64..10.0),
            );
            let c = a.cross(b);
            check_almost_eq!(c, -b.cross(a));
            check!(c.dot(a).abs() < 1e-9);
            check!(c.dot(b).abs() < 1e-9);
        }
        assert_eq!(
            Vec3::<f32>::UNIT_Z.cross(Vec3::UNIT_X),
            Vec3::<f32>::UNIT_Y
        );
        check!(Vec3::new(1.0_f32, 2.0, 3.0)
            .cross(Vec3::new(2.0, 4.0, 6.0))
            .is_zero());
    }

    #[test]
    fn transform_by_quaternion() {
        let q = Quaternion::rotation_axis(Vec3::UNIT_Y, FRAC_PI_2).unwrap();
        check_almost_eq!(Vec3::<f32>::UNIT_X.transform(q), Vec3::new(0.0, 0.0, -1.0));
        check_almost_eq!(Vec3::<f32>::UNIT_Y.transform(q), Vec3::UNIT_Y);

        let q = Quaternion::rotation_axis(Vec3::UNIT_Z, FRAC_PI_2).unwrap();
        check_almost_eq!(Vec2::<f32>::UNIT_X.transform(q), Vec2::UNIT_Y);
        check_almost_eq!(
            Vec4::new(1.0_f32, 0.0, 0.0, 5.0).transform(q),
            Vec4::new(0.0, 1.0, 0.0, 5.0)
        );

        let v = Vec3::new(1.0_f32, 2.0, 3.0);
        check_almost_eq!(v.transform(Quaternion::IDENTITY), v);
    }

    #[test]
    fn transform_by_matrix() {
        let translate = Mat4::create_translation(Vec3::new(1.0_f32, 2.0, 3.0));
        let p = Vec3::new(1.0_f32, 1.0, 1.0);
        check_almost_eq!(p.transform_coordinate(&translate), Vec3::new(2.0, 3.0, 4.0));
        check_almost_eq!(p.transform_normal(&translate), p);
        check_almost_eq!(
            Vec2::new(1.0_f32, 1.0).transform_mat4(&translate),
            Vec4::new(2.0, 3.0, 3.0, 1.0)
        );

        let rotate = Mat4::create_rotation_z(PI);
        check_almost_eq!(
            Vec4::new(1.0_f32, 0.0, 0.0, 1.0).transform_mat4(&rotate),
            Vec4::new(-1.0, 0.0, 0.0, 1.0)
        );

        // The perspective divide maps the near plane to z = 0 and the far plane to z = 1.
        let proj = Mat4::create_perspective(2.0_f32, 2.0, 1.0, 10.0);
        check_almost_eq!(
            Vec3::new(0.0_f32, 0.0, 1.0).transform_coordinate(&proj),
            Vec3::ZERO
        );
        check_almost_eq!(
            Vec3::new(0.0_f32, 0.0, 10.0).transform_coordinate(&proj),
            Vec3::new(0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn extend_and_truncate() {
        let v = Vec3::new(1.0_f32, 2.0, 3.0);
        assert_eq!(v.extend(4.0), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.extend(4.0).xyz(), v);
    }

    #[test]
    fn display() {
        assert_eq!(Vec3::new(1.0_f32, 2.5, -3.0).to_string(), "vec(1, 2.5, -3)");
        assert_eq!(
            format!("{:.2}", Vec2::new(1.0_f64, 0.126)),
            "vec(1.00, 0.13)"
        );
    }

    // ==================== Scalar helpers ====================

    #[test]
    fn step_functions() {
        assert_eq!(smooth_step(0.0_f64), 0.0);
        assert_eq!(smooth_step(1.0_f64), 1.0);
        check_almost_eq!(smooth_step(0.25_f64), 0.15625);
        assert_eq!(smoother_step(-0.5_f32), 0.0);
        assert_eq!(smoother_step(1.5_f32), 1.0);
        check_almost_eq!(smoother_step(0.5_f32), 0.5);
        check_almost_eq!(smoother_step(0.25_f64), 0.103_515_625);
        assert_eq!(lerp(-1.0_f32, 1.0, 0.5), 0.0);
    }
}
