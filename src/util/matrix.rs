#[allow(unused_imports)]
use crate::core::prelude::*;

use num_traits::{One, Zero};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 4x4 matrix for 3D homogeneous transforms.
///
/// Vectors are treated as rows and multiplied on the left (`v * M`), so the translation lives
/// in the fourth row and a product `A * B` applies `A` first, then `B`:
/// ```text
/// | m11 m12 m13 m14 |
/// | m21 m22 m23 m24 |
/// | m31 m32 m33 m34 |
/// | m41 m42 m43 m44 |   <- translation in m41..m43
/// ```
/// Projection matrices map view-space depth to a `[0, 1]` clip range.
#[derive(Debug, Copy, Clone, PartialEq)]
#[must_use]
pub struct Mat4<T> {
    pub m11: T,
    pub m12: T,
    pub m13: T,
    pub m14: T,
    pub m21: T,
    pub m22: T,
    pub m23: T,
    pub m24: T,
    pub m31: T,
    pub m32: T,
    pub m33: T,
    pub m34: T,
    pub m41: T,
    pub m42: T,
    pub m43: T,
    pub m44: T,
}

impl<T: Scalar> Mat4<T> {
    pub const ZERO: Self = Self::splat(T::ZERO);
    pub const IDENTITY: Self = Self::new(
        T::ONE,
        T::ZERO,
        T::ZERO,
        T::ZERO,
        T::ZERO,
        T::ONE,
        T::ZERO,
        T::ZERO,
        T::ZERO,
        T::ZERO,
        T::ONE,
        T::ZERO,
        T::ZERO,
        T::ZERO,
        T::ZERO,
        T::ONE,
    );

    /// Creates a matrix from its sixteen elements in row-major order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m11: T,
        m12: T,
        m13: T,
        m14: T,
        m21: T,
        m22: T,
        m23: T,
        m24: T,
        m31: T,
        m32: T,
        m33: T,
        m34: T,
        m41: T,
        m42: T,
        m43: T,
        m44: T,
    ) -> Self {
        Self {
            m11,
            m12,
            m13,
            m14,
            m21,
            m22,
            m23,
            m24,
            m31,
            m32,
            m33,
            m34,
            m41,
            m42,
            m43,
            m44,
        }
    }

    const fn splat(value: T) -> Self {
        Self::new(
            value, value, value, value, value, value, value, value, value, value, value, value,
            value, value, value, value,
        )
    }

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn from_rows(rows: [Vec4<T>; 4]) -> Self {
        let [r1, r2, r3, r4] = rows;
        Self::new(
            r1.x(),
            r1.y(),
            r1.z(),
            r1.w(),
            r2.x(),
            r2.y(),
            r2.z(),
            r2.w(),
            r3.x(),
            r3.y(),
            r3.z(),
            r3.w(),
            r4.x(),
            r4.y(),
            r4.z(),
            r4.w(),
        )
    }

    /// Creates a matrix from sixteen elements in row-major order.
    pub fn from_array(m: [T; 16]) -> Self {
        Self::new(
            m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8], m[9], m[10], m[11], m[12], m[13],
            m[14], m[15],
        )
    }
    /// The sixteen elements in row-major order.
    pub fn to_array(&self) -> [T; 16] {
        [
            self.m11, self.m12, self.m13, self.m14, self.m21, self.m22, self.m23, self.m24,
            self.m31, self.m32, self.m33, self.m34, self.m41, self.m42, self.m43, self.m44,
        ]
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self::from_array(self.to_array().map(f))
    }
    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        let (lhs, rhs) = (self.to_array(), rhs.to_array());
        Self::from_array(std::array::from_fn(|i| f(lhs[i], rhs[i])))
    }

    pub fn rows(&self) -> [Vec4<T>; 4] {
        [
            Vec4::new(self.m11, self.m12, self.m13, self.m14),
            Vec4::new(self.m21, self.m22, self.m23, self.m24),
            Vec4::new(self.m31, self.m32, self.m33, self.m34),
            Vec4::new(self.m41, self.m42, self.m43, self.m44),
        ]
    }
    /// Returns row `index` (zero-based).
    ///
    /// # Panics
    /// If `index >= 4`.
    pub fn row(&self, index: usize) -> Vec4<T> {
        self.rows()[index]
    }
    /// Returns column `index` (zero-based).
    ///
    /// # Panics
    /// If `index >= 4`.
    pub fn column(&self, index: usize) -> Vec4<T> {
        self.transposed().rows()[index]
    }

    /// Calculates the determinant by cofactor expansion along the first row.
    ///
    /// ```
    /// use vectormath::core::prelude::*;
    /// assert_eq!(Mat4::<f32>::IDENTITY.determinant(), 1.0);
    /// assert_eq!(Mat4::create_scaling(Vec3::new(2.0_f32, 3.0, 4.0)).determinant(), 24.0);
    /// ```
    pub fn determinant(&self) -> T {
        // 2x2 minors of rows 3 and 4.
        let temp1 = self.m33 * self.m44 - self.m34 * self.m43;
        let temp2 = self.m32 * self.m44 - self.m34 * self.m42;
        let temp3 = self.m32 * self.m43 - self.m33 * self.m42;
        let temp4 = self.m31 * self.m44 - self.m34 * self.m41;
        let temp5 = self.m31 * self.m43 - self.m33 * self.m41;
        let temp6 = self.m31 * self.m42 - self.m32 * self.m41;
        self.m11 * (self.m22 * temp1 - self.m23 * temp2 + self.m24 * temp3)
            - self.m12 * (self.m21 * temp1 - self.m23 * temp4 + self.m24 * temp5)
            + self.m13 * (self.m21 * temp2 - self.m22 * temp4 + self.m24 * temp6)
            - self.m14 * (self.m21 * temp3 - self.m22 * temp5 + self.m23 * temp6)
    }

    /// Inverts the matrix in place.
    ///
    /// A singular matrix (zero or non-finite determinant) is left unchanged and reported as
    /// [`MathError::SingularMatrix`].
    pub fn invert(&mut self) -> Result<(), MathError> {
        let b0 = self.m31 * self.m42 - self.m32 * self.m41;
        let b1 = self.m31 * self.m43 - self.m33 * self.m41;
        let b2 = self.m34 * self.m41 - self.m31 * self.m44;
        let b3 = self.m32 * self.m43 - self.m33 * self.m42;
        let b4 = self.m34 * self.m42 - self.m32 * self.m44;
        let b5 = self.m33 * self.m44 - self.m34 * self.m43;

        let d11 = self.m22 * b5 + self.m23 * b4 + self.m24 * b3;
        let d12 = self.m21 * b5 + self.m23 * b2 + self.m24 * b1;
        let d13 = self.m21 * -b4 + self.m22 * b2 + self.m24 * b0;
        let d14 = self.m21 * b3 + self.m22 * -b1 + self.m23 * b0;

        let det = self.m11 * d11 - self.m12 * d12 + self.m13 * d13 - self.m14 * d14;
        if det == T::ZERO || !det.is_finite() {
            return Err(MathError::SingularMatrix);
        }
        let inv_det = T::one() / det;

        let a0 = self.m11 * self.m22 - self.m12 * self.m21;
        let a1 = self.m11 * self.m23 - self.m13 * self.m21;
        let a2 = self.m14 * self.m21 - self.m11 * self.m24;
        let a3 = self.m12 * self.m23 - self.m13 * self.m22;
        let a4 = self.m14 * self.m22 - self.m12 * self.m24;
        let a5 = self.m13 * self.m24 - self.m14 * self.m23;

        let d21 = self.m12 * b5 + self.m13 * b4 + self.m14 * b3;
        let d22 = self.m11 * b5 + self.m13 * b2 + self.m14 * b1;
        let d23 = self.m11 * -b4 + self.m12 * b2 + self.m14 * b0;
        let d24 = self.m11 * b3 + self.m12 * -b1 + self.m13 * b0;

        let d31 = self.m42 * a5 + self.m43 * a4 + self.m44 * a3;
        let d32 = self.m41 * a5 + self.m43 * a2 + self.m44 * a1;
        let d33 = self.m41 * -a4 + self.m42 * a2 + self.m44 * a0;
        let d34 = self.m41 * a3 + self.m42 * -a1 + self.m43 * a0;

        let d41 = self.m32 * a5 + self.m33 * a4 + self.m34 * a3;
        let d42 = self.m31 * a5 + self.m33 * a2 + self.m34 * a1;
        let d43 = self.m31 * -a4 + self.m32 * a2 + self.m34 * a0;
        let d44 = self.m31 * a3 + self.m32 * -a1 + self.m33 * a0;

        *self = Self::new(
            d11 * inv_det,
            -d21 * inv_det,
            d31 * inv_det,
            -d41 * inv_det,
            -d12 * inv_det,
            d22 * inv_det,
            -d32 * inv_det,
            d42 * inv_det,
            d13 * inv_det,
            -d23 * inv_det,
            d33 * inv_det,
            -d43 * inv_det,
            -d14 * inv_det,
            d24 * inv_det,
            -d34 * inv_det,
            d44 * inv_det,
        );
        Ok(())
    }

    /// Returns the inverse.
    ///
    /// ```
    /// use vectormath::core::prelude::*;
    /// let m = Mat4::create_translation(Vec3::new(1.0_f64, 2.0, 3.0));
    /// check_almost_eq!(m.inverted()?, Mat4::create_translation(Vec3::new(-1.0, -2.0, -3.0)));
    /// assert_eq!(Mat4::<f64>::ZERO.inverted(), Err(MathError::SingularMatrix));
    /// # Ok::<(), MathError>(())
    /// ```
    pub fn inverted(mut self) -> Result<Self, MathError> {
        self.invert()?;
        Ok(self)
    }

    pub fn transpose(&mut self) {
        *self = self.transposed();
    }
    pub fn transposed(&self) -> Self {
        Self::new(
            self.m11, self.m21, self.m31, self.m41, self.m12, self.m22, self.m32, self.m42,
            self.m13, self.m23, self.m33, self.m43, self.m14, self.m24, self.m34, self.m44,
        )
    }

    pub fn negate(&mut self) {
        *self = -*self;
    }

    /// Exact comparison with [`IDENTITY`](Mat4::IDENTITY).
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn translation(&self) -> Vec3<T> {
        Vec3::new(self.m41, self.m42, self.m43)
    }
    /// The lengths of the first three rows of the upper-left 3x3.
    pub fn scale(&self) -> Vec3<T> {
        Vec3::new(
            self.right().length(),
            self.up().length(),
            self.forward().length(),
        )
    }

    pub fn right(&self) -> Vec3<T> {
        Vec3::new(self.m11, self.m12, self.m13)
    }
    pub fn left(&self) -> Vec3<T> {
        -self.right()
    }
    pub fn up(&self) -> Vec3<T> {
        Vec3::new(self.m21, self.m22, self.m23)
    }
    pub fn down(&self) -> Vec3<T> {
        -self.up()
    }
    pub fn forward(&self) -> Vec3<T> {
        Vec3::new(self.m31, self.m32, self.m33)
    }
    pub fn backward(&self) -> Vec3<T> {
        -self.forward()
    }

    /// Splits a transform built as `scaling * rotation * translation` into its parts.
    ///
    /// This is the reverse order from [`create_transform`](Mat4::create_transform), so
    /// decomposing a composed matrix returns the translation already rotated and scaled.
    ///
    /// Shear, reflection and negative scale are not recovered; the rotation is only meaningful
    /// when the upper-left 3x3 is a rotation times a positive scale.
    pub fn decompose(&self) -> (Vec3<T>, Quaternion<T>, Vec3<T>) {
        let scale = self.scale();
        let unscale = |row: Vec3<T>, s: T| if s == T::ZERO { row } else { row / s };
        let r1 = unscale(self.right(), scale.x());
        let r2 = unscale(self.up(), scale.y());
        let r3 = unscale(self.forward(), scale.z());
        let rotation = Self::from_rows([
            r1.extend(T::ZERO),
            r2.extend(T::ZERO),
            r3.extend(T::ZERO),
            Vec4::UNIT_W,
        ]);
        (
            self.translation(),
            Quaternion::from_rotation_matrix(&rotation),
            scale,
        )
    }

    /// Replaces this matrix with [`create_transform`](Mat4::create_transform).
    pub fn compose(&mut self, translation: Vec3<T>, rotation: Quaternion<T>, scale: Vec3<T>) {
        *self = Self::create_transform(translation, rotation, scale);
    }

    /// The product `translation * rotation * scaling`, in that order.
    pub fn create_transform(translation: Vec3<T>, rotation: Quaternion<T>, scale: Vec3<T>) -> Self {
        Self::create_translation(translation)
            * Self::create_rotation(rotation)
            * Self::create_scaling(scale)
    }

    /// A left-handed view matrix looking from `eye` towards `target`.
    ///
    /// `eye == target`, or `up` parallel to the view direction, gives a degenerate matrix.
    pub fn create_look_at(eye: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self {
        let z_axis = (target - eye).normalized();
        let x_axis = up.cross(z_axis).normalized();
        let y_axis = z_axis.cross(x_axis);
        Self::new(
            x_axis.x(),
            y_axis.x(),
            z_axis.x(),
            T::ZERO,
            x_axis.y(),
            y_axis.y(),
            z_axis.y(),
            T::ZERO,
            x_axis.z(),
            y_axis.z(),
            z_axis.z(),
            T::ZERO,
            -x_axis.dot(eye),
            -y_axis.dot(eye),
            -z_axis.dot(eye),
            T::ONE,
        )
    }

    /// A left-handed perspective projection with vertical field of view `fov` (radians).
    pub fn create_perspective(fov: T, aspect: T, znear: T, zfar: T) -> Self {
        let y_scale = T::one() / (fov * T::HALF).tan();
        let q = zfar / (zfar - znear);
        let mut result = Self::ZERO;
        result.m11 = y_scale / aspect;
        result.m22 = y_scale;
        result.m33 = q;
        result.m34 = T::ONE;
        result.m43 = -q * znear;
        result
    }

    pub fn create_ortho(width: T, height: T, znear: T, zfar: T) -> Self {
        let half_width = width * T::HALF;
        let half_height = height * T::HALF;
        Self::create_ortho_off_center(
            -half_width,
            half_width,
            -half_height,
            half_height,
            znear,
            zfar,
        )
    }

    pub fn create_ortho_off_center(left: T, right: T, bottom: T, top: T, znear: T, zfar: T) -> Self {
        let z_range = T::one() / (zfar - znear);
        let mut result = Self::IDENTITY;
        result.m11 = T::TWO / (right - left);
        result.m22 = T::TWO / (top - bottom);
        result.m33 = z_range;
        result.m41 = (left + right) / (left - right);
        result.m42 = (top + bottom) / (bottom - top);
        result.m43 = -znear * z_range;
        result
    }

    pub fn create_translation(translation: Vec3<T>) -> Self {
        let mut result = Self::IDENTITY;
        result.m41 = translation.x();
        result.m42 = translation.y();
        result.m43 = translation.z();
        result
    }

    pub fn create_scaling(scale: Vec3<T>) -> Self {
        let mut result = Self::IDENTITY;
        result.m11 = scale.x();
        result.m22 = scale.y();
        result.m33 = scale.z();
        result
    }

    pub fn create_rotation_x(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut result = Self::IDENTITY;
        result.m22 = cos;
        result.m23 = sin;
        result.m32 = -sin;
        result.m33 = cos;
        result
    }

    pub fn create_rotation_y(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut result = Self::IDENTITY;
        result.m11 = cos;
        result.m13 = -sin;
        result.m31 = sin;
        result.m33 = cos;
        result
    }

    pub fn create_rotation_z(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut result = Self::IDENTITY;
        result.m11 = cos;
        result.m12 = sin;
        result.m21 = -sin;
        result.m22 = cos;
        result
    }

    /// Rotation of `angle` radians about `axis`. The axis is normalised first.
    pub fn create_rotation_axis(axis: Vec3<T>, angle: T) -> Result<Self, MathError> {
        let axis = axis
            .try_normalized()
            .map_err(|_| MathError::ZeroLengthAxis)?;
        let (x, y, z) = (axis.x(), axis.y(), axis.z());
        let (sin, cos) = angle.sin_cos();
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);

        let mut result = Self::IDENTITY;
        result.m11 = xx + cos * (T::one() - xx);
        result.m12 = xy - cos * xy + sin * z;
        result.m13 = xz - cos * xz - sin * y;
        result.m21 = xy - cos * xy - sin * z;
        result.m22 = yy + cos * (T::one() - yy);
        result.m23 = yz - cos * yz + sin * x;
        result.m31 = xz - cos * xz + sin * y;
        result.m32 = yz - cos * yz - sin * x;
        result.m33 = zz + cos * (T::one() - zz);
        Ok(result)
    }

    /// The rotation matrix of a unit quaternion.
    pub fn create_rotation(rotation: Quaternion<T>) -> Self {
        let Quaternion { x, y, z, w } = rotation;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, zw, zx) = (x * y, z * w, z * x);
        let (yw, yz, xw) = (y * w, y * z, x * w);

        let mut result = Self::IDENTITY;
        result.m11 = T::one() - T::TWO * (yy + zz);
        result.m12 = T::TWO * (xy + zw);
        result.m13 = T::TWO * (zx - yw);
        result.m21 = T::TWO * (xy - zw);
        result.m22 = T::one() - T::TWO * (zz + xx);
        result.m23 = T::TWO * (yz + xw);
        result.m31 = T::TWO * (zx + yw);
        result.m32 = T::TWO * (yz - xw);
        result.m33 = T::one() - T::TWO * (yy + xx);
        result
    }

    pub fn create_rotation_yaw_pitch_roll(yaw: T, pitch: T, roll: T) -> Self {
        Self::create_rotation(Quaternion::rotation_yaw_pitch_roll(yaw, pitch, roll))
    }

    /// True when every element is within [`EPSILON`](crate::core::config::EPSILON) of the
    /// matching element of `rhs`.
    pub fn almost_eq(&self, rhs: Self) -> bool {
        self.to_array()
            .into_iter()
            .zip(rhs.to_array())
            .all(|(a, b)| a.almost_eq(b))
    }
}

impl<T: Scalar> Default for Mat4<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> One for Mat4<T> {
    fn one() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> Zero for Mat4<T> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl<T: Scalar> From<[T; 16]> for Mat4<T> {
    fn from(value: [T; 16]) -> Self {
        Self::from_array(value)
    }
}

impl<T: Scalar> fmt::Display for Mat4<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        let rows = self
            .rows()
            .iter()
            .map(|row| match precision {
                Some(p) => format!("{row:.p$}"),
                None => format!("{row}"),
            })
            .join(", ");
        write!(f, "mat4[{rows}]")
    }
}

impl<T: Scalar> Add<Mat4<T>> for Mat4<T> {
    type Output = Mat4<T>;

    fn add(self, rhs: Mat4<T>) -> Self::Output {
        self.zip_with(&rhs, |a, b| a + b)
    }
}
impl<T: Scalar> AddAssign<Mat4<T>> for Mat4<T> {
    fn add_assign(&mut self, rhs: Mat4<T>) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> Sub<Mat4<T>> for Mat4<T> {
    type Output = Mat4<T>;

    fn sub(self, rhs: Mat4<T>) -> Self::Output {
        self.zip_with(&rhs, |a, b| a - b)
    }
}
impl<T: Scalar> SubAssign<Mat4<T>> for Mat4<T> {
    fn sub_assign(&mut self, rhs: Mat4<T>) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Mul<T> for Mat4<T> {
    type Output = Mat4<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|a| a * rhs)
    }
}
impl<T: Scalar> MulAssign<T> for Mat4<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Neg for Mat4<T> {
    type Output = Mat4<T>;

    fn neg(self) -> Self::Output {
        self.map(|a| -a)
    }
}

impl<T: Scalar> Mul<Mat4<T>> for Mat4<T> {
    type Output = Mat4<T>;

    fn mul(self, rhs: Mat4<T>) -> Self::Output {
        Mat4 {
            m11: self.m11 * rhs.m11 + self.m12 * rhs.m21 + self.m13 * rhs.m31 + self.m14 * rhs.m41,
            m12: self.m11 * rhs.m12 + self.m12 * rhs.m22 + self.m13 * rhs.m32 + self.m14 * rhs.m42,
            m13: self.m11 * rhs.m13 + self.m12 * rhs.m23 + self.m13 * rhs.m33 + self.m14 * rhs.m43,
            m14: self.m11 * rhs.m14 + self.m12 * rhs.m24 + self.m13 * rhs.m34 + self.m14 * rhs.m44,
            m21: self.m21 * rhs.m11 + self.m22 * rhs.m21 + self.m23 * rhs.m31 + self.m24 * rhs.m41,
            m22: self.m21 * rhs.m12 + self.m22 * rhs.m22 + self.m23 * rhs.m32 + self.m24 * rhs.m42,
            m23: self.m21 * rhs.m13 + self.m22 * rhs.m23 + self.m23 * rhs.m33 + self.m24 * rhs.m43,
            m24: self.m21 * rhs.m14 + self.m22 * rhs.m24 + self.m23 * rhs.m34 + self.m24 * rhs.m44,
            m31: self.m31 * rhs.m11 + self.m32 * rhs.m21 + self.m33 * rhs.m31 + self.m34 * rhs.m41,
            m32: self.m31 * rhs.m12 + self.m32 * rhs.m22 + self.m33 * rhs.m32 + self.m34 * rhs.m42,
            m33: self.m31 * rhs.m13 + self.m32 * rhs.m23 + self.m33 * rhs.m33 + self.m34 * rhs.m43,
            m34: self.m31 * rhs.m14 + self.m32 * rhs.m24 + self.m33 * rhs.m34 + self.m34 * rhs.m44,
            m41: self.m41 * rhs.m11 + self.m42 * rhs.m21 + self.m43 * rhs.m31 + self.m44 * rhs.m41,
            m42: self.m41 * rhs.m12 + self.m42 * rhs.m22 + self.m43 * rhs.m32 + self.m44 * rhs.m42,
            m43: self.m41 * rhs.m13 + self.m42 * rhs.m23 + self.m43 * rhs.m33 + self.m44 * rhs.m43,
            m44: self.m41 * rhs.m14 + self.m42 * rhs.m24 + self.m43 * rhs.m34 + self.m44 * rhs.m44,
        }
    }
}
impl<T: Scalar> MulAssign<Mat4<T>> for Mat4<T> {
    fn mul_assign(&mut self, rhs: Mat4<T>) {
        *self = *self * rhs;
    }
}
