#[allow(unused_imports)]
use crate::core::prelude::*;

use num_traits::{FromPrimitive, PrimInt, ToPrimitive};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Index, Mul},
};

/// An RGBA colour with components nominally in `[0, 1]`.
///
/// Always single precision, whatever scalar the geometry uses; convert with
/// [`Vec4<f32>`](crate::util::linalg::Vec4) when mixing with vector code.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Colour {
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
    /// An opaque colour.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }
    /// Like [`from_bytes`](Colour::from_bytes), but accepts any integer type and clamps each
    /// component into `0..=255` first.
    pub fn from_bytes_clamp<I: PrimInt + FromPrimitive + ToPrimitive>(
        r: I,
        g: I,
        b: I,
        a: I,
    ) -> Self {
        let byte = |value: I| -> u8 {
            if value <= I::zero() {
                u8::MIN
            } else {
                value.to_u8().unwrap_or(u8::MAX)
            }
        };
        Self::from_bytes(byte(r), byte(g), byte(b), byte(a))
    }

    /// Scales the colour channels by `ratio`, clamped to `[0, 1]`. Alpha is untouched.
    #[must_use]
    pub fn scaled(mut self, ratio: f32) -> Self {
        self.r = (self.r * ratio).clamp(0.0, 1.0);
        self.g = (self.g * ratio).clamp(0.0, 1.0);
        self.b = (self.b * ratio).clamp(0.0, 1.0);
        self
    }
    #[must_use]
    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    /// Component-wise linear interpolation, alpha included. `t` is not clamped.
    #[must_use]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        Vec4::from(self).lerp(Vec4::from(to), t).into()
    }

    /// Converts each component to a byte, saturating outside `[0, 1]`.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn as_bytes(&self) -> [u8; 4] {
        self.as_f32().map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8)
    }
    pub fn as_f32(&self) -> [f32; 4] {
        self.into()
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> {
        self.as_f32().into_iter()
    }

    pub fn almost_eq(&self, rhs: Self) -> bool {
        Vec4::from(*self).almost_eq(rhs.into())
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Index<usize> for Colour {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            3 => &self.a,
            _ => panic!("Colour::index(): index out of range: {index}"),
        }
    }
}

impl From<Colour> for [f32; 4] {
    fn from(value: Colour) -> Self {
        [value.r, value.g, value.b, value.a]
    }
}

impl From<&Colour> for [f32; 4] {
    fn from(value: &Colour) -> Self {
        (*value).into()
    }
}

impl From<[f32; 4]> for Colour {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Colour> for Vec4<f32> {
    fn from(value: Colour) -> Self {
        Vec4::new(value.r, value.g, value.b, value.a)
    }
}

impl From<Vec4<f32>> for Colour {
    fn from(value: Vec4<f32>) -> Self {
        Self::new(value.x(), value.y(), value.z(), value.w())
    }
}

impl Mul for Colour {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
            a: self.a * rhs.a,
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.as_bytes();
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(Colour::RED.as_f32(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(Colour::BLACK.a, 1.0);
        assert_eq!(Colour::TRANSPARENT.a, 0.0);
        assert_eq!(Colour::default(), Colour::BLACK);
        assert_eq!(Colour::splat(0.5), Colour::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn bytes() {
        let c = Colour::from_bytes(255, 0, 51, 255);
        check_almost_eq!(c, Colour::rgb(1.0, 0.0, 0.2));
        assert_eq!(c.as_bytes(), [255, 0, 51, 255]);
        assert_eq!(Colour::new(2.0, -1.0, 0.5, 1.0).as_bytes(), [255, 0, 128, 255]);
    }

    #[test]
    fn bytes_clamp() {
        assert_eq!(
            Colour::from_bytes_clamp(300_i32, -20, 51, 255),
            Colour::from_bytes(255, 0, 51, 255)
        );
        assert_eq!(
            Colour::from_bytes_clamp(u64::MAX, 0, 0, 1000),
            Colour::from_bytes(255, 0, 0, 255)
        );
    }

    #[test]
    fn scaled_keeps_alpha() {
        let c = Colour::new(0.4, 0.8, 0.1, 0.5).scaled(2.0);
        check_almost_eq!(c, Colour::new(0.8, 1.0, 0.2, 0.5));
        assert_eq!(Colour::WHITE.scaled(-1.0), Colour::BLACK);
        assert_eq!(Colour::RED.with_alpha(0.25).a, 0.25);
    }

    #[test]
    fn lerp_and_mul() {
        let mid = Colour::BLACK.lerp(Colour::WHITE, 0.5);
        check_almost_eq!(mid, Colour::rgb(0.5, 0.5, 0.5));
        assert_eq!(Colour::RED.lerp(Colour::BLUE, 0.0), Colour::RED);
        assert_eq!(Colour::RED.lerp(Colour::BLUE, 1.0), Colour::BLUE);
        assert_eq!(
            Colour::rgb(0.5, 1.0, 0.0) * Colour::new(0.5, 0.5, 1.0, 0.5),
            Colour::new(0.25, 0.5, 0.0, 0.5)
        );
    }

    #[test]
    fn conversions() {
        let c = Colour::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(c[2], 0.3);
        assert_eq!(c.iter().collect_vec(), vec![0.1, 0.2, 0.3, 0.4]);
        assert_eq!(Colour::from([0.1, 0.2, 0.3, 0.4]), c);
        let v: Vec4<f32> = c.into();
        assert_eq!(v, Vec4::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(Colour::from(v), c);
        assert_eq!(Colour::RED.to_string(), "#ff0000ff");
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn index_out_of_range() {
        let _ = Colour::WHITE[4];
    }
}
