#[allow(unused_imports)]
use crate::core::prelude::*;

use std::{fmt, fmt::Formatter};

/// Which side of a plane a point or volume lies on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlaneIntersection {
    /// Entirely on the side the normal points to.
    Front,
    /// Entirely on the opposite side.
    Back,
    /// Touching or crossing the plane.
    Intersecting,
}

/// The plane `dot(normal, p) + distance = 0`.
///
/// When the normal has unit length, [`dot`](Plane::dot) is the signed distance of a point from
/// the plane, positive in front.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane<T> {
    pub normal: Vec3<T>,
    pub distance: T,
}

impl<T: Scalar> Plane<T> {
    pub const fn new(normal: Vec3<T>, distance: T) -> Self {
        Self { normal, distance }
    }

    /// The plane `a*x + b*y + c*z + d = 0`.
    pub fn from_components(a: T, b: T, c: T, d: T) -> Self {
        Self::new(Vec3::new(a, b, c), d)
    }

    /// The plane through `point` with the given normal.
    pub fn from_point_normal(point: Vec3<T>, normal: Vec3<T>) -> Self {
        Self::new(normal, -normal.dot(point))
    }

    /// The plane through three points, facing the side from which `a`, `b`, `c` appear
    /// counter-clockwise. The normal is normalised.
    ///
    /// ```
    /// use vectormath::core::prelude::*;
    /// let floor = Plane::from_points(
    ///     Vec3::new(0.0_f32, 0.0, 0.0),
    ///     Vec3::new(0.0, 0.0, 1.0),
    ///     Vec3::new(1.0, 0.0, 0.0),
    /// )?;
    /// assert_eq!(floor.normal, Vec3::UP);
    /// # Ok::<(), MathError>(())
    /// ```
    pub fn from_points(a: Vec3<T>, b: Vec3<T>, c: Vec3<T>) -> Result<Self, MathError> {
        let normal = (b - a)
            .cross(c - a)
            .try_normalized()
            .map_err(|_| MathError::CollinearPoints)?;
        Ok(Self::from_point_normal(a, normal))
    }

    /// `dot(normal, point) + distance`.
    pub fn dot(&self, point: Vec3<T>) -> T {
        self.normal.dot(point) + self.distance
    }
    /// `dot(normal, v)`, ignoring the plane's offset.
    pub fn dot_normal(&self, v: Vec3<T>) -> T {
        self.normal.dot(v)
    }

    /// Classifies `point`. Only an exact zero counts as lying on the plane.
    pub fn intersects_point(&self, point: Vec3<T>) -> PlaneIntersection {
        let d = self.dot(point);
        if d > T::ZERO {
            PlaneIntersection::Front
        } else if d < T::ZERO {
            PlaneIntersection::Back
        } else {
            PlaneIntersection::Intersecting
        }
    }

    pub fn intersects_box(&self, bounds: &BoundingBox<T>) -> PlaneIntersection {
        let (p_vertex, n_vertex) = bounds.p_vertex_n_vertex(self.normal);
        if self.dot(n_vertex) > T::ZERO {
            PlaneIntersection::Front
        } else if self.dot(p_vertex) < T::ZERO {
            PlaneIntersection::Back
        } else {
            PlaneIntersection::Intersecting
        }
    }

    /// Classifies `sphere`. The plane must be normalised for the radius comparison to be
    /// meaningful.
    pub fn intersects_sphere(&self, sphere: &BoundingSphere<T>) -> PlaneIntersection {
        let d = self.dot(sphere.center);
        if d > sphere.radius {
            PlaneIntersection::Front
        } else if d < -sphere.radius {
            PlaneIntersection::Back
        } else {
            PlaneIntersection::Intersecting
        }
    }

    /// Scales the normal to unit length, and the distance with it, so the plane stays in the
    /// same place. A plane with a zero-length normal is left as it is.
    pub fn normalize(&mut self) {
        let len_sq = self.normal.length_squared();
        if !len_sq.is_divisible_length_sq() {
            warn!("Plane::normalize(): zero-length normal in {self}, leaving unchanged");
            return;
        }
        let inv_len = T::one() / len_sq.sqrt();
        self.normal *= inv_len;
        self.distance = self.distance * inv_len;
    }
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn almost_eq(&self, rhs: Self) -> bool {
        self.normal.almost_eq(rhs.normal) && self.distance.almost_eq(rhs.distance)
    }
}

impl<T: Scalar> fmt::Display for Plane<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            write!(f, "plane({:.2$}, {:.2$})", self.normal, self.distance, p)
        } else {
            write!(f, "plane({}, {})", self.normal, self.distance)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xz_plane() -> Plane<f32> {
        Plane::from_components(0.0, 1.0, 0.0, 0.0)
    }

    #[test]
    fn classify_points() {
        let plane = xz_plane();
        assert_eq!(
            plane.intersects_point(Vec3::new(0.0, 5.0, 0.0)),
            PlaneIntersection::Front
        );
        assert_eq!(
            plane.intersects_point(Vec3::new(0.0, -5.0, 0.0)),
            PlaneIntersection::Back
        );
        assert_eq!(
            plane.intersects_point(Vec3::ZERO),
            PlaneIntersection::Intersecting
        );
        // Exact zero only: a point just above the plane is in front.
        assert_eq!(
            plane.intersects_point(Vec3::new(3.0, 1e-30, -2.0)),
            PlaneIntersection::Front
        );
    }

    #[test]
    fn dot_products() {
        let plane = Plane::new(Vec3::new(0.0_f64, 1.0, 0.0), -2.0);
        assert_eq!(plane.dot(Vec3::new(7.0, 5.0, 1.0)), 3.0);
        assert_eq!(plane.dot_normal(Vec3::new(7.0, 5.0, 1.0)), 5.0);
    }

    #[test]
    fn from_point_normal() {
        let plane = Plane::from_point_normal(Vec3::new(0.0_f32, 2.0, 0.0), Vec3::UP);
        assert_eq!(plane.distance, -2.0);
        assert_eq!(
            plane.intersects_point(Vec3::new(1.0, 1.0, 1.0)),
            PlaneIntersection::Back
        );
    }

    #[test]
    fn from_points_winding() {
        let a = Vec3::new(0.0_f64, 2.0, 0.0);
        let b = Vec3::new(1.0, 2.0, 0.0);
        let c = Vec3::new(0.0, 2.0, -1.0);
        let up = Plane::from_points(a, b, c).unwrap();
        check_almost_eq!(up.normal, Vec3::UP);
        check_almost_eq!(up.distance, -2.0);
        assert_eq!(
            up.intersects_point(Vec3::new(0.0, 5.0, 0.0)),
            PlaneIntersection::Front
        );

        // Reversing the winding flips the plane.
        let down = Plane::from_points(a, c, b).unwrap();
        check_almost_eq!(down.normal, Vec3::DOWN);
        check_almost_eq!(down.distance, 2.0);
    }

    #[test]
    fn from_points_collinear() {
        assert_eq!(
            Plane::from_points(
                Vec3::new(0.0_f32, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(2.0, 2.0, 2.0)
            ),
            Err(MathError::CollinearPoints)
        );
        assert_eq!(
            Plane::from_points(Vec3::<f64>::ONE, Vec3::ONE, Vec3::ZERO),
            Err(MathError::CollinearPoints)
        );
    }

    #[test]
    fn from_points_small_triangle() {
        let plane = Plane::from_points(
            Vec3::new(1.0_f64, 2.0, 3.0),
            Vec3::new(1.0, 2.0, 3.0 + 5e-4),
            Vec3::new(1.0 + 5e-4, 2.0, 3.0),
        )
        .unwrap();
        check_almost_eq!(plane.normal, Vec3::UP);
        check_almost_eq!(plane.distance, -2.0);

        let plane = Plane::from_points(
            Vec3::<f32>::ZERO,
            Vec3::new(1e-3, 0.0, 0.0),
            Vec3::new(0.0, 1e-3, 0.0),
        )
        .unwrap();
        check_almost_eq!(plane.normal, Vec3::UNIT_Z);
    }

    #[test]
    fn normalize_scales_distance() {
        let plane = Plane::new(Vec3::new(0.0_f32, 2.0, 0.0), 4.0).normalized();
        check_almost_eq!(plane.normal, Vec3::UP);
        check_almost_eq!(plane.distance, 2.0);
        // Still the same plane: y = -2.
        assert_eq!(
            plane.intersects_point(Vec3::new(0.0, -2.0, 0.0)),
            PlaneIntersection::Intersecting
        );

        let mut degenerate = Plane::new(Vec3::<f32>::ZERO, 1.0);
        degenerate.normalize();
        assert_eq!(degenerate, Plane::new(Vec3::ZERO, 1.0));
    }

    #[test]
    fn classify_boxes() {
        let plane = xz_plane();
        let above = BoundingBox::new(Vec3::new(0.0, 5.0, 0.0), Vec3::splat(2.0));
        let below = BoundingBox::new(Vec3::new(3.0, -5.0, 1.0), Vec3::splat(2.0));
        let straddling = BoundingBox::new(Vec3::new(0.0, 0.5, 0.0), Vec3::splat(2.0));
        assert_eq!(plane.intersects_box(&above), PlaneIntersection::Front);
        assert_eq!(plane.intersects_box(&below), PlaneIntersection::Back);
        assert_eq!(
            plane.intersects_box(&straddling),
            PlaneIntersection::Intersecting
        );

        // A tilted plane sees the box corners, not just its centre.
        let tilted = Plane::new(Vec3::new(1.0_f32, 1.0, 0.0).normalized(), -1.0);
        let unit = BoundingBox::new(Vec3::ZERO, Vec3::splat(2.0));
        assert_eq!(tilted.intersects_point(unit.center), PlaneIntersection::Back);
        assert_eq!(tilted.intersects_box(&unit), PlaneIntersection::Intersecting);
        let far = BoundingBox::new(Vec3::splat(-2.0), Vec3::splat(2.0));
        assert_eq!(tilted.intersects_box(&far), PlaneIntersection::Back);
    }

    #[test]
    fn classify_spheres() {
        let plane = xz_plane();
        let sphere = |y: f32| BoundingSphere::new(Vec3::new(0.0, y, 0.0), 1.0);
        assert_eq!(plane.intersects_sphere(&sphere(3.0)), PlaneIntersection::Front);
        assert_eq!(plane.intersects_sphere(&sphere(-3.0)), PlaneIntersection::Back);
        assert_eq!(
            plane.intersects_sphere(&sphere(0.5)),
            PlaneIntersection::Intersecting
        );
        assert_eq!(
            plane.intersects_sphere(&sphere(1.0)),
            PlaneIntersection::Intersecting
        );
    }

    #[test]
    fn display() {
        assert_eq!(xz_plane().to_string(), "plane(vec(0, 1, 0), 0)");
        assert_eq!(
            format!("{:.1}", xz_plane()),
            "plane(vec(0.0, 1.0, 0.0), 0.0)"
        );
    }
}
