#[allow(unused_imports)]
use crate::core::prelude::*;

use std::ops::Index;

/// Names the six planes of a [`BoundingFrustum`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FrustumPlane {
    Left,
    Right,
    Top,
    Bottom,
    Near,
    Far,
}

impl FrustumPlane {
    /// Every plane, in the order [`BoundingFrustum::planes`] uses.
    pub const ALL: [Self; 6] = [
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
        Self::Near,
        Self::Far,
    ];
}

/// The convex volume seen through a camera, bounded by six inward-facing planes.
///
/// The planes are extracted once from a view-projection matrix built for row vectors
/// (`clip = p * view * projection`) with clip-space depth in `[0, w]`, as produced by
/// [`Mat4::create_perspective`] and [`Mat4::create_ortho`]. The frustum keeps no reference to
/// the matrix: call [`set_planes`](BoundingFrustum::set_planes) again when the camera moves.
///
/// ```
/// use vectormath::core::prelude::*;
///
/// let view = Mat4::create_look_at(Vec3::new(0.0_f64, 0.0, -10.0), Vec3::ZERO, Vec3::UP);
/// let projection = Mat4::create_perspective(std::f64::consts::FRAC_PI_2, 1.0, 1.0, 100.0);
/// let frustum = BoundingFrustum::from_matrix(&(view * projection));
///
/// check!(frustum.contains_point(Vec3::ZERO));
/// check!(frustum.contains_box(&BoundingBox::new(Vec3::ZERO, Vec3::splat(2.0))));
/// check_false!(frustum.intersects_box(&BoundingBox::new(Vec3::new(0.0, 0.0, -20.0), Vec3::ONE)));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingFrustum<T> {
    planes: [Plane<T>; 6],
}

impl<T: Scalar> BoundingFrustum<T> {
    pub fn from_matrix(matrix: &Mat4<T>) -> Self {
        let mut rv = Self {
            planes: [Plane::new(Vec3::ZERO, T::ZERO); 6],
        };
        rv.set_planes(matrix);
        rv
    }

    /// Re-derives all six planes from `matrix`, normalising each one.
    pub fn set_planes(&mut self, matrix: &Mat4<T>) {
        let x = matrix.column(0);
        let y = matrix.column(1);
        let z = matrix.column(2);
        let w = matrix.column(3);
        let plane = |v: Vec4<T>| Plane::new(v.xyz(), v.w()).normalized();
        self.planes = [
            plane(w + x),
            plane(w - x),
            plane(w - y),
            plane(w + y),
            // Depth starts at zero rather than -w, so the near plane is the z column alone.
            plane(z),
            plane(w - z),
        ];
    }

    pub fn plane(&self, which: FrustumPlane) -> &Plane<T> {
        &self.planes[which as usize]
    }
    /// Left, right, top, bottom, near, far.
    pub fn planes(&self) -> &[Plane<T>; 6] {
        &self.planes
    }

    /// Full classification of `bounds` against the frustum, using each plane's positive and
    /// negative vertex.
    pub fn classify_box(&self, bounds: &BoundingBox<T>) -> Containment {
        let mut rv = Containment::Contains;
        for plane in &self.planes {
            let (p_vertex, n_vertex) = bounds.p_vertex_n_vertex(plane.normal);
            if plane.intersects_point(p_vertex) == PlaneIntersection::Back {
                return Containment::Disjoint;
            }
            if plane.intersects_point(n_vertex) == PlaneIntersection::Back {
                rv = Containment::Intersects;
            }
        }
        rv
    }
    /// True only when the whole box is inside; see [`classify_box`](Self::classify_box).
    pub fn contains_box(&self, bounds: &BoundingBox<T>) -> bool {
        self.classify_box(bounds) == Containment::Contains
    }
    /// Conservative: a box near a frustum edge can be reported as intersecting when it is not.
    pub fn intersects_box(&self, bounds: &BoundingBox<T>) -> bool {
        self.classify_box(bounds) != Containment::Disjoint
    }

    pub fn contains_sphere(&self, sphere: &BoundingSphere<T>) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.dot(sphere.center) >= sphere.radius)
    }
    /// True when the sphere is not entirely behind at least one of the planes.
    ///
    /// This only rejects a sphere that is behind every plane at once, so for a well-formed
    /// frustum it is nearly always true. Use [`contains_sphere`](Self::contains_sphere) or the
    /// planes directly for culling.
    pub fn intersects_sphere(&self, sphere: &BoundingSphere<T>) -> bool {
        self.planes
            .iter()
            .any(|plane| plane.dot(sphere.center) + sphere.radius >= T::ZERO)
    }

    pub fn contains_point(&self, point: Vec3<T>) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.intersects_point(point) != PlaneIntersection::Back)
    }

    /// The eight corners: near bottom-right, near top-right, near top-left, near bottom-left,
    /// then the same four on the far plane.
    pub fn corners(&self) -> Result<[Vec3<T>; 8], MathError> {
        use FrustumPlane::*;
        let corner = |depth: FrustumPlane, vertical: FrustumPlane, horizontal: FrustumPlane| {
            intersect_three_planes(self[depth], self[vertical], self[horizontal])
        };
        Ok([
            corner(Near, Bottom, Right)?,
            corner(Near, Top, Right)?,
            corner(Near, Top, Left)?,
            corner(Near, Bottom, Left)?,
            corner(Far, Bottom, Right)?,
            corner(Far, Top, Right)?,
            corner(Far, Top, Left)?,
            corner(Far, Bottom, Left)?,
        ])
    }

    pub fn almost_eq(&self, rhs: Self) -> bool {
        self.planes
            .iter()
            .zip(rhs.planes)
            .all(|(lhs, rhs)| lhs.almost_eq(rhs))
    }
}

impl<T> Index<FrustumPlane> for BoundingFrustum<T> {
    type Output = Plane<T>;

    fn index(&self, index: FrustumPlane) -> &Self::Output {
        &self.planes[index as usize]
    }
}

/// The single point shared by three planes.
///
/// Fails with [`MathError::ParallelPlanes`] when the normals are too close to linearly
/// dependent for the point to be well defined.
///
/// ```
/// use vectormath::core::prelude::*;
/// use vectormath::util::frustum::intersect_three_planes;
///
/// let x = Plane::new(Vec3::UNIT_X, -1.0_f32);
/// let y = Plane::new(Vec3::UNIT_Y, -2.0);
/// let z = Plane::new(Vec3::UNIT_Z, -3.0);
/// assert_eq!(intersect_three_planes(x, y, z)?, Vec3::new(1.0, 2.0, 3.0));
/// assert_eq!(intersect_three_planes(x, x, z), Err(MathError::ParallelPlanes));
/// # Ok::<(), MathError>(())
/// ```
pub fn intersect_three_planes<T: Scalar>(
    a: Plane<T>,
    b: Plane<T>,
    c: Plane<T>,
) -> Result<Vec3<T>, MathError> {
    let bc = b.normal.cross(c.normal);
    let ca = c.normal.cross(a.normal);
    let ab = a.normal.cross(b.normal);
    let triple = a.normal.dot(bc);
    let scale = a.normal.length() * b.normal.length() * c.normal.length();
    if triple.abs() <= T::ZERO_TOLERANCE * scale {
        return Err(MathError::ParallelPlanes);
    }
    Ok(-(bc * a.distance + ca * b.distance + ab * c.distance) / triple)
}
