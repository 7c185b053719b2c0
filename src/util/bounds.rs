#[allow(unused_imports)]
use crate::core::prelude::*;

use itertools::iproduct;

/// How one volume relates to another.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Containment {
    /// No overlap at all.
    Disjoint,
    /// The second volume lies entirely inside the first.
    Contains,
    /// Partial overlap.
    Intersects,
}

/// An axis-aligned box stored as a centre and a full size.
///
/// ```
/// use vectormath::core::prelude::*;
///
/// let a = BoundingBox::new(Vec3::ZERO, Vec3::splat(2.0_f32));
/// assert_eq!(a.minimum(), Vec3::splat(-1.0));
/// assert_eq!(a.right(), 1.0);
///
/// let b = BoundingBox::new(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(2.0));
/// let c = BoundingBox::new(Vec3::new(5.0, 0.0, 0.0), Vec3::splat(2.0));
/// assert!(a.intersects(&b));
/// assert!(!a.intersects(&c));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox<T> {
    pub center: Vec3<T>,
    pub size: Vec3<T>,
}

impl<T: Scalar> BoundingBox<T> {
    pub const fn new(center: Vec3<T>, size: Vec3<T>) -> Self {
        Self { center, size }
    }

    pub fn from_min_max(min: Vec3<T>, max: Vec3<T>) -> Self {
        Self::new((min + max) * T::HALF, max - min)
    }

    /// The smallest box enclosing every point, or `None` when there are no points.
    pub fn from_points(points: impl IntoIterator<Item = Vec3<T>>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self::from_min_max(min, max))
    }

    pub fn half_extents(&self) -> Vec3<T> {
        self.size * T::HALF
    }
    pub fn minimum(&self) -> Vec3<T> {
        self.center - self.half_extents()
    }
    pub fn maximum(&self) -> Vec3<T> {
        self.center + self.half_extents()
    }

    /// Minimum x.
    pub fn left(&self) -> T {
        self.minimum().x()
    }
    /// Maximum x.
    pub fn right(&self) -> T {
        self.maximum().x()
    }
    /// Minimum y.
    pub fn bottom(&self) -> T {
        self.minimum().y()
    }
    /// Maximum y.
    pub fn top(&self) -> T {
        self.maximum().y()
    }
    /// Minimum z.
    pub fn back(&self) -> T {
        self.minimum().z()
    }
    /// Maximum z.
    pub fn front(&self) -> T {
        self.maximum().z()
    }

    /// True unless the boxes are separated along some axis. Boxes that share a face intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        let (amin, amax) = (self.minimum(), self.maximum());
        let (bmin, bmax) = (other.minimum(), other.maximum());
        (0..3).all(|i| !(amin[i] > bmax[i] || bmin[i] > amax[i]))
    }

    /// True when `point` is strictly inside; points on a face are outside.
    pub fn contains_point(&self, point: Vec3<T>) -> bool {
        point.all_gt(&self.minimum()) && point.all_lt(&self.maximum())
    }

    /// True when `other` lies inside this box or on its faces.
    pub fn contains_box(&self, other: &Self) -> bool {
        other.minimum().all_ge(&self.minimum()) && other.maximum().all_le(&self.maximum())
    }

    /// The eight corners, ordered by x, then y, then z (minimum corner first, maximum last).
    pub fn corners(&self) -> [Vec3<T>; 8] {
        let (min, max) = (self.minimum(), self.maximum());
        let mut corners = [Vec3::ZERO; 8];
        for (corner, (x, y, z)) in corners.iter_mut().zip(iproduct!(
            [min.x(), max.x()],
            [min.y(), max.y()],
            [min.z(), max.z()]
        )) {
            *corner = Vec3::new(x, y, z);
        }
        corners
    }

    /// The smallest box enclosing both boxes.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        Self::from_min_max(
            self.minimum().min(other.minimum()),
            self.maximum().max(other.maximum()),
        )
    }

    /// Returns the corner furthest along `normal` (the positive vertex) and the corner furthest
    /// against it (the negative vertex).
    pub fn p_vertex_n_vertex(&self, normal: Vec3<T>) -> (Vec3<T>, Vec3<T>) {
        let (min, max) = (self.minimum(), self.maximum());
        let mut p_vertex = min;
        let mut n_vertex = max;
        for i in 0..3 {
            if normal[i] >= T::ZERO {
                p_vertex[i] = max[i];
                n_vertex[i] = min[i];
            }
        }
        (p_vertex, n_vertex)
    }

    pub fn almost_eq(&self, rhs: Self) -> bool {
        self.center.almost_eq(rhs.center) && self.size.almost_eq(rhs.size)
    }
}

impl<T: Scalar> Default for BoundingBox<T> {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO)
    }
}

/// A sphere given by its centre and radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingSphere<T> {
    pub center: Vec3<T>,
    pub radius: T,
}

impl<T: Scalar> BoundingSphere<T> {
    pub const fn new(center: Vec3<T>, radius: T) -> Self {
        Self { center, radius }
    }

    /// The smallest sphere enclosing `bounds`: centred on the box, reaching its corners.
    pub fn from_box(bounds: &BoundingBox<T>) -> Self {
        Self::new(bounds.center, bounds.half_extents().length())
    }

    /// True when the spheres overlap or touch.
    ///
    /// ```
    /// use vectormath::core::prelude::*;
    /// let a = BoundingSphere::new(Vec3::ZERO, 1.0_f32);
    /// assert!(a.intersects(&BoundingSphere::new(Vec3::new(1.5, 0.0, 0.0), 1.0)));
    /// assert!(a.intersects(&BoundingSphere::new(Vec3::new(2.0, 0.0, 0.0), 1.0)));
    /// assert!(!a.intersects(&BoundingSphere::new(Vec3::new(3.0, 0.0, 0.0), 1.0)));
    /// ```
    pub fn intersects(&self, other: &Self) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(other.center) <= reach * reach
    }

    /// True when `point` is inside or on the surface.
    pub fn contains_point(&self, point: Vec3<T>) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// True when the box and sphere overlap or touch.
    pub fn intersects_box(&self, bounds: &BoundingBox<T>) -> bool {
        let closest = self.center.clamp(bounds.minimum(), bounds.maximum());
        self.center.distance_squared(closest) <= self.radius * self.radius
    }

    pub fn almost_eq(&self, rhs: Self) -> bool {
        self.center.almost_eq(rhs.center) && self.radius.almost_eq(rhs.radius)
    }
}

impl<T: Scalar> Default for BoundingSphere<T> {
    fn default() -> Self {
        Self::new(Vec3::ZERO, T::ZERO)
    }
}
