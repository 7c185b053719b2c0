#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::{config::*, error::MathError},
    util::{
        assert::*,
        bounds::{BoundingBox, BoundingSphere, Containment},
        colour::Colour,
        frustum::{BoundingFrustum, FrustumPlane},
        linalg,
        linalg::{Vec2, Vec3, Vec4, Vector},
        matrix::Mat4,
        plane::{Plane, PlaneIntersection},
        quaternion::Quaternion,
        vm_float::Scalar,
    },
};

pub type Vector2 = Vec2<Real>;
pub type Vector3 = Vec3<Real>;
pub type Vector4 = Vec4<Real>;
pub type Matrix = Mat4<Real>;
pub type Quat = Quaternion<Real>;
pub type Plane3 = Plane<Real>;
pub type Box3 = BoundingBox<Real>;
pub type Sphere = BoundingSphere<Real>;
pub type Frustum = BoundingFrustum<Real>;
