//! Pairwise narrow-phase tests
//!
//! Each test returns `Some(normal)` on a hit and `None` otherwise. Normals are
//! raw deltas and are **not** normalized; callers that need a direction should
//! normalize themselves.
//!
//! The 2D variants work in the X-Z ground plane (see [`xz`]).
//!
//! Boundary policy differs by shape pair and is part of the contract:
//! sphere/sphere and point/sphere accept touching (`<=`), sphere/box rejects
//! touching (`<`).

use super::aabb::AABB;
use super::bounding_volume::BoundingVolume;
use super::sphere::SphereBB;
use crate::foundation::math::{clamp2, clamp3, xz, Vec2, Vec3};

/// Point against sphere in the X-Z plane
///
/// Hit when the planar squared distance is `<=` the squared radius.
/// The normal points from `point` to the sphere center.
pub fn point_sphere_2d(point: &Vec3, sphere: &SphereBB) -> Option<Vec2> {
    let delta = xz(&(sphere.position() - point));
    (delta.norm_squared() <= sphere.radius_squared()).then_some(delta)
}

/// Sphere against sphere in the X-Z plane
///
/// Hit when the planar distance between centers is `<=` the sum of radii.
/// The normal points from `a` to `b`.
pub fn sphere_sphere_2d(a: &SphereBB, b: &SphereBB) -> Option<Vec2> {
    let delta = xz(&(b.position() - a.position()));
    (delta.norm() <= a.radius() + b.radius()).then_some(delta)
}

/// Sphere against sphere in 3D
///
/// Hit when the distance between centers is `<=` the sum of radii.
/// The normal points from `a` to `b`.
pub fn sphere_sphere_3d(a: &SphereBB, b: &SphereBB) -> Option<Vec3> {
    let delta = b.position() - a.position();
    (delta.norm() <= a.radius() + b.radius()).then_some(delta)
}

/// Closest point on (or in) the box to `point`, in 3D
pub fn closest_point_3d(aabb: &AABB, point: &Vec3) -> Vec3 {
    let center = aabb.center();
    let half = aabb.half_extents();
    center + clamp3(&(point - center), &-half, &half)
}

/// Closest point on (or in) the box footprint to `point`, in the X-Z plane
pub fn closest_point_2d(aabb: &AABB, point: &Vec2) -> Vec2 {
    let center = xz(&aabb.center());
    let half = xz(&aabb.half_extents());
    center + clamp2(&(point - center), &-half, &half)
}

/// Sphere against box in the X-Z plane
///
/// Uses the clamped-closest-point method. Hit when the squared planar
/// distance from the sphere center to the closest point is strictly `<` the
/// squared radius. The normal is `sphere center - closest point`, pointing
/// out of the box towards the sphere.
pub fn sphere_box_2d(sphere: &SphereBB, aabb: &AABB) -> Option<Vec2> {
    let center = xz(&sphere.position());
    let offset = center - closest_point_2d(aabb, &center);
    (offset.norm_squared() < sphere.radius_squared()).then_some(offset)
}

/// Box against sphere in the X-Z plane
///
/// Same as [`sphere_box_2d`]; the normal still points towards the sphere.
pub fn box_sphere_2d(aabb: &AABB, sphere: &SphereBB) -> Option<Vec2> {
    sphere_box_2d(sphere, aabb)
}

/// Sphere against box in 3D
///
/// Clamped-closest-point method with a strict `<` against the squared
/// radius. The normal is `sphere center - closest point`.
pub fn sphere_box_3d(sphere: &SphereBB, aabb: &AABB) -> Option<Vec3> {
    let center = sphere.position();
    let offset = center - closest_point_3d(aabb, &center);
    (offset.norm_squared() < sphere.radius_squared()).then_some(offset)
}

/// Box against sphere in 3D
///
/// Same as [`sphere_box_3d`]; the normal still points towards the sphere.
pub fn box_sphere_3d(aabb: &AABB, sphere: &SphereBB) -> Option<Vec3> {
    sphere_box_3d(sphere, aabb)
}

/// Box against box in the X-Z plane, full-dimension variant
///
/// Per axis: `c0 + d0 >= c1 && c1 + d1 >= c0`, where `c` is the center and
/// `d` the full dimension. This reaches a whole box size past each center, so
/// boxes report overlap while up to `d` apart on the positive side.
pub fn box_box_2d(r0: &AABB, r1: &AABB) -> bool {
    let (c0, c1) = (r0.center(), r1.center());
    let collision_x = c0.x + r0.dim_x() >= c1.x && c1.x + r1.dim_x() >= c0.x;
    let collision_z = c0.z + r0.dim_z() >= c1.z && c1.z + r1.dim_z() >= c0.z;
    collision_x && collision_z
}

/// Box against box in the X-Z plane, standard half-extent overlap
///
/// Per axis: `|c0 - c1| <= h0 + h1`. Touching boxes overlap.
pub fn box_box_2d_half_extents(r0: &AABB, r1: &AABB) -> bool {
    let gap = xz(&(r0.center() - r1.center())).abs();
    let reach = xz(&(r0.half_extents() + r1.half_extents()));
    gap.x <= reach.x && gap.y <= reach.y
}

/// Point containment in 3D, boundary inclusive
pub fn point_in_box_3d(point: &Vec3, aabb: &AABB) -> bool {
    let (min, max) = (aabb.min(), aabb.max());
    point.x >= min.x && point.x <= max.x
        && point.y >= min.y && point.y <= max.y
        && point.z >= min.z && point.z <= max.z
}
