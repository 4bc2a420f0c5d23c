//! Math utilities and types
//!
//! Provides the vector types used by the bounding volumes and a few helpers for
//! the planar (X-Z) collision tests.

pub use nalgebra::{Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type (used for debug colors)
pub type Vec4 = Vector4<f32>;

/// Project a world-space vector onto the ground plane
///
/// The 2D tests work in the X-Z plane: `x` maps to `x`, `z` maps to `y`.
/// The vertical axis is discarded.
#[inline]
pub fn xz(v: &Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Component-wise clamp of a 3D vector
///
/// Matches `max(min(v, hi), lo)` evaluated per axis, with `lo` applied first.
#[inline]
pub fn clamp3(v: &Vec3, lo: &Vec3, hi: &Vec3) -> Vec3 {
    v.sup(lo).inf(hi)
}

/// Component-wise clamp of a 2D vector
#[inline]
pub fn clamp2(v: &Vec2, lo: &Vec2, hi: &Vec2) -> Vec2 {
    v.sup(lo).inf(hi)
}

/// Returns `true` when every component of `v` is finite
#[inline]
pub fn is_finite3(v: &Vec3) -> bool {
    v.iter().all(|c| c.is_finite())
}
