//! Axis-aligned bounding box anchored at a position

use serde::{Deserialize, Serialize};

use super::bounding_volume::BoundingVolume;
use super::validation::GeometryError;
use crate::foundation::math::{is_finite3, Vec3};

/// Axis-aligned bounding box defined by two corner offsets from an anchor
///
/// The corners `a` and `b` are offsets relative to `position` and need not be
/// ordered. All derived geometry (dimensions, center, half-extents) is
/// computed from the current anchor and corners on every call, so moving the
/// anchor or editing a corner is immediately reflected in collision tests.
///
/// The center is `position + a + dimensions / 2`, i.e. the box is laid out
/// from corner `a` towards positive axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub struct AABB {
    position: Vec3,
    a: Vec3,
    b: Vec3,
}

impl AABB {
    /// Create a box anchored at `position` spanning corner offsets `a` and `b`
    pub fn new(position: Vec3, a: Vec3, b: Vec3) -> Self {
        Self { position, a, b }
    }

    /// Create a box from its world-space center and half-extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self::new(center, -half, half)
    }

    /// First corner offset, as given
    pub fn a(&self) -> Vec3 {
        self.a
    }

    /// Second corner offset, as given
    pub fn b(&self) -> Vec3 {
        self.b
    }

    /// Replace the first corner offset
    pub fn set_a(&mut self, a: Vec3) {
        self.a = a;
    }

    /// Replace the second corner offset
    pub fn set_b(&mut self, b: Vec3) {
        self.b = b;
    }

    /// Component-wise `|b - a|`
    pub fn dimensions(&self) -> Vec3 {
        (self.b - self.a).abs()
    }

    /// Size along X
    pub fn dim_x(&self) -> f32 {
        (self.b.x - self.a.x).abs()
    }

    /// Size along Y
    pub fn dim_y(&self) -> f32 {
        (self.b.y - self.a.y).abs()
    }

    /// Size along Z
    pub fn dim_z(&self) -> f32 {
        (self.b.z - self.a.z).abs()
    }

    /// Half the size along each axis
    pub fn half_extents(&self) -> Vec3 {
        self.dimensions() * 0.5
    }

    /// Lowest corner in world space (`center - half_extents`)
    pub fn min(&self) -> Vec3 {
        self.center() - self.half_extents()
    }

    /// Highest corner in world space (`center + half_extents`)
    pub fn max(&self) -> Vec3 {
        self.center() + self.half_extents()
    }

    /// Check for geometry that will produce degenerate collision results
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !is_finite3(&self.position) {
            return Err(GeometryError::NonFinitePosition);
        }
        if !is_finite3(&self.a) || !is_finite3(&self.b) {
            return Err(GeometryError::NonFiniteCorner);
        }
        let dims = self.dimensions();
        for (axis, extent) in ['x', 'y', 'z'].into_iter().zip(dims.iter()) {
            if *extent == 0.0 {
                return Err(GeometryError::DegenerateBox { axis });
            }
        }
        Ok(())
    }
}

impl BoundingVolume for AABB {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn center(&self) -> Vec3 {
        self.position + self.a + self.dimensions() * 0.5
    }
}
