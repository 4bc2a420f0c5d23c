//! Bounding sphere

use serde::{Deserialize, Serialize};

use super::bounding_volume::BoundingVolume;
use super::validation::GeometryError;
use crate::foundation::math::{is_finite3, Vec3};

/// A movable bounding sphere
///
/// Keeps the squared radius cached for the narrow-phase tests; it is
/// recomputed by every path that changes the radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "SphereDesc", into = "SphereDesc")]
pub struct SphereBB {
    position: Vec3,
    radius: f32,
    radius_squared: f32,
}

/// Serialized form; the cached square is rebuilt on load
#[derive(Clone, Copy, Serialize, Deserialize)]
struct SphereDesc {
    position: Vec3,
    radius: f32,
}

impl From<SphereDesc> for SphereBB {
    fn from(desc: SphereDesc) -> Self {
        Self::new(desc.position, desc.radius)
    }
}

impl From<SphereBB> for SphereDesc {
    fn from(sphere: SphereBB) -> Self {
        Self {
            position: sphere.position,
            radius: sphere.radius,
        }
    }
}

impl SphereBB {
    /// Create a sphere centered at `position`
    ///
    /// Any radius is accepted. A negative radius never collides with anything
    /// in the distance tests.
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self {
            position,
            radius,
            radius_squared: radius * radius,
        }
    }

    /// Sphere radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Cached `radius * radius`
    pub fn radius_squared(&self) -> f32 {
        self.radius_squared
    }

    /// Change the radius
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
        self.radius_squared = radius * radius;
    }

    /// Check for geometry that will produce degenerate collision results
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !is_finite3(&self.position) {
            return Err(GeometryError::NonFinitePosition);
        }
        if !self.radius.is_finite() {
            return Err(GeometryError::NonFiniteRadius(self.radius));
        }
        if self.radius < 0.0 {
            return Err(GeometryError::NegativeRadius(self.radius));
        }
        Ok(())
    }
}

impl BoundingVolume for SphereBB {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn center(&self) -> Vec3 {
        self.position
    }
}
