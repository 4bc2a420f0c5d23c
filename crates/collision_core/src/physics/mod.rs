//! Physics module for bounding-volume collision detection
//!
//! Provides the bounding volumes (spheres and axis-aligned boxes), the
//! pairwise narrow-phase tests between them, and a flat-list collision system
//! that probes a sphere against every stored volume.
//!
//! # Module Organization
//!
//! - [`bounding_volume`] - Shared position contract
//! - [`sphere`], [`aabb`] - The two volume types
//! - [`narrow_phase`] - Pairwise tests, usable on their own
//! - [`collision_system`] - Stored volumes and probe queries

pub mod bounding_volume;
pub mod sphere;
pub mod aabb;
pub mod narrow_phase;
pub mod collision_system;
pub mod validation;

#[cfg(test)]
mod tests;

pub use bounding_volume::BoundingVolume;
pub use sphere::SphereBB;
pub use aabb::AABB;
pub use collision_system::{CollisionSystem, CollisionHit, VolumeRef};
pub use validation::GeometryError;
