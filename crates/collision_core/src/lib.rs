//! # Collision Core
//!
//! Bounding-volume collision detection for a small real-time rendering engine.
//!
//! ## Features
//!
//! - **Bounding Volumes**: Spheres and axis-aligned boxes anchored at a world position
//! - **Narrow Phase**: Pairwise sphere/sphere, sphere/box, box/box and point tests
//! - **2D and 3D Queries**: Probe a sphere against every stored volume, in the X-Z plane or in full 3D
//! - **Debug Drawing**: Wireframe visualization of stored volumes and hit normals
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_core::prelude::*;
//!
//! let mut system = CollisionSystem::new();
//! system.insert_sphere(SphereBB::new(Vec3::new(1.5, 0.0, 0.0), 1.0));
//! system.insert_box(AABB::new(
//!     Vec3::new(10.0, 0.0, 0.0),
//!     Vec3::new(-1.0, -1.0, -1.0),
//!     Vec3::new(1.0, 1.0, 1.0),
//! ));
//!
//! let player = SphereBB::new(Vec3::zeros(), 1.0);
//! if let Some(normal) = system.check_collision_3d(&player) {
//!     // Push the player back out along `normal`
//!     assert!(normal.x < 0.0);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core configuration
pub mod core;

pub mod foundation;
pub mod config;
pub mod physics;
pub mod debug;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        foundation::math::{Vec2, Vec3, Vec4},
        physics::{
            narrow_phase,
            BoundingVolume, SphereBB, AABB,
            CollisionSystem, CollisionHit, VolumeRef,
            GeometryError,
        },
        core::config::{CollisionSettings, CollisionConfig, BoxOverlapPolicy, DebugDrawConfig},
        config::{Config, ConfigError},
        debug::{CollisionDebugVisualizer, DebugShape},
    };
}
