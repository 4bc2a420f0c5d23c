//! # Unified Configuration System
//!
//! Settings for the collision system and its debug visualization, loadable
//! from TOML or RON through the [`Config`] trait.
//!
//! ## Configuration Categories
//!
//! - **Collision Config**: narrow-phase policy switches and insert-time validation
//! - **Debug Draw Config**: which volumes and normals the visualizer emits

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};

/// Which overlap test the collision system uses for box-vs-box queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoxOverlapPolicy {
    /// `center + dimension` against the other center on X and Z
    ///
    /// Reports overlap for boxes up to a full dimension apart. Existing scene
    /// code is tuned against this test, so it stays the default.
    #[default]
    FullDimension,
    /// Standard AABB overlap: `|c0 - c1| <= h0 + h1` on X and Z
    HalfExtents,
}

/// # Collision Configuration
///
/// Behavior switches for [`CollisionSystem`](crate::physics::CollisionSystem).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Box-vs-box overlap test used by `check_box_overlap_2d`
    pub box_overlap: BoxOverlapPolicy,
    /// Validate volumes on insertion and log a warning for bad geometry
    ///
    /// Invalid volumes are still inserted.
    pub validate_on_insert: bool,
    /// Emit a `trace!` record for every reported hit
    pub trace_hits: bool,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            box_overlap: BoxOverlapPolicy::default(),
            validate_on_insert: cfg!(debug_assertions),
            trace_hits: false,
        }
    }
}

/// # Debug Draw Configuration
///
/// Controls what [`CollisionDebugVisualizer`](crate::debug::CollisionDebugVisualizer) emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugDrawConfig {
    /// Master enable flag
    pub enabled: bool,
    /// Draw stored spheres
    pub show_spheres: bool,
    /// Draw stored boxes
    pub show_boxes: bool,
    /// Draw the separation normal of the last hit
    pub show_normals: bool,
}

impl Default for DebugDrawConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_spheres: true,
            show_boxes: true,
            show_normals: true,
        }
    }
}

/// # Collision Settings
///
/// Top-level settings file for applications embedding the collision core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionSettings {
    /// Collision system behavior
    pub collision: CollisionConfig,
    /// Debug visualization
    pub debug: DebugDrawConfig,
}

impl Config for CollisionSettings {}
