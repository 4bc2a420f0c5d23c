//! # Core Module
//!
//! Holds the unified settings types shared by the collision system, the debug
//! visualizer, and applications embedding the core.

pub mod config;

pub use config::{CollisionSettings, CollisionConfig, BoxOverlapPolicy, DebugDrawConfig};
