//! Collision-specific debug visualization
//!
//! Turns the contents of a [`CollisionSystem`] and the result of a probe
//! query into debug shapes: every stored volume, the probe colored by hit
//! state, and the separation normal of the hit.

use crate::core::config::DebugDrawConfig;
use crate::debug::draw::{DebugDrawSystem, DebugShape};
use crate::foundation::math::{Vec2, Vec3, Vec4};
use crate::physics::{BoundingVolume, CollisionSystem, SphereBB};

/// Color scheme for collision visualization
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionDebugColors {
    /// Stored spheres
    pub sphere: Vec4,
    /// Stored boxes
    pub aabb: Vec4,
    /// Probe with no hit this frame
    pub probe_clear: Vec4,
    /// Probe colliding this frame
    pub probe_colliding: Vec4,
    /// Separation normal
    pub normal: Vec4,
}

impl Default for CollisionDebugColors {
    fn default() -> Self {
        Self {
            sphere: Vec4::new(0.0, 1.0, 1.0, 0.3),          // Cyan, semi-transparent
            aabb: Vec4::new(0.0, 1.0, 0.0, 0.3),            // Green, semi-transparent
            probe_clear: Vec4::new(1.0, 1.0, 1.0, 0.5),     // White
            probe_colliding: Vec4::new(1.0, 0.0, 0.0, 0.5), // Red
            normal: Vec4::new(1.0, 1.0, 0.0, 1.0),          // Yellow
        }
    }
}

/// Persistent key used for the probe shape
const PROBE_KEY: &str = "collision_probe";

/// Collision-specific debug visualizer
///
/// All stored-volume and normal shapes are single-frame (zero duration) and
/// expire on the next [`update`](Self::update). The probe is persistent and
/// replaced on every [`draw_probe`](Self::draw_probe).
#[derive(Debug)]
pub struct CollisionDebugVisualizer {
    debug_draw: DebugDrawSystem,
    colors: CollisionDebugColors,
    config: DebugDrawConfig,
}

impl CollisionDebugVisualizer {
    /// Create a new collision debug visualizer
    pub fn new() -> Self {
        Self::with_config(DebugDrawConfig::default())
    }

    /// Create a visualizer honoring the given settings
    pub fn with_config(config: DebugDrawConfig) -> Self {
        let mut debug_draw = DebugDrawSystem::new();
        debug_draw.enabled = config.enabled;
        Self {
            debug_draw,
            colors: CollisionDebugColors::default(),
            config,
        }
    }

    /// Set custom color scheme
    pub fn with_colors(mut self, colors: CollisionDebugColors) -> Self {
        self.colors = colors;
        self
    }

    /// Draw every volume stored in `system`
    pub fn draw_system(&mut self, system: &CollisionSystem) {
        if self.config.show_spheres {
            for sphere in system.spheres() {
                self.debug_draw.draw_sphere(sphere.position(), sphere.radius(), self.colors.sphere, 0.0);
            }
        }
        if self.config.show_boxes {
            for aabb in system.boxes() {
                self.debug_draw.draw_box(aabb.center(), aabb.half_extents(), self.colors.aabb, 0.0);
            }
        }
    }

    /// Draw the probe, colored by whether it hit anything
    pub fn draw_probe(&mut self, probe: &SphereBB, is_colliding: bool) {
        let color = if is_colliding {
            self.colors.probe_colliding
        } else {
            self.colors.probe_clear
        };

        self.debug_draw.draw_persistent(
            PROBE_KEY,
            DebugShape::Sphere {
                center: probe.position(),
                radius: probe.radius(),
                color,
                duration: f32::INFINITY,
            },
        );
    }

    /// Draw a 3D separation normal starting at `origin`
    pub fn draw_normal(&mut self, origin: Vec3, normal: Vec3) {
        if !self.config.show_normals {
            return;
        }
        self.debug_draw.draw_line(origin, origin + normal, self.colors.normal, 0.0);
    }

    /// Draw a planar separation normal at the height of `origin`
    pub fn draw_normal_2d(&mut self, origin: Vec3, normal: Vec2) {
        self.draw_normal(origin, Vec3::new(normal.x, 0.0, normal.y));
    }

    /// Stop drawing the probe
    pub fn clear_probe(&mut self) {
        self.debug_draw.clear_persistent(PROBE_KEY);
    }

    /// Clear all visualization
    pub fn clear(&mut self) {
        self.debug_draw.clear();
    }

    /// Update debug system (expire temporary shapes)
    pub fn update(&mut self, delta_time: f32) {
        self.debug_draw.update(delta_time);
    }

    /// All debug shapes for rendering
    pub fn shapes(&self) -> impl Iterator<Item = &DebugShape> {
        self.debug_draw.shapes()
    }

    /// Enable/disable the entire debug system
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
        self.debug_draw.enabled = enabled;
    }

    /// Check if debug system is enabled
    pub fn is_enabled(&self) -> bool {
        self.debug_draw.enabled
    }
}

impl Default for CollisionDebugVisualizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::AABB;

    fn populated_system() -> CollisionSystem {
        let mut system = CollisionSystem::new();
        system.insert_sphere(SphereBB::new(Vec3::new(3.0, 0.0, 0.0), 1.0));
        system.insert_box(AABB::from_center_half_extents(Vec3::zeros(), Vec3::new(1.0, 2.0, 3.0)));
        system
    }

    #[test]
    fn test_draws_every_stored_volume() {
        let mut viz = CollisionDebugVisualizer::new();
        viz.draw_system(&populated_system());

        let shapes: Vec<_> = viz.shapes().collect();
        assert_eq!(shapes.len(), 2);
        assert!(shapes.iter().any(|shape| matches!(
            shape,
            DebugShape::Box { half_extents, .. } if *half_extents == Vec3::new(1.0, 2.0, 3.0)
        )));

        // Single-frame shapes expire on the next update
        viz.update(1.0 / 60.0);
        assert_eq!(viz.shapes().count(), 0);
    }

    #[test]
    fn test_config_filters_volume_kinds() {
        let mut viz = CollisionDebugVisualizer::with_config(DebugDrawConfig {
            show_boxes: false,
            show_normals: false,
            ..DebugDrawConfig::default()
        });
        viz.draw_system(&populated_system());
        viz.draw_normal(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0));

        let shapes: Vec<_> = viz.shapes().collect();
        assert_eq!(shapes.len(), 1);
        assert!(matches!(shapes[0], DebugShape::Sphere { .. }));
    }

    #[test]
    fn test_probe_color_tracks_hit_state() {
        let colors = CollisionDebugColors::default();
        let mut viz = CollisionDebugVisualizer::new();
        let probe = SphereBB::new(Vec3::zeros(), 0.5);

        viz.draw_probe(&probe, false);
        viz.draw_probe(&probe, true);
        let shapes: Vec<_> = viz.shapes().collect();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].color(), colors.probe_colliding);

        viz.update(10.0);
        assert_eq!(viz.shapes().count(), 1);
        viz.clear_probe();
        assert_eq!(viz.shapes().count(), 0);
    }

    #[test]
    fn test_planar_normal_lies_in_ground_plane() {
        let mut viz = CollisionDebugVisualizer::new();
        viz.draw_normal_2d(Vec3::new(0.0, 2.0, 0.0), Vec2::new(0.5, -0.25));

        let first = viz.shapes().next().cloned();
        match first {
            Some(DebugShape::Line { start, end, .. }) => {
                assert_eq!(start, Vec3::new(0.0, 2.0, 0.0));
                assert_eq!(end, Vec3::new(0.5, 2.0, -0.25));
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn test_disabled_visualizer_is_silent() {
        let mut viz = CollisionDebugVisualizer::with_config(DebugDrawConfig {
            enabled: false,
            ..DebugDrawConfig::default()
        });
        assert!(!viz.is_enabled());
        viz.draw_system(&populated_system());
        viz.draw_probe(&SphereBB::new(Vec3::zeros(), 1.0), true);
        assert_eq!(viz.shapes().count(), 0);

        viz.set_enabled(true);
        viz.draw_system(&populated_system());
        assert_eq!(viz.shapes().count(), 2);
    }
}
