//! Debug drawing primitives and system
//!
//! Collects simple shapes (lines, points, spheres, boxes) for a renderer to
//! draw as overlays. Temporary shapes expire after their duration; persistent
//! shapes stay until removed by key.

use crate::foundation::math::{Vec3, Vec4};
use std::collections::HashMap;

/// Unique identifier for persistent debug shapes
pub type DebugShapeId = String;

/// Debug shape primitives that can be rendered for visualization
#[derive(Clone, Debug, PartialEq)]
pub enum DebugShape {
    /// Line segment from start to end
    Line {
        /// Segment start
        start: Vec3,
        /// Segment end
        end: Vec3,
        /// RGBA color
        color: Vec4,
        /// Remaining lifetime in seconds
        duration: f32,
    },

    /// Sphere at center with radius
    Sphere {
        /// World-space center
        center: Vec3,
        /// Radius
        radius: f32,
        /// RGBA color
        color: Vec4,
        /// Remaining lifetime in seconds
        duration: f32,
    },

    /// Axis-aligned box at center with half-extents
    Box {
        /// World-space center
        center: Vec3,
        /// Half size along each axis
        half_extents: Vec3,
        /// RGBA color
        color: Vec4,
        /// Remaining lifetime in seconds
        duration: f32,
    },

    /// Point at position
    Point {
        /// World-space position
        position: Vec3,
        /// RGBA color
        color: Vec4,
        /// Screen size hint
        size: f32,
        /// Remaining lifetime in seconds
        duration: f32,
    },
}

impl DebugShape {
    fn duration_mut(&mut self) -> &mut f32 {
        match self {
            Self::Line { duration, .. }
            | Self::Sphere { duration, .. }
            | Self::Box { duration, .. }
            | Self::Point { duration, .. } => duration,
        }
    }

    /// Get remaining duration
    pub fn duration(&self) -> f32 {
        match self {
            Self::Line { duration, .. }
            | Self::Sphere { duration, .. }
            | Self::Box { duration, .. }
            | Self::Point { duration, .. } => *duration,
        }
    }

    /// Set duration (returns modified shape)
    pub fn with_duration(mut self, new_duration: f32) -> Self {
        *self.duration_mut() = new_duration;
        self
    }

    /// Decrease duration by `delta_time`, returns true if expired
    pub fn tick(&mut self, delta_time: f32) -> bool {
        let duration = self.duration_mut();
        *duration -= delta_time;
        *duration <= 0.0
    }

    /// RGBA color of the shape
    pub fn color(&self) -> Vec4 {
        match self {
            Self::Line { color, .. }
            | Self::Sphere { color, .. }
            | Self::Box { color, .. }
            | Self::Point { color, .. } => *color,
        }
    }
}

/// Debug drawing system for collecting debug shapes
#[derive(Debug)]
pub struct DebugDrawSystem {
    /// Temporary shapes that expire after their duration
    temporary_shapes: Vec<DebugShape>,

    /// Persistent shapes that remain until manually removed
    persistent_shapes: HashMap<DebugShapeId, DebugShape>,

    /// Master enable/disable flag
    pub enabled: bool,
}

impl DebugDrawSystem {
    /// Create a new debug draw system
    pub fn new() -> Self {
        Self {
            temporary_shapes: Vec::new(),
            persistent_shapes: HashMap::new(),
            enabled: true,
        }
    }

    fn push(&mut self, shape: DebugShape) {
        if self.enabled {
            self.temporary_shapes.push(shape);
        }
    }

    /// Draw a line segment (temporary)
    pub fn draw_line(&mut self, start: Vec3, end: Vec3, color: Vec4, duration: f32) {
        self.push(DebugShape::Line { start, end, color, duration });
    }

    /// Draw a sphere (temporary)
    pub fn draw_sphere(&mut self, center: Vec3, radius: f32, color: Vec4, duration: f32) {
        self.push(DebugShape::Sphere { center, radius, color, duration });
    }

    /// Draw an axis-aligned box (temporary)
    pub fn draw_box(&mut self, center: Vec3, half_extents: Vec3, color: Vec4, duration: f32) {
        self.push(DebugShape::Box { center, half_extents, color, duration });
    }

    /// Draw a point (temporary)
    pub fn draw_point(&mut self, position: Vec3, color: Vec4, size: f32, duration: f32) {
        self.push(DebugShape::Point { position, color, size, duration });
    }

    /// Draw a persistent shape that remains until explicitly removed
    pub fn draw_persistent(&mut self, id: impl Into<DebugShapeId>, shape: DebugShape) {
        if !self.enabled {
            return;
        }

        self.persistent_shapes.insert(id.into(), shape);
    }

    /// Remove a persistent shape
    pub fn clear_persistent(&mut self, id: &str) {
        self.persistent_shapes.remove(id);
    }

    /// Update shape lifetimes and remove expired temporary shapes
    ///
    /// Shapes drawn with a zero duration survive until the next update.
    pub fn update(&mut self, delta_time: f32) {
        if !self.enabled {
            return;
        }

        self.temporary_shapes.retain_mut(|shape| !shape.tick(delta_time));
    }

    /// Iterate over all shapes for rendering (both temporary and persistent)
    pub fn shapes(&self) -> impl Iterator<Item = &DebugShape> {
        self.temporary_shapes
            .iter()
            .chain(self.persistent_shapes.values())
            .filter(move |_| self.enabled)
    }

    /// Get the number of active shapes
    pub fn shape_count(&self) -> usize {
        self.temporary_shapes.len() + self.persistent_shapes.len()
    }

    /// Clear all shapes (temporary and persistent)
    pub fn clear(&mut self) {
        self.temporary_shapes.clear();
        self.persistent_shapes.clear();
    }
}

impl Default for DebugDrawSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Vec4 {
        Vec4::new(1.0, 0.0, 0.0, 1.0)
    }

    #[test]
    fn test_temporary_shape_expiration() {
        let mut system = DebugDrawSystem::new();

        system.draw_box(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0), red(), 1.0);
        assert_eq!(system.shape_count(), 1);

        system.update(0.5);
        assert_eq!(system.shape_count(), 1);

        // Total 1.1 seconds
        system.update(0.6);
        assert_eq!(system.shape_count(), 0);
    }

    #[test]
    fn test_persistent_shapes() {
        let mut system = DebugDrawSystem::new();

        system.draw_persistent(
            "probe",
            DebugShape::Sphere {
                center: Vec3::zeros(),
                radius: 1.0,
                color: red(),
                duration: f32::INFINITY,
            },
        );
        assert_eq!(system.shape_count(), 1);

        for _ in 0..100 {
            system.update(1.0);
        }
        assert_eq!(system.shapes().count(), 1);

        system.clear_persistent("probe");
        assert_eq!(system.shape_count(), 0);
    }

    #[test]
    fn test_disabled_system_records_nothing() {
        let mut system = DebugDrawSystem::new();
        system.draw_point(Vec3::zeros(), red(), 4.0, 1.0);
        system.enabled = false;

        system.draw_line(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0), red(), 1.0);
        assert_eq!(system.shape_count(), 1);
        assert_eq!(system.shapes().count(), 0);
    }

    #[test]
    fn test_with_duration() {
        let shape = DebugShape::Point { position: Vec3::zeros(), color: red(), size: 1.0, duration: 0.0 }
            .with_duration(2.5);
        assert_eq!(shape.duration(), 2.5);
        assert_eq!(shape.color(), red());
    }
}
