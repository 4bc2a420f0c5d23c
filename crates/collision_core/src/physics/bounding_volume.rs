//! Shared contract for position-anchored bounding volumes

use crate::foundation::math::Vec3;

/// A bounding volume anchored at a world-space position
///
/// The owning object writes its world position here as it moves; everything
/// else about the volume is expressed relative to that anchor.
pub trait BoundingVolume {
    /// World-space anchor position
    fn position(&self) -> Vec3;

    /// Replace the anchor position
    fn set_position(&mut self, position: Vec3);

    /// Geometric center in world space
    fn center(&self) -> Vec3;

    /// Move the anchor by `delta`
    fn translate(&mut self, delta: Vec3) {
        let position = self.position();
        self.set_position(position + delta);
    }
}
