//! Core collision detection system
//!
//! Stores flat lists of bounding spheres and boxes and answers "does this
//! probe sphere touch anything?" queries. There is no broad phase: every query
//! scans all stored volumes, spheres first, then boxes, and returns the first
//! hit in that order. When several volumes overlap the probe, that traversal
//! order is the tie-break.
//!
//! Volumes are stored by value and cannot be removed individually. The
//! intended frame loop is `clear()`, re-insert every volume at its current
//! position, then query.

use super::aabb::AABB;
use super::narrow_phase;
use super::sphere::SphereBB;
use crate::core::config::{BoxOverlapPolicy, CollisionConfig};
use crate::foundation::math::{Vec2, Vec3};

/// Identifies a stored volume by kind and insertion index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeRef {
    /// Index into [`CollisionSystem::spheres`]
    Sphere(usize),
    /// Index into [`CollisionSystem::boxes`]
    Box(usize),
}

/// First hit reported by a probe query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionHit<N> {
    /// Raw separation vector, not normalized
    ///
    /// Against a stored sphere: `probe center - stored center`.
    /// Against a stored box: `probe center - closest point on the box`.
    pub normal: N,
    /// The stored volume that was hit
    pub volume: VolumeRef,
}

/// Flat-list collision system
#[derive(Debug, Clone, Default)]
pub struct CollisionSystem {
    sphere_volumes: Vec<SphereBB>,
    box_volumes: Vec<AABB>,
    config: CollisionConfig,
}

impl CollisionSystem {
    /// Create an empty system with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty system with the given configuration
    pub fn with_config(config: CollisionConfig) -> Self {
        Self {
            sphere_volumes: Vec::new(),
            box_volumes: Vec::new(),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Replace the configuration; stored volumes are kept
    pub fn set_config(&mut self, config: CollisionConfig) {
        self.config = config;
    }

    /// Append a sphere
    pub fn insert_sphere(&mut self, sphere: SphereBB) {
        if self.config.validate_on_insert {
            if let Err(err) = sphere.validate() {
                log::warn!("Inserting degenerate sphere {:?}: {}", sphere, err);
            }
        }
        self.sphere_volumes.push(sphere);
    }

    /// Append a box
    pub fn insert_box(&mut self, aabb: AABB) {
        if self.config.validate_on_insert {
            if let Err(err) = aabb.validate() {
                log::warn!("Inserting degenerate box {:?}: {}", aabb, err);
            }
        }
        self.box_volumes.push(aabb);
    }

    /// Append several boxes, preserving their order
    pub fn insert_boxes(&mut self, boxes: impl IntoIterator<Item = AABB>) {
        let boxes = boxes.into_iter();
        self.box_volumes.reserve(boxes.size_hint().0);
        for aabb in boxes {
            self.insert_box(aabb);
        }
    }

    /// Remove every stored volume
    pub fn clear(&mut self) {
        log::debug!(
            "Clearing collision system ({} spheres, {} boxes)",
            self.sphere_volumes.len(),
            self.box_volumes.len()
        );
        self.sphere_volumes.clear();
        self.box_volumes.clear();
    }

    /// Stored spheres in insertion order
    pub fn spheres(&self) -> &[SphereBB] {
        &self.sphere_volumes
    }

    /// Stored boxes in insertion order
    pub fn boxes(&self) -> &[AABB] {
        &self.box_volumes
    }

    /// Total number of stored volumes
    pub fn len(&self) -> usize {
        self.sphere_volumes.len() + self.box_volumes.len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.sphere_volumes.is_empty() && self.box_volumes.is_empty()
    }

    /// Probe against every stored volume in the X-Z plane
    ///
    /// Returns the separation normal of the first hit, or `None`.
    pub fn check_collision_2d(&self, probe: &SphereBB) -> Option<Vec2> {
        self.query_2d(probe).map(|hit| hit.normal)
    }

    /// Probe against every stored volume in 3D
    ///
    /// Returns the separation normal of the first hit, or `None`.
    pub fn check_collision_3d(&self, probe: &SphereBB) -> Option<Vec3> {
        self.query_3d(probe).map(|hit| hit.normal)
    }

    /// Like [`check_collision_2d`](Self::check_collision_2d), also reporting which volume was hit
    pub fn query_2d(&self, probe: &SphereBB) -> Option<CollisionHit<Vec2>> {
        let hit = self
            .sphere_volumes
            .iter()
            .enumerate()
            .find_map(|(index, stored)| {
                narrow_phase::sphere_sphere_2d(stored, probe)
                    .map(|normal| CollisionHit { normal, volume: VolumeRef::Sphere(index) })
            })
            .or_else(|| {
                self.box_volumes.iter().enumerate().find_map(|(index, stored)| {
                    narrow_phase::box_sphere_2d(stored, probe)
                        .map(|normal| CollisionHit { normal, volume: VolumeRef::Box(index) })
                })
            });

        if self.config.trace_hits {
            if let Some(hit) = &hit {
                log::trace!("2D hit {:?} normal=({}, {})", hit.volume, hit.normal.x, hit.normal.y);
            }
        }
        hit
    }

    /// Like [`check_collision_3d`](Self::check_collision_3d), also reporting which volume was hit
    pub fn query_3d(&self, probe: &SphereBB) -> Option<CollisionHit<Vec3>> {
        let hit = self
            .sphere_volumes
            .iter()
            .enumerate()
            .find_map(|(index, stored)| {
                narrow_phase::sphere_sphere_3d(stored, probe)
                    .map(|normal| CollisionHit { normal, volume: VolumeRef::Sphere(index) })
            })
            .or_else(|| {
                self.box_volumes.iter().enumerate().find_map(|(index, stored)| {
                    narrow_phase::sphere_box_3d(probe, stored)
                        .map(|normal| CollisionHit { normal, volume: VolumeRef::Box(index) })
                })
            });

        if self.config.trace_hits {
            if let Some(hit) = &hit {
                log::trace!(
                    "3D hit {:?} normal=({}, {}, {})",
                    hit.volume,
                    hit.normal.x,
                    hit.normal.y,
                    hit.normal.z
                );
            }
        }
        hit
    }

    /// Probe box against every stored volume in the X-Z plane
    ///
    /// Spheres are tested with the box/sphere test, boxes with the overlap
    /// test selected by [`CollisionConfig::box_overlap`]. Returns the first
    /// volume hit.
    pub fn check_box_overlap_2d(&self, probe: &AABB) -> Option<VolumeRef> {
        let box_test: fn(&AABB, &AABB) -> bool = match self.config.box_overlap {
            BoxOverlapPolicy::FullDimension => narrow_phase::box_box_2d,
            BoxOverlapPolicy::HalfExtents => narrow_phase::box_box_2d_half_extents,
        };

        self.sphere_volumes
            .iter()
            .position(|stored| narrow_phase::box_sphere_2d(probe, stored).is_some())
            .map(VolumeRef::Sphere)
            .or_else(|| {
                self.box_volumes
                    .iter()
                    .position(|stored| box_test(probe, stored))
                    .map(VolumeRef::Box)
            })
    }

    /// Index of the first stored box containing `point`, boundary inclusive
    pub fn contains_point_3d(&self, point: &Vec3) -> Option<usize> {
        self.box_volumes
            .iter()
            .position(|stored| narrow_phase::point_in_box_3d(point, stored))
    }
}

impl Extend<SphereBB> for CollisionSystem {
    fn extend<I: IntoIterator<Item = SphereBB>>(&mut self, iter: I) {
        for sphere in iter {
            self.insert_sphere(sphere);
        }
    }
}

impl Extend<AABB> for CollisionSystem {
    fn extend<I: IntoIterator<Item = AABB>>(&mut self, iter: I) {
        self.insert_boxes(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::BoundingVolume;
    use approx::assert_relative_eq;

    fn unit_box_at(center: Vec3) -> AABB {
        AABB::from_center_half_extents(center, Vec3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_empty_system_never_hits() {
        let system = CollisionSystem::new();
        let probe = SphereBB::new(Vec3::zeros(), 100.0);
        assert!(system.is_empty());
        assert_eq!(system.check_collision_2d(&probe), None);
        assert_eq!(system.check_collision_3d(&probe), None);
        assert_eq!(system.contains_point_3d(&Vec3::zeros()), None);
    }

    #[test]
    fn test_sphere_hit_normal_points_at_probe() {
        let mut system = CollisionSystem::new();
        system.insert_sphere(SphereBB::new(Vec3::new(1.5, 0.0, 0.0), 1.0));

        let probe = SphereBB::new(Vec3::zeros(), 1.0);
        let hit = system.query_3d(&probe).expect("spheres 1.5 apart with radius sum 2 should hit");
        assert_eq!(hit.volume, VolumeRef::Sphere(0));
        assert_relative_eq!(hit.normal, Vec3::new(-1.5, 0.0, 0.0));

        let normal = system.check_collision_2d(&probe).unwrap();
        assert_relative_eq!(normal, Vec2::new(-1.5, 0.0));
    }

    #[test]
    fn test_box_hit_normal_points_out_of_box() {
        let mut system = CollisionSystem::new();
        system.insert_box(unit_box_at(Vec3::zeros()));

        let probe = SphereBB::new(Vec3::new(0.0, 0.0, 1.5), 1.0);
        let hit = system.query_3d(&probe).unwrap();
        assert_eq!(hit.volume, VolumeRef::Box(0));
        assert_relative_eq!(hit.normal, Vec3::new(0.0, 0.0, 0.5));

        let hit = system.query_2d(&probe).unwrap();
        assert_eq!(hit.volume, VolumeRef::Box(0));
        assert_relative_eq!(hit.normal, Vec2::new(0.0, 0.5));
    }

    #[test]
    fn test_spheres_scanned_before_boxes() {
        let mut system = CollisionSystem::new();
        // Inserted box first; the sphere still wins
        system.insert_box(unit_box_at(Vec3::zeros()));
        system.insert_sphere(SphereBB::new(Vec3::new(0.5, 0.0, 0.0), 0.5));

        let probe = SphereBB::new(Vec3::zeros(), 1.0);
        assert_eq!(system.query_3d(&probe).unwrap().volume, VolumeRef::Sphere(0));
        assert_eq!(system.query_2d(&probe).unwrap().volume, VolumeRef::Sphere(0));
    }

    #[test]
    fn test_first_hit_in_insertion_order_wins() {
        let mut system = CollisionSystem::new();
        system.insert_sphere(SphereBB::new(Vec3::new(50.0, 0.0, 0.0), 1.0));
        // Farther overlapping sphere inserted before the nearer one
        system.insert_sphere(SphereBB::new(Vec3::new(1.8, 0.0, 0.0), 1.0));
        system.insert_sphere(SphereBB::new(Vec3::new(0.2, 0.0, 0.0), 1.0));

        let probe = SphereBB::new(Vec3::zeros(), 1.0);
        let hit = system.query_3d(&probe).unwrap();
        assert_eq!(hit.volume, VolumeRef::Sphere(1));
        assert_relative_eq!(hit.normal, Vec3::new(-1.8, 0.0, 0.0));
    }

    #[test]
    fn test_2d_query_ignores_height_3d_does_not() {
        let mut system = CollisionSystem::new();
        system.insert_sphere(SphereBB::new(Vec3::new(0.0, 10.0, 0.0), 1.0));

        let probe = SphereBB::new(Vec3::zeros(), 1.0);
        assert!(system.check_collision_2d(&probe).is_some());
        assert!(system.check_collision_3d(&probe).is_none());
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut system = CollisionSystem::new();
        system.insert_sphere(SphereBB::new(Vec3::zeros(), 1.0));
        system.insert_boxes(vec![unit_box_at(Vec3::zeros()), unit_box_at(Vec3::new(3.0, 0.0, 0.0))]);
        assert_eq!(system.len(), 3);

        system.clear();
        assert!(system.is_empty());

        let probe = SphereBB::new(Vec3::zeros(), 1.0);
        assert_eq!(system.check_collision_2d(&probe), None);
        assert_eq!(system.check_collision_3d(&probe), None);
    }

    #[test]
    fn test_insert_boxes_and_extend_preserve_order() {
        let mut system = CollisionSystem::new();
        let boxes: Vec<AABB> = (0..4).map(|i| unit_box_at(Vec3::new(i as f32 * 10.0, 0.0, 0.0))).collect();
        system.insert_boxes(boxes.clone());
        system.extend([SphereBB::new(Vec3::zeros(), 1.0)]);
        system.extend(boxes.iter().copied().rev());

        assert_eq!(system.spheres().len(), 1);
        assert_eq!(&system.boxes()[..4], boxes.as_slice());
        assert_eq!(system.boxes()[4], boxes[3]);
        assert_eq!(system.len(), 9);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut system = CollisionSystem::new();
        let sphere = SphereBB::new(Vec3::zeros(), 1.0);
        system.insert_sphere(sphere);
        system.insert_sphere(sphere);
        assert_eq!(system.spheres(), &[sphere, sphere]);
    }

    #[test]
    fn test_stored_volumes_are_copies() {
        let mut system = CollisionSystem::new();
        let mut sphere = SphereBB::new(Vec3::new(1.5, 0.0, 0.0), 1.0);
        system.insert_sphere(sphere);

        // Moving the caller's copy does not move the stored one
        sphere.set_position(Vec3::new(100.0, 0.0, 0.0));
        let probe = SphereBB::new(Vec3::zeros(), 1.0);
        assert!(system.check_collision_3d(&probe).is_some());
    }

    #[test]
    fn test_box_overlap_respects_policy() {
        let big = AABB::from_center_half_extents(Vec3::zeros(), Vec3::new(5.0, 1.0, 5.0));
        let probe = AABB::from_center_half_extents(Vec3::new(-7.0, 0.0, 0.0), Vec3::new(0.1, 0.1, 0.1));

        let mut system = CollisionSystem::new();
        system.insert_box(big);
        // Probe sits behind big on X; its own dimension falls short of big's center
        assert_eq!(system.check_box_overlap_2d(&probe), None);

        let ahead = AABB::from_center_half_extents(Vec3::new(3.0, 0.0, 0.0), Vec3::new(2.0, 0.1, 0.1));
        assert_eq!(system.check_box_overlap_2d(&ahead), Some(VolumeRef::Box(0)));

        let far = AABB::from_center_half_extents(Vec3::new(9.0, 0.0, 0.0), Vec3::new(0.5, 0.5, 0.5));
        // r0 = far (dim 1): 9 + 1 >= 0, r1 = big (dim 10): 0 + 10 >= 9
        assert_eq!(system.check_box_overlap_2d(&far), Some(VolumeRef::Box(0)));

        system.set_config(CollisionConfig {
            box_overlap: BoxOverlapPolicy::HalfExtents,
            ..CollisionConfig::default()
        });
        assert_eq!(system.check_box_overlap_2d(&far), None);
        assert_eq!(system.check_box_overlap_2d(&ahead), Some(VolumeRef::Box(0)));
    }

    #[test]
    fn test_box_overlap_checks_spheres_first() {
        let mut system = CollisionSystem::new();
        system.insert_box(unit_box_at(Vec3::zeros()));
        system.insert_sphere(SphereBB::new(Vec3::new(0.0, 0.0, 1.5), 1.0));

        let probe = unit_box_at(Vec3::zeros());
        assert_eq!(system.check_box_overlap_2d(&probe), Some(VolumeRef::Sphere(0)));
    }

    #[test]
    fn test_contains_point_3d() {
        let mut system = CollisionSystem::new();
        system.insert_boxes([unit_box_at(Vec3::new(10.0, 0.0, 0.0)), unit_box_at(Vec3::zeros())]);

        assert_eq!(system.contains_point_3d(&Vec3::new(0.5, 0.5, 0.5)), Some(1));
        assert_eq!(system.contains_point_3d(&Vec3::new(11.0, 1.0, -1.0)), Some(0));
        assert_eq!(system.contains_point_3d(&Vec3::new(5.0, 0.0, 0.0)), None);
    }

    #[test]
    fn test_degenerate_volumes_are_inserted() {
        let mut system = CollisionSystem::with_config(CollisionConfig {
            validate_on_insert: true,
            ..CollisionConfig::default()
        });
        system.insert_sphere(SphereBB::new(Vec3::zeros(), -1.0));
        system.insert_box(AABB::new(Vec3::zeros(), Vec3::zeros(), Vec3::zeros()));
        assert_eq!(system.len(), 2);

        // Negative radius never reaches another sphere
        let probe = SphereBB::new(Vec3::new(0.5, 0.0, 0.0), 1.0);
        assert_eq!(system.query_3d(&probe).map(|hit| hit.volume), Some(VolumeRef::Box(0)));
    }
}
