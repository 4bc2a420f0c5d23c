//! Scene description for the probe demo

use collision_core::config::Config;
use collision_core::foundation::math::Vec3;
use collision_core::physics::{BoundingVolume, SphereBB, AABB};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

// Smallest radius / half-extent the scatter produces
const MIN_OBSTACLE_SIZE: f32 = 0.5;

/// Scene layouts rejected before the demo starts
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum SceneError {
    /// Placement area has no size
    #[error("extent must be positive, got {0}")]
    Extent(f32),

    /// Upper bound does not exceed the smallest obstacle size
    #[error("max_obstacle_size must exceed 0.5, got {0}")]
    ObstacleSize(f32),

    /// Probe has no size
    #[error("probe_radius must be positive, got {0}")]
    ProbeRadius(f32),
}

/// Which query family the probe uses each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QueryMode {
    /// Ground-plane test (X-Z projection)
    #[default]
    Planar,
    /// Full 3D test
    Spatial,
}

/// Obstacle layout and probe path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDesc {
    /// RNG seed for obstacle placement
    pub seed: u64,
    /// Number of sphere obstacles
    pub sphere_count: usize,
    /// Number of box obstacles
    pub box_count: usize,
    /// Obstacles are placed in `[-extent, extent]` on X and Z
    pub extent: f32,
    /// Largest obstacle radius / half-extent
    pub max_obstacle_size: f32,
    /// Probe radius
    pub probe_radius: f32,
    /// Probe speed in units per second
    pub probe_speed: f32,
    /// Simulated frames
    pub frames: u32,
    /// Query family
    pub mode: QueryMode,
}

impl Default for SceneDesc {
    fn default() -> Self {
        Self {
            seed: 7,
            sphere_count: 24,
            box_count: 24,
            extent: 40.0,
            max_obstacle_size: 3.0,
            probe_radius: 1.0,
            probe_speed: 12.0,
            frames: 600,
            mode: QueryMode::Planar,
        }
    }
}

impl Config for SceneDesc {}

impl SceneDesc {
    /// Reject layouts the scatter cannot produce
    pub fn check(&self) -> Result<(), SceneError> {
        if self.extent.is_nan() || self.extent <= 0.0 {
            return Err(SceneError::Extent(self.extent));
        }
        if self.max_obstacle_size.is_nan() || self.max_obstacle_size <= MIN_OBSTACLE_SIZE {
            return Err(SceneError::ObstacleSize(self.max_obstacle_size));
        }
        if self.probe_radius.is_nan() || self.probe_radius <= 0.0 {
            return Err(SceneError::ProbeRadius(self.probe_radius));
        }
        Ok(())
    }

    /// Scatter obstacles deterministically from the seed
    pub fn scatter(&self) -> Vec<Obstacle> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut obstacles = Vec::with_capacity(self.sphere_count + self.box_count);

        for _ in 0..self.sphere_count {
            let position = self.random_ground_point(&mut rng);
            let radius = rng.gen_range(MIN_OBSTACLE_SIZE..self.max_obstacle_size);
            obstacles.push(Obstacle::new(ObstacleShape::Sphere(SphereBB::new(position, radius))));
        }

        for _ in 0..self.box_count {
            let center = self.random_ground_point(&mut rng);
            let half_extents = Vec3::new(
                rng.gen_range(MIN_OBSTACLE_SIZE..self.max_obstacle_size),
                rng.gen_range(MIN_OBSTACLE_SIZE..self.max_obstacle_size),
                rng.gen_range(MIN_OBSTACLE_SIZE..self.max_obstacle_size),
            );
            obstacles.push(Obstacle::new(ObstacleShape::Box(AABB::from_center_half_extents(center, half_extents))));
        }

        obstacles
    }

    fn random_ground_point(&self, rng: &mut StdRng) -> Vec3 {
        Vec3::new(
            rng.gen_range(-self.extent..self.extent),
            0.0,
            rng.gen_range(-self.extent..self.extent),
        )
    }
}

/// Collision volume owned by an obstacle
#[derive(Debug, Clone, Copy)]
pub enum ObstacleShape {
    /// Bounding sphere
    Sphere(SphereBB),
    /// Axis-aligned box
    Box(AABB),
}

/// A scene object that bobs vertically and owns its collision volume
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    /// Collision volume at the current position
    pub shape: ObstacleShape,
    base_height: f32,
}

impl Obstacle {
    fn new(shape: ObstacleShape) -> Self {
        let base_height = match &shape {
            ObstacleShape::Sphere(sphere) => sphere.position().y,
            ObstacleShape::Box(aabb) => aabb.position().y,
        };
        Self { shape, base_height }
    }

    /// Move the obstacle for time `t`; phase spreads the motion
    pub fn animate(&mut self, t: f32, phase: f32) {
        let height = self.base_height + (t + phase).sin() * 0.75;
        match &mut self.shape {
            ObstacleShape::Sphere(sphere) => {
                let p = sphere.position();
                sphere.set_position(Vec3::new(p.x, height, p.z));
            }
            ObstacleShape::Box(aabb) => {
                let p = aabb.position();
                aabb.set_position(Vec3::new(p.x, height, p.z));
            }
        }
    }
}
