//! Probe Collision Demo
//!
//! Headless frame loop exercising the collision core the way a game loop
//! would:
//! - Obstacles scattered from a seeded RNG, bobbing up and down
//! - Collision system cleared and rebuilt every frame
//! - A probe sphere circling the scene, pushed back out along the hit normal
//! - Debug shapes collected each frame for an overlay renderer
//!
//! Usage: `probe_demo [settings.toml|settings.ron] [scene.ron]`

mod scene;

use collision_core::config::{Config, ConfigError};
use collision_core::core::config::CollisionSettings;
use collision_core::debug::CollisionDebugVisualizer;
use collision_core::foundation::logging;
use collision_core::foundation::math::Vec3;
use collision_core::foundation::time::Stopwatch;
use collision_core::physics::{BoundingVolume, CollisionSystem, SphereBB, VolumeRef};
use scene::{Obstacle, ObstacleShape, QueryMode, SceneDesc, SceneError};

const DEFAULT_SETTINGS_PATH: &str = "probe_demo/settings.toml";
const DEFAULT_SCENE_PATH: &str = "probe_demo/scene.ron";

// Fixed simulation step
const FRAME_DT: f32 = 1.0 / 60.0;
// Frames between progress reports
const REPORT_INTERVAL: u32 = 120;

/// Demo errors
#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid scene: {0}")]
    Scene(#[from] SceneError),
}

/// Running totals across the simulation
#[derive(Debug, Default)]
struct FrameStats {
    frames: u32,
    hits: u32,
    query_micros: f32,
    worst_query_micros: f32,
}

impl FrameStats {
    fn record(&mut self, hit: bool, micros: f32) {
        self.frames += 1;
        if hit {
            self.hits += 1;
        }
        self.query_micros += micros;
        self.worst_query_micros = self.worst_query_micros.max(micros);
    }

    fn average_micros(&self) -> f32 {
        if self.frames == 0 {
            0.0
        } else {
            self.query_micros / self.frames as f32
        }
    }
}

struct ProbeDemo {
    scene: SceneDesc,
    obstacles: Vec<Obstacle>,
    collision_system: CollisionSystem,
    visualizer: CollisionDebugVisualizer,
    probe: SphereBB,
    heading: f32,
    time: f32,
    stats: FrameStats,
}

impl ProbeDemo {
    fn new(settings: CollisionSettings, scene: SceneDesc) -> Self {
        let obstacles = scene.scatter();
        let start = Vec3::new(scene.extent * 0.5, 0.0, 0.0);
        log::info!(
            "Scattered {} obstacles ({} spheres, {} boxes), query mode {:?}",
            obstacles.len(),
            scene.sphere_count,
            scene.box_count,
            scene.mode
        );

        Self {
            probe: SphereBB::new(start, scene.probe_radius),
            scene,
            obstacles,
            collision_system: CollisionSystem::with_config(settings.collision),
            visualizer: CollisionDebugVisualizer::with_config(settings.debug),
            heading: 0.0,
            time: 0.0,
            stats: FrameStats::default(),
        }
    }

    fn rebuild_collision_system(&mut self) {
        self.collision_system.clear();
        for (i, obstacle) in self.obstacles.iter_mut().enumerate() {
            obstacle.animate(self.time, i as f32 * 0.37);
            match obstacle.shape {
                ObstacleShape::Sphere(sphere) => self.collision_system.insert_sphere(sphere),
                ObstacleShape::Box(aabb) => self.collision_system.insert_box(aabb),
            }
        }
    }

    fn move_probe(&mut self, dt: f32) {
        // Steer towards a point on a circle around the origin
        let orbit = self.scene.extent * 0.5;
        self.heading += dt * self.scene.probe_speed / orbit;
        let target = Vec3::new(orbit * self.heading.cos(), 0.0, orbit * self.heading.sin());

        let to_target = target - self.probe.position();
        let step = self.scene.probe_speed * dt;
        if to_target.norm() > step {
            self.probe.translate(to_target.normalize() * step);
        } else {
            self.probe.set_position(target);
        }
    }

    /// Query, then push the probe out along the separation normal
    fn resolve_probe(&mut self) -> Option<Vec3> {
        let (normal, volume) = match self.scene.mode {
            QueryMode::Planar => self
                .collision_system
                .query_2d(&self.probe)
                .map(|hit| (Vec3::new(hit.normal.x, 0.0, hit.normal.y), hit.volume)),
            QueryMode::Spatial => self.collision_system.query_3d(&self.probe).map(|hit| (hit.normal, hit.volume)),
        }?;

        // Sphere normals run center to center, box normals from the closest surface point
        let touching = match volume {
            VolumeRef::Sphere(index) => {
                let stored = self.collision_system.spheres().get(index).map_or(0.0, SphereBB::radius);
                self.probe.radius() + stored
            }
            VolumeRef::Box(_) => self.probe.radius(),
        };

        let distance = normal.norm();
        if distance > f32::EPSILON {
            self.probe.translate(normal / distance * (touching - distance));
        } else {
            log::debug!("Probe center on {:?} at {:?}, not resolving", volume, self.probe.position());
        }
        Some(normal)
    }

    fn step(&mut self, dt: f32) {
        self.time += dt;
        self.rebuild_collision_system();
        self.move_probe(dt);

        let origin = self.probe.position();
        let stopwatch = Stopwatch::start_new();
        let normal = self.resolve_probe();
        let micros = stopwatch.elapsed_micros();

        self.visualizer.update(dt);
        self.visualizer.draw_system(&self.collision_system);
        self.visualizer.draw_probe(&self.probe, normal.is_some());
        if let Some(normal) = normal {
            self.visualizer.draw_normal(origin, normal);
            log::trace!("Frame {}: hit, normal {:?}", self.stats.frames, normal);
        }

        self.stats.record(normal.is_some(), micros);
        if self.stats.frames % REPORT_INTERVAL == 0 {
            log::info!(
                "Frame {}: probe at ({:.2}, {:.2}), {} hits so far, {} debug shapes",
                self.stats.frames,
                self.probe.position().x,
                self.probe.position().z,
                self.stats.hits,
                self.visualizer.shapes().count()
            );
        }
    }

    fn run(&mut self) {
        for _ in 0..self.scene.frames {
            self.step(FRAME_DT);
        }

        log::info!(
            "Done: {} frames, {} hits, query avg {:.2}us, worst {:.2}us",
            self.stats.frames,
            self.stats.hits,
            self.stats.average_micros(),
            self.stats.worst_query_micros
        );
    }
}

fn main() -> Result<(), DemoError> {
    logging::init_with_default("info");

    let mut args = std::env::args().skip(1);
    let settings_path = args.next().unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    let scene_path = args.next().unwrap_or_else(|| DEFAULT_SCENE_PATH.to_string());

    let settings = CollisionSettings::load_or_default(&settings_path)?;
    let scene = SceneDesc::load_or_default(&scene_path)?;
    scene.check()?;
    log::info!("Settings: {:?}", settings);

    ProbeDemo::new(settings, scene).run();
    Ok(())
}
