use glam::Vec3;
use crate::api::game::{AsteroidConfig, SpawnConfig};
use crate::api::types::EntityId;
use crate::components::asteroid::{Asteroid, AsteroidShape};
use crate::core::rng::Rng;

/// Frame-counter cadence for asteroid drops.
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    frame: u64,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one frame. Returns true when this frame should spawn.
    pub fn tick(&mut self, interval: u32) -> bool {
        self.frame += 1;
        self.frame % interval as u64 == 0
    }

    /// Frames counted so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

/// Roll a fresh asteroid above the play area.
pub fn roll_asteroid(
    id: EntityId,
    rng: &mut Rng,
    spawn: &SpawnConfig,
    asteroids: &AsteroidConfig,
) -> Asteroid {
    let shape = AsteroidShape::generate(rng, asteroids);
    let position = Vec3::new(
        rng.centered(spawn.half_width),
        spawn.height,
        rng.centered(spawn.half_depth),
    );
    let spin = Vec3::new(
        rng.centered(asteroids.max_spin),
        rng.centered(asteroids.max_spin),
        rng.centered(asteroids.max_spin),
    );
    Asteroid::new(id, position, spin, shape)
}
