use glam::Vec3;
use crate::api::game::EffectsConfig;
use crate::core::rng::Rng;

/// Fixed pool of engine exhaust points trailing behind the ship.
///
/// Points are never created or destroyed: one that drifts past the trail
/// length is recycled at the nozzle with fresh lateral jitter. Purely
/// cosmetic, gameplay never reads it.
#[derive(Debug, Clone)]
pub struct EngineParticles {
    /// Positions relative to `origin`.
    points: Vec<Vec3>,
    /// World-space emitter position (the nozzle).
    origin: Vec3,
}

impl EngineParticles {
    /// A pool of `count` points, all starting at the emitter.
    pub fn new(count: usize) -> Self {
        Self {
            points: vec![Vec3::ZERO; count],
            origin: Vec3::ZERO,
        }
    }

    /// Advance one frame and re-anchor the emitter behind the ship.
    pub fn tick(&mut self, ship_position: Vec3, config: &EffectsConfig, rng: &mut Rng) {
        let half_spread = config.particle_spread * 0.5;
        for p in &mut self.points {
            p.x -= config.particle_drift;
            if p.x < -config.trail_length {
                p.x = -config.trail_length;
                p.y = rng.centered(half_spread);
                p.z = rng.centered(half_spread);
            }
        }
        self.origin = ship_position + Vec3::new(config.engine_offset, 0.0, 0.0);
    }

    /// Emitter-relative positions.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Emitter-relative positions as flat `[x, y, z, ...]` floats.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// World-space positions.
    pub fn world_points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.points.iter().map(move |p| self.origin + *p)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_size_is_fixed() {
        let config = EffectsConfig::default();
        let mut rng = Rng::new(1);
        let mut pool = EngineParticles::new(config.particle_count);
        for _ in 0..500 {
            pool.tick(Vec3::ZERO, &config, &mut rng);
        }
        assert_eq!(pool.len(), 100);
    }

    #[test]
    fn particles_drift_backwards() {
        let config = EffectsConfig::default();
        let mut rng = Rng::new(1);
        let mut pool = EngineParticles::new(4);
        pool.tick(Vec3::ZERO, &config, &mut rng);
        for p in pool.points() {
            assert!((p.x + 0.01).abs() < 1e-6);
        }
    }

    #[test]
    fn particles_recycle_within_trail() {
        let config = EffectsConfig::default();
        let mut rng = Rng::new(5);
        let mut pool = EngineParticles::new(10);
        for _ in 0..200 {
            pool.tick(Vec3::ZERO, &config, &mut rng);
            for p in pool.points() {
                assert!(p.x >= -config.trail_length - 1e-6, "x was {}", p.x);
                assert!(p.y.abs() <= 0.05 && p.z.abs() <= 0.05);
            }
        }
    }

    #[test]
    fn emitter_sits_behind_ship() {
        let config = EffectsConfig::default();
        let mut rng = Rng::new(1);
        let mut pool = EngineParticles::new(1);
        pool.tick(Vec3::new(1.0, 0.5, 0.0), &config, &mut rng);
        assert!((pool.origin() - Vec3::new(0.7, 0.5, 0.0)).length() < 1e-6);
        let world: Vec<Vec3> = pool.world_points().collect();
        assert!((world[0].x - 0.69).abs() < 1e-5);
    }

    #[test]
    fn flat_view_is_three_floats_per_point() {
        let pool = EngineParticles::new(5);
        assert_eq!(pool.as_floats().len(), 15);
    }
}
