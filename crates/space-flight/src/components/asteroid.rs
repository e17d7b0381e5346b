use glam::Vec3;
use serde::Serialize;
use std::f32::consts::PI;

use crate::api::game::AsteroidConfig;
use crate::api::types::EntityId;
use crate::core::collider::{Aabb, BoundingSphere};
use crate::core::rng::Rng;

/// One rock in an asteroid cluster, in the cluster's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fragment {
    /// Offset from the cluster origin.
    pub offset: Vec3,
    /// Nominal radius (before vertex distortion).
    pub radius: f32,
    /// Fixed orientation of the rock within the cluster.
    pub rotation: Vec3,
}

/// Procedural cluster shape. The renderer builds meshes from it; the
/// simulation only needs its bounding radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AsteroidShape {
    /// `fragments[0]` is the main body at the origin.
    pub fragments: Vec<Fragment>,
    /// Per-vertex jitter amplitude the renderer applies.
    pub distortion: f32,
}

impl AsteroidShape {
    /// Roll a new cluster: one main rock plus a handful of smaller ones.
    pub fn generate(rng: &mut Rng, config: &AsteroidConfig) -> Self {
        let span = config
            .max_fragments
            .saturating_sub(config.min_fragments)
            .saturating_add(1);
        let extra = config.min_fragments + rng.next_int(span);

        let mut fragments = Vec::with_capacity(1 + extra as usize);
        fragments.push(Fragment {
            offset: Vec3::ZERO,
            radius: rng.range(config.min_radius, config.max_radius),
            rotation: Vec3::ZERO,
        });

        let half_spread = config.fragment_spread * 0.5;
        for _ in 0..extra {
            let radius = rng.range(config.min_radius, config.max_radius) * config.fragment_scale;
            let offset = Vec3::new(
                rng.centered(half_spread),
                rng.centered(half_spread),
                rng.centered(half_spread),
            );
            let rotation = Vec3::new(rng.range(0.0, PI), rng.range(0.0, PI), rng.range(0.0, PI));
            fragments.push(Fragment { offset, radius, rotation });
        }

        Self {
            fragments,
            distortion: config.distortion,
        }
    }

    /// Local-frame box enclosing every fragment, distortion included.
    pub fn bounds(&self) -> Aabb {
        self.fragments
            .iter()
            .map(|f| Aabb::around_sphere(f.offset, f.radius + self.distortion))
            .reduce(Aabb::union)
            .unwrap_or(Aabb::new(Vec3::ZERO, Vec3::ZERO))
    }

    /// Radius of the sphere circumscribing [`Self::bounds`].
    pub fn bounding_radius(&self) -> f32 {
        self.bounds().bounding_sphere().radius
    }
}

/// A falling, tumbling obstacle.
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub id: EntityId,
    /// Rendered position. `y` mirrors `altitude` after every fall step.
    pub position: Vec3,
    /// Height in f64. The dodge test reads this, so long falls do not
    /// drift a frame late from f32 rounding.
    pub altitude: f64,
    /// Accumulated rotation in radians per axis.
    pub rotation: Vec3,
    /// Rotation added every frame, fixed at spawn.
    pub spin: Vec3,
    /// Collision radius, fixed at spawn.
    pub radius: f32,
    pub shape: AsteroidShape,
}

impl Asteroid {
    /// Build an asteroid whose collision radius comes from its shape.
    pub fn new(id: EntityId, position: Vec3, spin: Vec3, shape: AsteroidShape) -> Self {
        let radius = shape.bounding_radius();
        Self {
            id,
            position,
            altitude: f64::from(position.y),
            rotation: Vec3::ZERO,
            spin,
            radius,
            shape,
        }
    }

    /// Single-rock asteroid with an exact radius. Handy for scripted drops.
    pub fn with_radius(id: EntityId, position: Vec3, radius: f32) -> Self {
        Self {
            id,
            position,
            altitude: f64::from(position.y),
            rotation: Vec3::ZERO,
            spin: Vec3::ZERO,
            radius,
            shape: AsteroidShape {
                fragments: vec![Fragment {
                    offset: Vec3::ZERO,
                    radius,
                    rotation: Vec3::ZERO,
                }],
                distortion: 0.0,
            },
        }
    }

    /// Collision sphere, centered on the current position.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.position, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_shape_has_main_body_and_extras() {
        let config = AsteroidConfig::default();
        let mut rng = Rng::new(42);
        for _ in 0..50 {
            let shape = AsteroidShape::generate(&mut rng, &config);
            let extras = shape.fragments.len() - 1;
            assert!((3..=5).contains(&extras), "extras was {}", extras);
            assert_eq!(shape.fragments[0].offset, Vec3::ZERO);
            let main = shape.fragments[0].radius;
            assert!((0.1..=0.18).contains(&main), "main radius was {}", main);
        }
    }

    #[test]
    fn inverted_fragment_range_does_not_panic() {
        let mut config = AsteroidConfig::default();
        config.min_fragments = 2;
        config.max_fragments = 0;
        let shape = AsteroidShape::generate(&mut Rng::new(8), &config);
        assert_eq!(shape.fragments.len(), 3);
    }

    #[test]
    fn bounding_radius_covers_every_fragment() {
        let config = AsteroidConfig::default();
        let mut rng = Rng::new(3);
        for _ in 0..50 {
            let shape = AsteroidShape::generate(&mut rng, &config);
            let sphere = shape.bounds().bounding_sphere();
            for f in &shape.fragments {
                let reach = sphere.center.distance(f.offset) + f.radius + shape.distortion;
                assert!(reach <= sphere.radius + 1e-5, "fragment pokes out of bounding sphere");
            }
        }
    }

    #[test]
    fn bounding_radius_stays_small() {
        // Largest possible cluster is roughly a 0.47-unit cube.
        let config = AsteroidConfig::default();
        let mut rng = Rng::new(11);
        for _ in 0..200 {
            let r = AsteroidShape::generate(&mut rng, &config).bounding_radius();
            assert!(r > 0.1 && r < 0.45, "radius was {}", r);
        }
    }

    #[test]
    fn sphere_follows_position() {
        let mut asteroid = Asteroid::with_radius(EntityId(1), Vec3::new(0.0, 2.5, 0.0), 0.2);
        asteroid.position.y = 1.0;
        let sphere = asteroid.bounding_sphere();
        assert_eq!(sphere.center, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(sphere.radius, 0.2);
    }
}
