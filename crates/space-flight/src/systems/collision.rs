use crate::components::asteroid::Asteroid;
use crate::components::ship::Ship;
use crate::core::collider::{box_intersects_sphere, BoundingSphere};

/// How one asteroid resolves in the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Touched a ship collider.
    Hit,
    /// Fell past the play area untouched.
    Dodged,
    /// Still in flight.
    Live,
}

/// Whether the sphere touches any of the ship's colliders at the ship's
/// current position. Stops at the first collider that reports contact.
pub fn ship_hit_by(ship: &Ship, sphere: &BoundingSphere) -> bool {
    ship.colliders
        .iter()
        .any(|aabb| box_intersects_sphere(aabb, ship.position, sphere))
}

/// Resolve an already-moved asteroid. A hit takes priority over a dodge.
pub fn classify(asteroid: &Asteroid, ship: &Ship, miss_threshold: f64) -> Outcome {
    if ship_hit_by(ship, &asteroid.bounding_sphere()) {
        Outcome::Hit
    } else if asteroid.altitude < miss_threshold {
        Outcome::Dodged
    } else {
        Outcome::Live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use glam::Vec3;

    const MISS: f64 = -2.5;

    fn rock(x: f32, y: f32, z: f32) -> Asteroid {
        Asteroid::with_radius(EntityId(1), Vec3::new(x, y, z), 0.2)
    }

    #[test]
    fn overlap_with_hull_is_hit() {
        let ship = Ship::new();
        assert_eq!(classify(&rock(0.0, 0.3, 0.0), &ship, MISS), Outcome::Hit);
    }

    #[test]
    fn overlap_with_wing_is_hit() {
        let ship = Ship::new();
        // Right wing reaches y = 0.36 around x = -0.09, z = -0.25
        assert_eq!(classify(&rock(-0.09, 0.5, -0.25), &ship, MISS), Outcome::Hit);
        assert_eq!(classify(&rock(-0.09, -0.5, -0.25), &ship, MISS), Outcome::Hit);
    }

    #[test]
    fn far_rock_is_live() {
        let ship = Ship::new();
        assert_eq!(classify(&rock(1.5, 0.0, 0.0), &ship, MISS), Outcome::Live);
    }

    #[test]
    fn below_threshold_is_dodged() {
        let ship = Ship::new();
        assert_eq!(classify(&rock(1.5, -2.51, 0.0), &ship, MISS), Outcome::Dodged);
    }

    #[test]
    fn hit_beats_dodge() {
        let mut ship = Ship::new();
        ship.position = Vec3::new(0.0, -2.6, 0.0);
        assert_eq!(classify(&rock(0.0, -2.55, 0.0), &ship, MISS), Outcome::Hit);
    }

    #[test]
    fn colliders_follow_ship_position() {
        let mut ship = Ship::new();
        let asteroid = rock(1.0, 0.0, 0.0);
        assert_eq!(classify(&asteroid, &ship, MISS), Outcome::Live);
        ship.position = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(classify(&asteroid, &ship, MISS), Outcome::Hit);
        // Colliders themselves are untouched
        assert_eq!(ship.colliders, Ship::new().colliders);
    }
}
