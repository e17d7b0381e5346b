use glam::{Vec2, Vec3};
use crate::api::game::ShipConfig;
use crate::core::collider::Aabb;
use crate::input::queue::Direction;

/// Hull and wing boxes in the ship's local frame, taken from the extents
/// of the extruded hull and wing meshes at the origin.
pub const DEFAULT_COLLIDERS: [Aabb; 3] = [
    // Hull
    Aabb::new(Vec3::new(-0.05, -0.25, -0.75), Vec3::new(0.20, 0.25, 0.05)),
    // Left wing
    Aabb::new(Vec3::new(-0.11, -0.36, -0.51), Vec3::new(-0.07, -0.04, 0.01)),
    // Right wing
    Aabb::new(Vec3::new(-0.11, 0.04, -0.51), Vec3::new(-0.07, 0.36, 0.01)),
];

/// The player's craft.
///
/// Input moves `target`; the rendered `position` and `rotation` chase it a
/// little every frame (see `systems::motion::advance_ship`).
#[derive(Debug, Clone)]
pub struct Ship {
    /// Desired (x, y), always inside the configured bounds.
    pub target: Vec2,
    /// Rendered world position. z stays at 0.
    pub position: Vec3,
    /// Rendered rotation in radians: x is pitch, z is bank.
    pub rotation: Vec3,
    /// Collision boxes in the ship's local frame.
    pub colliders: Vec<Aabb>,
}

impl Ship {
    /// A ship at the origin with the hull and wing colliders.
    pub fn new() -> Self {
        Self::with_colliders(DEFAULT_COLLIDERS.to_vec())
    }

    pub fn with_colliders(colliders: Vec<Aabb>) -> Self {
        Self {
            target: Vec2::ZERO,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            colliders,
        }
    }

    /// Shift the target one step and clamp it to the flight envelope.
    pub fn nudge(&mut self, direction: Direction, config: &ShipConfig) {
        self.target += direction.unit() * config.step;
        self.target = self.target.clamp(
            Vec2::new(-config.bound_x, -config.bound_y),
            Vec2::new(config.bound_x, config.bound_y),
        );
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::new()
    }
}
