//! Per-frame motion rules for the ship and asteroids.

use crate::api::game::{AsteroidConfig, ShipConfig};
use crate::components::asteroid::Asteroid;
use crate::components::ship::Ship;

/// Move `current` a fraction `alpha` of the way toward `target`.
#[inline]
pub fn approach(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha
}

/// Ease the ship toward its target and bank/pitch with the target offset.
///
/// Bank and pitch follow the *target*, not the rendered position, so the
/// craft leans into a move before it gets there.
pub fn advance_ship(ship: &mut Ship, config: &ShipConfig) {
    let alpha = config.smoothing;
    ship.position.x = approach(ship.position.x, ship.target.x, alpha);
    ship.position.y = approach(ship.position.y, ship.target.y, alpha);
    ship.position.z = 0.0;

    let bank = -ship.target.x * config.bank_factor;
    let pitch = -ship.target.y * config.pitch_factor;
    ship.rotation.z = approach(ship.rotation.z, bank, alpha);
    ship.rotation.x = approach(ship.rotation.x, pitch, alpha);
}

/// Drop the asteroid one frame and tumble it.
pub fn advance_asteroid(asteroid: &mut Asteroid, config: &AsteroidConfig) {
    asteroid.altitude -= config.fall_speed;
    asteroid.position.y = asteroid.altitude as f32;
    asteroid.rotation += asteroid.spin;
}
