//! Property-based tests for ship steering and smoothing using proptest.

use glam::Vec2;
use proptest::prelude::*;

use crate::api::game::ShipConfig;
use crate::components::ship::Ship;
use crate::input::queue::Direction;
use crate::systems::motion::advance_ship;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Left),
        Just(Direction::Right),
        Just(Direction::Up),
        Just(Direction::Down),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// No press sequence can push the target outside the flight envelope.
    #[test]
    fn prop_target_stays_in_bounds(presses in prop::collection::vec(direction(), 0..200)) {
        let config = ShipConfig::default();
        let mut ship = Ship::new();
        for press in presses {
            ship.nudge(press, &config);
            prop_assert!(ship.target.x.abs() <= 1.4, "x was {}", ship.target.x);
            prop_assert!(ship.target.y.abs() <= 1.2, "y was {}", ship.target.y);
        }
    }

    /// With a fixed target the rendered position closes in every frame and
    /// never crosses over.
    #[test]
    fn prop_position_converges_without_overshoot(
        tx in -1.4f32..=1.4,
        ty in -1.2f32..=1.2,
        sx in -1.4f32..=1.4,
        sy in -1.2f32..=1.2,
    ) {
        let config = ShipConfig::default();
        let mut ship = Ship::new();
        ship.position.x = sx;
        ship.position.y = sy;
        ship.target = Vec2::new(tx, ty);

        let mut gap = (ship.target - ship.position.truncate()).length();
        let side_x = (tx - sx).signum();
        let side_y = (ty - sy).signum();
        for _ in 0..60 {
            advance_ship(&mut ship, &config);
            let next = (ship.target - ship.position.truncate()).length();
            prop_assert!(next <= gap, "gap grew from {} to {}", gap, next);
            if gap > 1e-4 {
                prop_assert!(next < gap, "gap stalled at {}", gap);
            }
            // Still on the starting side of the target (or on it)
            prop_assert!((tx - ship.position.x) * side_x >= 0.0);
            prop_assert!((ty - ship.position.y) * side_y >= 0.0);
            gap = next;
        }
    }
}
