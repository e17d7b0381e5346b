use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::Serialize;

/// Unique identifier for an object shared with the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// The ship always uses id 0; asteroids count up from 1.
    pub const SHIP: EntityId = EntityId(0);
}

/// Top-level game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    #[default]
    Playing,
    /// Terminal. Nothing moves and input is ignored.
    GameOver,
}

/// What the UI shows: counters and the game-over banner flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Hud {
    pub score: u32,
    pub hits: u32,
    pub game_over: bool,
}

/// Something that happened during a simulation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    AsteroidSpawned { id: EntityId },
    /// An asteroid struck the ship and was removed.
    AsteroidHit { id: EntityId, position: Vec3 },
    /// An asteroid fell past the play area and was removed.
    AsteroidDodged { id: EntityId },
    GameOver { score: u32, hits: u32 },
}

/// Event kinds in the wire format.
pub mod event_kind {
    pub const SPAWNED: f32 = 1.0;
    pub const HIT: f32 = 2.0;
    pub const DODGED: f32 = 3.0;
    pub const GAME_OVER: f32 = 4.0;
}

/// A game event flattened for the JavaScript side.
/// Generic container: `kind` identifies the event, `a/b/c/d` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct WireEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl WireEvent {
    pub const FLOATS: usize = 5;
}

impl From<GameEvent> for WireEvent {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::AsteroidSpawned { id } => WireEvent {
                kind: event_kind::SPAWNED,
                a: id.0 as f32,
                ..Default::default()
            },
            GameEvent::AsteroidHit { id, position } => WireEvent {
                kind: event_kind::HIT,
                a: id.0 as f32,
                b: position.x,
                c: position.y,
                d: position.z,
            },
            GameEvent::AsteroidDodged { id } => WireEvent {
                kind: event_kind::DODGED,
                a: id.0 as f32,
                ..Default::default()
            },
            GameEvent::GameOver { score, hits } => WireEvent {
                kind: event_kind::GAME_OVER,
                a: score as f32,
                b: hits as f32,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_event_is_5_floats() {
        assert_eq!(std::mem::size_of::<WireEvent>(), WireEvent::FLOATS * 4);
    }

    #[test]
    fn hit_event_carries_position() {
        let wire = WireEvent::from(GameEvent::AsteroidHit {
            id: EntityId(7),
            position: Vec3::new(0.5, -1.0, 0.25),
        });
        assert_eq!(wire.kind, event_kind::HIT);
        assert_eq!(wire.a, 7.0);
        assert_eq!([wire.b, wire.c, wire.d], [0.5, -1.0, 0.25]);
    }

    #[test]
    fn game_over_event_carries_counters() {
        let wire = WireEvent::from(GameEvent::GameOver { score: 12, hits: 5 });
        assert_eq!(wire.kind, event_kind::GAME_OVER);
        assert_eq!((wire.a, wire.b), (12.0, 5.0));
    }
}
