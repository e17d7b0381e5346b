pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{
    GameConfig, ConfigError, ShipConfig, AsteroidConfig, SpawnConfig, RulesConfig, EffectsConfig,
};
pub use api::types::{EntityId, GameEvent, WireEvent, Hud, Phase};
pub use components::asteroid::{Asteroid, AsteroidShape, Fragment};
pub use components::particles::EngineParticles;
pub use components::ship::Ship;
pub use crate::core::collider::{Aabb, BoundingSphere, box_intersects_sphere};
pub use crate::core::driver::{FrameDriver, FrameStatus};
pub use crate::core::rng::Rng;
pub use crate::core::session::GameSession;
pub use crate::core::time::FrameClock;
pub use input::queue::{Direction, InputEvent, InputQueue};
pub use renderer::{FrameView, RenderBackend, NullRenderer};
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use systems::collision::Outcome;
pub use systems::effects::{FlashQueue, HitFlash};
pub use systems::render::build_render_buffer;
