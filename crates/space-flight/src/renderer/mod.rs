//! Contract with the presentation layer.
//!
//! All drawing happens outside the simulation (three.js on the web). The
//! frame driver tells a [`RenderBackend`] which objects appear and
//! disappear, hands it the HUD counters, and asks it to draw each frame.

pub mod instance;

use crate::api::types::{EntityId, Hud};
use crate::components::asteroid::Asteroid;
use crate::components::particles::EngineParticles;
use crate::components::ship::Ship;
use crate::systems::effects::HitFlash;

/// Read-only snapshot of everything visible in one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub ship: &'a Ship,
    pub asteroids: &'a [Asteroid],
    pub particles: &'a EngineParticles,
    /// Hit flashes that have not expired yet.
    pub flashes: &'a [HitFlash],
    pub hud: Hud,
    /// Frame clock, in seconds.
    pub time: f64,
}

/// The rendering collaborator driven by `FrameDriver`.
pub trait RenderBackend {
    /// A new asteroid entered the scene. Build its meshes from `asteroid.shape`.
    fn add_asteroid(&mut self, asteroid: &Asteroid);

    /// Take an object out of the scene. Unknown ids must be ignored.
    fn remove_object(&mut self, id: EntityId);

    /// Show a hit flash until `flash.expires_at`.
    fn add_flash(&mut self, _flash: &HitFlash) {}

    /// Refresh the score / hits readout.
    fn update_hud(&mut self, hud: &Hud);

    /// Called once, on the frame the game ends.
    fn game_over(&mut self, _hud: &Hud) {}

    /// Draw the frame.
    fn render_frame(&mut self, frame: &FrameView<'_>);
}

/// Backend that draws nothing. For headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl RenderBackend for NullRenderer {
    fn add_asteroid(&mut self, _asteroid: &Asteroid) {}
    fn remove_object(&mut self, _id: EntityId) {}
    fn update_hud(&mut self, _hud: &Hud) {}
    fn render_frame(&mut self, _frame: &FrameView<'_>) {}
}
