//! Shared helpers for scenario tests.

#![allow(dead_code)]

use glam::Vec3;
use space_flight::{
    Asteroid, EntityId, FrameDriver, FrameView, GameConfig, HitFlash, Hud, RenderBackend,
};

pub const FRAME: f32 = 1.0 / 60.0;

/// Everything the driver asked the renderer to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Add(EntityId),
    Remove(EntityId),
    Flash(Vec3),
    Hud(Hud),
    GameOver(Hud),
    Render { asteroids: usize, flashes: usize },
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<Call>,
}

impl RecordingRenderer {
    pub fn renders(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Render { .. }))
            .count()
    }

    pub fn game_over_notices(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::GameOver(_)))
            .count()
    }

    pub fn last_hud(&self) -> Option<Hud> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Hud(hud) => Some(*hud),
            _ => None,
        })
    }
}

impl RenderBackend for RecordingRenderer {
    fn add_asteroid(&mut self, asteroid: &Asteroid) {
        self.calls.push(Call::Add(asteroid.id));
    }

    fn remove_object(&mut self, id: EntityId) {
        self.calls.push(Call::Remove(id));
    }

    fn add_flash(&mut self, flash: &HitFlash) {
        self.calls.push(Call::Flash(flash.position));
    }

    fn update_hud(&mut self, hud: &Hud) {
        self.calls.push(Call::Hud(*hud));
    }

    fn game_over(&mut self, hud: &Hud) {
        self.calls.push(Call::GameOver(*hud));
    }

    fn render_frame(&mut self, frame: &FrameView<'_>) {
        self.calls.push(Call::Render {
            asteroids: frame.asteroids.len(),
            flashes: frame.flashes.len(),
        });
    }
}

/// Default tuning with random drops pushed far past any test horizon.
pub fn scripted_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.spawn.interval = 1_000_000;
    config
}

pub fn scripted_driver() -> FrameDriver<RecordingRenderer> {
    FrameDriver::new(scripted_config(), RecordingRenderer::default())
}

/// Hand-place a single-rock asteroid and return its id.
pub fn drop_rock(driver: &mut FrameDriver<RecordingRenderer>, position: Vec3, radius: f32) -> EntityId {
    let session = driver.session_mut();
    let id = session.next_id();
    session.spawn_asteroid(Asteroid::with_radius(id, position, radius));
    id
}
