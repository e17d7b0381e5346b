use crate::api::game::GameConfig;
use crate::api::types::{GameEvent, Phase};
use crate::core::session::GameSession;
use crate::core::time::FrameClock;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::{FrameView, RenderBackend};
use crate::systems::effects::FlashQueue;

/// Whether the host should schedule another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    /// The game is over; stop requesting animation frames.
    Stopped,
}

/// Runs one simulation step per displayed frame and drives the renderer.
///
/// The host calls [`FrameDriver::tick`] from its display callback and keeps
/// rescheduling while it returns [`FrameStatus::Continue`]. Input pushed
/// between frames is applied at the start of the next step, so it never
/// interleaves with a collision pass.
pub struct FrameDriver<R: RenderBackend> {
    session: GameSession,
    input: InputQueue,
    flashes: FlashQueue,
    clock: FrameClock,
    renderer: R,
}

impl<R: RenderBackend> FrameDriver<R> {
    pub fn new(config: GameConfig, mut renderer: R) -> Self {
        let session = GameSession::new(config);
        renderer.update_hud(&session.hud());
        Self {
            session,
            input: InputQueue::new(),
            flashes: FlashQueue::new(),
            clock: FrameClock::new(),
            renderer,
        }
    }

    /// Queue an input event for the next step.
    /// Dropped once the game is over.
    pub fn push_input(&mut self, event: InputEvent) {
        if self.session.is_over() {
            return;
        }
        self.input.push(event);
    }

    /// Advance one displayed frame that took `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> FrameStatus {
        if self.session.is_over() {
            self.input.clear();
            return FrameStatus::Stopped;
        }

        let now = self.clock.advance(dt);

        for event in self.input.drain() {
            if let Some(direction) = event.direction() {
                self.session.steer(direction);
            }
        }

        let phase = self.session.step();

        let duration = self.session.config().effects.flash_duration;
        for event in self.session.events() {
            match *event {
                GameEvent::AsteroidSpawned { id } => {
                    if let Some(asteroid) = self.session.asteroid(id) {
                        self.renderer.add_asteroid(asteroid);
                    }
                }
                GameEvent::AsteroidHit { id, position } => {
                    self.renderer.remove_object(id);
                    let flash = self.flashes.spawn(position, now, duration);
                    self.renderer.add_flash(&flash);
                }
                GameEvent::AsteroidDodged { id } => {
                    self.renderer.remove_object(id);
                }
                GameEvent::GameOver { .. } => {}
            }
        }

        let hud = self.session.hud();
        self.renderer.update_hud(&hud);

        if phase == Phase::GameOver {
            self.renderer.game_over(&hud);
            return FrameStatus::Stopped;
        }

        self.flashes.expire(now);
        let frame = FrameView {
            ship: self.session.ship(),
            asteroids: self.session.asteroids(),
            particles: self.session.particles(),
            flashes: self.flashes.active(),
            hud,
            time: now,
        };
        self.renderer.render_frame(&frame);

        FrameStatus::Continue
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Scripted access to the session, e.g. to drop an asteroid by hand.
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    /// Events from the most recent step.
    pub fn events(&self) -> &[GameEvent] {
        self.session.events()
    }

    pub fn flashes(&self) -> &FlashQueue {
        &self.flashes
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
