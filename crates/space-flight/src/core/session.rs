use crate::api::game::GameConfig;
use crate::api::types::{EntityId, GameEvent, Hud, Phase};
use crate::components::asteroid::Asteroid;
use crate::components::particles::EngineParticles;
use crate::components::ship::Ship;
use crate::core::rng::Rng;
use crate::input::queue::Direction;
use crate::systems::collision::{classify, Outcome};
use crate::systems::motion::{advance_asteroid, advance_ship};
use crate::systems::spawner::{roll_asteroid, Spawner};

/// All mutable state of one game, from first frame to game over.
///
/// Owned by the frame driver; nothing here is shared or global. A session
/// never leaves `Phase::GameOver` once it gets there, a new game is a new
/// session.
pub struct GameSession {
    config: GameConfig,
    ship: Ship,
    /// Live asteroids, unordered.
    asteroids: Vec<Asteroid>,
    particles: EngineParticles,
    spawner: Spawner,
    rng: Rng,
    score: u32,
    hits: u32,
    phase: Phase,
    next_id: u32,
    /// Events produced by the most recent step.
    events: Vec<GameEvent>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        log::info!(
            "session start: spawn every {} frames, {} hits to lose",
            config.spawn.interval,
            config.rules.hit_limit
        );
        Self {
            ship: Ship::new(),
            asteroids: Vec::with_capacity(config.spawn.max_live.min(256)),
            particles: EngineParticles::new(config.effects.particle_count),
            spawner: Spawner::new(),
            rng: Rng::new(config.seed),
            score: 0,
            hits: 0,
            phase: Phase::Playing,
            next_id: EntityId::SHIP.0 + 1,
            events: Vec::new(),
            config,
        }
    }

    // -- Accessors --

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn asteroid(&self, id: EntityId) -> Option<&Asteroid> {
        self.asteroids.iter().find(|a| a.id == id)
    }

    pub fn particles(&self) -> &EngineParticles {
        &self.particles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Frames stepped while playing.
    pub fn frame(&self) -> u64 {
        self.spawner.frame()
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.score,
            hits: self.hits,
            game_over: self.is_over(),
        }
    }

    /// Events from the most recent [`Self::step`].
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    // -- Mutation --

    /// Move the ship's target one step. Ignored after game over.
    /// Returns whether the press was applied.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.is_over() {
            return false;
        }
        self.ship.nudge(direction, &self.config.ship);
        true
    }

    /// Allocate an id for a new asteroid.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add an asteroid to the live set. Ignored after game over.
    pub fn spawn_asteroid(&mut self, asteroid: Asteroid) -> bool {
        if self.is_over() {
            return false;
        }
        log::debug!("asteroid {} spawned at {:?}", asteroid.id.0, asteroid.position);
        self.events.push(GameEvent::AsteroidSpawned { id: asteroid.id });
        self.asteroids.push(asteroid);
        true
    }

    /// Run one simulation frame. Does nothing once the game is over.
    ///
    /// Order: ship, engine particles, spawn cadence, then each asteroid is
    /// moved and resolved in reverse index order so removals never skip
    /// an entry. The frame that reaches the hit limit stops resolving the
    /// remaining asteroids.
    pub fn step(&mut self) -> Phase {
        self.events.clear();
        if self.is_over() {
            return self.phase;
        }

        advance_ship(&mut self.ship, &self.config.ship);
        self.particles
            .tick(self.ship.position, &self.config.effects, &mut self.rng);

        if self.spawner.tick(self.config.spawn.interval) {
            if self.asteroids.len() < self.config.spawn.max_live {
                let id = self.next_id();
                let asteroid =
                    roll_asteroid(id, &mut self.rng, &self.config.spawn, &self.config.asteroids);
                self.spawn_asteroid(asteroid);
            } else {
                log::debug!(
                    "spawn skipped at frame {}: {} asteroids live",
                    self.spawner.frame(),
                    self.asteroids.len()
                );
            }
        }

        for i in (0..self.asteroids.len()).rev() {
            let asteroid = &mut self.asteroids[i];
            advance_asteroid(asteroid, &self.config.asteroids);

            match classify(asteroid, &self.ship, self.config.rules.miss_threshold) {
                Outcome::Hit => {
                    let asteroid = self.asteroids.swap_remove(i);
                    self.hits += 1;
                    log::debug!("hit by asteroid {} ({} hits)", asteroid.id.0, self.hits);
                    self.events.push(GameEvent::AsteroidHit {
                        id: asteroid.id,
                        position: asteroid.position,
                    });
                    if self.hits >= self.config.rules.hit_limit {
                        self.phase = Phase::GameOver;
                        self.events.push(GameEvent::GameOver {
                            score: self.score,
                            hits: self.hits,
                        });
                        log::info!("game over: score {}, hits {}", self.score, self.hits);
                        break;
                    }
                }
                Outcome::Dodged => {
                    let asteroid = self.asteroids.swap_remove(i);
                    self.score += 1;
                    log::debug!("asteroid {} dodged (score {})", asteroid.id.0, self.score);
                    self.events.push(GameEvent::AsteroidDodged { id: asteroid.id });
                }
                Outcome::Live => {}
            }
        }

        self.phase
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
