use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound accepted for `AsteroidConfig::max_fragments`.
pub const MAX_FRAGMENTS: u32 = 32;

/// Errors produced while loading a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Ship handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Target offset applied per directional press.
    pub step: f32,
    /// Target x is clamped to [-bound_x, bound_x].
    pub bound_x: f32,
    /// Target y is clamped to [-bound_y, bound_y].
    pub bound_y: f32,
    /// Fraction of the remaining distance covered each frame (0 < s <= 1).
    pub smoothing: f32,
    /// Bank angle per unit of target x.
    pub bank_factor: f32,
    /// Pitch angle per unit of target y.
    pub pitch_factor: f32,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            step: 0.2,
            bound_x: 1.4,
            bound_y: 1.2,
            smoothing: 0.1,
            bank_factor: 0.4,
            pitch_factor: 0.2,
        }
    }
}

/// Asteroid motion and shape generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidConfig {
    /// Distance fallen per frame. Accumulated in f64 so the dodge frame
    /// is exact over long falls.
    pub fall_speed: f64,
    /// Per-axis spin is drawn from [-max_spin, max_spin) rad/frame.
    pub max_spin: f32,
    /// Main fragment radius range.
    pub min_radius: f32,
    pub max_radius: f32,
    /// Secondary fragment count range (inclusive).
    pub min_fragments: u32,
    pub max_fragments: u32,
    /// Scale applied to secondary fragments.
    pub fragment_scale: f32,
    /// Secondary fragments are offset within [-spread/2, spread/2) per axis.
    pub fragment_spread: f32,
    /// Vertex distortion amplitude folded into each fragment's extent.
    pub distortion: f32,
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            fall_speed: 0.04,
            max_spin: 0.01,
            min_radius: 0.1,
            max_radius: 0.18,
            min_fragments: 3,
            max_fragments: 5,
            fragment_scale: 0.6,
            fragment_spread: 0.2,
            distortion: 0.025,
        }
    }
}

/// Spawn cadence and placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// One asteroid every `interval` frames.
    pub interval: u32,
    /// Spawn height.
    pub height: f32,
    /// Spawn x is drawn from [-half_width, half_width).
    pub half_width: f32,
    /// Spawn z is drawn from [-half_depth, half_depth).
    pub half_depth: f32,
    /// Maximum live asteroids; spawns are skipped while at the cap.
    pub max_live: usize,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            interval: 50,
            height: 2.5,
            half_width: 1.5,
            half_depth: 0.75,
            max_live: 64,
        }
    }
}

/// Scoring and the loss condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// An asteroid below this height counts as dodged.
    pub miss_threshold: f64,
    /// Hits that end the game.
    pub hit_limit: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            miss_threshold: -2.5,
            hit_limit: 5,
        }
    }
}

/// Cosmetic effects. Never read by gameplay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Engine trail particle count.
    pub particle_count: usize,
    /// Distance a particle drifts backwards per frame.
    pub particle_drift: f32,
    /// Particles past this trail length respawn at the nozzle.
    pub trail_length: f32,
    /// Lateral respawn jitter (full width).
    pub particle_spread: f32,
    /// Nozzle position relative to the ship along x.
    pub engine_offset: f32,
    /// How long a hit flash stays visible, in seconds.
    pub flash_duration: f32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            particle_drift: 0.01,
            trail_length: 0.3,
            particle_spread: 0.1,
            engine_offset: -0.3,
            flash_duration: 0.1,
        }
    }
}

/// Every tunable constant of the game. `Default` is the classic tuning.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub ship: ShipConfig,
    pub asteroids: AsteroidConfig,
    pub spawn: SpawnConfig,
    pub rules: RulesConfig,
    pub effects: EffectsConfig,
    /// Seed for spawn placement, asteroid shapes and particle jitter.
    pub seed: u64,
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        if !(self.ship.smoothing > 0.0 && self.ship.smoothing <= 1.0) {
            return invalid("ship.smoothing", "must be in (0, 1]");
        }
        if self.ship.bound_x <= 0.0 || self.ship.bound_y <= 0.0 {
            return invalid("ship.bound_x/bound_y", "must be positive");
        }
        if self.spawn.interval == 0 {
            return invalid("spawn.interval", "must be at least 1");
        }
        if self.spawn.half_width < 0.0 || self.spawn.half_depth < 0.0 {
            return invalid("spawn.half_width/half_depth", "must not be negative");
        }
        if self.rules.hit_limit == 0 {
            return invalid("rules.hit_limit", "must be at least 1");
        }
        if self.rules.miss_threshold >= f64::from(self.spawn.height) {
            return invalid("rules.miss_threshold", "must be below spawn.height");
        }
        if self.asteroids.min_radius <= 0.0 || self.asteroids.min_radius > self.asteroids.max_radius {
            return invalid("asteroids.min_radius", "must be positive and not above max_radius");
        }
        if self.asteroids.min_fragments > self.asteroids.max_fragments {
            return invalid("asteroids.min_fragments", "must not exceed max_fragments");
        }
        if self.asteroids.max_fragments > MAX_FRAGMENTS {
            return invalid("asteroids.max_fragments", "must be at most MAX_FRAGMENTS (32)");
        }
        if self.effects.flash_duration < 0.0 {
            return invalid("effects.flash_duration", "must not be negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.ship.step, 0.2);
        assert_eq!(config.ship.bound_x, 1.4);
        assert_eq!(config.ship.bound_y, 1.2);
        assert_eq!(config.asteroids.fall_speed, 0.04);
        assert_eq!(config.spawn.interval, 50);
        assert_eq!(config.rules.hit_limit, 5);
        assert_eq!(config.rules.miss_threshold, -2.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_partial_override() {
        let json = r#"{
            "spawn": { "interval": 20 },
            "rules": { "hit_limit": 3 },
            "seed": 1234
        }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.spawn.interval, 20);
        assert_eq!(config.spawn.height, 2.5);
        assert_eq!(config.rules.hit_limit, 3);
        assert_eq!(config.seed, 1234);
        assert_eq!(config.ship, ShipConfig::default());
    }

    #[test]
    fn empty_object_is_default() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = GameConfig::from_json("{ spawn: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_interval_rejected() {
        let err = GameConfig::from_json(r#"{ "spawn": { "interval": 0 } }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "spawn.interval"),
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn smoothing_out_of_range_rejected() {
        let mut config = GameConfig::default();
        config.ship.smoothing = 1.5;
        assert!(config.validate().is_err());
        config.ship.smoothing = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_fragment_count_rejected() {
        let json = format!(r#"{{ "asteroids": {{ "max_fragments": {} }} }}"#, u32::MAX);
        match GameConfig::from_json(&json).unwrap_err() {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "asteroids.max_fragments"),
            other => panic!("Expected Invalid, got {:?}", other),
        }
        let mut config = GameConfig::default();
        config.asteroids.max_fragments = MAX_FRAGMENTS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn round_trips_through_json() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }
}
