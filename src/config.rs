//! Game configuration
//!
//! The variant knobs that differ between builds of the game. Fixed gameplay
//! constants live in [`crate::consts`]; everything here may be overridden
//! from a JSON document at startup.

use serde::{Deserialize, Serialize};

/// How meteors behave after spawning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HazardMotion {
    /// Meteors fall at their assigned speed and despawn below the play area
    #[default]
    Drifting,
    /// Meteors hold their spawn position until their lifespan runs out
    Stationary,
}

impl HazardMotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            HazardMotion::Drifting => "drifting",
            HazardMotion::Stationary => "stationary",
        }
    }
}

/// Variant constants for one build of the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Episode length in seconds
    pub episode_duration_secs: u32,
    /// Delay before the meteor scheduler starts, in milliseconds
    pub hazard_warmup_ms: f32,
    /// Fixed meteor spawn period in milliseconds
    pub hazard_period_ms: f32,
    /// Initial star spawn period in milliseconds (decays from here)
    pub target_initial_period_ms: f32,
    /// Fraction of the play-area height entities spawn into, from the top
    pub spawn_band: f32,
    /// Meteor motion variant
    pub hazard_motion: HazardMotion,
    /// Play-area size used until the host reports a real one
    pub play_area: (f32, f32),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            episode_duration_secs: 30,
            hazard_warmup_ms: 5000.0,
            hazard_period_ms: 2000.0,
            target_initial_period_ms: 1000.0,
            spawn_band: 0.7,
            hazard_motion: HazardMotion::default(),
            play_area: (800.0, 600.0),
        }
    }
}

impl GameConfig {
    /// The short variant: 25 second episodes with an earlier meteor onset
    pub fn short() -> Self {
        Self {
            episode_duration_secs: 25,
            hazard_warmup_ms: 4000.0,
            ..Self::default()
        }
    }

    /// Parse a config from JSON, filling omitted fields with defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the schedulers cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.episode_duration_secs == 0 {
            return Err(ConfigError::Invalid("episode_duration_secs must be > 0"));
        }
        if !(self.hazard_period_ms > 0.0) || !(self.target_initial_period_ms > 0.0) {
            return Err(ConfigError::Invalid("spawn periods must be > 0"));
        }
        if !(self.hazard_warmup_ms >= 0.0) {
            return Err(ConfigError::Invalid("hazard_warmup_ms must be >= 0"));
        }
        if !(self.spawn_band > 0.0 && self.spawn_band <= 1.0) {
            return Err(ConfigError::Invalid("spawn_band must be in (0, 1]"));
        }
        if !(self.play_area.0 > 0.0 && self.play_area.1 > 0.0) {
            return Err(ConfigError::Invalid("play_area must be positive"));
        }
        Ok(())
    }
}

/// Configuration loading failure
#[derive(Debug)]
pub enum ConfigError {
    /// The document was not valid JSON for the schema
    Parse(serde_json::Error),
    /// A field held a value outside its legal range
    Invalid(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
