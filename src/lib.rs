//! Starfall - a catch-the-stars arcade reaction game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (phases, spawning, scoring, countdown)
//! - `audio`: Cue boundary for a host audio backend
//! - `config`: Data-driven variant constants

pub mod audio;
pub mod config;
pub mod sim;

pub use config::{GameConfig, HazardMotion};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate (matches the ~16 ms drift frame)
    pub const TICK_HZ: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;

    /// Lives at the start of every episode
    pub const STARTING_LIVES: u8 = 3;
    /// Points awarded per caught star
    pub const TARGET_SCORE: u64 = 10;

    /// Star bounding-box size in pixels
    pub const TARGET_SIZE: f32 = 40.0;
    /// Meteor bounding-box size in pixels
    pub const HAZARD_SIZE: f32 = 50.0;

    /// Star lifespan range in milliseconds (uniform, max exclusive)
    pub const TARGET_LIFESPAN_MS: (f32, f32) = (2000.0, 3000.0);
    /// Meteor lifespan range in milliseconds (uniform, max exclusive)
    pub const HAZARD_LIFESPAN_MS: (f32, f32) = (1500.0, 3000.0);
    /// Meteor fall speed range in pixels/second (uniform, max exclusive)
    pub const HAZARD_FALL_SPEED: (f32, f32) = (180.0, 300.0);

    /// Multiplicative star-spawn period decay applied after each spawn
    pub const SPAWN_DECAY: f32 = 0.995;
    /// Hard floor for the star-spawn period in milliseconds
    pub const SPAWN_FLOOR_MS: f32 = 500.0;

    /// Star explosion animation length in milliseconds (click to removal)
    pub const EXPLOSION_MS: f32 = 300.0;
    /// Delay between losing the last life and the end of the episode
    pub const GRACE_MS: f32 = 500.0;
    /// Impact-flash feedback length after a meteor hit
    pub const IMPACT_MS: f32 = 300.0;

    /// Countdown warning fires while the pre-decrement clock is at or
    /// below this many seconds
    pub const WARNING_WINDOW_SECS: u32 = 11;
}

/// Convert a millisecond duration to simulation ticks (at least one)
#[inline]
pub fn ms_to_ticks(ms: f32) -> u32 {
    let ticks = (ms / 1000.0 * consts::TICK_HZ as f32).round() as u32;
    ticks.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ms_to_ticks() {
        assert_eq!(ms_to_ticks(1000.0), 60);
        assert_eq!(ms_to_ticks(500.0), 30);
        assert_eq!(ms_to_ticks(300.0), 18);
        assert_eq!(ms_to_ticks(16.6), 1);
        // Sub-tick durations still take a full tick
        assert_eq!(ms_to_ticks(1.0), 1);
    }
}
