//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No wall clock, no rendering or platform dependencies
//!
//! Hosts drive it through four entry points: [`GameState::start_episode`],
//! [`tick`], [`GameState::resolve_target_click`] and
//! [`GameState::resolve_hazard_click`], then read [`GameState::snapshot`]
//! and drain [`GameEvent`]s each frame.

mod input;
mod phase;
mod spawn;
pub mod state;
pub mod tick;

pub use state::{
    Episode, GameEvent, GamePhase, GameState, Hazard, HazardView, Snapshot, Target, TargetState,
    TargetView,
};
pub use tick::tick;
