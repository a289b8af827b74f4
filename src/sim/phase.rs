//! Phase controller
//!
//! Owns the Opening -> Playing -> End cycle. Legal transitions:
//! Opening->Playing and End->Playing via [`GameState::start_episode`],
//! Playing->End via [`GameState::end_episode`], End->Opening via
//! [`GameState::return_to_opening`]. Everything else is a silent no-op.

use super::state::{Episode, GameEvent, GamePhase, GameState};

impl GameState {
    /// Begin a fresh episode: full lives, zero score, reset clock and
    /// schedulers, empty entity collections.
    ///
    /// Replaces the whole [`Episode`], so nothing scheduled by a previous
    /// playthrough can fire into this one.
    pub fn start_episode(&mut self) {
        if self.phase == GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::Playing;
        self.episode = Episode::new(&self.config);
        self.push_event(GameEvent::EpisodeStarted);
        log::info!(
            "episode started: {} s, lives {}",
            self.episode.time_remaining,
            self.episode.lives
        );
    }

    /// End the running episode. Idempotent: calling it outside Playing
    /// does nothing.
    ///
    /// Entities and timers are dropped; score, lives and the clock are
    /// kept for the end screen.
    pub fn end_episode(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::End;
        self.episode.clear();
        self.push_event(GameEvent::EpisodeEnded {
            score: self.episode.score,
        });
        log::info!("episode ended: score {}", self.episode.score);
    }

    /// Back to the title screen. Gameplay restarts equally well straight
    /// from End; this exists for hosts that route through Opening.
    pub fn return_to_opening(&mut self) {
        if self.phase != GamePhase::End {
            return;
        }
        self.phase = GamePhase::Opening;
    }
}
