//! Click resolution
//!
//! The only mutating entry points a UI layer gets besides
//! [`GameState::start_episode`] and [`super::tick`]. Stale ids, repeat
//! clicks and out-of-phase clicks are silent no-ops so event races around
//! phase transitions cannot fault the game.

use super::state::{GameEvent, GamePhase, GameState, TargetState};
use crate::consts::*;
use crate::ms_to_ticks;

impl GameState {
    /// A click landed on a star.
    ///
    /// The star starts its explosion immediately and stops being
    /// clickable; the score is applied when the explosion finishes, so a
    /// star can never be counted twice.
    pub fn resolve_target_click(&mut self, id: u32) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let Some(target) = self.episode.targets.iter_mut().find(|t| t.id == id) else {
            return;
        };
        if target.is_exploding() {
            return;
        }
        target.state = TargetState::Exploding {
            ticks_left: ms_to_ticks(EXPLOSION_MS),
        };
        self.push_event(GameEvent::TargetCaught { id });
        log::debug!("star {id} caught");
    }

    /// A click landed on a meteor.
    ///
    /// The meteor is removed on the spot and a life is lost. Losing the
    /// last life schedules the episode end after a short grace period so
    /// the hit feedback is visible; further meteor clicks inside that
    /// window do nothing.
    pub fn resolve_hazard_click(&mut self, id: u32) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if self.episode.lives == 0 {
            return;
        }
        let Some(index) = self.episode.hazards.iter().position(|h| h.id == id) else {
            return;
        };
        self.episode.hazards.remove(index);
        self.episode.lives -= 1;
        self.episode.impact_ticks = ms_to_ticks(IMPACT_MS);
        let lives = self.episode.lives;
        self.push_event(GameEvent::HazardHit { id, lives });
        log::debug!("meteor {id} hit, {lives} lives left");

        if lives == 0 && self.episode.end_grace.is_none() {
            self.episode.end_grace = Some(ms_to_ticks(GRACE_MS));
            log::info!("last life lost");
        }
    }
}
