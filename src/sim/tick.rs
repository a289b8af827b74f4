//! Fixed timestep simulation tick
//!
//! Advances the countdown, both spawn populations, meteor drift and the
//! deferred end-of-episode action by one tick. Outside the Playing phase
//! the tick is a no-op apart from letting the impact flash fade out.

use super::spawn;
use super::state::{GameEvent, GamePhase, GameState};
use crate::config::HazardMotion;
use crate::consts::*;

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState) {
    // Hit feedback fades regardless of phase, so an episode ending inside
    // the grace window cannot freeze the flash on
    if state.episode.impact_ticks > 0 {
        state.episode.impact_ticks -= 1;
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    if advance_countdown(state) {
        // Clock hit zero; the episode is torn down
        return;
    }

    spawn::advance_targets(state);
    spawn::advance_hazards(state);

    if state.config.hazard_motion == HazardMotion::Drifting {
        advance_drift(state);
    }

    // Deferred end after the last life was lost
    if let Some(ticks) = state.episode.end_grace {
        if ticks <= 1 {
            state.episode.end_grace = None;
            state.end_episode();
        } else {
            state.episode.end_grace = Some(ticks - 1);
        }
    }
}

/// One-second countdown inside the fixed tick. Returns true when the
/// episode ended.
fn advance_countdown(state: &mut GameState) -> bool {
    state.episode.countdown_ticks -= 1;
    if state.episode.countdown_ticks > 0 {
        return false;
    }
    state.episode.countdown_ticks = TICK_HZ;

    let pre = state.episode.time_remaining;
    state.episode.time_remaining = pre.saturating_sub(1);
    if pre <= WARNING_WINDOW_SECS {
        state.push_event(GameEvent::CountdownWarning {
            remaining: state.episode.time_remaining,
        });
    }
    if state.episode.time_remaining == 0 {
        state.end_episode();
        return true;
    }
    false
}

/// Move every meteor down by its assigned speed; meteors below the play
/// area are removed with no penalty.
fn advance_drift(state: &mut GameState) {
    let height = state.play_area.y;
    let mut fallen: Vec<u32> = Vec::new();
    for hazard in &mut state.episode.hazards {
        hazard.pos.y += hazard.fall_speed * SIM_DT;
        if hazard.pos.y > height {
            fallen.push(hazard.id);
        }
    }
    if !fallen.is_empty() {
        state.episode.hazards.retain(|h| !fallen.contains(&h.id));
        for id in fallen {
            state.push_event(GameEvent::HazardFell { id });
        }
    }
}


#[cfg(test)]
mod prop_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::config::GameConfig;

    proptest! {
        /// Invariants hold under arbitrary interleavings of ticks and
        /// clicks: lives bounded, score monotone within an episode, spawn
        /// period floored, entities inside the play area.
        #[test]
        fn prop_core_invariants(seed in any::<u64>(), ops in prop::collection::vec(0u8..5, 1..600)) {
            let mut state = GameState::new(seed, GameConfig::default());
            state.start_episode();
            let mut last_score = 0u64;

            for op in ops {
                match op {
                    0..=2 => tick(&mut state),
                    3 => {
                        if let Some(id) = state.episode.targets.first().map(|t| t.id) {
                            state.resolve_target_click(id);
                        }
                    }
                    _ => {
                        if let Some(id) = state.episode.hazards.first().map(|h| h.id) {
                            state.resolve_hazard_click(id);
                        }
                    }
                }

                prop_assert!(state.episode.lives <= STARTING_LIVES);
                prop_assert!(state.episode.target_period_ms >= SPAWN_FLOOR_MS);
                if state.phase == GamePhase::Playing {
                    prop_assert!(state.episode.score >= last_score);
                    last_score = state.episode.score;
                }
                let (width, _height) = state.config.play_area;
                for target in &state.episode.targets {
                    prop_assert!(target.pos.x >= 0.0 && target.pos.x + target.size <= width);
                }
            }
        }
    }
}
