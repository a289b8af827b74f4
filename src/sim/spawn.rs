//! Spawn schedulers
//!
//! Two independent populations with different lifecycles:
//! - Stars: accelerating spawn timer (multiplicative period decay with a
//!   hard floor), randomized lifespan, no penalty on expiry.
//! - Meteors: fixed spawn period behind a warm-up delay, randomized
//!   lifespan and fall speed.
//!
//! Lifespans are per-entity and randomized while the spawn rate is a
//! population-wide schedule, so the on-screen count ramps up over the
//! episode without any global bookkeeping.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GameState, Hazard, Target, TargetState};
use crate::consts::*;
use crate::ms_to_ticks;

/// Advance the star population by one tick: explosion countdowns, ttl
/// expiry, then the spawn timer.
pub(crate) fn advance_targets(state: &mut GameState) {
    // Explosion countdown: removal scores, exactly once per star
    let mut scored: Vec<u32> = Vec::new();
    for target in &mut state.episode.targets {
        if let TargetState::Exploding { ticks_left } = &mut target.state {
            *ticks_left -= 1;
            if *ticks_left == 0 {
                scored.push(target.id);
            }
        }
    }
    for id in scored {
        state.episode.targets.retain(|t| t.id != id);
        state.episode.score += TARGET_SCORE;
        let score = state.episode.score;
        state.push_event(GameEvent::TargetScored { id, score });
    }

    // Lifespan expiry, no penalty. Exploding stars are past their
    // clickable life and are removed by the countdown above instead.
    let mut expired: Vec<u32> = Vec::new();
    for target in &mut state.episode.targets {
        if target.state == TargetState::Live {
            target.ttl_ticks -= 1;
            if target.ttl_ticks == 0 {
                expired.push(target.id);
            }
        }
    }
    if !expired.is_empty() {
        state.episode.targets.retain(|t| !expired.contains(&t.id));
        for id in expired {
            state.push_event(GameEvent::TargetExpired { id });
        }
    }

    // Spawn timer with per-spawn period decay
    state.episode.target_spawn_ticks -= 1;
    if state.episode.target_spawn_ticks == 0 {
        spawn_target(state);
        let episode = &mut state.episode;
        episode.target_period_ms =
            (episode.target_period_ms * SPAWN_DECAY).max(SPAWN_FLOOR_MS);
        episode.target_spawn_ticks = ms_to_ticks(episode.target_period_ms);
    }
}

/// Advance the meteor population by one tick: ttl expiry, then the
/// warm-up gate and fixed-period spawn timer.
pub(crate) fn advance_hazards(state: &mut GameState) {
    let mut expired: Vec<u32> = Vec::new();
    for hazard in &mut state.episode.hazards {
        hazard.ttl_ticks -= 1;
        if hazard.ttl_ticks == 0 {
            expired.push(hazard.id);
        }
    }
    if !expired.is_empty() {
        state.episode.hazards.retain(|h| !expired.contains(&h.id));
        for id in expired {
            state.push_event(GameEvent::HazardExpired { id });
        }
    }

    if state.episode.hazard_warmup_ticks > 0 {
        state.episode.hazard_warmup_ticks -= 1;
        if state.episode.hazard_warmup_ticks == 0 {
            // Scheduler wakes up; first meteor lands one period later
            state.episode.hazard_spawn_ticks = ms_to_ticks(state.config.hazard_period_ms);
        }
        return;
    }

    state.episode.hazard_spawn_ticks -= 1;
    if state.episode.hazard_spawn_ticks == 0 {
        spawn_hazard(state);
        state.episode.hazard_spawn_ticks = ms_to_ticks(state.config.hazard_period_ms);
    }
}

fn spawn_target(state: &mut GameState) {
    let id = state.next_entity_id();
    let pos = spawn_pos(state, TARGET_SIZE);
    let (lo, hi) = TARGET_LIFESPAN_MS;
    let ttl_ticks = ms_to_ticks(state.rng().random_range(lo..hi));
    state.episode.targets.push(Target {
        id,
        pos,
        size: TARGET_SIZE,
        ttl_ticks,
        state: TargetState::Live,
    });
    state.push_event(GameEvent::TargetSpawned { id });
    log::debug!("star {id} spawned at ({:.0}, {:.0})", pos.x, pos.y);
}

fn spawn_hazard(state: &mut GameState) {
    let id = state.next_entity_id();
    let pos = spawn_pos(state, HAZARD_SIZE);
    let (speed_lo, speed_hi) = HAZARD_FALL_SPEED;
    let fall_speed = state.rng().random_range(speed_lo..speed_hi);
    let (lo, hi) = HAZARD_LIFESPAN_MS;
    let ttl_ticks = ms_to_ticks(state.rng().random_range(lo..hi));
    state.episode.hazards.push(Hazard {
        id,
        pos,
        size: HAZARD_SIZE,
        fall_speed,
        ttl_ticks,
    });
    state.push_event(GameEvent::HazardSpawned { id });
    log::debug!("meteor {id} spawned at ({:.0}, {:.0})", pos.x, pos.y);
}

/// Uniform position in the upper spawn band, keeping the whole entity
/// inside the play area (lower band is reserved for ground decoration)
fn spawn_pos(state: &mut GameState, size: f32) -> Vec2 {
    let max_x = (state.play_area.x - size).max(0.0);
    let band = state.play_area.y * state.config.spawn_band;
    let max_y = (band - size).max(0.0);
    let x = state.rng().random_range(0.0..=max_x);
    let y = state.rng().random_range(0.0..=max_y);
    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::GameEvent;

    fn playing_state() -> GameState {
        let mut state = GameState::new(12345, GameConfig::default());
        state.start_episode();
        state.drain_events();
        state
    }

    #[test]
    fn test_first_target_spawns_at_initial_period() {
        let mut state = playing_state();
        // 1000 ms initial period = 60 ticks
        for _ in 0..59 {
            advance_targets(&mut state);
        }
        assert!(state.episode.targets.is_empty());
        advance_targets(&mut state);
        assert_eq!(state.episode.targets.len(), 1);
        assert!(
            state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::TargetSpawned { .. }))
        );
    }

    #[test]
    fn test_spawn_positions_stay_in_band() {
        let mut state = playing_state();
        // Force a burst of spawns
        for _ in 0..25 {
            state.episode.target_spawn_ticks = 1;
            advance_targets(&mut state);
        }
        let (width, height) = state.config.play_area;
        let band = height * state.config.spawn_band;
        for target in &state.episode.targets {
            assert!(target.pos.x >= 0.0 && target.pos.x + target.size <= width);
            assert!(target.pos.y >= 0.0 && target.pos.y + target.size <= band);
        }
    }

    #[test]
    fn test_spawn_period_never_below_floor() {
        let mut state = playing_state();
        let mut last = state.episode.target_period_ms;
        for _ in 0..500 {
            state.episode.target_spawn_ticks = 1;
            advance_targets(&mut state);
            let period = state.episode.target_period_ms;
            assert!(period <= last, "period must be non-increasing");
            assert!(period >= SPAWN_FLOOR_MS);
            last = period;
        }
        assert_eq!(last, SPAWN_FLOOR_MS);
    }

    #[test]
    fn test_target_lifespans_in_range() {
        let mut state = playing_state();
        for _ in 0..25 {
            state.episode.target_spawn_ticks = 1;
            advance_targets(&mut state);
        }
        let min = crate::ms_to_ticks(TARGET_LIFESPAN_MS.0);
        let max = crate::ms_to_ticks(TARGET_LIFESPAN_MS.1);
        for target in &state.episode.targets {
            assert!(target.ttl_ticks >= min.saturating_sub(25) && target.ttl_ticks <= max);
        }
    }

    #[test]
    fn test_unclicked_target_expires() {
        // A star with a 2500 ms lifespan is gone by 2600 ms
        let mut state = playing_state();
        let id = state.next_entity_id();
        state.episode.targets.push(Target {
            id,
            pos: Vec2::new(50.0, 50.0),
            size: TARGET_SIZE,
            ttl_ticks: crate::ms_to_ticks(2500.0),
            state: TargetState::Live,
        });
        // Keep the spawn timer from firing during the window
        state.episode.target_period_ms = 10_000.0;
        state.episode.target_spawn_ticks = crate::ms_to_ticks(10_000.0);

        for _ in 0..crate::ms_to_ticks(2400.0) {
            advance_targets(&mut state);
        }
        assert_eq!(state.episode.targets.len(), 1);
        for _ in 0..crate::ms_to_ticks(200.0) {
            advance_targets(&mut state);
        }
        assert!(state.episode.targets.is_empty());
        assert!(
            state
                .drain_events()
                .iter()
                .any(|e| *e == GameEvent::TargetExpired { id })
        );
        // Expiry is not a penalty
        assert_eq!(state.episode.score, 0);
    }

    #[test]
    fn test_exploding_target_scores_once_at_removal() {
        let mut state = playing_state();
        let id = state.next_entity_id();
        state.episode.targets.push(Target {
            id,
            pos: Vec2::ZERO,
            size: TARGET_SIZE,
            ttl_ticks: 1, // would expire immediately if ttl still applied
            state: TargetState::Exploding {
                ticks_left: crate::ms_to_ticks(EXPLOSION_MS),
            },
        });
        state.episode.target_spawn_ticks = 10_000;

        for _ in 0..crate::ms_to_ticks(EXPLOSION_MS) - 1 {
            advance_targets(&mut state);
        }
        // Still animating out, not yet scored
        assert_eq!(state.episode.targets.len(), 1);
        assert_eq!(state.episode.score, 0);

        advance_targets(&mut state);
        assert!(state.episode.targets.is_empty());
        assert_eq!(state.episode.score, TARGET_SCORE);
        assert!(
            state
                .drain_events()
                .iter()
                .any(|e| *e == GameEvent::TargetScored { id, score: TARGET_SCORE })
        );
    }

    #[test]
    fn test_hazards_dormant_through_warmup() {
        let mut state = playing_state();
        let warmup = crate::ms_to_ticks(state.config.hazard_warmup_ms);
        let period = crate::ms_to_ticks(state.config.hazard_period_ms);

        for _ in 0..warmup + period - 1 {
            advance_hazards(&mut state);
        }
        assert!(state.episode.hazards.is_empty());

        // First meteor lands one period after the warm-up ends
        advance_hazards(&mut state);
        assert_eq!(state.episode.hazards.len(), 1);
        assert!(
            state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::HazardSpawned { .. }))
        );
        // Keep it alive while we wait out the next period
        state.episode.hazards[0].ttl_ticks = 10_000;

        // And the period does not accelerate
        for _ in 0..period - 1 {
            advance_hazards(&mut state);
        }
        assert_eq!(state.episode.hazards.len(), 1);
        advance_hazards(&mut state);
        assert_eq!(state.episode.hazards.len(), 2);
    }

    #[test]
    fn test_hazard_fall_speeds_in_range() {
        let mut state = playing_state();
        state.episode.hazard_warmup_ticks = 1;
        advance_hazards(&mut state);
        for _ in 0..10 {
            state.episode.hazard_spawn_ticks = 1;
            advance_hazards(&mut state);
        }
        assert!(!state.episode.hazards.is_empty());
        for hazard in &state.episode.hazards {
            assert!(hazard.fall_speed >= HAZARD_FALL_SPEED.0);
            assert!(hazard.fall_speed < HAZARD_FALL_SPEED.1);
        }
    }
}
