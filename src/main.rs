//! Starfall entry point
//!
//! Headless demo driver: runs one self-playing episode at the fixed tick
//! rate (no sleeping) and logs spawns, catches, hits and cues.
//!
//! Usage: `starfall [seed] [config.json]`

use starfall::GameConfig;
use starfall::audio::{LogSink, route_events};
use starfall::sim::{self, GameEvent, GamePhase, GameState};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => 2024,
    };
    let config = match args.next() {
        Some(path) => GameConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    log::info!(
        "starfall demo: seed {seed}, {} s episode, {} hazards",
        config.episode_duration_secs,
        config.hazard_motion.as_str()
    );

    let mut state = GameState::new(seed, config);
    let mut sink = LogSink;

    state.start_episode();
    route_events(&state.drain_events(), &mut sink);

    // Self-playing policy, roughly a decent human: catch a star every
    // third of a second, fat-finger a couple of meteors along the way
    let mut frame: u64 = 0;
    let mut meteors_clicked = 0u32;
    while state.phase == GamePhase::Playing {
        sim::tick(&mut state);
        frame += 1;

        if frame % 20 == 0 {
            let next_star = state
                .episode
                .targets
                .iter()
                .find(|t| !t.is_exploding())
                .map(|t| t.id);
            if let Some(id) = next_star {
                state.resolve_target_click(id);
            }
        }
        if meteors_clicked < 2 && frame % 450 == 0 {
            if let Some(id) = state.episode.hazards.first().map(|h| h.id) {
                state.resolve_hazard_click(id);
                meteors_clicked += 1;
            }
        }

        let events = state.drain_events();
        route_events(&events, &mut sink);
        for event in &events {
            match event {
                GameEvent::TargetScored { id, score } => {
                    log::info!("star {id} scored, total {score}");
                }
                GameEvent::HazardHit { id, lives } => {
                    log::info!("meteor {id} clicked, {lives} lives left");
                }
                GameEvent::CountdownWarning { remaining } => {
                    log::info!("{remaining} seconds left");
                }
                GameEvent::EpisodeEnded { score } => {
                    log::info!("episode over after {frame} ticks");
                    println!("final score: {score}");
                }
                _ => {}
            }
        }
    }

    let snapshot = state.snapshot();
    log::info!(
        "end state: score {}, lives {}, {} stars / {} meteors on screen",
        snapshot.score,
        snapshot.lives,
        snapshot.targets.len(),
        snapshot.hazards.len()
    );
    Ok(())
}
