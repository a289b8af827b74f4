//! Audio cue boundary
//!
//! The simulation only decides *when* a cue fires; producing sound is the
//! host's job. Sinks are fire-and-forget: the trait is infallible and
//! implementations swallow playback failures (blocked autoplay, missing
//! device), which must never reach game logic.

use crate::sim::GameEvent;

/// Sound cue kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueKind {
    /// Star caught
    Catch,
    /// Meteor appeared
    Hazard,
    /// Countdown ticking in the final seconds
    Warning,
    /// Phase transition (episode start and end)
    Transition,
}

impl CueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CueKind::Catch => "catch",
            CueKind::Hazard => "hazard",
            CueKind::Warning => "warning",
            CueKind::Transition => "transition",
        }
    }
}

/// A host audio backend
pub trait AudioSink {
    /// Play a one-shot cue
    fn play_cue(&mut self, cue: CueKind);
    /// Start the ambient loop
    fn play_ambient(&mut self);
    /// Stop the ambient loop and rewind it to the start
    fn stop_ambient(&mut self);
}

/// Discards everything; for tests and silent hosts
#[derive(Debug, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play_cue(&mut self, _cue: CueKind) {}
    fn play_ambient(&mut self) {}
    fn stop_ambient(&mut self) {}
}

/// Logs cues through the `log` facade; used by the headless demo driver
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play_cue(&mut self, cue: CueKind) {
        log::debug!("cue: {}", cue.as_str());
    }

    fn play_ambient(&mut self) {
        log::debug!("ambient loop started");
    }

    fn stop_ambient(&mut self) {
        log::debug!("ambient loop stopped");
    }
}

/// Map a frame's drained simulation events onto audio cues
pub fn route_events(events: &[GameEvent], sink: &mut dyn AudioSink) {
    for event in events {
        match event {
            GameEvent::EpisodeStarted => {
                sink.play_cue(CueKind::Transition);
                sink.play_ambient();
            }
            GameEvent::EpisodeEnded { .. } => {
                sink.play_cue(CueKind::Transition);
                sink.stop_ambient();
            }
            GameEvent::TargetCaught { .. } => sink.play_cue(CueKind::Catch),
            GameEvent::HazardSpawned { .. } => sink.play_cue(CueKind::Hazard),
            GameEvent::CountdownWarning { .. } => sink.play_cue(CueKind::Warning),
            // Scoring, expiry and drift are silent
            _ => {}
        }
    }
}
