//! Game state and core simulation types
//!
//! Everything one episode owns lives in [`Episode`]; replacing it on a
//! phase transition is what cancels outstanding timers.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::config::GameConfig;
use crate::consts::*;
use crate::ms_to_ticks;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Title screen, waiting for the player to start
    Opening,
    /// Active gameplay
    Playing,
    /// Episode over, score on display
    End,
}

/// Star state - live or animating out after a catch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// Clickable
    Live,
    /// Caught: unclickable, removed (and scored) when the counter runs out
    Exploding { ticks_left: u32 },
}

/// A star entity
#[derive(Debug, Clone)]
pub struct Target {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
    /// Remaining lifespan; only counts down while `Live`
    pub ttl_ticks: u32,
    pub state: TargetState,
}

impl Target {
    pub fn is_exploding(&self) -> bool {
        matches!(self.state, TargetState::Exploding { .. })
    }
}

/// A meteor entity
#[derive(Debug, Clone)]
pub struct Hazard {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
    /// Downward speed in pixels/second, fixed at spawn
    pub fall_speed: f32,
    /// Remaining lifespan
    pub ttl_ticks: u32,
}

/// Semantic occurrences emitted by the simulation, drained once per frame
/// by the host (audio routing, logging, UI effects)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    EpisodeStarted,
    EpisodeEnded { score: u64 },
    TargetSpawned { id: u32 },
    TargetExpired { id: u32 },
    /// Star clicked; scoring follows at removal
    TargetCaught { id: u32 },
    /// Star removed after its explosion, score applied
    TargetScored { id: u32, score: u64 },
    HazardSpawned { id: u32 },
    HazardExpired { id: u32 },
    HazardHit { id: u32, lives: u8 },
    /// Meteor drifted below the play area
    HazardFell { id: u32 },
    CountdownWarning { remaining: u32 },
}

/// State owned by a single playthrough
///
/// Every scheduled action is a tick counter in here, so dropping the
/// episode on a transition cancels them all at once.
#[derive(Debug, Clone)]
pub struct Episode {
    pub lives: u8,
    pub score: u64,
    /// Whole seconds left on the clock
    pub time_remaining: u32,
    pub targets: Vec<Target>,
    pub hazards: Vec<Hazard>,

    /// Ticks until the next one-second countdown step
    pub countdown_ticks: u32,
    /// Current star spawn period in milliseconds (decays per spawn)
    pub target_period_ms: f32,
    /// Ticks until the next star spawn
    pub target_spawn_ticks: u32,
    /// Ticks until the meteor scheduler wakes up
    pub hazard_warmup_ticks: u32,
    /// Ticks until the next meteor spawn (unused until warmed up)
    pub hazard_spawn_ticks: u32,
    /// Ticks until the deferred episode end after the last life is lost
    pub end_grace: Option<u32>,
    /// Remaining ticks of meteor-hit feedback
    pub impact_ticks: u32,
}

impl Episode {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            lives: STARTING_LIVES,
            score: 0,
            time_remaining: config.episode_duration_secs,
            targets: Vec::new(),
            hazards: Vec::new(),
            countdown_ticks: TICK_HZ,
            target_period_ms: config.target_initial_period_ms,
            target_spawn_ticks: ms_to_ticks(config.target_initial_period_ms),
            hazard_warmup_ticks: ms_to_ticks(config.hazard_warmup_ms),
            hazard_spawn_ticks: 0,
            end_grace: None,
            impact_ticks: 0,
        }
    }

    /// Drop every entity and outstanding timer
    pub fn clear(&mut self) {
        self.targets.clear();
        self.hazards.clear();
        self.target_spawn_ticks = 0;
        self.hazard_warmup_ticks = 0;
        self.hazard_spawn_ticks = 0;
        self.end_grace = None;
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: GameConfig,
    /// Play-area size as last reported by the host
    pub play_area: Vec2,
    pub phase: GamePhase,
    pub episode: Episode,
    /// Total ticks simulated while Playing
    pub time_ticks: u64,
    rng: Pcg32,
    /// Next entity ID; never reset, so IDs are process-unique
    next_id: u32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game at the opening screen
    pub fn new(seed: u64, config: GameConfig) -> Self {
        let play_area = Vec2::new(config.play_area.0, config.play_area.1);
        let episode = Episode::new(&config);
        Self {
            seed,
            config,
            play_area,
            phase: GamePhase::Opening,
            episode,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            events: Vec::new(),
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Feed in a new play-area size (the host owns resize detection)
    pub fn set_play_area(&mut self, width: f32, height: f32) {
        self.play_area = Vec2::new(width, height);
    }

    /// Whether the meteor-hit feedback flash is showing
    pub fn impact_active(&self) -> bool {
        self.episode.impact_ticks > 0
    }

    /// Render view of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.episode.score,
            lives: self.episode.lives,
            time_remaining: self.episode.time_remaining,
            targets: self
                .episode
                .targets
                .iter()
                .map(|t| TargetView {
                    id: t.id,
                    pos: t.pos,
                    size: t.size,
                    exploding: t.is_exploding(),
                })
                .collect(),
            hazards: self
                .episode
                .hazards
                .iter()
                .map(|h| HazardView {
                    id: h.id,
                    pos: h.pos,
                    size: h.size,
                })
                .collect(),
            impact: self.impact_active(),
        }
    }
}

/// What a presentation layer needs to draw a frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    pub time_remaining: u32,
    pub targets: Vec<TargetView>,
    pub hazards: Vec<HazardView>,
    /// Meteor-hit feedback flash
    pub impact: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TargetView {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
    pub exploding: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HazardView {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
}
