//! Game state and core simulation types
//!
//! Everything one game session owns lives in `GameState`. Subsystems take
//! it (or the parts they need) by reference; there is no ambient state.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision::CollisionCause;
use super::countdown::{Countdown, CountdownToken};
use super::obstacles::{FieldUpdate, ObstacleField};
use super::score::Score;
use crate::tuning::{Tuning, TuningError};

/// Which phase of the game is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Attract mode: body hovers, obstacles scroll, nothing is fatal
    Idle,
    /// Waiting for the countdown to finish; simulation frozen
    Countdown,
    /// Active round: gravity, input and collisions all live
    Playing,
    /// Round ended; frozen until the next start request
    GameOver,
}

impl GameMode {
    /// Modes in which the frame tick moves the body and obstacles
    pub fn is_simulated(&self) -> bool {
        matches!(self, GameMode::Idle | GameMode::Playing)
    }

    /// Modes that accept a start request
    pub fn accepts_start(&self) -> bool {
        !matches!(self, GameMode::Playing)
    }
}

/// Notifications for collaborators (UI overlays, audio, HUD).
/// Queued during a frame, drained by the host once the frame is done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    ModeChanged { from: GameMode, to: GameMode },
    /// Countdown display value (3, 2, 1)
    CountdownTick { remaining: u32 },
    ObstacleSpawned { id: u32, top: f32, bottom: f32 },
    ObstaclePassed { id: u32, score: u32 },
    Collision { cause: CollisionCause },
}

/// Per-round bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    pub mode: GameMode,
    pub score: Score,
    /// Frames simulated this round; drives spawn cadence and idle hover
    pub frame: u64,
    /// Player has provided control input this round (gravity is live)
    pub input_received: bool,
}

impl RoundState {
    pub fn new(score_cap: u32) -> Self {
        Self {
            mode: GameMode::Idle,
            score: Score::new(score_cap),
            frame: 0,
            input_received: false,
        }
    }
}

/// Complete game session state
///
/// `events` grows until the host drains it. Hosts drain once per frame
/// (`FrameDriver::drain_events`); attract mode alone queues a spawn and a
/// pass every couple of seconds.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Constants in force for the current round
    pub(crate) tuning: Tuning,
    /// Validated override waiting for the next round reset
    pending_tuning: Option<Tuning>,
    pub round: RoundState,
    pub body: Body,
    pub field: ObstacleField,
    /// Active countdown, if any
    pub countdown: Option<Countdown>,
    /// Driver frames since the session began (never reset)
    pub time_ticks: u64,
    /// Events raised since the host last drained them
    pub events: Vec<GameEvent>,
    rng: Pcg32,
    next_token: u64,
}

impl GameState {
    /// Create a new session in Idle with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a session with custom constants. Rejects tuning the
    /// simulation can't run with.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            round: RoundState::new(tuning.score_cap),
            body: Body::from_tuning(&tuning),
            field: ObstacleField::new(),
            tuning,
            pending_tuning: None,
            countdown: None,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_token: 1,
        }
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.round.mode
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.round.score.value()
    }

    /// Constants in force for the current round
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Override queued for the next round, if any
    pub fn pending_tuning(&self) -> Option<&Tuning> {
        self.pending_tuning.as_ref()
    }

    /// Queue an override for the next round reset. Invalid tuning is
    /// rejected and leaves any previously queued override in place.
    pub fn queue_tuning(&mut self, tuning: Tuning) -> Result<(), TuningError> {
        tuning.validate()?;
        self.pending_tuning = Some(tuning);
        Ok(())
    }

    /// Swap in the queued override. Returns false if none was queued.
    pub(crate) fn apply_pending_tuning(&mut self) -> bool {
        let Some(tuning) = self.pending_tuning.take() else {
            return false;
        };
        self.round.score = Score::new(tuning.score_cap);
        self.tuning = tuning;
        true
    }

    /// Run one frame of the obstacle field against the current body
    pub(crate) fn advance_field(&mut self) -> FieldUpdate {
        self.field
            .update(self.round.frame, self.body.x(), &mut self.rng, &self.tuning)
    }

    /// Allocate a fresh countdown token
    pub(crate) fn next_countdown_token(&mut self) -> CountdownToken {
        let token = CountdownToken(self.next_token);
        self.next_token += 1;
        token
    }

    /// Switch mode, emitting a notification if it actually changed
    pub(crate) fn set_mode(&mut self, to: GameMode) {
        let from = self.round.mode;
        if from == to {
            return;
        }
        self.round.mode = to;
        log::debug!("Mode {:?} -> {:?}", from, to);
        self.events.push(GameEvent::ModeChanged { from, to });
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(1);
        assert_eq!(state.mode(), GameMode::Idle);
        assert_eq!(state.score(), 0);
        assert!(state.field.is_empty());
        assert!(state.countdown.is_none());
    }

    #[test]
    fn test_set_mode_emits_once() {
        let mut state = GameState::new(1);
        state.set_mode(GameMode::Countdown);
        state.set_mode(GameMode::Countdown);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::ModeChanged {
                from: GameMode::Idle,
                to: GameMode::Countdown
            }]
        );
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let zero_period = Tuning {
            spawn_period: 0,
            ..Default::default()
        };
        let empty_range = Tuning {
            gap_top_min: 300.0,
            gap_top_max: 100.0,
            ..Default::default()
        };

        assert!(matches!(
            GameState::with_tuning(1, zero_period.clone()),
            Err(TuningError::ZeroSpawnPeriod)
        ));
        assert!(matches!(
            GameState::with_tuning(1, empty_range.clone()),
            Err(TuningError::EmptyGapRange { .. })
        ));

        let mut state = GameState::new(1);
        let queued = Tuning {
            gravity: 0.5,
            ..Default::default()
        };
        state.queue_tuning(queued.clone()).unwrap();
        assert!(state.queue_tuning(zero_period).is_err());
        assert!(state.queue_tuning(empty_range).is_err());
        assert_eq!(state.pending_tuning(), Some(&queued));

        assert!(state.apply_pending_tuning());
        assert_eq!(state.tuning().gravity, 0.5);
        assert!(!state.apply_pending_tuning());
    }

    #[test]
    fn test_event_json_shape() {
        let event = GameEvent::ObstaclePassed { id: 2, score: 5 };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"obstacle_passed","id":2,"score":5}"#);
    }
}
