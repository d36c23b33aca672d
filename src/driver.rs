//! Frame driver
//!
//! Turns wall-clock deltas into fixed simulation frames and runs the
//! countdown timer beside them. Hosts call `update` once per display
//! refresh, feed it the start/impulse signals, and read snapshots and
//! events once `update` returns.

use crate::consts::*;
use crate::sim::{
    CountdownTimer, FrameSnapshot, GameEvent, GameMode, GameState, TickInput, countdown_tick,
    request_start, tick,
};
use crate::tuning::{Tuning, TuningError};

pub struct FrameDriver {
    state: GameState,
    accumulator: f32,
    /// Pending one-shot input for the next frame
    input: TickInput,
    countdown_timer: Option<CountdownTimer>,
}

impl FrameDriver {
    pub fn new(seed: u64) -> Self {
        Self::with_state(GameState::new(seed))
    }

    pub fn with_state(state: GameState) -> Self {
        log::info!("Session created with seed {}", state.seed);
        Self {
            state,
            accumulator: 0.0,
            input: TickInput::default(),
            countdown_timer: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode()
    }

    /// Start signal: begin (or restart) the countdown. Ignored while Playing.
    pub fn start(&mut self) {
        if let Some(token) = request_start(&mut self.state) {
            // Dropping the previous timer cancels it
            self.countdown_timer = Some(CountdownTimer::new(token, COUNTDOWN_INTERVAL));
        }
    }

    /// Input signal: queue an impulse for the next frame. Ignored unless Playing.
    pub fn impulse(&mut self) {
        if self.state.mode() == GameMode::Playing {
            self.input.impulse = true;
        }
    }

    /// Queue a tuning override for the next round
    pub fn set_tuning(&mut self, tuning: Tuning) -> Result<(), TuningError> {
        self.state.queue_tuning(tuning).inspect_err(|e| {
            log::warn!("Rejected tuning override: {}", e);
        })
    }

    /// Advance by `dt` seconds of wall-clock time. Returns frames simulated.
    pub fn update(&mut self, dt: f32) -> u32 {
        let dt = dt.clamp(0.0, MAX_FRAME_DELTA);

        self.advance_countdown(dt);

        self.accumulator += dt;
        let mut substeps = 0;
        while self.accumulator >= FRAME_DT && substeps < MAX_SUBSTEPS {
            let input = std::mem::take(&mut self.input);
            tick(&mut self.state, &input);
            self.accumulator -= FRAME_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than spiral
            self.accumulator = self.accumulator.min(FRAME_DT);
        }
        substeps
    }

    /// Run exactly one frame, ignoring wall-clock time
    pub fn step(&mut self) {
        let input = std::mem::take(&mut self.input);
        tick(&mut self.state, &input);
    }

    fn advance_countdown(&mut self, dt: f32) {
        let Some(timer) = self.countdown_timer.as_mut() else {
            return;
        };
        let token = timer.token();
        for _ in 0..timer.advance(dt) {
            if !countdown_tick(&mut self.state, token) {
                break;
            }
        }
        if self.state.countdown.is_none() {
            self.countdown_timer = None;
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.state)
    }

    /// Take the events raised since the last call. Call once per `update`;
    /// the queue is not bounded.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}
