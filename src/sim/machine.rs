//! Mode transitions
//!
//! ```text
//! Idle ──start──▶ Countdown ──3 ticks──▶ Playing ──hit──▶ GameOver
//!                   ▲    │ start (restart)                    │
//!                   │    ▼                                    │
//!                   └────┴───────────────start────────────────┘
//! ```
//!
//! Requests that don't apply to the current mode are no-ops.

use super::body::Body;
use super::collision::CollisionCause;
use super::countdown::{Countdown, CountdownStep, CountdownToken};
use super::state::{GameEvent, GameMode, GameState};
use crate::consts::COUNTDOWN_TICKS;

/// Begin (or restart) the countdown.
///
/// Accepted from Idle and GameOver. A request during an active countdown
/// replaces it, so ticks for the old token stop counting. Returns the token
/// the caller's timer must present, or `None` if the request was ignored.
pub fn request_start(state: &mut GameState) -> Option<CountdownToken> {
    if !state.mode().accepts_start() {
        log::debug!("Start ignored while {:?}", state.mode());
        return None;
    }

    let token = state.next_countdown_token();
    if let Some(old) = state.countdown.replace(Countdown::new(token, COUNTDOWN_TICKS)) {
        log::debug!("Countdown {:?} cancelled by {:?}", old.token(), token);
    }
    state.set_mode(GameMode::Countdown);
    state.events.push(GameEvent::CountdownTick {
        remaining: COUNTDOWN_TICKS,
    });
    log::info!("Countdown started");
    Some(token)
}

/// Apply one countdown tick. Returns false if `token` is stale or no
/// countdown is running.
pub fn countdown_tick(state: &mut GameState, token: CountdownToken) -> bool {
    let Some(countdown) = state.countdown.as_mut() else {
        return false;
    };
    if countdown.token() != token {
        log::debug!("Ignoring stale countdown tick {:?}", token);
        return false;
    }

    match countdown.tick() {
        CountdownStep::Remaining(remaining) => {
            state.events.push(GameEvent::CountdownTick { remaining });
        }
        CountdownStep::Finished => {
            state.countdown = None;
            begin_round(state);
        }
    }
    true
}

/// Reset body, field, score and round counters for a fresh round.
///
/// Applies any pending tuning override. Calling it repeatedly with no
/// frames in between leaves the same state as calling it once.
pub fn reset_round(state: &mut GameState) {
    if state.apply_pending_tuning() {
        log::info!("Applying tuning override");
    }
    state.body = Body::from_tuning(&state.tuning);
    state.field.clear();
    state.round.score.reset();
    state.round.frame = 0;
    state.round.input_received = false;
}

/// Countdown → Playing
pub fn begin_round(state: &mut GameState) {
    reset_round(state);
    state.set_mode(GameMode::Playing);
    log::info!("Round started (seed {})", state.seed);
}

/// Playing → GameOver. Only the first call in a round has any effect.
pub fn end_round(state: &mut GameState, cause: CollisionCause) -> bool {
    if state.mode() != GameMode::Playing {
        return false;
    }
    state.events.push(GameEvent::Collision { cause });
    state.set_mode(GameMode::GameOver);
    log::info!("Game over ({:?}), score {}", cause, state.score());
    true
}
