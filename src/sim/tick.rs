//! Per-frame simulation step
//!
//! Order within a frame:
//! 1. Mode gate (Countdown and GameOver are frozen)
//! 2. Body physics (hover or fall) and bounds check
//! 3. Obstacle spawn / scroll / pass / purge
//! 4. Score update for passes
//! 5. Body-vs-obstacle collision (Playing only)

use super::collision::{CollisionCause, first_collision};
use super::machine::end_round;
use super::state::{GameEvent, GameMode, GameState};

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Control impulse (click/tap/space)
    pub impulse: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    let mode = state.mode();
    if !mode.is_simulated() {
        return;
    }
    let playing = mode == GameMode::Playing;

    // --- BODY ---
    let impulse = playing && input.impulse;
    if impulse {
        state.round.input_received = true;
    }
    if playing {
        state.body.fall(state.round.input_received, impulse);
    } else {
        state.body.hover(
            state.round.frame,
            state.tuning.hover_period_divisor,
            state.tuning.hover_amplitude,
        );
    }
    state.body.integrate();

    let play_height = state.tuning.play_height;
    if state.body.out_of_bounds(play_height) {
        state.body.recenter(play_height);
        if playing {
            end_round(state, CollisionCause::Bounds);
            return;
        }
    }

    // --- OBSTACLES ---
    let update = state.advance_field();

    if let Some(id) = update.spawned {
        if let Some(o) = state.field.get(id) {
            let (top, bottom) = (o.top(), o.bottom());
            state.events.push(GameEvent::ObstacleSpawned { id, top, bottom });
        }
    }

    // --- SCORE ---
    for id in update.passed {
        let score = state.round.score.increment();
        state.events.push(GameEvent::ObstaclePassed { id, score });
    }

    // --- COLLISION ---
    if playing {
        if let Some(id) = first_collision(&state.body, &state.field).map(|o| o.id) {
            end_round(state, CollisionCause::Obstacle { id });
            return;
        }
    }

    state.round.frame += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::machine::{countdown_tick, request_start};

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        let token = request_start(&mut state).unwrap();
        for _ in 0..COUNTDOWN_TICKS {
            countdown_tick(&mut state, token);
        }
        state.drain_events();
        state
    }

    #[test]
    fn test_countdown_is_frozen() {
        let mut state = GameState::new(1);
        request_start(&mut state);
        let body = state.body.clone();
        for _ in 0..100 {
            tick(&mut state, &TickInput { impulse: true });
        }
        assert_eq!(state.body, body);
        assert!(state.field.is_empty());
        assert_eq!(state.round.frame, 0);
        assert_eq!(state.time_ticks, 100);
    }

    #[test]
    fn test_idle_hovers_and_scrolls() {
        let mut state = GameState::new(1);
        for _ in 0..200 {
            tick(&mut state, &TickInput { impulse: true });
            assert_eq!(state.mode(), GameMode::Idle);
        }
        // Impulses are ignored outside Playing
        assert!(!state.round.input_received);
        assert_eq!(state.field.len(), 2);
        assert!((state.body.y() - BODY_START_Y).abs() < 40.0);
    }

    #[test]
    fn test_idle_out_of_bounds_recenters() {
        let tuning = crate::tuning::Tuning {
            body_start_y: 719.9,
            ..Default::default()
        };
        let mut state = GameState::with_tuning(6, tuning).unwrap();

        let mut recentered = false;
        for _ in 0..20 {
            let before = state.body.y();
            tick(&mut state, &TickInput::default());
            assert_eq!(state.mode(), GameMode::Idle);
            if state.body.y() < before {
                recentered = true;
                assert_eq!(state.body.y(), PLAY_HEIGHT / 2.0);
                break;
            }
        }
        assert!(recentered);
        assert!(
            !state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::Collision { .. }))
        );
    }

    #[test]
    fn test_suspended_until_first_impulse() {
        let mut state = playing_state(2);
        for _ in 0..120 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.body.vel, 0.0);
        assert_eq!(state.body.y(), BODY_START_Y);

        tick(&mut state, &TickInput { impulse: true });
        assert_eq!(state.body.vel, LIFT);
        assert!(state.round.input_received);

        tick(&mut state, &TickInput::default());
        assert!((state.body.vel - (LIFT + GRAVITY)).abs() < 1e-6);
    }

    #[test]
    fn test_falling_out_of_bounds_ends_round() {
        let mut state = playing_state(3);
        tick(&mut state, &TickInput { impulse: true });
        let mut frames = 0;
        while state.mode() == GameMode::Playing && frames < 1000 {
            tick(&mut state, &TickInput::default());
            frames += 1;
        }
        assert_eq!(state.mode(), GameMode::GameOver);
        // Recentered on the way out
        assert_eq!(state.body.y(), PLAY_HEIGHT / 2.0);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::Collision {
            cause: CollisionCause::Bounds
        }));
    }

    #[test]
    fn test_game_over_freezes_simulation() {
        let mut state = playing_state(4);
        end_round(&mut state, CollisionCause::Bounds);
        let body = state.body.clone();
        let xs: Vec<f32> = state.field.iter().map(|o| o.x).collect();
        let frame = state.round.frame;
        for _ in 0..50 {
            tick(&mut state, &TickInput { impulse: true });
        }
        assert_eq!(state.body, body);
        assert_eq!(state.field.iter().map(|o| o.x).collect::<Vec<_>>(), xs);
        assert_eq!(state.round.frame, frame);
    }

    #[test]
    fn test_obstacle_hit_ends_round() {
        // Every gap ends above the suspended body's bottom extent (380)
        let tuning = crate::tuning::Tuning {
            gap_top_min: 50.0,
            gap_top_max: 100.0,
            ..Default::default()
        };
        let mut state = GameState::with_tuning(5, tuning).unwrap();
        let token = request_start(&mut state).unwrap();
        for _ in 0..COUNTDOWN_TICKS {
            countdown_tick(&mut state, token);
        }

        let mut frames = 0;
        while state.mode() == GameMode::Playing {
            tick(&mut state, &TickInput::default());
            frames += 1;
        }
        // First obstacle's left edge crosses x + r = 220 on frame 354
        assert_eq!(frames, 354);
        assert_eq!(state.mode(), GameMode::GameOver);

        let events = state.drain_events();
        assert!(events.contains(&GameEvent::Collision {
            cause: CollisionCause::Obstacle { id: 1 }
        }));
        let o = state.field.get(1).unwrap();
        assert!(crate::sim::body_hits_obstacle(&state.body, o));
    }
}
