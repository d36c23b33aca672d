//! Read-only view of a finished frame for renderers and HUDs

use serde::{Deserialize, Serialize};

use super::state::{GameMode, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSnapshot {
    pub id: u32,
    pub x: f32,
    pub width: f32,
    pub top: f32,
    pub bottom: f32,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub mode: GameMode,
    pub score: u32,
    /// Countdown value to display, while counting down
    pub countdown: Option<u32>,
    pub play_width: f32,
    pub play_height: f32,
    pub body: BodySnapshot,
    /// Left-to-right
    pub obstacles: Vec<ObstacleSnapshot>,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            mode: state.mode(),
            score: state.score(),
            countdown: state.countdown.as_ref().map(|c| c.remaining()),
            play_width: state.tuning.play_width,
            play_height: state.tuning.play_height,
            body: BodySnapshot {
                x: state.body.x(),
                y: state.body.y(),
                radius: state.body.radius(),
            },
            obstacles: state
                .field
                .iter()
                .map(|o| ObstacleSnapshot {
                    id: o.id,
                    x: o.x,
                    width: o.width(),
                    top: o.top(),
                    bottom: o.bottom(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::tick::{TickInput, tick};

    #[test]
    fn test_capture_reflects_state() {
        let mut state = GameState::new(11);
        for _ in 0..130 {
            tick(&mut state, &TickInput::default());
        }
        let snap = FrameSnapshot::capture(&state);
        assert_eq!(snap.mode, GameMode::Idle);
        assert_eq!(snap.countdown, None);
        assert_eq!(snap.body.x, BODY_X);
        assert_eq!(snap.body.radius, BODY_RADIUS);
        assert_eq!(snap.obstacles.len(), 2);
        assert!(snap.obstacles[0].x < snap.obstacles[1].x);
        assert_eq!(snap.obstacles[0].id, 1);
    }

    #[test]
    fn test_capture_shows_countdown() {
        let mut state = GameState::new(11);
        crate::sim::machine::request_start(&mut state);
        let snap = FrameSnapshot::capture(&state);
        assert_eq!(snap.mode, GameMode::Countdown);
        assert_eq!(snap.countdown, Some(COUNTDOWN_TICKS));
    }
}
