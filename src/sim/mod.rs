//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod body;
pub mod collision;
pub mod countdown;
pub mod machine;
pub mod obstacles;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use body::{Body, hover_velocity};
pub use collision::{CollisionCause, body_hits_obstacle, first_collision, overlaps_horizontally};
pub use countdown::{Countdown, CountdownStep, CountdownTimer, CountdownToken};
pub use machine::{begin_round, countdown_tick, end_round, request_start, reset_round};
pub use obstacles::{FieldUpdate, Obstacle, ObstacleField};
pub use score::Score;
pub use snapshot::{BodySnapshot, FrameSnapshot, ObstacleSnapshot};
pub use state::{GameEvent, GameMode, GameState, RoundState};
pub use tick::{TickInput, tick};
