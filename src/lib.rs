//! Gap Runner - a side-scrolling gap-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (body physics, obstacles, collisions, game state)
//! - `driver`: Wall-clock to fixed-frame stepping and the countdown timer
//! - `tuning`: Data-driven gameplay constants
//! - `settings`: Presentation-only preferences
//! - `audio`: Maps simulation events to cue commands for the audio layer

pub mod audio;
pub mod driver;
pub mod settings;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use audio::{AudioCommand, AudioDirector};
pub use driver::FrameDriver;
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed frame step (one simulation frame per 60 Hz display refresh)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum frames per driver update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest wall-clock delta accepted by a single driver update (seconds)
    pub const MAX_FRAME_DELTA: f32 = 0.25;

    /// Play area dimensions
    pub const PLAY_WIDTH: f32 = 1280.0;
    pub const PLAY_HEIGHT: f32 = 720.0;

    /// Body defaults
    pub const BODY_X: f32 = 200.0;
    pub const BODY_START_Y: f32 = 360.0;
    pub const BODY_RADIUS: f32 = 20.0;
    /// Added to velocity every frame once the player has flapped
    pub const GRAVITY: f32 = 0.35;
    /// Velocity set on each impulse (negative = up)
    pub const LIFT: f32 = -8.0;

    /// Idle hover: velocity = sin(frame / HOVER_PERIOD_DIVISOR) * HOVER_AMPLITUDE
    pub const HOVER_PERIOD_DIVISOR: f32 = 20.0;
    pub const HOVER_AMPLITUDE: f32 = 0.8;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    /// Pixels per frame, leftward
    pub const OBSTACLE_SPEED: f32 = 3.0;
    pub const GAP_HEIGHT: f32 = 180.0;
    /// Gap top is drawn uniformly from [GAP_TOP_MIN, GAP_TOP_MAX)
    pub const GAP_TOP_MIN: f32 = 50.0;
    pub const GAP_TOP_MAX: f32 = 350.0;
    /// Frames between spawns
    pub const SPAWN_PERIOD: u64 = 120;

    pub const SCORE_CAP: u32 = 999;

    /// Countdown length in discrete ticks
    pub const COUNTDOWN_TICKS: u32 = 3;
    /// Wall-clock seconds between countdown ticks
    pub const COUNTDOWN_INTERVAL: f32 = 1.0;
}
