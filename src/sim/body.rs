//! The player-controlled body
//!
//! The body never moves horizontally. Vertical motion has two modes:
//! an idle hover driven by the frame counter, and an active fall where
//! gravity accumulates and each impulse snaps velocity to the lift value.

use glam::Vec2;

use crate::tuning::Tuning;

/// Idle hover velocity for a given frame: a bounded sine wave
#[inline]
pub fn hover_velocity(frame: u64, period_divisor: f32, amplitude: f32) -> f32 {
    (frame as f32 / period_divisor).sin() * amplitude
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pos: Vec2,
    /// Vertical velocity in pixels/frame (positive = down)
    pub vel: f32,
    radius: f32,
    gravity: f32,
    lift: f32,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32, gravity: f32, lift: f32) -> Self {
        Self {
            pos,
            vel: 0.0,
            radius,
            gravity,
            lift,
        }
    }

    /// Body at its round start position, at rest
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(
            Vec2::new(tuning.body_x, tuning.body_start_y),
            tuning.body_radius,
            tuning.gravity,
            tuning.lift,
        )
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    #[inline]
    pub fn lift(&self) -> f32 {
        self.lift
    }

    /// Top and bottom of the body's extent
    #[inline]
    pub fn vertical_extent(&self) -> (f32, f32) {
        (self.pos.y - self.radius, self.pos.y + self.radius)
    }

    /// Left and right of the body's extent
    #[inline]
    pub fn horizontal_extent(&self) -> (f32, f32) {
        (self.pos.x - self.radius, self.pos.x + self.radius)
    }

    /// Idle mode: velocity is recomputed, not integrated
    pub fn hover(&mut self, frame: u64, period_divisor: f32, amplitude: f32) {
        self.vel = hover_velocity(frame, period_divisor, amplitude);
    }

    /// Active mode velocity update.
    ///
    /// An impulse overrides whatever gravity has accumulated. Without one,
    /// gravity only applies once the player has provided input this round.
    pub fn fall(&mut self, gravity_active: bool, impulse: bool) {
        if impulse {
            self.vel = self.lift;
        } else if gravity_active {
            self.vel += self.gravity;
        }
    }

    /// Advance position by one frame of velocity
    pub fn integrate(&mut self) {
        self.pos.y += self.vel;
    }

    /// Above the top or below the bottom of the play area
    pub fn out_of_bounds(&self, play_height: f32) -> bool {
        self.pos.y > play_height || self.pos.y < 0.0
    }

    /// Snap back to the vertical center to avoid runaway values
    pub fn recenter(&mut self, play_height: f32) {
        self.pos.y = play_height / 2.0;
    }
}
