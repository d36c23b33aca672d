//! Pre-round countdown
//!
//! The countdown advances on its own wall-clock interval, not the frame
//! tick. Each countdown carries a token; ticks presented with any other
//! token belong to a countdown that has since been replaced and are ignored.

use serde::{Deserialize, Serialize};

/// Identifies one countdown instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountdownToken(pub u64);

/// Result of one countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    /// Still counting, this many ticks left
    Remaining(u32),
    /// Reached zero
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    token: CountdownToken,
    remaining: u32,
}

impl Countdown {
    pub fn new(token: CountdownToken, ticks: u32) -> Self {
        Self {
            token,
            remaining: ticks,
        }
    }

    #[inline]
    pub fn token(&self) -> CountdownToken {
        self.token
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn tick(&mut self) -> CountdownStep {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            CountdownStep::Finished
        } else {
            CountdownStep::Remaining(self.remaining)
        }
    }
}

/// Wall-clock side of the countdown: accumulates real time and reports how
/// many interval boundaries were crossed. Owned by the frame driver.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    token: CountdownToken,
    interval: f32,
    elapsed: f32,
}

impl CountdownTimer {
    pub fn new(token: CountdownToken, interval: f32) -> Self {
        Self {
            token,
            interval,
            elapsed: 0.0,
        }
    }

    #[inline]
    pub fn token(&self) -> CountdownToken {
        self.token
    }

    /// Add wall-clock time, returning the number of ticks that fired
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }
}
