//! Saturating score counter

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    value: u32,
    cap: u32,
}

impl Score {
    pub fn new(cap: u32) -> Self {
        Self { value: 0, cap }
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[inline]
    pub fn cap(&self) -> u32 {
        self.cap
    }

    /// Add one point, saturating at the cap. Returns the new value.
    pub fn increment(&mut self) -> u32 {
        self.value = self.value.saturating_add(1).min(self.cap);
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}
