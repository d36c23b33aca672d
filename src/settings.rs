//! Player preferences
//!
//! Presentation only: the simulation never reads these. Persisted by the
//! host as JSON (LocalStorage on web).

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Appearance ===
    /// Body fill color (CSS hex)
    pub body_color: String,
    /// Eye radius in pixels; the pupil is half of this
    pub eye_size: f32,

    // === Audio ===
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Silence everything
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            body_color: "#2ecc71".to_string(),
            eye_size: 6.0,
            sfx_volume: 0.6,
            music_volume: 0.4,
            muted: false,
        }
    }
}

impl Settings {
    /// Largest eye that still fits inside the body
    const MAX_EYE_SIZE: f32 = 12.0;

    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_eye_size(&mut self, size: f32) {
        self.eye_size = size.clamp(0.0, Self::MAX_EYE_SIZE);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Effective effects volume (0 when muted)
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.sfx_volume }
    }

    /// Effective music volume (0 when muted)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.music_volume }
    }

    pub fn pupil_size(&self) -> f32 {
        self.eye_size / 2.0
    }

    /// Clamp any out-of-range values loaded from storage
    fn sanitized(mut self) -> Self {
        let (sfx, music, eye) = (self.sfx_volume, self.music_volume, self.eye_size);
        self.set_sfx_volume(sfx);
        self.set_music_volume(music);
        self.set_eye_size(eye);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Load from stored JSON, falling back to defaults
    pub fn load(stored: Option<&str>) -> Self {
        match stored.map(Self::from_json) {
            Some(Ok(settings)) => {
                log::info!("Loaded settings");
                settings
            }
            Some(Err(e)) => {
                log::warn!("Discarding unreadable settings: {}", e);
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mute_zeroes_volumes() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_sfx_volume(), 0.6);
        settings.set_muted(true);
        assert_eq!(settings.effective_sfx_volume(), 0.0);
        assert_eq!(settings.effective_music_volume(), 0.0);
    }

    #[test]
    fn test_load_clamps_and_falls_back() {
        let settings = Settings::load(Some(r#"{ "sfx_volume": 4.0, "eye_size": 30 }"#));
        assert_eq!(settings.sfx_volume, 1.0);
        assert_eq!(settings.eye_size, 12.0);
        assert_eq!(settings.body_color, "#2ecc71");

        assert_eq!(Settings::load(Some("{ broken")), Settings::default());
        assert_eq!(Settings::load(None), Settings::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.body_color = "#ff0000".to_string();
        settings.set_music_volume(0.1);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
