//! Browser bridge
//!
//! JS owns the canvas, the audio elements and the menu DOM. It forwards
//! clicks/keys as `impulse()`, the New Game button as `start()`, and calls
//! `frame()` from `requestAnimationFrame`, drawing from the returned JSON.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::audio::{AudioCommand, AudioDirector};
use crate::driver::FrameDriver;
use crate::settings::Settings;
use crate::sim::{FrameSnapshot, GameEvent};
use crate::tuning::Tuning;

/// Everything JS needs after one animation frame
#[derive(Serialize)]
struct FrameReport {
    snapshot: FrameSnapshot,
    events: Vec<GameEvent>,
    audio: Vec<AudioCommand>,
}

#[wasm_bindgen]
pub struct WebGame {
    driver: FrameDriver,
    audio: AudioDirector,
    settings: Settings,
    pending_audio: Vec<AudioCommand>,
    last_time: Option<f64>,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a session. `settings_json` is whatever was saved last time.
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> WebGame {
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let settings = Settings::load(settings_json.as_deref());
        let mut audio = AudioDirector::new();
        let pending_audio = audio.boot(&settings);
        log::info!("Game initialized with seed: {}", seed);
        WebGame {
            driver: FrameDriver::new(seed),
            audio,
            settings,
            pending_audio,
            last_time: None,
        }
    }

    /// New Game button
    pub fn start(&mut self) {
        self.driver.start();
    }

    /// Click / tap / space
    pub fn impulse(&mut self) {
        self.driver.impulse();
    }

    /// Advance to `now_ms` (the rAF timestamp) and return a JSON frame report
    pub fn frame(&mut self, now_ms: f64) -> Result<String, JsValue> {
        let dt = match self.last_time {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_time = Some(now_ms);
        self.driver.update(dt);

        let events = self.driver.drain_events();
        let mut audio = std::mem::take(&mut self.pending_audio);
        audio.extend(self.audio.on_events(&events, &self.settings));

        let report = FrameReport {
            snapshot: self.driver.snapshot(),
            events,
            audio,
        };
        serde_json::to_string(&report).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Settings panel changed; returns the JSON to persist
    pub fn apply_settings(&mut self, json: &str) -> Result<String, JsValue> {
        let settings = Settings::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.settings = settings;
        self.settings
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Gameplay override, applied from the next round
    pub fn apply_tuning(&mut self, json: &str) -> Result<(), JsValue> {
        let tuning = Tuning::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.driver
            .set_tuning(tuning)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Page was hidden; don't replay the gap as one huge delta
    pub fn reset_clock(&mut self) {
        self.last_time = None;
    }
}

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Gap Runner starting...");
}
