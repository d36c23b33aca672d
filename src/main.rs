//! Gap Runner entry point
//!
//! The web build is driven from JS through `gap_runner::web`. Natively this
//! runs a headless session with a simple autopilot and logs what happens,
//! which is handy for soak-testing the simulation.
//!
//! Usage: `gap-runner [seed] [max_frames]` (set `RUST_LOG=info` or `debug`)

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use gap_runner::consts::*;
    use gap_runner::sim::GameMode;
    use gap_runner::{AudioDirector, FrameDriver, Settings};

    env_logger::init();
    log::info!("Gap Runner (native, headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(seed_from_clock);
    let max_frames = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(60 * 60);

    let settings = Settings::default();
    let mut audio = AudioDirector::new();
    let mut driver = FrameDriver::new(seed);

    for cmd in audio.boot(&settings) {
        log::debug!("audio: {:?}", cmd);
    }

    // A little attract mode, then start
    for _ in 0..120 {
        driver.update(FRAME_DT);
    }
    driver.start();

    let mut frames = 0u64;
    while frames < max_frames {
        if driver.mode() == GameMode::Playing && autopilot_wants_impulse(&driver) {
            driver.impulse();
        }
        frames += driver.update(FRAME_DT) as u64;

        let events = driver.drain_events();
        for event in &events {
            log::debug!("event: {:?}", event);
        }
        for cmd in audio.on_events(&events, &settings) {
            log::debug!("audio: {:?}", cmd);
        }

        if driver.mode() == GameMode::GameOver {
            break;
        }
    }

    let snapshot = driver.snapshot();
    log::info!(
        "Session over after {} frames: mode {:?}, score {}",
        frames,
        snapshot.mode,
        snapshot.score
    );
    println!("seed {} -> score {} ({:?})", seed, snapshot.score, snapshot.mode);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is gap_runner::web::wasm_main, this is just to satisfy the compiler
}

/// Flap when falling below the middle of the next gap
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_wants_impulse(driver: &gap_runner::FrameDriver) -> bool {
    let state = driver.state();
    let body = &state.body;
    let target = state
        .field
        .iter()
        .find(|o| o.right() >= body.x() - body.radius())
        .map(|o| (o.top() + o.bottom()) / 2.0)
        .unwrap_or(state.tuning().play_height / 2.0);

    body.y() > target + 10.0 && body.vel >= 0.0
}

#[cfg(not(target_arch = "wasm32"))]
fn seed_from_clock() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
