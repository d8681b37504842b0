//! Creep Dodge entry point
//!
//! Headless host loop: the autopilot plays one run against the frame clock
//! and every frame is drawn into a recording canvas.
//!
//! Usage: `creep-dodge [settings.json]`

use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use creep_dodge::platform::{AudioSink, FrameClock, SilentAudio};
use creep_dodge::renderer::DrawList;
use creep_dodge::sim::{GamePhase, GameSession, LoopControl, autopilot, tick};
use creep_dodge::{Assets, Error, Settings};

/// Give up after this many frames (five minutes at 50 fps)
const MAX_FRAMES: u64 = 15_000;

fn main() -> Result<(), Error> {
    env_logger::init();
    log::info!("Creep Dodge (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).unwrap_or_else(|err| {
            log::warn!("Could not load settings from {}: {}; using defaults", path, err);
            Settings::default()
        }),
        None => Settings::default(),
    };
    settings.validate()?;

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    log::info!("Game initialized with seed: {}", seed);

    let assets = Assets::procedural()?;
    let mut clock = FrameClock::new(settings.target_fps);
    let mut session = GameSession::new(settings, assets, Pcg32::seed_from_u64(seed));
    let mut audio = SilentAudio::default();
    audio.start_music();

    let mut canvas = DrawList::new();
    let mut frames = 0u64;
    loop {
        let elapsed = clock.tick();
        let input = autopilot::steer(&session);
        if tick(&mut session, &input, elapsed) == LoopControl::Quit {
            break;
        }

        canvas.clear();
        session.draw(&mut canvas);

        frames += 1;
        if frames % u64::from(session.settings.target_fps.saturating_mul(5)) == 0 {
            log::info!("{} ({} sprites drawn)", session.status_line(), canvas.len());
        }

        if session.phase() == GamePhase::GameOver && session.player.is_removed() {
            break;
        }
        if frames >= MAX_FRAMES {
            log::warn!("Frame limit reached, stopping");
            break;
        }
    }

    log::info!("{}", session.status_line());
    println!("Survived {:.2}s", session.survival_secs());
    Ok(())
}
