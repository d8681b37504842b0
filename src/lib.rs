//! Creep Dodge - keep the dodgeball alive in a field of wandering creeps
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (creeps, player, animation, session state machine)
//! - `renderer`: Draw-call seam the simulation renders through
//! - `platform`: Frame clock and audio seams for the host loop
//! - `settings`: Data-driven game constants
//! - `assets`: Pre-decoded sprite set

pub mod assets;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::Assets;
pub use error::Error;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Steps per second the host loop is capped at
    pub const TARGET_FPS: u32 = 50;

    /// Playing field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 920.0;
    pub const FIELD_HEIGHT: f32 = 540.0;

    /// Creep population per session
    pub const N_CREEPS: usize = 70;
    /// Creep speed at the start of a run (px/ms)
    pub const CREEP_BASE_SPEED: f32 = 0.1;
    /// Added to creep speed for every full difficulty interval survived (px/ms)
    pub const CREEP_SPEED_INCREMENT: f32 = 0.02;
    /// Survival time between difficulty bumps (ms)
    pub const DIFFICULTY_INTERVAL_MS: f32 = 10_000.0;
    /// Random heading-change threshold, half-open [min, max) in ms
    pub const TURN_INTERVAL_MIN_MS: i32 = 700;
    pub const TURN_INTERVAL_MAX_MS: i32 = 3000;
    /// Heading changes are multiples of this angle (degrees)
    pub const TURN_STEP_DEG: f32 = 45.0;
    /// Creeps spawn at least this far from the field edge
    pub const SPAWN_MARGIN: i32 = 5;

    /// Player displacement per step while a direction key is held (px/step)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Player start position
    pub const PLAYER_START_X: f32 = 10.0;
    pub const PLAYER_START_Y: f32 = 10.0;

    /// Explosion animation timing
    pub const EXPLOSION_SCROLL_PERIOD_MS: f32 = 400.0;
    pub const EXPLOSION_DURATION_MS: f32 = 10_000.0;
}
