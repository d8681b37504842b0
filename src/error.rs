//! Crate error type
//!
//! Only startup can fail: bad assets or bad settings. Everything inside the
//! simulation step recovers locally.

use std::path::PathBuf;

/// Errors surfaced to the host before the loop starts
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("sprite `{name}` has zero width or height")]
    EmptySprite { name: &'static str },

    #[error("at least one creep sprite is required")]
    NoCreepSprites,

    #[error("explosion animation needs at least one frame")]
    NoExplosionFrames,

    #[error("failed to read settings from {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, Error>;
