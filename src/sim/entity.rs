//! Pieces shared by creeps and the player token

use std::rc::Rc;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::Animation;
use super::bounds::{ClampPolicy, Rect};
use super::Sprite;
use crate::consts::{EXPLOSION_DURATION_MS, EXPLOSION_SCROLL_PERIOD_MS};

/// Lifecycle of a moving entity. No way back to `Alive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    Alive,
    /// Playing the explosion animation
    Exploding,
    /// Finished; remove from the active set
    Dead,
}

/// Explosion playback parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplosionTiming {
    pub scroll_period_ms: f32,
    /// Negative never expires
    pub duration_ms: f32,
}

impl Default for ExplosionTiming {
    fn default() -> Self {
        Self {
            scroll_period_ms: EXPLOSION_SCROLL_PERIOD_MS,
            duration_ms: EXPLOSION_DURATION_MS,
        }
    }
}

/// Everything needed to construct a creep or the player
#[derive(Debug, Clone)]
pub struct EntityConfig {
    pub sprite: Rc<Sprite>,
    pub position: Vec2,
    /// Creeps: px/ms. Player: px per step while a key is held.
    pub speed: f32,
    pub bounds: Rect,
    /// Without frames an explosion skips straight to `Dead`
    pub explosion_frames: Option<Rc<[Sprite]>>,
    pub explosion: ExplosionTiming,
    pub clamp_policy: ClampPolicy,
}

/// Start the death sequence at `pos`
pub(crate) fn ignite(
    frames: Option<&Rc<[Sprite]>>,
    pos: Vec2,
    timing: ExplosionTiming,
) -> (LifeState, Option<Animation>) {
    let animation = frames.and_then(|frames| {
        Animation::new(frames.clone(), pos, timing.scroll_period_ms, timing.duration_ms)
    });
    match animation {
        Some(animation) => (LifeState::Exploding, Some(animation)),
        None => (LifeState::Dead, None),
    }
}

/// Advance an explosion; flips to `Dead` once the animation has run out
pub(crate) fn advance_explosion(state: &mut LifeState, explosion: &mut Option<Animation>, elapsed_ms: f32) {
    match explosion {
        Some(animation) => {
            animation.update(elapsed_ms);
            if !animation.is_active() {
                *state = LifeState::Dead;
                *explosion = None;
            }
        }
        None => *state = LifeState::Dead,
    }
}
