//! Creeps: autonomous sprites that wander the field
//!
//! A creep moves along its heading, turns by a multiple of 45° at random
//! intervals and bounces off the field walls. Its sprite is rotated to face
//! the heading, which changes the sprite's bounding box and therefore how
//! close to a wall the creep can get.

use std::rc::Rc;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::Animation;
use super::bounds::{Axis, ClampPolicy, Rect, clamp_to_bounds};
use super::entity::{EntityConfig, ExplosionTiming, LifeState, advance_explosion, ignite};
use super::random::RandomSource;
use super::vector::{VecExt, visual_angle_deg};
use super::Sprite;
use crate::consts::{TURN_INTERVAL_MAX_MS, TURN_INTERVAL_MIN_MS, TURN_STEP_DEG};
use crate::renderer::{Canvas, centered};

/// Half-open range `[min_ms, max_ms)` a creep waits between heading changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnInterval {
    pub min_ms: i32,
    pub max_ms: i32,
}

impl Default for TurnInterval {
    fn default() -> Self {
        Self {
            min_ms: TURN_INTERVAL_MIN_MS,
            max_ms: TURN_INTERVAL_MAX_MS,
        }
    }
}

impl TurnInterval {
    fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.range_i32(self.min_ms, self.max_ms) as f32
    }
}

#[derive(Debug, Clone)]
pub struct Creep {
    pub pos: Vec2,
    /// px/ms
    pub speed: f32,
    /// Unit length while alive
    heading: Vec2,
    base_sprite: Rc<Sprite>,
    /// `base_sprite` rotated to face `heading`
    sprite: Sprite,
    sprite_angle: f32,
    bounds: Rect,
    clamp_policy: ClampPolicy,
    state: LifeState,
    turn_interval: TurnInterval,
    turn_timer_ms: f32,
    turn_threshold_ms: f32,
    explosion_frames: Option<Rc<[Sprite]>>,
    explosion_timing: ExplosionTiming,
    explosion: Option<Animation>,
}

impl Creep {
    /// Create a live creep. The heading is normalized (a zero heading becomes
    /// +x) and the position pulled inside the field if the sprite would overlap
    /// a wall.
    pub fn new<R: RandomSource + ?Sized>(
        config: EntityConfig,
        heading: Vec2,
        turn_interval: TurnInterval,
        rng: &mut R,
    ) -> Self {
        let heading = heading.try_normalize().unwrap_or(Vec2::X);
        let sprite_angle = visual_angle_deg(heading);
        let sprite = config.sprite.rotated(sprite_angle);
        let pos = config.bounds.inset_for(sprite.size()).clamp_point(config.position);

        Self {
            pos,
            speed: config.speed,
            heading,
            base_sprite: config.sprite,
            sprite,
            sprite_angle,
            bounds: config.bounds,
            clamp_policy: config.clamp_policy,
            state: LifeState::Alive,
            turn_interval,
            turn_timer_ms: 0.0,
            turn_threshold_ms: turn_interval.draw(rng),
            explosion_frames: config.explosion_frames,
            explosion_timing: config.explosion,
            explosion: None,
        }
    }

    pub fn update<R: RandomSource + ?Sized>(&mut self, elapsed_ms: f32, rng: &mut R) {
        match self.state {
            LifeState::Alive => {
                self.maybe_turn(elapsed_ms, rng);
                self.pos += self.heading * self.speed * elapsed_ms;
                self.refresh_sprite();
                self.bounce();
            }
            LifeState::Exploding => {
                advance_explosion(&mut self.state, &mut self.explosion, elapsed_ms);
            }
            LifeState::Dead => {}
        }
    }

    fn maybe_turn<R: RandomSource + ?Sized>(&mut self, elapsed_ms: f32, rng: &mut R) {
        self.turn_timer_ms += elapsed_ms;
        if self.turn_timer_ms <= self.turn_threshold_ms {
            return;
        }
        let steps = rng.range_i32(-1, 2);
        if steps != 0 {
            // Renormalize so repeated turns don't drift off unit length
            self.heading = self
                .heading
                .rotated_deg(TURN_STEP_DEG * steps as f32)
                .normalize_or_zero();
            log::debug!("creep at {:?} turned {}°", self.pos, TURN_STEP_DEG * steps as f32);
        }
        self.turn_timer_ms = 0.0;
        self.turn_threshold_ms = self.turn_interval.draw(rng);
    }

    fn refresh_sprite(&mut self) {
        let angle = visual_angle_deg(self.heading);
        if angle != self.sprite_angle {
            self.sprite = self.base_sprite.rotated(angle);
            self.sprite_angle = angle;
        }
    }

    fn bounce(&mut self) {
        let inner = self.bounds.inset_for(self.sprite.size());
        let clamped = clamp_to_bounds(self.pos, &inner, self.clamp_policy);
        self.pos = clamped.position;
        if clamped.hit_axis(Axis::X) {
            self.heading.x = -self.heading.x;
        }
        if clamped.hit_axis(Axis::Y) {
            self.heading.y = -self.heading.y;
        }
    }

    /// Pixel-accurate hit test: is `point` on an opaque pixel of the sprite?
    pub fn hit_test(&self, point: Vec2) -> bool {
        sprite_hit(&self.sprite, self.pos, point)
    }

    /// Switch to the explosion animation. No-op unless alive.
    pub fn begin_explosion(&mut self) {
        if self.state != LifeState::Alive {
            return;
        }
        let (state, explosion) = ignite(self.explosion_frames.as_ref(), self.pos, self.explosion_timing);
        self.state = state;
        self.explosion = explosion;
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        match self.state {
            LifeState::Alive => canvas.blit(&self.sprite, centered(&self.sprite, self.pos)),
            LifeState::Exploding => {
                if let Some(explosion) = &self.explosion {
                    explosion.draw(canvas);
                }
            }
            LifeState::Dead => {}
        }
    }

    #[inline]
    pub fn heading(&self) -> Vec2 {
        self.heading
    }

    #[inline]
    pub fn state(&self) -> LifeState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == LifeState::Alive
    }

    pub fn is_dead(&self) -> bool {
        self.state == LifeState::Dead
    }

    /// Sprite as currently rotated
    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Region the centre is kept inside for the current sprite rotation
    pub fn inner_bounds(&self) -> Rect {
        self.bounds.inset_for(self.sprite.size())
    }
}

/// Hit test against a sprite drawn centred at `center`. Points off the
/// image are misses.
fn sprite_hit(sprite: &Sprite, center: Vec2, point: Vec2) -> bool {
    let top_left = (center - sprite.size() / 2.0).floor();
    let local = (point - top_left).floor();
    sprite
        .alpha_at(local.x as i64, local.y as i64)
        .is_some_and(|alpha| alpha > 0)
}
