//! The player's dodgeball
//!
//! Steered directly by held direction keys: each step adds a flat
//! displacement, independent of elapsed time. Walls stop it without a bounce.

use std::rc::Rc;

use glam::Vec2;

use super::animation::Animation;
use super::bounds::{ClampPolicy, Rect, clamp_to_bounds};
use super::entity::{EntityConfig, ExplosionTiming, LifeState, advance_explosion, ignite};
use super::input::InputDeltas;
use super::Sprite;
use crate::renderer::{Canvas, centered};

#[derive(Debug, Clone)]
pub struct Dodgeball {
    pub pos: Vec2,
    /// Displacement per step while a key is held
    pub speed: f32,
    sprite: Rc<Sprite>,
    bounds: Rect,
    clamp_policy: ClampPolicy,
    state: LifeState,
    explosion_frames: Option<Rc<[Sprite]>>,
    explosion_timing: ExplosionTiming,
    explosion: Option<Animation>,
}

impl Dodgeball {
    pub fn new(config: EntityConfig) -> Self {
        let pos = config.bounds.inset_for(config.sprite.size()).clamp_point(config.position);
        Self {
            pos,
            speed: config.speed,
            sprite: config.sprite,
            bounds: config.bounds,
            clamp_policy: config.clamp_policy,
            state: LifeState::Alive,
            explosion_frames: config.explosion_frames,
            explosion_timing: config.explosion,
            explosion: None,
        }
    }

    pub fn update(&mut self, deltas: &InputDeltas, elapsed_ms: f32) {
        match self.state {
            LifeState::Alive => {
                let tentative = self.pos + deltas.displacement();
                self.pos = clamp_to_bounds(tentative, &self.inner_bounds(), self.clamp_policy).position;
            }
            LifeState::Exploding => {
                advance_explosion(&mut self.state, &mut self.explosion, elapsed_ms);
            }
            LifeState::Dead => {}
        }
    }

    /// Teleport (pointer placement before a run), kept inside the field
    pub fn move_to(&mut self, point: Vec2) {
        if self.state == LifeState::Alive {
            self.pos = self.inner_bounds().clamp_point(point);
        }
    }

    /// Start the death sequence. No-op unless alive.
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
    pub fn state(&self) -> LifeState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == LifeState::Alive
    }

    /// Explosion finished, nothing left to draw
    pub fn is_removed(&self) -> bool {
        self.state == LifeState::Dead
    }

    pub fn inner_bounds(&self) -> Rect {
        self.bounds.inset_for(self.sprite.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawList;
    use crate::sim::input::Direction;

    fn ball_at(pos: Vec2) -> Dodgeball {
        Dodgeball::new(EntityConfig {
            sprite: Rc::new(Sprite::filled(20, 20, [0, 0, 255, 255])),
            position: pos,
            speed: 5.0,
            bounds: Rect::from_size(300.0, 200.0),
            explosion_frames: Some(vec![Sprite::filled(40, 40, [255, 128, 0, 255]); 2].into()),
            explosion: ExplosionTiming {
                scroll_period_ms: 100.0,
                duration_ms: 200.0,
            },
            clamp_policy: ClampPolicy::FirstViolation,
        })
    }

    fn held(dir: Direction, magnitude: f32) -> InputDeltas {
        let mut deltas = InputDeltas::default();
        deltas.set(dir, magnitude);
        deltas
    }

    #[test]
    fn test_delta_is_per_step_not_per_ms() {
        let mut ball = ball_at(Vec2::new(50.0, 50.0));
        ball.update(&held(Direction::Right, 5.0), 20.0);
        assert_eq!(ball.pos, Vec2::new(55.0, 50.0));
        ball.update(&held(Direction::Right, 5.0), 200.0);
        assert_eq!(ball.pos, Vec2::new(60.0, 50.0));
    }

    #[test]
    fn test_all_directions() {
        let mut ball = ball_at(Vec2::new(100.0, 100.0));
        ball.update(&held(Direction::Up, 5.0), 20.0);
        ball.update(&held(Direction::Left, 5.0), 20.0);
        assert_eq!(ball.pos, Vec2::new(95.0, 95.0));
        ball.update(&held(Direction::Down, 10.0), 20.0);
        assert_eq!(ball.pos, Vec2::new(95.0, 105.0));
    }

    #[test]
    fn test_stops_at_wall() {
        let mut ball = ball_at(Vec2::new(12.0, 100.0));
        ball.update(&held(Direction::Left, 5.0), 20.0);
        assert_eq!(ball.pos.x, 10.0);
        ball.update(&held(Direction::Left, 5.0), 20.0);
        assert_eq!(ball.pos.x, 10.0);
    }

    #[test]
    fn test_move_to_clamps() {
        let mut ball = ball_at(Vec2::new(50.0, 50.0));
        ball.move_to(Vec2::new(1000.0, -5.0));
        assert_eq!(ball.pos, Vec2::new(290.0, 10.0));
    }

    #[test]
    fn test_explosion_freezes_then_removes() {
        let mut ball = ball_at(Vec2::new(50.0, 50.0));
        ball.begin_explosion();
        assert_eq!(ball.state(), LifeState::Exploding);

        ball.update(&held(Direction::Right, 5.0), 100.0);
        assert_eq!(ball.pos, Vec2::new(50.0, 50.0));

        let mut canvas = DrawList::new();
        ball.draw(&mut canvas);
        assert_eq!(canvas.calls()[0].width, 40);
        assert_eq!(canvas.calls()[0].center(), Vec2::new(50.0, 50.0));

        ball.update(&InputDeltas::default(), 101.0);
        assert!(ball.is_removed());
        canvas.clear();
        ball.draw(&mut canvas);
        assert!(canvas.is_empty());
    }
}
