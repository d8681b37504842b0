//! Field bounds and wall clamping
//!
//! Creeps and the player share one clamping routine. It reports which wall
//! was hit so the caller decides what to do with it (creeps bounce, the
//! player just stops).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, y pointing down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle anchored at the origin
    pub fn from_size(w: f32, h: f32) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Grow (or shrink, for negative deltas) around the centre.
    /// Size never goes below zero.
    pub fn inflate(&self, dw: f32, dh: f32) -> Rect {
        let w = (self.w + dw).max(0.0);
        let h = (self.h + dh).max(0.0);
        let c = self.center();
        Rect::new(c.x - w / 2.0, c.y - h / 2.0, w, h)
    }

    /// Region a sprite's centre may occupy while staying fully inside
    pub fn inset_for(&self, sprite_size: Vec2) -> Rect {
        self.inflate(-sprite_size.x, -sprite_size.y)
    }

    /// Inclusive containment
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Clamp both coordinates into the rectangle
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.left(), self.right()),
            p.y.clamp(self.top(), self.bottom()),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Wall crossed by a tentative position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

impl Wall {
    pub fn axis(self) -> Axis {
        match self {
            Wall::Left | Wall::Right => Axis::X,
            Wall::Top | Wall::Bottom => Axis::Y,
        }
    }
}

/// How many walls one clamp call may correct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClampPolicy {
    /// Check left, right, top, bottom in order and fix only the first
    /// violation. A corner overshoot leaves the y axis for the next step.
    #[default]
    FirstViolation,
    /// Fix x and y independently
    PerAxis,
}

/// Outcome of [`clamp_to_bounds`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamped {
    pub position: Vec2,
    /// Wall that was hit. Under `PerAxis` a corner reports the x wall.
    pub wall: Option<Wall>,
    /// Second wall hit in the same call (`PerAxis` corners only)
    pub also: Option<Wall>,
}

impl Clamped {
    /// Did clamping touch this axis?
    pub fn hit_axis(&self, axis: Axis) -> bool {
        self.wall.is_some_and(|w| w.axis() == axis) || self.also.is_some_and(|w| w.axis() == axis)
    }
}

/// Clamp a tentative centre position into `inner`
pub fn clamp_to_bounds(pos: Vec2, inner: &Rect, policy: ClampPolicy) -> Clamped {
    match policy {
        ClampPolicy::FirstViolation => {
            let mut position = pos;
            let wall = if pos.x < inner.left() {
                position.x = inner.left();
                Some(Wall::Left)
            } else if pos.x > inner.right() {
                position.x = inner.right();
                Some(Wall::Right)
            } else if pos.y < inner.top() {
                position.y = inner.top();
                Some(Wall::Top)
            } else if pos.y > inner.bottom() {
                position.y = inner.bottom();
                Some(Wall::Bottom)
            } else {
                None
            };
            Clamped {
                position,
                wall,
                also: None,
            }
        }
        ClampPolicy::PerAxis => {
            let x_wall = if pos.x < inner.left() {
                Some(Wall::Left)
            } else if pos.x > inner.right() {
                Some(Wall::Right)
            } else {
                None
            };
            let y_wall = if pos.y < inner.top() {
                Some(Wall::Top)
            } else if pos.y > inner.bottom() {
                Some(Wall::Bottom)
            } else {
                None
            };
            let (wall, also) = match (x_wall, y_wall) {
                (Some(x), y) => (Some(x), y),
                (None, y) => (y, None),
            };
            Clamped {
                position: inner.clamp_point(pos),
                wall,
                also,
            }
        }
    }
}
