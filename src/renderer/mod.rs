//! Rendering seam
//!
//! The simulation never owns a surface. Entities issue `blit` calls against a
//! [`Canvas`] supplied by the host; [`DrawList`] records them for headless runs
//! and tests.

use glam::Vec2;

use crate::sim::Sprite;

/// Anything that can draw a sprite with its top-left corner at a position
pub trait Canvas {
    fn blit(&mut self, sprite: &Sprite, top_left: Vec2);
}

/// One recorded blit
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub top_left: Vec2,
    pub width: u32,
    pub height: u32,
}

impl DrawCall {
    pub fn center(&self) -> Vec2 {
        self.top_left + Vec2::new(self.width as f32, self.height as f32) / 2.0
    }
}

/// Canvas that records draw calls instead of rasterizing
#[derive(Debug, Default)]
pub struct DrawList {
    calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Start a new frame
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for DrawList {
    fn blit(&mut self, sprite: &Sprite, top_left: Vec2) {
        self.calls.push(DrawCall {
            top_left,
            width: sprite.width(),
            height: sprite.height(),
        });
    }
}

/// Top-left corner that centres `sprite` on `center`
#[inline]
pub fn centered(sprite: &Sprite, center: Vec2) -> Vec2 {
    center - sprite.size() / 2.0
}
