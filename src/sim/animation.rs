//! Cyclic frame animation (explosions)
//!
//! Scrolls through its frames once per `scroll_period_ms` and optionally
//! switches itself off for good after `duration_ms`.

use std::rc::Rc;

use glam::Vec2;

use super::Sprite;
use crate::renderer::{Canvas, centered};

/// Duration value meaning "never expires"
pub const INFINITE: f32 = -1.0;

#[derive(Debug, Clone)]
pub struct Animation {
    frames: Rc<[Sprite]>,
    pos: Vec2,
    scroll_period_ms: f32,
    /// Negative means infinite
    duration_ms: f32,
    elapsed_scroll: f32,
    elapsed_duration: f32,
    current_index: usize,
    active: bool,
}

impl Animation {
    /// Returns `None` for an empty frame list.
    pub fn new(frames: Rc<[Sprite]>, pos: Vec2, scroll_period_ms: f32, duration_ms: f32) -> Option<Self> {
        if frames.is_empty() {
            return None;
        }
        Some(Self {
            frames,
            pos,
            scroll_period_ms,
            duration_ms,
            elapsed_scroll: 0.0,
            elapsed_duration: 0.0,
            current_index: 0,
            active: true,
        })
    }

    /// Time each frame stays on screen
    pub fn frame_period_ms(&self) -> f32 {
        self.scroll_period_ms / self.frames.len() as f32
    }

    pub fn update(&mut self, elapsed_ms: f32) {
        let period = self.frame_period_ms();
        self.elapsed_scroll += elapsed_ms;
        if period > 0.0 && self.elapsed_scroll >= period {
            let len = self.frames.len();
            let advanced = (self.elapsed_scroll / period).floor() as usize;
            self.elapsed_scroll = self.elapsed_scroll.rem_euclid(period);
            self.current_index = (self.current_index + advanced % len) % len;
        }

        if self.duration_ms >= 0.0 {
            self.elapsed_duration += elapsed_ms;
            if self.elapsed_duration > self.duration_ms {
                self.active = false;
            }
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        if !self.active {
            return;
        }
        let frame = self.current_frame();
        canvas.blit(frame, centered(frame, self.pos));
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_frame(&self) -> &Sprite {
        &self.frames[self.current_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawList;

    fn frames(n: usize) -> Rc<[Sprite]> {
        (0..n)
            .map(|i| Sprite::filled(2 + i as u32, 2, [255, 255, 255, 255]))
            .collect()
    }

    #[test]
    fn test_empty_frames_rejected() {
        assert!(Animation::new(frames(0), Vec2::ZERO, 100.0, INFINITE).is_none());
    }

    #[test]
    fn test_cycles_one_frame_per_period() {
        let mut anim = Animation::new(frames(4), Vec2::ZERO, 400.0, INFINITE).unwrap();
        let mut seen = vec![anim.current_index()];
        for _ in 0..4 {
            anim.update(100.0);
            seen.push(anim.current_index());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 0]);
        assert!(anim.is_active());
    }

    #[test]
    fn test_partial_period_holds_frame() {
        let mut anim = Animation::new(frames(4), Vec2::ZERO, 400.0, INFINITE).unwrap();
        anim.update(60.0);
        assert_eq!(anim.current_index(), 0);
        anim.update(60.0);
        assert_eq!(anim.current_index(), 1);
    }

    #[test]
    fn test_long_step_skips_frames() {
        let mut anim = Animation::new(frames(4), Vec2::ZERO, 400.0, INFINITE).unwrap();
        anim.update(250.0);
        assert_eq!(anim.current_index(), 2);
    }

    #[test]
    fn test_duration_expires_permanently() {
        let mut anim = Animation::new(frames(2), Vec2::ZERO, 100.0, 1000.0).unwrap();
        for _ in 0..10 {
            anim.update(100.0);
        }
        // Exactly 1000ms is not past the duration yet
        assert!(anim.is_active());
        anim.update(1.0);
        assert!(!anim.is_active());
        anim.update(100.0);
        assert!(!anim.is_active());
    }

    #[test]
    fn test_huge_step_with_tiny_period_terminates() {
        // 0.5ms per frame; one step far larger than f32 can subtract it from
        let mut anim = Animation::new(frames(4), Vec2::ZERO, 2.0, INFINITE).unwrap();
        anim.update(3.0e7);
        assert_eq!(anim.current_index(), 0);
        anim.update(0.5);
        assert_eq!(anim.current_index(), 1);
    }

    #[test]
    fn test_infinite_never_expires() {
        let mut anim = Animation::new(frames(2), Vec2::ZERO, 100.0, INFINITE).unwrap();
        anim.update(1.0e7);
        assert!(anim.is_active());
    }

    #[test]
    fn test_draw_centres_current_frame() {
        let mut anim = Animation::new(frames(2), Vec2::new(50.0, 40.0), 100.0, 100.0).unwrap();
        let mut canvas = DrawList::new();
        anim.draw(&mut canvas);
        assert_eq!(canvas.calls()[0].top_left, Vec2::new(49.0, 39.0));

        anim.update(50.0);
        canvas.clear();
        anim.draw(&mut canvas);
        // Second frame is 3px wide
        assert_eq!(canvas.calls()[0].width, 3);
        assert_eq!(canvas.calls()[0].center(), Vec2::new(50.0, 40.0));

        anim.update(100.0);
        canvas.clear();
        anim.draw(&mut canvas);
        assert!(canvas.is_empty());
    }
}
