//! Input vocabulary the simulation understands
//!
//! The host classifies raw events into [`Command`]s; held direction keys
//! are tracked as per-step displacement in [`InputDeltas`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
}

/// Discrete input events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Leave the program (from any phase)
    Quit,
    /// Start a run, or restart after game over
    Start,
    TogglePause,
    DirectionDown(Direction),
    DirectionUp(Direction),
    /// Pointer pressed at a field position
    PointerClick(Vec2),
}

/// Displacement applied to the player per step, one entry per direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputDeltas {
    pub up: f32,
    pub down: f32,
    pub left: f32,
    pub right: f32,
}

impl InputDeltas {
    pub fn get(&self, dir: Direction) -> f32 {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set(&mut self, dir: Direction, magnitude: f32) {
        match dir {
            Direction::Up => self.up = magnitude,
            Direction::Down => self.down = magnitude,
            Direction::Left => self.left = magnitude,
            Direction::Right => self.right = magnitude,
        }
    }

    /// Is a direction currently held?
    pub fn is_held(&self, dir: Direction) -> bool {
        self.get(dir) != 0.0
    }

    /// Net displacement for one step
    pub fn displacement(&self) -> Vec2 {
        Vec2::new(self.right - self.left, self.down - self.up)
    }

    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_keys_cancel() {
        let mut deltas = InputDeltas::default();
        deltas.set(Direction::Left, 5.0);
        deltas.set(Direction::Right, 5.0);
        deltas.set(Direction::Down, 3.0);
        assert_eq!(deltas.displacement(), Vec2::new(0.0, 3.0));
        assert!(deltas.is_held(Direction::Left));
        assert!(!deltas.is_held(Direction::Up));

        deltas.release_all();
        assert_eq!(deltas.displacement(), Vec2::ZERO);
    }
}
