//! Sprite set handed to the session
//!
//! Decoding image files is the host's job; this module only validates what it
//! is given. [`Assets::procedural`] draws a stand-in set so the game runs
//! without any files on disk.

use std::rc::Rc;

use glam::Vec2;

use crate::error::{Error, Result};
use crate::sim::{Rgba, Sprite};

const CREEP_SIZE: u32 = 24;
const PLAYER_SIZE: u32 = 20;
const EXPLOSION_SIZE: u32 = 48;

const CLEAR: Rgba = [0, 0, 0, 0];

#[derive(Debug, Clone)]
pub struct Assets {
    /// Creep variants, one picked at random per creep
    pub creep_sprites: Vec<Rc<Sprite>>,
    pub player_sprite: Rc<Sprite>,
    pub explosion_frames: Rc<[Sprite]>,
}

impl Assets {
    /// Validate a decoded sprite set. Any failure here is fatal at startup.
    pub fn new(creep_sprites: Vec<Sprite>, player_sprite: Sprite, explosion_frames: Vec<Sprite>) -> Result<Self> {
        if creep_sprites.is_empty() {
            return Err(Error::NoCreepSprites);
        }
        if creep_sprites.iter().any(Sprite::is_empty) {
            return Err(Error::EmptySprite { name: "creep" });
        }
        if player_sprite.is_empty() {
            return Err(Error::EmptySprite { name: "player" });
        }
        if explosion_frames.is_empty() {
            return Err(Error::NoExplosionFrames);
        }
        if explosion_frames.iter().any(Sprite::is_empty) {
            return Err(Error::EmptySprite { name: "explosion" });
        }

        Ok(Self {
            creep_sprites: creep_sprites.into_iter().map(Rc::new).collect(),
            player_sprite: Rc::new(player_sprite),
            explosion_frames: explosion_frames.into(),
        })
    }

    /// Built-in shapes: circle, triangle, square and cross creeps, a ball for
    /// the player and a two-frame starburst explosion.
    pub fn procedural() -> Result<Self> {
        let creeps = vec![
            cross(CREEP_SIZE, [90, 90, 90, 255]),
            circle(CREEP_SIZE, [40, 160, 60, 255]),
            triangle(CREEP_SIZE, [200, 150, 30, 255]),
            square(CREEP_SIZE, [60, 90, 200, 255]),
        ];
        let player = circle(PLAYER_SIZE, [220, 40, 40, 255]);
        let burst = starburst(EXPLOSION_SIZE, [255, 140, 0, 255]);
        let frames = vec![burst.clone(), burst.rotated(180.0)];
        Self::new(creeps, player, frames)
    }
}

/// Offset of a pixel centre from the middle of a `size` square
fn offset(x: u32, y: u32, size: u32) -> Vec2 {
    let half = size as f32 / 2.0;
    Vec2::new(x as f32 + 0.5 - half, y as f32 + 0.5 - half)
}

pub fn circle(size: u32, color: Rgba) -> Sprite {
    let r = size as f32 / 2.0;
    Sprite::from_fn(size, size, |x, y| {
        if offset(x, y, size).length() <= r { color } else { CLEAR }
    })
}

pub fn square(size: u32, color: Rgba) -> Sprite {
    // One pixel of transparent border so rotation edges stay crisp
    Sprite::from_fn(size, size, |x, y| {
        if x == 0 || y == 0 || x + 1 == size || y + 1 == size { CLEAR } else { color }
    })
}

/// Triangle pointing right (heading 0°)
pub fn triangle(size: u32, color: Rgba) -> Sprite {
    let half = size as f32 / 2.0;
    Sprite::from_fn(size, size, |x, y| {
        let p = offset(x, y, size);
        // Width shrinks linearly from the left edge to the tip
        let reach = half * (half - p.x) / size as f32;
        if p.y.abs() <= reach { color } else { CLEAR }
    })
}

pub fn cross(size: u32, color: Rgba) -> Sprite {
    let arm = size as f32 / 8.0;
    let r = size as f32 / 2.0;
    Sprite::from_fn(size, size, |x, y| {
        let p = offset(x, y, size);
        let on_arm = (p.x - p.y).abs() <= arm || (p.x + p.y).abs() <= arm;
        if on_arm && p.length() <= r { color } else { CLEAR }
    })
}

/// Eight-pointed star
pub fn starburst(size: u32, color: Rgba) -> Sprite {
    let r = size as f32 / 2.0;
    Sprite::from_fn(size, size, |x, y| {
        let p = offset(x, y, size);
        let spikes = (p.y.atan2(p.x) * 4.0).cos().abs();
        if p.length() <= r * (0.45 + 0.55 * spikes) { color } else { CLEAR }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_procedural_set_is_valid() {
        let assets = Assets::procedural().unwrap();
        assert_eq!(assets.creep_sprites.len(), 4);
        assert_eq!(assets.explosion_frames.len(), 2);
        assert_eq!(assets.player_sprite.width(), PLAYER_SIZE);
    }

    #[test]
    fn test_shapes_are_opaque_in_the_middle() {
        for sprite in [
            circle(24, [1, 1, 1, 255]),
            square(24, [1, 1, 1, 255]),
            cross(24, [1, 1, 1, 255]),
            starburst(24, [1, 1, 1, 255]),
        ] {
            assert_eq!(sprite.alpha_at(12, 12), Some(255));
            assert_eq!(sprite.alpha_at(0, 0), Some(0));
        }
        // Triangle is widest at its base on the left
        let t = triangle(24, [1, 1, 1, 255]);
        assert_eq!(t.alpha_at(1, 12), Some(255));
        assert_eq!(t.alpha_at(23, 0), Some(0));
    }

    #[test]
    fn test_rejects_missing_pieces() {
        let ok = || Sprite::filled(4, 4, [1, 1, 1, 255]);
        assert!(matches!(
            Assets::new(vec![], ok(), vec![ok()]),
            Err(Error::NoCreepSprites)
        ));
        assert!(matches!(
            Assets::new(vec![ok()], ok(), vec![]),
            Err(Error::NoExplosionFrames)
        ));
        assert!(matches!(
            Assets::new(vec![ok()], Sprite::filled(0, 4, [0; 4]), vec![ok()]),
            Err(Error::EmptySprite { name: "player" })
        ));
        assert!(Assets::new(vec![ok()], ok(), vec![ok()]).is_ok());
    }
}
