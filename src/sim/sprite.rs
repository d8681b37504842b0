//! Pre-decoded RGBA sprite
//!
//! The simulation only reads dimensions and per-pixel alpha. Rotation grows
//! the bounding box, so a creep's apparent size depends on its heading.

use glam::Vec2;

/// RGBA pixel
pub type Rgba = [u8; 4];

const TRANSPARENT: Rgba = [0, 0, 0, 0];

/// A row-major RGBA image
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Sprite {
    /// Wrap decoded pixels. Returns `None` if the buffer doesn't match the size.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<Rgba>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Solid rectangle of one color
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Build a sprite by evaluating `f(x, y)` for every pixel
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgba) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as a vector (w, h)
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel at (x, y), or `None` outside the image
    pub fn pixel_at(&self, x: i64, y: i64) -> Option<Rgba> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Alpha at (x, y), or `None` outside the image
    #[inline]
    pub fn alpha_at(&self, x: i64, y: i64) -> Option<u8> {
        self.pixel_at(x, y).map(|p| p[3])
    }

    /// Rotate counter-clockwise on screen by `degrees`.
    ///
    /// The result is the axis-aligned box enclosing the rotated image, with
    /// uncovered corners left transparent. Quarter turns keep exact sizes.
    pub fn rotated(&self, degrees: f32) -> Sprite {
        let turns = degrees.rem_euclid(360.0);
        if turns == 0.0 || self.is_empty() {
            return self.clone();
        }

        let (sin, cos) = turns.to_radians().sin_cos();
        let (w, h) = (self.width as f32, self.height as f32);
        // Snap float noise so 90/180/270 don't grow by a pixel
        let new_w = snap_ceil(w * cos.abs() + h * sin.abs());
        let new_h = snap_ceil(w * sin.abs() + h * cos.abs());

        let (cx, cy) = (w / 2.0, h / 2.0);
        let (ncx, ncy) = (new_w as f32 / 2.0, new_h as f32 / 2.0);

        Sprite::from_fn(new_w, new_h, |x, y| {
            let dx = x as f32 + 0.5 - ncx;
            let dy = y as f32 + 0.5 - ncy;
            // Inverse of the screen-space CCW rotation
            let sx = cos * dx - sin * dy + cx;
            let sy = sin * dx + cos * dy + cy;
            self.pixel_at(sx.floor() as i64, sy.floor() as i64)
                .unwrap_or(TRANSPARENT)
        })
    }
}

fn snap_ceil(v: f32) -> u32 {
    let rounded = v.round();
    if (v - rounded).abs() < 1e-3 {
        rounded as u32
    } else {
        v.ceil() as u32
    }
}
