//! Degree-based heading helpers on top of `glam::Vec2`
//!
//! Headings rotate mathematically counter-clockwise. Screen space has y
//! pointing down, so turning a heading into a sprite rotation negates the
//! angle (see [`visual_angle_deg`]).

use glam::Vec2;

pub trait VecExt {
    /// Rotate counter-clockwise by `degrees`
    fn rotated_deg(self, degrees: f32) -> Vec2;
    /// Angle from the +x axis in degrees, in (-180, 180]
    fn angle_deg(self) -> f32;
}

impl VecExt for Vec2 {
    #[inline]
    fn rotated_deg(self, degrees: f32) -> Vec2 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[inline]
    fn angle_deg(self) -> f32 {
        self.y.atan2(self.x).to_degrees()
    }
}

/// Sprite rotation (counter-clockwise on screen) that points the sprite along `heading`
#[inline]
pub fn visual_angle_deg(heading: Vec2) -> f32 {
    -heading.angle_deg()
}
