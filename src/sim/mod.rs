//! Fixed-step simulation module
//!
//! All gameplay logic lives here:
//! - Elapsed time comes in per step, nothing reads the wall clock
//! - Randomness only through an injected [`RandomSource`]
//! - Drawing only through the [`crate::renderer::Canvas`] seam

pub mod animation;
pub mod autopilot;
pub mod bounds;
pub mod creep;
pub mod dodgeball;
pub mod entity;
pub mod input;
pub mod random;
pub mod sprite;
pub mod state;
pub mod tick;
pub mod vector;

pub use animation::Animation;
pub use bounds::{Axis, ClampPolicy, Clamped, Rect, Wall, clamp_to_bounds};
pub use creep::{Creep, TurnInterval};
pub use dodgeball::Dodgeball;
pub use entity::{EntityConfig, ExplosionTiming, LifeState};
pub use input::{Command, Direction, InputDeltas};
pub use random::{RandomSource, SequenceRandom};
pub use sprite::{Rgba, Sprite};
pub use state::{GamePhase, GameSession};
pub use tick::{LoopControl, TickInput, tick};
pub use vector::{VecExt, visual_angle_deg};
