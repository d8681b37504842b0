//! Demo driver that plays the game on its own
//!
//! Used by the headless binary in place of a keyboard. It flees the nearest
//! live creep once it gets within [`DANGER_RADIUS`], with a pull toward the
//! field centre so it doesn't pin itself against a wall.

use std::cmp::Ordering;

use glam::Vec2;

use super::input::{Command, Direction};
use super::random::RandomSource;
use super::state::{GamePhase, GameSession};
use super::tick::TickInput;

/// Creeps closer than this get the player's attention (px)
pub const DANGER_RADIUS: f32 = 120.0;
/// Weight of the pull toward the field centre
const CENTER_PULL: f32 = 0.6;
/// Ignore axis components smaller than this
const DEADZONE: f32 = 0.25;

/// Commands for the next step
pub fn steer<R: RandomSource>(session: &GameSession<R>) -> TickInput {
    match session.phase() {
        GamePhase::Ready => TickInput::new([Command::Start]),
        GamePhase::Playing => {
            let wanted = wanted_directions(session);
            let commands = Direction::ALL
                .into_iter()
                .filter_map(|dir| {
                    let held = session.input_deltas.is_held(dir);
                    match (wanted.contains(&dir), held) {
                        (true, false) => Some(Command::DirectionDown(dir)),
                        (false, true) => Some(Command::DirectionUp(dir)),
                        _ => None,
                    }
                })
                .collect();
            TickInput { commands }
        }
        GamePhase::Paused | GamePhase::GameOver => TickInput::default(),
    }
}

fn wanted_directions<R: RandomSource>(session: &GameSession<R>) -> Vec<Direction> {
    let me = session.player.pos;
    let nearest = session
        .creeps
        .iter()
        .filter(|creep| creep.is_alive())
        .map(|creep| creep.pos)
        .min_by(|a, b| {
            a.distance_squared(me)
                .partial_cmp(&b.distance_squared(me))
                .unwrap_or(Ordering::Equal)
        });

    let Some(threat) = nearest else {
        return Vec::new();
    };
    if threat.distance(me) > DANGER_RADIUS {
        return Vec::new();
    }

    let field = session.settings.field();
    let half = Vec2::new(field.w, field.h) / 2.0;
    let to_center = (field.center() - me) / half.max(Vec2::ONE);
    let flee = (me - threat).normalize_or_zero() + to_center * CENTER_PULL;

    let mut dirs = Vec::with_capacity(2);
    if flee.x < -DEADZONE {
        dirs.push(Direction::Left);
    } else if flee.x > DEADZONE {
        dirs.push(Direction::Right);
    }
    if flee.y < -DEADZONE {
        dirs.push(Direction::Up);
    } else if flee.y > DEADZONE {
        dirs.push(Direction::Down);
    }
    dirs
}
