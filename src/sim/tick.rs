//! Fixed-step session update
//!
//! One call per loop iteration: apply the step's commands in order, then run
//! the logic for the phase the session is in. A step only counts as play time
//! when the session was playing both before and after its commands, so the
//! steps that start, pause or resume a run don't move anything.

use super::input::{Command, InputDeltas};
use super::random::RandomSource;
use super::state::{GamePhase, GameSession};

/// Commands collected for a single step
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn new(commands: impl Into<Vec<Command>>) -> Self {
        Self {
            commands: commands.into(),
        }
    }
}

/// What the host loop should do after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    /// Quit was requested; exit immediately
    Quit,
}

/// Advance the session by one step of `elapsed_ms`
pub fn tick<R: RandomSource>(session: &mut GameSession<R>, input: &TickInput, elapsed_ms: f32) -> LoopControl {
    session.clock_ms += elapsed_ms as f64;
    let phase_before = session.phase();

    for command in &input.commands {
        if matches!(command, Command::Quit) {
            log::info!("Quit requested");
            return LoopControl::Quit;
        }
        apply_command(session, command);
    }

    match session.phase() {
        GamePhase::Playing if phase_before == GamePhase::Playing => step_playing(session, elapsed_ms),
        GamePhase::GameOver => {
            // Only the player's explosion keeps going; creeps stay frozen
            session.player.update(&InputDeltas::default(), elapsed_ms);
        }
        _ => {}
    }

    LoopControl::Continue
}

fn apply_command<R: RandomSource>(session: &mut GameSession<R>, command: &Command) {
    let phase = session.phase();
    let steering = matches!(phase, GamePhase::Playing | GamePhase::Paused);

    match *command {
        Command::Start | Command::TogglePause => {
            if let Some(next) = phase.on(command) {
                session.transition(next);
            }
        }
        Command::DirectionDown(dir) if steering => {
            session.input_deltas.set(dir, session.player.speed);
        }
        Command::DirectionUp(dir) if steering => {
            session.input_deltas.set(dir, 0.0);
        }
        Command::PointerClick(point) if phase == GamePhase::Ready => {
            session.player.move_to(point);
        }
        _ => {}
    }
}

fn step_playing<R: RandomSource>(session: &mut GameSession<R>, elapsed_ms: f32) {
    session.elapsed_play_time_ms += elapsed_ms as f64;
    let speed = session.current_creep_speed();

    session.player.update(&session.input_deltas, elapsed_ms);

    for creep in &mut session.creeps {
        creep.speed = speed;
        creep.update(elapsed_ms, &mut session.rng);
    }
    session.creeps.retain(|creep| !creep.is_dead());

    let target = session.player.pos;
    if session.creeps.iter().any(|creep| creep.is_alive() && creep.hit_test(target)) {
        session.transition(GamePhase::GameOver);
    }
}
