//! Session state: phase machine, entity population and time accounting

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::creep::Creep;
use super::dodgeball::Dodgeball;
use super::entity::EntityConfig;
use super::input::{Command, InputDeltas};
use super::random::RandomSource;
use crate::assets::Assets;
use crate::renderer::Canvas;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Creeps shown frozen; the player may place the ball
    Ready,
    /// Active gameplay
    Playing,
    /// Clock and entities frozen
    Paused,
    /// Player exploded; waiting for a restart
    GameOver,
}

impl GamePhase {
    /// Transition table for phase-changing commands. `None` means the
    /// command has no effect in this phase.
    pub fn on(self, command: &Command) -> Option<GamePhase> {
        use GamePhase::*;
        match (self, command) {
            (Ready, Command::Start) => Some(Playing),
            (Playing, Command::TogglePause) => Some(Paused),
            (Paused, Command::TogglePause) => Some(Playing),
            (GameOver, Command::Start) => Some(Ready),
            _ => None,
        }
    }
}

/// One game session, restartable in place
#[derive(Debug)]
pub struct GameSession<R: RandomSource = Pcg32> {
    pub settings: Settings,
    assets: Assets,
    pub(crate) rng: R,
    phase: GamePhase,
    pub creeps: Vec<Creep>,
    pub player: Dodgeball,
    /// Per-step player displacement from held direction keys
    pub input_deltas: InputDeltas,
    /// Survival time; only advances while playing
    pub elapsed_play_time_ms: f64,
    /// Total time stepped, in every phase
    pub clock_ms: f64,
    pub started_at_ms: Option<f64>,
    pub pause_started_at_ms: Option<f64>,
    pub paused_total_ms: f64,
    /// Longest survival this process has seen
    pub best_survival_ms: Option<f64>,
    /// Completed runs
    pub runs: u32,
}

impl<R: RandomSource> GameSession<R> {
    /// Create a session in `Ready` with a freshly randomized population
    pub fn new(settings: Settings, assets: Assets, mut rng: R) -> Self {
        let creeps = spawn_creeps(&settings, &assets, &mut rng);
        let player = spawn_player(&settings, &assets);
        log::info!(
            "New session: {} creeps on a {}x{} field",
            creeps.len(),
            settings.field_width,
            settings.field_height
        );
        Self {
            settings,
            assets,
            rng,
            phase: GamePhase::Ready,
            creeps,
            player,
            input_deltas: InputDeltas::default(),
            elapsed_play_time_ms: 0.0,
            clock_ms: 0.0,
            started_at_ms: None,
            pause_started_at_ms: None,
            paused_total_ms: 0.0,
            best_survival_ms: None,
            runs: 0,
        }
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Apply a phase transition and its entry effects
    pub(crate) fn transition(&mut self, next: GamePhase) {
        use GamePhase::*;
        match (self.phase, next) {
            (Ready, Playing) => {
                self.started_at_ms = Some(self.clock_ms);
                log::info!("Run started");
            }
            (Playing, Paused) => {
                self.pause_started_at_ms = Some(self.clock_ms);
                log::info!("Paused at {:.2}s", self.survival_secs());
            }
            (Paused, Playing) => {
                if let Some(since) = self.pause_started_at_ms.take() {
                    let paused = self.clock_ms - since;
                    self.paused_total_ms += paused;
                    log::info!("Resumed after {:.2}s", paused / 1000.0);
                }
            }
            (GameOver, Ready) => {
                self.restart();
                return;
            }
            (Playing, GameOver) => {
                self.player.begin_explosion();
                self.input_deltas.release_all();
                self.runs += 1;
                let survived = self.elapsed_play_time_ms;
                if self.best_survival_ms.is_none_or(|best| survived > best) {
                    self.best_survival_ms = Some(survived);
                }
                log::info!(
                    "Game over: survived {:.2}s (paused {:.2}s)",
                    survived / 1000.0,
                    self.paused_total_ms / 1000.0
                );
            }
            (from, to) => {
                log::warn!("Ignoring transition {:?} -> {:?}", from, to);
                return;
            }
        }
        self.phase = next;
    }

    /// Rebuild the population and go back to `Ready`. Best time is kept.
    pub fn restart(&mut self) {
        self.creeps = spawn_creeps(&self.settings, &self.assets, &mut self.rng);
        self.player = spawn_player(&self.settings, &self.assets);
        self.input_deltas.release_all();
        self.elapsed_play_time_ms = 0.0;
        self.started_at_ms = None;
        self.pause_started_at_ms = None;
        self.paused_total_ms = 0.0;
        self.phase = GamePhase::Ready;
        log::info!("Session reset with {} creeps", self.creeps.len());
    }

    /// Survival time in seconds
    pub fn survival_secs(&self) -> f64 {
        self.elapsed_play_time_ms / 1000.0
    }

    /// Creep speed for the current survival time
    pub fn current_creep_speed(&self) -> f32 {
        self.settings.creep_speed_for(self.elapsed_play_time_ms)
    }

    /// HUD text for the message board
    pub fn status_line(&self) -> String {
        match self.phase {
            GamePhase::Ready => "Click to place the ball, then start".to_string(),
            GamePhase::Playing => format!("Time: {:.2}s", self.survival_secs()),
            GamePhase::Paused => format!("Time: {:.2}s  [paused]", self.survival_secs()),
            GamePhase::GameOver => {
                let best = self.best_survival_ms.unwrap_or(self.elapsed_play_time_ms);
                format!(
                    "GAME OVER  Time: {:.2}s  Best: {:.2}s  Start to play again",
                    self.survival_secs(),
                    best / 1000.0
                )
            }
        }
    }

    /// Render every creep, then the player
    pub fn draw(&self, canvas: &mut impl Canvas) {
        for creep in &self.creeps {
            creep.draw(canvas);
        }
        self.player.draw(canvas);
    }
}

fn spawn_creeps<R: RandomSource + ?Sized>(settings: &Settings, assets: &Assets, rng: &mut R) -> Vec<Creep> {
    let margin = settings.spawn_margin;
    let (w, h) = (settings.field_width as i32, settings.field_height as i32);
    let sign = |rng: &mut R| if rng.range_i32(0, 2) == 0 { -1.0 } else { 1.0 };

    (0..settings.creep_count)
        .map(|_| {
            let variant = rng.range_i32(0, assets.creep_sprites.len() as i32) as usize;
            let position = Vec2::new(
                rng.range_i32(margin, w - margin) as f32,
                rng.range_i32(margin, h - margin) as f32,
            );
            let heading = Vec2::new(sign(rng), sign(rng));
            let config = EntityConfig {
                sprite: assets.creep_sprites[variant].clone(),
                position,
                speed: settings.creep_base_speed,
                bounds: settings.field(),
                explosion_frames: Some(assets.explosion_frames.clone()),
                explosion: settings.explosion,
                clamp_policy: settings.clamp_policy,
            };
            Creep::new(config, heading, settings.turn_interval, rng)
        })
        .collect()
}

fn spawn_player(settings: &Settings, assets: &Assets) -> Dodgeball {
    Dodgeball::new(EntityConfig {
        sprite: assets.player_sprite.clone(),
        position: settings.player_start,
        speed: settings.player_speed,
        bounds: settings.field(),
        explosion_frames: Some(assets.explosion_frames.clone()),
        explosion: settings.explosion,
        clamp_policy: settings.clamp_policy,
    })
}
