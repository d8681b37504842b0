//! Platform abstraction layer
//!
//! Things the simulation never touches directly:
//! - Frame pacing against the wall clock
//! - Background music

use std::thread;
use std::time::{Duration, Instant};

/// Caps the loop at a target frame rate and reports the elapsed time of
/// each frame in milliseconds.
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / target_fps.max(1),
            last: Instant::now(),
        }
    }

    /// Target duration of one frame
    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Sleep out the rest of the current frame, then return the time since
    /// the previous call (ms).
    pub fn tick(&mut self) -> f32 {
        let spent = self.last.elapsed();
        if spent < self.frame {
            thread::sleep(self.frame - spent);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed.as_secs_f32() * 1000.0
    }
}

/// Music output
pub trait AudioSink {
    /// Start the looping background track
    fn start_music(&mut self);
    fn is_playing(&self) -> bool;
}

/// Sink for headless runs: only logs
#[derive(Debug, Default)]
pub struct SilentAudio {
    playing: bool,
}

impl AudioSink for SilentAudio {
    fn start_music(&mut self) {
        if !self.playing {
            log::info!("Music requested; no audio device, staying silent");
            self.playing = true;
        }
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(FrameClock::new(50).frame_duration(), Duration::from_millis(20));
        // Zero would divide by zero; treated as 1 fps
        assert_eq!(FrameClock::new(0).frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_tick_waits_out_the_frame() {
        let mut clock = FrameClock::new(100);
        let elapsed = clock.tick();
        assert!(elapsed >= 9.9, "elapsed {elapsed}");
    }

    #[test]
    fn test_silent_audio() {
        let mut audio = SilentAudio::default();
        assert!(!audio.is_playing());
        audio.start_music();
        audio.start_music();
        assert!(audio.is_playing());
    }
}
