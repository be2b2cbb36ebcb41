use std::time::Instant;

use serde::{Deserialize, Serialize};

/// How far the simulation advances per rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Timestep {
    /// Constant number of ticks per frame, independent of frame rate
    Fixed { ticks: f64 },
    /// Wall-clock delta scaled to ticks
    RealTime { ticks_per_second: f64 },
}

impl Default for Timestep {
    fn default() -> Self {
        Timestep::Fixed { ticks: 1.0 }
    }
}

/// Frame metadata - carries frame number and the ticks to simulate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub ticks: f64,
}

impl FrameInfo {
    pub fn new(number: u64, ticks: f64) -> Self {
        Self { number, ticks }
    }
}

/// Infinite iterator that yields one [`FrameInfo`] per frame.
/// Use this in a loop: `for frame in frames { ... }`
#[derive(Debug)]
pub struct FrameIterator {
    timestep: Timestep,
    frame_number: u64,
    last_frame_time: Instant,
}

impl FrameIterator {
    pub fn new(timestep: Timestep) -> Self {
        Self {
            timestep,
            frame_number: 0,
            last_frame_time: Instant::now(),
        }
    }

    fn ticks_since(&self, now: Instant) -> f64 {
        match self.timestep {
            Timestep::Fixed { ticks } => ticks,
            Timestep::RealTime { ticks_per_second } => {
                now.duration_since(self.last_frame_time).as_secs_f64() * ticks_per_second
            }
        }
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new(Timestep::default())
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let info = FrameInfo::new(self.frame_number, self.ticks_since(now));

        self.frame_number += 1;
        self.last_frame_time = now;

        Some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn fixed_step_ignores_wall_clock() {
        let mut frames = FrameIterator::new(Timestep::Fixed { ticks: 1.0 });
        thread::sleep(Duration::from_millis(5));
        let first = frames.next().unwrap();
        let second = frames.next().unwrap();
        assert_eq!(first, FrameInfo::new(0, 1.0));
        assert_eq!(second, FrameInfo::new(1, 1.0));
    }

    #[test]
    fn real_time_scales_delta() {
        let mut frames = FrameIterator::new(Timestep::RealTime { ticks_per_second: 1000.0 });
        thread::sleep(Duration::from_millis(10));
        let info = frames.next().unwrap();
        // Roughly 10ms at 1000 ticks/s
        assert!(info.ticks >= 9.0);
    }

    #[test]
    fn timestep_parses_from_json() {
        let step: Timestep = serde_json::from_str(r#"{"mode":"real_time","ticks_per_second":60.0}"#).unwrap();
        assert_eq!(step, Timestep::RealTime { ticks_per_second: 60.0 });
    }
}
