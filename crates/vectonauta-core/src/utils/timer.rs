// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CPU timing primitives for the frame loop.

use std::time::{Duration, Instant};

/// Measures wall-clock time since it was started.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    start_time: Instant,
}

impl Stopwatch {
    /// Creates a new, running stopwatch.
    #[inline]
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Returns the elapsed time since the stopwatch was started.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Restarts the stopwatch and returns the time elapsed before the restart.
    #[inline]
    pub fn restart(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time);
        self.start_time = now;
        elapsed
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Produces per-frame delta times.
///
/// Either measures real time between ticks, or returns a fixed step every tick
/// (useful for deterministic headless runs).
#[derive(Debug, Clone)]
pub struct FrameClock {
    stopwatch: Stopwatch,
    fixed_step: Option<f32>,
    last_delta: f32,
}

impl FrameClock {
    /// A clock that measures wall-clock time between ticks.
    pub fn measured() -> Self {
        Self {
            stopwatch: Stopwatch::new(),
            fixed_step: None,
            last_delta: 0.0,
        }
    }

    /// A clock that advances by `step` seconds every tick.
    pub fn fixed(step: f32) -> Self {
        Self {
            stopwatch: Stopwatch::new(),
            fixed_step: Some(step),
            last_delta: 0.0,
        }
    }

    /// Marks the start of a new frame and returns the duration of the previous one.
    pub fn tick(&mut self) -> f32 {
        let measured = self.stopwatch.restart().as_secs_f32();
        self.last_delta = self.fixed_step.unwrap_or(measured);
        self.last_delta
    }

    /// The value returned by the most recent [`tick`](Self::tick).
    pub fn delta(&self) -> f32 {
        self.last_delta
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::measured()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn stopwatch_restart_resets_elapsed() {
        let mut watch = Stopwatch::new();
        thread::sleep(Duration::from_millis(5));
        let before = watch.restart();
        assert!(before >= Duration::from_millis(5));
        assert!(watch.elapsed() < before);
    }

    #[test]
    fn fixed_clock_ignores_wall_time() {
        let mut clock = FrameClock::fixed(0.1);
        assert_eq!(clock.delta(), 0.0);
        thread::sleep(Duration::from_millis(2));
        assert_eq!(clock.tick(), 0.1);
        assert_eq!(clock.tick(), 0.1);
        assert_eq!(clock.delta(), 0.1);
    }

    #[test]
    fn measured_clock_reports_elapsed_time() {
        let mut clock = FrameClock::measured();
        clock.tick();
        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();
        assert!(delta >= 0.010, "delta ({delta}) should cover the sleep");
    }
}
