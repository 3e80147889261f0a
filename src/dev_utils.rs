// src/dev_utils.rs

use std::time::{Duration, Instant};

/// A simple RAII timer for one phase of the pipeline.
/// When it goes out of scope (is dropped), the elapsed wall-clock time is logged at info level.
#[derive(Debug)]
pub struct PhaseTimer {
    name: &'static str,
    start: Instant,
}

impl PhaseTimer {
    /// Creates a new timer and starts it immediately.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    /// Time since the timer started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for PhaseTimer {
    fn drop(&mut self) {
        log::info!("Phase '{}' took {:.2?}", self.name, self.elapsed());
    }
}
