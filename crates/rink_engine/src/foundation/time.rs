//! Time management utilities

use std::time::Duration;

/// Snapshot of frame timing handed to every update and draw call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameTime {
    elapsed: Duration,
    total: Duration,
}

impl GameTime {
    /// Create a frame time from the elapsed and accumulated durations
    pub const fn new(elapsed: Duration, total: Duration) -> Self {
        Self { elapsed, total }
    }

    /// Time since the previous frame
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Time since the previous frame in seconds
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Total game time accumulated so far
    pub const fn total(&self) -> Duration {
        self.total
    }
}

/// Frame timer producing [`GameTime`] snapshots
///
/// Advances in fixed steps so headless drivers stay deterministic.
pub struct Timer {
    total: Duration,
    frame_count: u64,
    reset_pending: bool,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            total: Duration::ZERO,
            frame_count: 0,
            reset_pending: false,
        }
    }

    /// Advance by a fixed step instead of reading the clock
    pub fn advance(&mut self, step: Duration) -> GameTime {
        let elapsed = if self.reset_pending {
            self.reset_pending = false;
            Duration::ZERO
        } else {
            step
        };
        self.total += elapsed;
        self.frame_count += 1;
        GameTime::new(elapsed, self.total)
    }

    /// Report zero elapsed time on the next frame
    ///
    /// Used after long stalls such as content loading so that the first frame
    /// afterwards does not try to catch up.
    pub fn reset_elapsed(&mut self) {
        log::debug!("Frame timer elapsed time reset");
        self.reset_pending = true;
    }

    /// Get the current frame count
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the total elapsed game time
    pub const fn total(&self) -> Duration {
        self.total
    }
}
