//! Deferred frame-timing reset after activation
//!
//! Loading content on activation stalls the frame driver. Instead of sleeping the
//! gate waits, frame by frame, until the asset loader reports ready or a bounded
//! timeout passes, and tells the screen when to reset elapsed time.

use std::time::Duration;

/// Readiness gate armed by a fresh activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationGate {
    timeout: Duration,
    waited: Option<Duration>,
}

impl ActivationGate {
    /// Closed gate with the given upper bound on waiting
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout, waited: None }
    }

    /// Start waiting; re-arming restarts the wait
    pub fn arm(&mut self) {
        self.waited = Some(Duration::ZERO);
    }

    /// Stop waiting without opening
    pub fn cancel(&mut self) {
        if self.waited.take().is_some() {
            log::debug!("Activation gate cancelled");
        }
    }

    /// Whether the gate is armed and not yet open
    pub const fn is_pending(&self) -> bool {
        self.waited.is_some()
    }

    /// Feed one frame; returns `true` on the frame the gate opens
    pub fn poll(&mut self, elapsed: Duration, assets_ready: bool) -> bool {
        let Some(waited) = self.waited else {
            return false;
        };
        let waited = waited + elapsed;

        if assets_ready || waited >= self.timeout {
            if !assets_ready {
                log::warn!("Assets still loading after {:?}, resuming anyway", self.timeout);
            }
            self.waited = None;
            true
        } else {
            self.waited = Some(waited);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(100);

    #[test]
    fn test_idle_gate_never_opens() {
        let mut gate = ActivationGate::new(Duration::from_secs(1));
        assert!(!gate.poll(FRAME, true));
    }

    #[test]
    fn test_opens_once_when_ready() {
        let mut gate = ActivationGate::new(Duration::from_secs(1));
        gate.arm();

        assert!(!gate.poll(FRAME, false));
        assert!(gate.poll(FRAME, true));
        assert!(!gate.poll(FRAME, true));
    }

    #[test]
    fn test_opens_on_timeout() {
        let mut gate = ActivationGate::new(Duration::from_millis(300));
        gate.arm();

        assert!(!gate.poll(FRAME, false));
        assert!(!gate.poll(FRAME, false));
        assert!(gate.poll(FRAME, false));
        assert!(!gate.is_pending());
    }

    #[test]
    fn test_cancel_disarms() {
        let mut gate = ActivationGate::new(Duration::from_secs(1));
        gate.arm();
        gate.cancel();

        assert!(!gate.poll(FRAME, true));
    }
}
