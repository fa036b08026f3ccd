//! Screen transition timing
//!
//! A screen slides between fully on (`position == 0`) and fully off
//! (`position == 1`). The host-facing lifecycle is derived from that position, the
//! direction of travel and whether another screen holds focus.

use std::time::Duration;

/// Raw transition state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Moving towards fully on
    TransitionOn,
    /// Fully on
    Active,
    /// Moving towards fully off
    TransitionOff,
    /// Fully off
    Hidden,
}

/// Lifecycle names the rest of the game reasons in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenLifecycle {
    /// Fully off
    Inactive,
    /// Transitioning on with focus
    Activating,
    /// On and focused
    Active,
    /// On, but another screen has focus
    Overlayed,
    /// Transitioning off
    Deactivating,
}

/// Result of one transition update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStep {
    /// Keep the screen on the stack
    Running,
    /// An exiting screen is fully off and can be removed
    Finished,
}

/// Transition position and state of one screen
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenTransition {
    on_time: Duration,
    off_time: Duration,
    position: f32,
    state: ScreenState,
    is_exiting: bool,
    other_screen_has_focus: bool,
}

impl ScreenTransition {
    /// New screens start fully off and transitioning on
    pub const fn new(on_time: Duration, off_time: Duration) -> Self {
        Self {
            on_time,
            off_time,
            position: 1.0,
            state: ScreenState::TransitionOn,
            is_exiting: false,
            other_screen_has_focus: false,
        }
    }

    /// Advance by one frame
    pub fn update(&mut self, elapsed: Duration, other_screen_has_focus: bool, covered: bool) -> TransitionStep {
        self.other_screen_has_focus = other_screen_has_focus;

        if self.is_exiting {
            self.state = ScreenState::TransitionOff;
            if !self.advance(elapsed, self.off_time, 1.0) {
                log::debug!("Exiting screen finished its transition");
                return TransitionStep::Finished;
            }
        } else if covered {
            self.state = if self.advance(elapsed, self.off_time, 1.0) {
                ScreenState::TransitionOff
            } else {
                ScreenState::Hidden
            };
        } else {
            self.state = if self.advance(elapsed, self.on_time, -1.0) {
                ScreenState::TransitionOn
            } else {
                ScreenState::Active
            };
        }
        TransitionStep::Running
    }

    /// Returns whether the position is still moving
    fn advance(&mut self, elapsed: Duration, time: Duration, direction: f32) -> bool {
        let delta = if time.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / time.as_secs_f32()
        };
        self.position += delta * direction;

        if (direction < 0.0 && self.position <= 0.0) || (direction > 0.0 && self.position >= 1.0) {
            self.position = self.position.clamp(0.0, 1.0);
            return false;
        }
        true
    }

    /// Start transitioning off for good
    ///
    /// With no off time the screen is finished immediately.
    pub fn exit_screen(&mut self) -> TransitionStep {
        if self.off_time.is_zero() {
            TransitionStep::Finished
        } else {
            self.is_exiting = true;
            TransitionStep::Running
        }
    }

    /// 0 when fully on, 1 when fully off
    pub const fn position(&self) -> f32 {
        self.position
    }

    /// 1 when fully on, 0 when fully off
    pub fn alpha(&self) -> f32 {
        1.0 - self.position
    }

    /// Raw transition state
    pub const fn state(&self) -> ScreenState {
        self.state
    }

    /// Whether `exit_screen` was called
    pub const fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    /// Focused and not on its way out
    pub const fn is_active(&self) -> bool {
        !self.other_screen_has_focus && matches!(self.state, ScreenState::TransitionOn | ScreenState::Active)
    }

    /// Lifecycle derived from the state and focus
    pub const fn lifecycle(&self) -> ScreenLifecycle {
        match self.state {
            ScreenState::Hidden => ScreenLifecycle::Inactive,
            ScreenState::TransitionOff => ScreenLifecycle::Deactivating,
            ScreenState::TransitionOn | ScreenState::Active if self.other_screen_has_focus => {
                ScreenLifecycle::Overlayed
            }
            ScreenState::TransitionOn => ScreenLifecycle::Activating,
            ScreenState::Active => ScreenLifecycle::Active,
        }
    }
}
