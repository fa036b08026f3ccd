//! Input snapshots and actions
//!
//! The platform layer fills an [`InputState`] once per frame with keyboard and
//! gamepad snapshots for every local player. Screens only read it, usually through
//! an [`InputAction`] describing which buttons or keys trigger a command.

pub mod state;
pub mod action;

pub use action::InputAction;
pub use state::{GamePadState, InputState, KeyboardState};

use bitflags::bitflags;

/// Number of local players tracked by the input layer
pub const MAX_PLAYERS: usize = 4;

/// Local player slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerIndex {
    /// First player
    One,
    /// Second player
    Two,
    /// Third player
    Three,
    /// Fourth player
    Four,
}

impl PlayerIndex {
    /// Every player slot in order
    pub const ALL: [Self; MAX_PLAYERS] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// Zero-based slot index
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
            Self::Four => 3,
        }
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Tab key
    Tab,
    /// F1 function key
    F1,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

bitflags! {
    /// Gamepad buttons held in a snapshot
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GamepadButtons: u16 {
        /// Face button A
        const A = 1 << 0;
        /// Face button B
        const B = 1 << 1;
        /// Face button X
        const X = 1 << 2;
        /// Face button Y
        const Y = 1 << 3;
        /// Start button
        const START = 1 << 4;
        /// Back button
        const BACK = 1 << 5;
        /// Left shoulder
        const LEFT_SHOULDER = 1 << 6;
        /// Right shoulder
        const RIGHT_SHOULDER = 1 << 7;
        /// D-pad up
        const DPAD_UP = 1 << 8;
        /// D-pad down
        const DPAD_DOWN = 1 << 9;
        /// D-pad left
        const DPAD_LEFT = 1 << 10;
        /// D-pad right
        const DPAD_RIGHT = 1 << 11;
    }
}
