//! Per-frame keyboard and gamepad snapshots

use std::collections::HashSet;

use super::{GamepadButtons, KeyCode, PlayerIndex, MAX_PLAYERS};

/// Keys held down at the moment of the snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Snapshot with the given keys held
    pub fn with_keys(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            pressed: keys.into_iter().collect(),
        }
    }

    /// Whether a key is held
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }
}

/// Gamepad connectivity and held buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GamePadState {
    /// Whether the pad is plugged in
    pub connected: bool,
    /// Buttons held
    pub buttons: GamepadButtons,
}

impl GamePadState {
    /// Connected pad with the given buttons held
    pub const fn connected(buttons: GamepadButtons) -> Self {
        Self { connected: true, buttons }
    }

    /// Unplugged pad
    pub const fn disconnected() -> Self {
        Self {
            connected: false,
            buttons: GamepadButtons::empty(),
        }
    }

    /// Whether every button in `buttons` is held
    pub const fn is_button_down(&self, buttons: GamepadButtons) -> bool {
        self.connected && self.buttons.contains(buttons)
    }
}

/// Current and previous input snapshots for every local player
///
/// The platform layer calls [`InputState::update`] once per frame; everything else is
/// read-only.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    current_keyboards: [KeyboardState; MAX_PLAYERS],
    current_gamepads: [GamePadState; MAX_PLAYERS],
    last_keyboards: [KeyboardState; MAX_PLAYERS],
    last_gamepads: [GamePadState; MAX_PLAYERS],
    gamepad_was_connected: [bool; MAX_PLAYERS],
}

impl InputState {
    /// Create an input state with nothing pressed and no pads ever seen
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll the current snapshots into the previous ones and store new readings
    pub fn update(&mut self, keyboards: [KeyboardState; MAX_PLAYERS], gamepads: [GamePadState; MAX_PLAYERS]) {
        self.last_keyboards = std::mem::replace(&mut self.current_keyboards, keyboards);
        self.last_gamepads = std::mem::replace(&mut self.current_gamepads, gamepads);

        for (latched, pad) in self.gamepad_was_connected.iter_mut().zip(&self.current_gamepads) {
            if pad.connected {
                *latched = true;
            }
        }
    }

    /// Current keyboard snapshot for a player
    pub fn keyboard(&self, player: PlayerIndex) -> &KeyboardState {
        &self.current_keyboards[player.index()]
    }

    /// Current gamepad snapshot for a player
    pub fn gamepad(&self, player: PlayerIndex) -> &GamePadState {
        &self.current_gamepads[player.index()]
    }

    /// Whether a gamepad has ever been connected in this player slot
    pub const fn gamepad_was_connected(&self, player: PlayerIndex) -> bool {
        self.gamepad_was_connected[player.index()]
    }

    /// A pad that was once connected is now unplugged
    pub fn gamepad_disconnected(&self, player: PlayerIndex) -> bool {
        !self.gamepad(player).connected && self.gamepad_was_connected(player)
    }

    /// Key went down this frame, for `controlling_player` or any player when `None`
    pub fn is_new_key_press(&self, key: KeyCode, controlling_player: Option<PlayerIndex>) -> Option<PlayerIndex> {
        Self::players(controlling_player).find(|player| {
            let i = player.index();
            self.current_keyboards[i].is_key_down(key) && !self.last_keyboards[i].is_key_down(key)
        })
    }

    /// Button went down this frame, for `controlling_player` or any player when `None`
    pub fn is_new_button_press(
        &self,
        button: GamepadButtons,
        controlling_player: Option<PlayerIndex>,
    ) -> Option<PlayerIndex> {
        Self::players(controlling_player).find(|player| {
            let i = player.index();
            self.current_gamepads[i].is_button_down(button) && !self.last_gamepads[i].is_button_down(button)
        })
    }

    /// Key currently held, for `controlling_player` or any player when `None`
    pub fn is_key_pressed(&self, key: KeyCode, controlling_player: Option<PlayerIndex>) -> Option<PlayerIndex> {
        Self::players(controlling_player).find(|player| self.current_keyboards[player.index()].is_key_down(key))
    }

    /// Button currently held, for `controlling_player` or any player when `None`
    pub fn is_button_pressed(
        &self,
        button: GamepadButtons,
        controlling_player: Option<PlayerIndex>,
    ) -> Option<PlayerIndex> {
        Self::players(controlling_player).find(|player| self.current_gamepads[player.index()].is_button_down(button))
    }

    fn players(controlling_player: Option<PlayerIndex>) -> impl Iterator<Item = PlayerIndex> {
        PlayerIndex::ALL
            .into_iter()
            .filter(move |player| controlling_player.map_or(true, |controlling| controlling == *player))
    }
}
