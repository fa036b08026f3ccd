//! Named input actions mapping buttons and keys to a single command

use super::{GamepadButtons, InputState, KeyCode, PlayerIndex};

/// A command triggered by any of a set of gamepad buttons or keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputAction {
    buttons: Vec<GamepadButtons>,
    keys: Vec<KeyCode>,
    new_press_only: bool,
}

impl InputAction {
    /// Create an action
    ///
    /// # Arguments
    /// * `buttons` - Gamepad buttons that trigger the action
    /// * `keys` - Keys that trigger the action
    /// * `new_press_only` - Trigger only on the frame a button or key goes down
    pub fn new(
        buttons: impl IntoIterator<Item = GamepadButtons>,
        keys: impl IntoIterator<Item = KeyCode>,
        new_press_only: bool,
    ) -> Self {
        Self {
            buttons: buttons.into_iter().collect(),
            keys: keys.into_iter().collect(),
            new_press_only,
        }
    }

    /// Start, Back or Escape
    pub fn pause() -> Self {
        Self::new([GamepadButtons::START, GamepadButtons::BACK], [KeyCode::Escape], true)
    }

    /// Y or F1
    pub fn properties() -> Self {
        Self::new([GamepadButtons::Y], [KeyCode::F1], true)
    }

    /// Check the action against the current snapshots
    ///
    /// With `controlling_player` set only that player's input counts; with `None`
    /// any player may trigger it. Returns the player that triggered the action.
    pub fn evaluate(&self, input: &InputState, controlling_player: Option<PlayerIndex>) -> Option<PlayerIndex> {
        let from_buttons = self.buttons.iter().find_map(|&button| {
            if self.new_press_only {
                input.is_new_button_press(button, controlling_player)
            } else {
                input.is_button_pressed(button, controlling_player)
            }
        });

        from_buttons.or_else(|| {
            self.keys.iter().find_map(|&key| {
                if self.new_press_only {
                    input.is_new_key_press(key, controlling_player)
                } else {
                    input.is_key_pressed(key, controlling_player)
                }
            })
        })
    }
}
