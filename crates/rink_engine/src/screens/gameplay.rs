//! The in-game screen
//!
//! Hosts the game session, darkens itself while paused and turns the pause and
//! properties buttons into overlay screens.

use std::rc::Rc;

use crate::assets::FontHandle;
use crate::core::config::{AssetConfig, ScreenConfig};
use crate::foundation::color::Color;
use crate::foundation::time::GameTime;
use crate::input::{InputAction, InputState, PlayerIndex};

use super::activation::ActivationGate;
use super::pause::{fade_alpha, PauseFade};
use super::session::{GameSession, NetworkSession, SessionFactory};
use super::transition::{ScreenLifecycle, ScreenTransition, TransitionStep};
use super::{InputOutcome, OverlayScreen, ScreenError, ScreenManager};

/// Screen that runs a match
pub struct GameplayScreen {
    transition: ScreenTransition,
    pause: PauseFade,
    gate: ActivationGate,
    pause_action: InputAction,
    properties_action: InputAction,
    controlling_player: Option<PlayerIndex>,
    network: Option<Rc<dyn NetworkSession>>,
    factory: Box<dyn SessionFactory>,
    session: Option<Box<dyn GameSession>>,
    properties_window: bool,
    font_key: String,
    font: Option<FontHandle>,
    background_color: Color,
}

impl GameplayScreen {
    /// Create the screen; the session is built on the first update or draw
    pub fn new(
        config: &ScreenConfig,
        assets: &AssetConfig,
        factory: Box<dyn SessionFactory>,
        network: Option<Rc<dyn NetworkSession>>,
    ) -> Self {
        Self {
            transition: ScreenTransition::new(config.transition_on_time(), config.transition_off_time()),
            pause: PauseFade::new(config.pause_alpha_step),
            gate: ActivationGate::new(config.activation_timeout()),
            pause_action: InputAction::pause(),
            properties_action: InputAction::properties(),
            controlling_player: None,
            network,
            factory,
            session: None,
            properties_window: false,
            font_key: assets.game_font.clone(),
            font: None,
            background_color: config.background_color,
        }
    }

    /// Player whose input drives a local match
    pub fn set_controlling_player(&mut self, player: Option<PlayerIndex>) {
        self.controlling_player = player;
    }

    /// Player whose input drives a local match
    pub const fn controlling_player(&self) -> Option<PlayerIndex> {
        self.controlling_player
    }

    /// Called when the screen is pushed or restored
    ///
    /// A fresh activation loads the screen font and arms the activation gate. A
    /// restored instance keeps what it had.
    pub fn activate(&mut self, instance_preserved: bool, manager: &mut dyn ScreenManager) -> Result<(), ScreenError> {
        if instance_preserved {
            log::debug!("Gameplay screen restored");
            return Ok(());
        }

        self.font = Some(manager.assets().load_font(&self.font_key)?);
        self.gate.arm();
        log::info!("Gameplay screen activated, waiting for content");
        Ok(())
    }

    /// Called when the screen leaves the stack
    pub fn deactivate(&mut self) {
        self.gate.cancel();
        log::info!("Gameplay screen deactivated");
    }

    /// Advance one frame
    ///
    /// `covered` feeds only the pause ramp: the screen itself never transitions off
    /// while covered.
    pub fn update(
        &mut self,
        time: &GameTime,
        other_screen_has_focus: bool,
        covered: bool,
        manager: &mut dyn ScreenManager,
    ) -> Result<TransitionStep, ScreenError> {
        let step = self.transition.update(time.elapsed(), other_screen_has_focus, false);

        if self.gate.poll(time.elapsed(), manager.assets_ready()) {
            log::info!("Content ready, resetting frame timing");
            manager.reset_elapsed_time();
        }

        self.ensure_session(manager)?;
        self.pause.update(covered, self.properties_window);

        if self.transition.is_active() {
            if let Some(session) = self.session.as_mut() {
                session.update(time, manager)?;
            }
        }
        Ok(step)
    }

    /// Check the pause and properties actions
    ///
    /// In a networked match every local gamer is checked in order and the scan stops
    /// at the first one that opens an overlay. A local match checks only the
    /// controlling player.
    pub fn handle_input(&mut self, input: &InputState, manager: &mut dyn ScreenManager) -> Result<InputOutcome, ScreenError> {
        if let Some(network) = self.network.clone() {
            for player in network.local_gamers() {
                let outcome = self.handle_player_input(input, player, manager);
                if outcome != InputOutcome::Forwarded {
                    return Ok(outcome);
                }
            }
            return Ok(InputOutcome::Forwarded);
        }

        let player = self.controlling_player.ok_or(ScreenError::MissingControllingPlayer)?;
        Ok(self.handle_player_input(input, player, manager))
    }

    fn handle_player_input(
        &mut self,
        input: &InputState,
        player: PlayerIndex,
        manager: &mut dyn ScreenManager,
    ) -> InputOutcome {
        let disconnected = input.gamepad_disconnected(player);

        if disconnected || self.pause_action.evaluate(input, Some(player)).is_some() {
            log::info!("Pausing for {:?} (gamepad disconnected: {})", player, disconnected);
            manager.add_screen(OverlayScreen::Pause, self.controlling_player);
            self.properties_window = false;
            return InputOutcome::Paused;
        }

        if self.properties_action.evaluate(input, Some(player)).is_some() {
            log::info!("Opening surface properties for {:?}", player);
            manager.add_screen(OverlayScreen::Properties, self.controlling_player);
            self.properties_window = true;
            return InputOutcome::PropertiesOpened;
        }

        InputOutcome::Forwarded
    }

    /// Draw the session and the fade over it
    pub fn draw(&mut self, time: &GameTime, manager: &mut dyn ScreenManager) -> Result<(), ScreenError> {
        self.ensure_session(manager)?;

        if let Some(session) = self.session.as_mut() {
            session.pre_draw(time, manager)?;
        }
        manager.clear_back_buffer(self.background_color)?;
        if let Some(session) = self.session.as_mut() {
            session.draw(time, manager)?;
        }

        if let Some(alpha) = fade_alpha(self.transition.position(), self.pause.alpha()) {
            manager.fade_back_buffer_to_black(alpha)?;
        }
        Ok(())
    }

    /// Start leaving the stack
    pub fn exit_screen(&mut self) -> TransitionStep {
        self.transition.exit_screen()
    }

    fn ensure_session(&mut self, manager: &mut dyn ScreenManager) -> Result<(), ScreenError> {
        if self.session.is_some() {
            return Ok(());
        }

        let mut session = self.factory.create(manager, self.network.clone())?;
        log::info!("Starting game session");
        let started = session.start(manager);
        // Stored even when start fails so the session is never built twice
        self.session = Some(session);
        started?;
        Ok(())
    }

    /// Current pause darkening
    pub const fn pause_alpha(&self) -> f32 {
        self.pause.alpha()
    }

    /// Whether the properties overlay was the last one opened
    pub const fn is_properties_window(&self) -> bool {
        self.properties_window
    }

    /// Whether the session has been built
    pub const fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Transition timing
    pub const fn transition(&self) -> &ScreenTransition {
        &self.transition
    }

    /// Lifecycle derived from transition and focus
    pub const fn lifecycle(&self) -> ScreenLifecycle {
        self.transition.lifecycle()
    }

    /// Screen font, loaded on fresh activation
    pub const fn font(&self) -> Option<FontHandle> {
        self.font
    }

    /// Whether the screen is still waiting on content after activation
    pub const fn is_waiting_for_content(&self) -> bool {
        self.gate.is_pending()
    }
}
