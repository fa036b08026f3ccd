//! # Screens
//!
//! The gameplay screen and the collaborators it talks to. The screen stack itself
//! lives in the host: [`ScreenManager`] is the slice of it the gameplay screen needs
//! (pushing overlays, clearing and fading the back buffer, resetting frame timing).
//!
//! ## Frame Contract
//!
//! The host calls, serially and in this order each frame:
//! [`GameplayScreen::handle_input`] (only while the screen has focus),
//! [`GameplayScreen::update`], then [`GameplayScreen::draw`].

pub mod activation;
pub mod gameplay;
pub mod pause;
pub mod session;
pub mod transition;


pub use activation::ActivationGate;
pub use gameplay::GameplayScreen;
pub use pause::{fade_alpha, PauseFade};
pub use session::{GameSession, NetworkSession, SessionError, SessionFactory};
pub use transition::{ScreenLifecycle, ScreenState, ScreenTransition, TransitionStep};

use thiserror::Error;

use crate::assets::{AssetError, AssetLoader};
use crate::foundation::color::Color;
use crate::input::PlayerIndex;
use crate::render::{GraphicsDevice, RenderError, RenderResult};

/// Overlay screens the gameplay screen can push
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayScreen {
    /// Pause menu
    Pause,
    /// Surface properties menu
    Properties,
}

/// What input handling did this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Nothing intercepted; gameplay input belongs to the session
    Forwarded,
    /// The pause overlay was pushed
    Paused,
    /// The properties overlay was pushed
    PropertiesOpened,
}

/// Screen-level errors
#[derive(Error, Debug)]
pub enum ScreenError {
    /// The game session failed
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Screen content could not be loaded
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Clearing or fading the back buffer failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// A local screen received input without a controlling player
    #[error("Screen has no controlling player")]
    MissingControllingPlayer,
}

/// Services the host's screen stack provides to a screen
pub trait ScreenManager {
    /// Push an overlay above the calling screen
    fn add_screen(&mut self, overlay: OverlayScreen, controlling_player: Option<PlayerIndex>);

    /// Device and content loader borrowed together, for content that needs both
    fn graphics_and_assets(&mut self) -> (&mut dyn GraphicsDevice, &mut dyn AssetLoader);

    /// Device drawing into the back buffer
    fn graphics_device(&mut self) -> &mut dyn GraphicsDevice {
        self.graphics_and_assets().0
    }

    /// Content loader
    fn assets(&mut self) -> &mut dyn AssetLoader {
        self.graphics_and_assets().1
    }

    /// Clear the back buffer
    fn clear_back_buffer(&mut self, color: Color) -> RenderResult<()> {
        self.graphics_device().clear(color)
    }

    /// Blend a black quad with the given opacity over the back buffer
    fn fade_back_buffer_to_black(&mut self, alpha: f32) -> RenderResult<()>;

    /// Make the next frame report zero elapsed time
    fn reset_elapsed_time(&mut self);

    /// Whether requested content is resident
    fn assets_ready(&self) -> bool {
        true
    }
}
