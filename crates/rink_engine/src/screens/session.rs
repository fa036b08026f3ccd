//! The game session owner and its construction
//!
//! The session is where gameplay actually happens. The gameplay screen creates it
//! lazily through a [`SessionFactory`], starts it once, and afterwards only forwards
//! frame calls to it.

use std::rc::Rc;

use thiserror::Error;

use crate::foundation::time::GameTime;
use crate::input::PlayerIndex;
use crate::render::RenderError;

use super::ScreenManager;

/// Session errors
#[derive(Error, Debug)]
pub enum SessionError {
    /// The session could not start
    #[error("Session failed to start: {0}")]
    StartFailed(String),

    /// A frame update or draw failed
    #[error("Session frame failed: {0}")]
    Frame(String),

    /// Rendering inside the session failed
    #[error("Session render error: {0}")]
    Render(#[from] RenderError),
}

/// Networked match the screen was opened for
pub trait NetworkSession {
    /// Players signed in on this machine, in the session's order
    fn local_gamers(&self) -> Vec<PlayerIndex>;
}

/// Owner of the running game
pub trait GameSession {
    /// Called exactly once, right after construction
    fn start(&mut self, manager: &mut dyn ScreenManager) -> Result<(), SessionError>;

    /// Advance the game by one frame
    fn update(&mut self, time: &GameTime, manager: &mut dyn ScreenManager) -> Result<(), SessionError>;

    /// Work that must run before the back buffer is cleared, such as off-screen passes
    fn pre_draw(&mut self, _time: &GameTime, _manager: &mut dyn ScreenManager) -> Result<(), SessionError> {
        Ok(())
    }

    /// Draw the game into the back buffer
    fn draw(&mut self, time: &GameTime, manager: &mut dyn ScreenManager) -> Result<(), SessionError>;
}

/// Builds the session for a gameplay screen
pub trait SessionFactory {
    /// Construct (but do not start) a session
    fn create(
        &mut self,
        manager: &mut dyn ScreenManager,
        network: Option<Rc<dyn NetworkSession>>,
    ) -> Result<Box<dyn GameSession>, SessionError>;
}
