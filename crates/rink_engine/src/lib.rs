//! # Rink Engine
//!
//! Rendering and screen-state core for an arcade hockey game.
//!
//! ## Features
//!
//! - **Planar Reflections**: Mirrored-camera reflection pass into an off-screen target,
//!   composited onto the ice surface with tunable blur and transparency
//! - **Gameplay Screen**: Transition timing, pause fading and input routing around a
//!   lazily started game session
//! - **Backend Agnostic**: All GPU work goes through the [`render::GraphicsDevice`] trait,
//!   with a recording headless backend for tests and tooling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rink_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApplicationConfig::default();
//!     let mut device = HeadlessDevice::new(Viewport::new(1280, 720));
//!     let mut assets = MemoryAssetLoader::with_keys(&config.assets);
//!
//!     let mut ice = ReflectiveSurface::load(&mut device, &mut assets, &config.surface, &config.assets)?;
//!     ice.initialize(&mut device)?;
//!
//!     let camera = Camera::default();
//!     let time = GameTime::default();
//!     ice.pre_draw(&mut device, &time, &camera)?;
//!     ice.draw(&mut device, &time, &camera)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;

pub mod foundation;
pub mod config;
pub mod assets;
pub mod input;
pub mod render;
pub mod scene;
pub mod screens;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, AssetLoader, MemoryAssetLoader},
        core::config::{ApplicationConfig, AssetConfig, EngineConfig, ScreenConfig, SurfaceConfig},
        foundation::{
            color::Color,
            math::{Mat4, Mat4Ext, Vec3, Vec4},
            time::{GameTime, Timer},
        },
        input::{GamePadState, GamepadButtons, InputAction, InputState, KeyCode, KeyboardState, PlayerIndex},
        render::{
            Camera, ClipPlane, GraphicsDevice, HeadlessDevice, RenderError, RenderResult, Viewport,
            systems::reflection::{Reflectable, ReflectiveSurface, SharedReflectable},
            systems::surface::{BlurMode, SurfaceShaderState},
        },
        scene::GameEntity,
        screens::{
            GameSession, GameplayScreen, InputOutcome, NetworkSession, OverlayScreen, ScreenError,
            ScreenLifecycle, ScreenManager, SessionError, SessionFactory, TransitionStep,
        },
    };
}
