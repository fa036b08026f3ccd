//! # Rendering System
//!
//! Backend-agnostic rendering layer for the rink: the camera, the clip plane, the
//! [`GraphicsDevice`] seam every backend implements, and the reflection and surface
//! systems built on top of it.
//!
//! ## Architecture
//!
//! - **API**: [`GraphicsDevice`] trait plus the handles and descriptors it trades in
//! - **Primitives**: [`Camera`] and [`ClipPlane`]
//! - **Backends**: [`HeadlessDevice`], a recording backend for tests and tooling
//! - **Systems**: the planar reflection pass and the surface shader state
//!
//! ## Frame Ordering
//!
//! The reflection pass (`pre_draw`) must finish before the surface's own `draw` in the
//! same frame. There is no asynchronous texture streaming: the surface effect samples
//! the reflection target that was filled moments earlier.

pub mod api;
pub mod primitives;
pub mod backends;
pub mod systems;

pub use api::{
    BackendResult, DepthFormat, GraphicsDevice, ParameterHandle, ParameterValue, RenderTargetDescriptor,
    RenderTargetHandle, SurfaceFormat, Viewport,
};
pub use backends::headless::{DeviceCommand, HeadlessDevice};
pub use primitives::{Camera, ClipPlane};

use thiserror::Error;

use crate::assets::AssetError;

/// Rendering system errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Renderer initialization failed during setup
    #[error("Renderer initialization failed: {0}")]
    InitializationFailed(String),

    /// A rendering operation failed during execution
    #[error("Rendering failed: {0}")]
    RenderingFailed(String),

    /// Resource creation or management failed
    ///
    /// Occurs when render targets or other GPU resources cannot be created.
    #[error("Resource creation failed: {0}")]
    ResourceCreationFailed(String),

    /// Backend-specific error occurred
    ///
    /// Device loss and failed target binds land here and are left to the host's
    /// device-reset handling.
    #[error("Backend error: {0}")]
    BackendError(String),

    /// An effect does not expose a parameter the renderer needs
    ///
    /// Reported from initialization, never from frame-time parameter pushes.
    #[error("Effect has no parameter named '{0}'")]
    UnknownShaderParameter(String),

    /// A frame operation ran before `initialize`
    #[error("Renderer used before initialization")]
    NotInitialized,

    /// `initialize` ran a second time
    #[error("Renderer already initialized")]
    AlreadyInitialized,

    /// Required content could not be loaded
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
