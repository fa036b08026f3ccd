//! Public rendering API
//!
//! The backend trait and the plain data types passed across it.

pub mod graphics_device;

// Re-export commonly used types
pub use graphics_device::{
    BackendResult, DepthFormat, GraphicsDevice, ParameterHandle, ParameterValue, RenderTargetDescriptor,
    RenderTargetHandle, SurfaceFormat, Viewport,
};
