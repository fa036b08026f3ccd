//! Backend abstraction trait for the rendering system
//!
//! This module defines the trait that rendering backends must implement so the
//! reflection pass, the surface compositing and the screen layer can drive any
//! graphics API through one interface.

use crate::assets::{EffectHandle, ModelHandle, TextureHandle};
use crate::foundation::color::Color;
use crate::foundation::math::Mat4;
use crate::render::RenderError;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Handle to an off-screen render target owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderTargetHandle(pub u64);

/// Handle to a resolved effect parameter
///
/// Obtained once through [`GraphicsDevice::find_parameter`] so frame-time updates
/// never look parameters up by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterHandle(pub u64);

/// Size of the default render surface in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Create a viewport
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Color surface formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceFormat {
    /// 8-bit RGBA
    Color,
}

/// Depth buffer formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthFormat {
    /// No depth buffer
    None,
    /// 16-bit depth
    Depth16,
    /// 24-bit depth
    Depth24,
    /// 24-bit depth with 8-bit stencil
    Depth24Stencil8,
}

/// Creation parameters for an off-screen render target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTargetDescriptor {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Whether to allocate a mip chain
    pub mipmaps: bool,
    /// Color format
    pub surface_format: SurfaceFormat,
    /// Depth format
    pub depth_format: DepthFormat,
}

impl RenderTargetDescriptor {
    /// Color + 24-bit depth target matching a viewport, without mipmaps
    pub const fn color_depth(viewport: Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            mipmaps: false,
            surface_format: SurfaceFormat::Color,
            depth_format: DepthFormat::Depth24,
        }
    }
}

/// Value pushed to an effect parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterValue {
    /// Integer scalar
    Int(i32),
    /// Float scalar
    Float(f32),
    /// 4x4 matrix
    Matrix(Mat4),
    /// Texture loaded through the asset collaborator
    Texture(TextureHandle),
    /// Off-screen render target sampled as a texture
    RenderTarget(RenderTargetHandle),
}

/// Main rendering backend trait
///
/// All calls happen on the render thread, serially within a frame.
pub trait GraphicsDevice {
    /// Get the current viewport of the default render surface
    fn viewport(&self) -> Viewport;

    /// Create an off-screen render target
    fn create_render_target(&mut self, descriptor: &RenderTargetDescriptor) -> BackendResult<RenderTargetHandle>;

    /// Bind an off-screen target, or the default surface with `None`
    fn set_render_target(&mut self, target: Option<RenderTargetHandle>) -> BackendResult<()>;

    /// Currently bound off-screen target, `None` for the default surface
    fn bound_render_target(&self) -> Option<RenderTargetHandle>;

    /// Clear the bound surface's color and depth
    fn clear(&mut self, color: Color) -> BackendResult<()>;

    /// Resolve an effect parameter by name
    fn find_parameter(&self, effect: EffectHandle, name: &str) -> Option<ParameterHandle>;

    /// Push a value to a resolved effect parameter
    fn set_parameter(&mut self, effect: EffectHandle, parameter: ParameterHandle, value: ParameterValue);

    /// Draw a model with an effect into the bound surface
    fn draw_model(&mut self, model: ModelHandle, effect: EffectHandle) -> BackendResult<()>;
}
