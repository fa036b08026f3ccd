//! Resolved parameter bindings of the surface effect

use crate::assets::{EffectHandle, TextureHandle};
use crate::foundation::math::Mat4;
use crate::render::api::{GraphicsDevice, ParameterHandle, ParameterValue, RenderTargetHandle, Viewport};
use crate::render::systems::surface::BlurMode;
use crate::render::{RenderError, RenderResult};

/// Surface texture sampled under the reflection
pub const SURFACE_TEXTURE: &str = "IceSurfaceTexture";
/// Viewport width in pixels
pub const VIEWPORT_WIDTH: &str = "viewportWidth";
/// Viewport height in pixels
pub const VIEWPORT_HEIGHT: &str = "viewportHeight";
/// Blur kernel index
pub const BLUR_TYPE: &str = "blurType";
/// Blur radius
pub const BLUR_AMOUNT: &str = "blurAmount";
/// Surface transparency
pub const TRANSPARENCY: &str = "iceTransparency";
/// View matrix of the mirrored camera
pub const REFLECTED_VIEW: &str = "ReflectedView";
/// Filled reflection target
pub const REFLECTION_MAP: &str = "ReflectionMap";
/// Object transform
pub const WORLD: &str = "World";
/// Live camera view matrix
pub const VIEW: &str = "View";
/// Live camera projection matrix
pub const PROJECTION: &str = "Projection";

/// Every parameter the surface effect must expose
pub const SURFACE_PARAMETER_NAMES: [&str; 11] = [
    SURFACE_TEXTURE,
    VIEWPORT_WIDTH,
    VIEWPORT_HEIGHT,
    BLUR_TYPE,
    BLUR_AMOUNT,
    TRANSPARENCY,
    REFLECTED_VIEW,
    REFLECTION_MAP,
    WORLD,
    VIEW,
    PROJECTION,
];

/// Surface effect with all of its parameters resolved to handles
#[derive(Debug, Clone, Copy)]
pub struct SurfaceEffect {
    effect: EffectHandle,
    surface_texture: ParameterHandle,
    viewport_width: ParameterHandle,
    viewport_height: ParameterHandle,
    blur_type: ParameterHandle,
    blur_amount: ParameterHandle,
    transparency: ParameterHandle,
    reflected_view: ParameterHandle,
    reflection_map: ParameterHandle,
    world: ParameterHandle,
    view: ParameterHandle,
    projection: ParameterHandle,
}

impl SurfaceEffect {
    /// Resolve every surface parameter on `effect`
    ///
    /// # Errors
    /// [`RenderError::UnknownShaderParameter`] naming the first parameter the effect
    /// does not expose.
    pub fn bind(device: &dyn GraphicsDevice, effect: EffectHandle) -> RenderResult<Self> {
        let find = |name: &str| {
            device
                .find_parameter(effect, name)
                .ok_or_else(|| RenderError::UnknownShaderParameter(name.to_string()))
        };

        Ok(Self {
            effect,
            surface_texture: find(SURFACE_TEXTURE)?,
            viewport_width: find(VIEWPORT_WIDTH)?,
            viewport_height: find(VIEWPORT_HEIGHT)?,
            blur_type: find(BLUR_TYPE)?,
            blur_amount: find(BLUR_AMOUNT)?,
            transparency: find(TRANSPARENCY)?,
            reflected_view: find(REFLECTED_VIEW)?,
            reflection_map: find(REFLECTION_MAP)?,
            world: find(WORLD)?,
            view: find(VIEW)?,
            projection: find(PROJECTION)?,
        })
    }

    /// Effect the bindings belong to
    pub const fn handle(&self) -> EffectHandle {
        self.effect
    }

    pub(crate) fn set_surface_texture(&self, device: &mut dyn GraphicsDevice, texture: TextureHandle) {
        device.set_parameter(self.effect, self.surface_texture, ParameterValue::Texture(texture));
    }

    pub(crate) fn set_viewport(&self, device: &mut dyn GraphicsDevice, viewport: Viewport) {
        let width = i32::try_from(viewport.width).unwrap_or(i32::MAX);
        let height = i32::try_from(viewport.height).unwrap_or(i32::MAX);
        device.set_parameter(self.effect, self.viewport_width, ParameterValue::Int(width));
        device.set_parameter(self.effect, self.viewport_height, ParameterValue::Int(height));
    }

    pub(crate) fn set_blur_mode(&self, device: &mut dyn GraphicsDevice, mode: BlurMode) {
        device.set_parameter(self.effect, self.blur_type, ParameterValue::Int(mode.index()));
    }

    pub(crate) fn set_blur_amount(&self, device: &mut dyn GraphicsDevice, amount: f32) {
        device.set_parameter(self.effect, self.blur_amount, ParameterValue::Float(amount));
    }

    pub(crate) fn set_transparency(&self, device: &mut dyn GraphicsDevice, transparency: f32) {
        device.set_parameter(self.effect, self.transparency, ParameterValue::Float(transparency));
    }

    pub(crate) fn set_reflected_view(&self, device: &mut dyn GraphicsDevice, view: Mat4) {
        device.set_parameter(self.effect, self.reflected_view, ParameterValue::Matrix(view));
    }

    pub(crate) fn set_reflection_map(&self, device: &mut dyn GraphicsDevice, target: RenderTargetHandle) {
        device.set_parameter(self.effect, self.reflection_map, ParameterValue::RenderTarget(target));
    }

    pub(crate) fn set_transforms(&self, device: &mut dyn GraphicsDevice, world: Mat4, view: Mat4, projection: Mat4) {
        device.set_parameter(self.effect, self.world, ParameterValue::Matrix(world));
        device.set_parameter(self.effect, self.view, ParameterValue::Matrix(view));
        device.set_parameter(self.effect, self.projection, ParameterValue::Matrix(projection));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::HeadlessDevice;

    #[test]
    fn test_bind_reports_first_missing_parameter() {
        let names = SURFACE_PARAMETER_NAMES
            .iter()
            .copied()
            .filter(|name| *name != BLUR_AMOUNT);
        let device = HeadlessDevice::with_parameters(Viewport::new(8, 8), names);

        let error = SurfaceEffect::bind(&device, EffectHandle(3)).unwrap_err();
        assert!(matches!(error, RenderError::UnknownShaderParameter(name) if name == BLUR_AMOUNT));
    }

    #[test]
    fn test_viewport_is_pushed_as_integers() {
        let mut device = HeadlessDevice::new(Viewport::new(1280, 720));
        let effect = SurfaceEffect::bind(&device, EffectHandle(3)).unwrap();

        effect.set_viewport(&mut device, Viewport::new(1280, 720));

        assert_eq!(
            device.parameter_value(EffectHandle(3), VIEWPORT_WIDTH),
            Some(ParameterValue::Int(1280))
        );
        assert_eq!(
            device.parameter_value(EffectHandle(3), VIEWPORT_HEIGHT),
            Some(ParameterValue::Int(720))
        );
    }
}
