//! The reflective rink surface
//!
//! Owns the off-screen reflection target, the registration list and the tunable
//! shader state. Each frame [`ReflectiveSurface::pre_draw`] fills the reflection map
//! from the mirrored camera and [`ReflectiveSurface::draw`] composites the surface
//! with it.

use crate::assets::{AssetLoader, EffectHandle, ModelHandle, TextureHandle};
use crate::core::config::{AssetConfig, SurfaceConfig};
use crate::foundation::color::Color;
use crate::foundation::math::Mat4;
use crate::foundation::time::GameTime;
use crate::render::api::{GraphicsDevice, RenderTargetDescriptor, RenderTargetHandle, Viewport};
use crate::render::primitives::{Camera, ClipPlane};
use crate::render::systems::surface::{BlurMode, SurfaceShaderState};
use crate::render::{RenderError, RenderResult};
use crate::scene::GameEntity;

use super::effect::SurfaceEffect;
use super::reflectable::{ReflectableRegistry, SharedReflectable};
use super::target_scope::RenderTargetScope;

/// Planar-reflection renderer for a flat playing surface
pub struct ReflectiveSurface {
    model: ModelHandle,
    effect_handle: EffectHandle,
    texture: TextureHandle,
    effect: Option<SurfaceEffect>,
    viewport: Viewport,
    reflection_target: RenderTargetHandle,
    registry: ReflectableRegistry,
    state: SurfaceShaderState,
    clip_plane: ClipPlane,
    reflection_clear_color: Color,
    background_color: Color,
    world: Mat4,
}

impl ReflectiveSurface {
    /// Load the surface content and allocate the reflection target
    ///
    /// The target matches the current viewport and is never resized.
    ///
    /// # Errors
    /// Any asset failure is returned as [`RenderError::Asset`]; a target allocation
    /// failure comes straight from the backend.
    pub fn load(
        device: &mut dyn GraphicsDevice,
        assets: &mut dyn AssetLoader,
        config: &SurfaceConfig,
        keys: &AssetConfig,
    ) -> RenderResult<Self> {
        let model = assets.load_model(&keys.surface_model)?;
        let effect_handle = assets.load_effect(&keys.surface_effect)?;
        let texture = assets.load_texture(&keys.surface_texture)?;

        let viewport = device.viewport();
        let reflection_target = device.create_render_target(&RenderTargetDescriptor::color_depth(viewport))?;
        log::debug!(
            "Reflection target {:?} allocated at {}x{}",
            reflection_target,
            viewport.width,
            viewport.height
        );

        Ok(Self {
            model,
            effect_handle,
            texture,
            effect: None,
            viewport,
            reflection_target,
            registry: ReflectableRegistry::new(),
            state: SurfaceShaderState::new(config),
            clip_plane: ClipPlane::surface(),
            reflection_clear_color: config.reflection_clear_color,
            background_color: config.background_color,
            world: Mat4::identity(),
        })
    }

    /// Resolve the effect parameters and push the fixed and initial values
    ///
    /// # Errors
    /// [`RenderError::UnknownShaderParameter`] if the effect lacks a parameter,
    /// [`RenderError::AlreadyInitialized`] on a second call.
    pub fn initialize(&mut self, device: &mut dyn GraphicsDevice) -> RenderResult<()> {
        if self.effect.is_some() {
            return Err(RenderError::AlreadyInitialized);
        }

        let effect = SurfaceEffect::bind(&*device, self.effect_handle)?;
        effect.set_surface_texture(device, self.texture);
        effect.set_viewport(device, self.viewport);
        effect.set_blur_mode(device, self.state.blur_mode());
        effect.set_blur_amount(device, self.state.blur_amount());
        effect.set_transparency(device, self.state.transparency());
        self.effect = Some(effect);

        log::info!(
            "Reflective surface initialized: transparency {:.2}, blur {:.3}, blur mode {}",
            self.state.transparency(),
            self.state.blur_amount(),
            self.state.blur_mode().index()
        );
        Ok(())
    }

    /// Add an object to the reflection pass
    ///
    /// Only a weak reference is kept. Registering the same object twice draws it twice.
    pub fn register(&mut self, reflectable: &SharedReflectable) {
        self.registry.register(reflectable);
        log::debug!("Registered reflectable #{}", self.registry.len() - 1);
    }

    /// Fill the reflection map from the camera mirrored through the surface
    ///
    /// Leaves the default surface bound and cleared to the background color, with
    /// the effect's reflection map pointing at the freshly filled target.
    pub fn render_reflection(
        &mut self,
        device: &mut dyn GraphicsDevice,
        time: &GameTime,
        camera: &Camera,
    ) -> RenderResult<()> {
        let effect = self.effect.ok_or(RenderError::NotInitialized)?;
        let mirrored = camera.mirrored();
        effect.set_reflected_view(device, mirrored.get_view_matrix());

        let mut scope = RenderTargetScope::bind(device, self.reflection_target)?;
        scope.device().clear(self.reflection_clear_color)?;
        self.registry.draw_clipped(scope.device(), time, &mirrored, self.clip_plane)?;
        scope.finish()?;

        effect.set_reflection_map(device, self.reflection_target);
        device.clear(self.background_color)?;
        log::debug!("Reflection pass drew {} reflectables", self.registry.len());
        Ok(())
    }

    /// Hook run before the main draw pass
    pub fn pre_draw(&mut self, device: &mut dyn GraphicsDevice, time: &GameTime, camera: &Camera) -> RenderResult<()> {
        self.render_reflection(device, time, camera)
    }

    /// Composite the surface with its reflection map into the bound surface
    pub fn draw(&mut self, device: &mut dyn GraphicsDevice, _time: &GameTime, camera: &Camera) -> RenderResult<()> {
        let effect = self.effect.ok_or(RenderError::NotInitialized)?;
        effect.set_transforms(device, self.world, camera.get_view_matrix(), camera.get_projection_matrix());
        device.draw_model(self.model, effect.handle())
    }

    /// Raise transparency one step and push it
    pub fn increase_transparency(&mut self, device: &mut dyn GraphicsDevice) -> f32 {
        let value = self.state.increase_transparency();
        self.push_transparency(device);
        value
    }

    /// Lower transparency one step and push it
    pub fn decrease_transparency(&mut self, device: &mut dyn GraphicsDevice) -> f32 {
        let value = self.state.decrease_transparency();
        self.push_transparency(device);
        value
    }

    /// Raise the blur amount one step and push it
    pub fn increase_blur(&mut self, device: &mut dyn GraphicsDevice) -> f32 {
        let value = self.state.increase_blur();
        self.push_blur_amount(device);
        value
    }

    /// Lower the blur amount one step and push it
    pub fn decrease_blur(&mut self, device: &mut dyn GraphicsDevice) -> f32 {
        let value = self.state.decrease_blur();
        self.push_blur_amount(device);
        value
    }

    /// Switch to the next blur mode and push it
    pub fn cycle_blur_mode(&mut self, device: &mut dyn GraphicsDevice) -> BlurMode {
        let mode = self.state.cycle_blur_mode();
        if let Some(effect) = &self.effect {
            effect.set_blur_mode(device, mode);
        }
        mode
    }

    fn push_transparency(&self, device: &mut dyn GraphicsDevice) {
        if let Some(effect) = &self.effect {
            effect.set_transparency(device, self.state.transparency());
        }
    }

    fn push_blur_amount(&self, device: &mut dyn GraphicsDevice) {
        if let Some(effect) = &self.effect {
            effect.set_blur_amount(device, self.state.blur_amount());
        }
    }

    /// Current transparency
    pub const fn transparency(&self) -> f32 {
        self.state.transparency()
    }

    /// Current blur amount
    pub const fn blur_amount(&self) -> f32 {
        self.state.blur_amount()
    }

    /// Current blur mode
    pub const fn blur_mode(&self) -> BlurMode {
        self.state.blur_mode()
    }

    /// The full shader state
    pub const fn shader_state(&self) -> &SurfaceShaderState {
        &self.state
    }

    /// Off-screen target the reflection pass renders into
    pub const fn reflection_target(&self) -> RenderTargetHandle {
        self.reflection_target
    }

    /// Surface effect handle
    pub const fn effect(&self) -> EffectHandle {
        self.effect_handle
    }

    /// Surface geometry handle
    pub const fn model(&self) -> ModelHandle {
        self.model
    }

    /// Number of registrations
    pub fn reflectable_count(&self) -> usize {
        self.registry.len()
    }

    /// Whether `initialize` has run
    pub const fn is_initialized(&self) -> bool {
        self.effect.is_some()
    }
}

impl GameEntity for ReflectiveSurface {
    fn initialize(&mut self, device: &mut dyn GraphicsDevice) -> RenderResult<()> {
        Self::initialize(self, device)
    }

    fn pre_draw(&mut self, device: &mut dyn GraphicsDevice, time: &GameTime, camera: &Camera) -> RenderResult<()> {
        Self::pre_draw(self, device, time, camera)
    }

    fn draw(&mut self, device: &mut dyn GraphicsDevice, time: &GameTime, camera: &Camera) -> RenderResult<()> {
        Self::draw(self, device, time, camera)
    }
}
