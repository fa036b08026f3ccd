//! Per-frame lifecycle shared by every scene object

use crate::assets::AssetLoader;
use crate::foundation::time::GameTime;
use crate::render::{Camera, GraphicsDevice, RenderResult};

/// Lifecycle hooks a session owner calls on each of its entities
///
/// `initialize` and `load_content` run once before the first frame. Each frame the
/// owner calls `update`, then `pre_draw` on every entity, then `draw`.
pub trait GameEntity {
    /// One-time setup against the graphics device
    fn initialize(&mut self, device: &mut dyn GraphicsDevice) -> RenderResult<()>;

    /// Load additional content
    fn load_content(&mut self, _assets: &mut dyn AssetLoader) -> RenderResult<()> {
        Ok(())
    }

    /// Advance simulation state
    fn update(&mut self, _time: &GameTime) {}

    /// Work that must finish before any entity draws this frame
    fn pre_draw(&mut self, _device: &mut dyn GraphicsDevice, _time: &GameTime, _camera: &Camera) -> RenderResult<()> {
        Ok(())
    }

    /// Draw into the bound surface
    fn draw(&mut self, device: &mut dyn GraphicsDevice, time: &GameTime, camera: &Camera) -> RenderResult<()>;
}
