//! Scoped render target binding

use crate::render::api::{GraphicsDevice, RenderTargetHandle};
use crate::render::RenderResult;

/// Keeps an off-screen target bound for as long as the scope lives
///
/// Dropping the scope rebinds the default surface on every exit path. Use
/// [`RenderTargetScope::finish`] on the success path to observe unbind errors.
pub struct RenderTargetScope<'a> {
    device: &'a mut dyn GraphicsDevice,
    target: RenderTargetHandle,
    armed: bool,
}

impl<'a> RenderTargetScope<'a> {
    /// Bind `target` and return the scope that will unbind it
    pub fn bind(device: &'a mut dyn GraphicsDevice, target: RenderTargetHandle) -> RenderResult<Self> {
        device.set_render_target(Some(target))?;
        log::trace!("Bound render target {:?}", target);
        Ok(Self {
            device,
            target,
            armed: true,
        })
    }

    /// Device with the target bound
    pub fn device(&mut self) -> &mut (dyn GraphicsDevice + 'a) {
        &mut *self.device
    }

    /// Target held by this scope
    pub const fn target(&self) -> RenderTargetHandle {
        self.target
    }

    /// Restore the default surface and report the result
    pub fn finish(mut self) -> RenderResult<()> {
        self.armed = false;
        self.device.set_render_target(None)
    }
}

impl Drop for RenderTargetScope<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(err) = self.device.set_render_target(None) {
            log::error!("Failed to restore default surface after {:?}: {}", self.target, err);
        }
    }
}
