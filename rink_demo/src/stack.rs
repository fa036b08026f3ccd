//! Minimal screen stack for the headless driver
//!
//! Overlays have no behaviour of their own here: each one stays on top for a fixed
//! number of frames and is then popped.

use rink_engine::prelude::*;

/// Vector-backed [`ScreenManager`] owning the device and the content
pub struct DemoScreenManager {
    device: HeadlessDevice,
    assets: MemoryAssetLoader,
    overlays: Vec<(OverlayScreen, u32)>,
    overlay_frames: u32,
    reset_requested: bool,
    fade_count: usize,
}

impl DemoScreenManager {
    pub const fn new(device: HeadlessDevice, assets: MemoryAssetLoader, overlay_frames: u32) -> Self {
        Self {
            device,
            assets,
            overlays: Vec::new(),
            overlay_frames,
            reset_requested: false,
            fade_count: 0,
        }
    }

    /// Whether an overlay covers the gameplay screen
    pub fn has_overlay(&self) -> bool {
        !self.overlays.is_empty()
    }

    /// Age the overlays by one frame and pop the expired ones
    pub fn end_frame(&mut self) {
        for (overlay, frames_left) in &mut self.overlays {
            *frames_left = frames_left.saturating_sub(1);
            if *frames_left == 0 {
                log::info!("Closing {:?} overlay", overlay);
            }
        }
        self.overlays.retain(|(_, frames_left)| *frames_left > 0);
    }

    /// Consume a pending frame-timing reset
    pub fn take_reset_request(&mut self) -> bool {
        std::mem::take(&mut self.reset_requested)
    }

    pub const fn device(&self) -> &HeadlessDevice {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut HeadlessDevice {
        &mut self.device
    }

    pub fn assets_mut(&mut self) -> &mut MemoryAssetLoader {
        &mut self.assets
    }

    pub const fn fade_count(&self) -> usize {
        self.fade_count
    }
}

impl ScreenManager for DemoScreenManager {
    fn add_screen(&mut self, overlay: OverlayScreen, controlling_player: Option<PlayerIndex>) {
        log::info!("Pushing {:?} overlay for {:?}", overlay, controlling_player);
        self.overlays.push((overlay, self.overlay_frames));
    }

    fn graphics_and_assets(&mut self) -> (&mut dyn GraphicsDevice, &mut dyn AssetLoader) {
        (&mut self.device, &mut self.assets)
    }

    fn fade_back_buffer_to_black(&mut self, alpha: f32) -> RenderResult<()> {
        log::trace!("Fade to black at {:.3}", alpha);
        self.fade_count += 1;
        Ok(())
    }

    fn reset_elapsed_time(&mut self) {
        self.reset_requested = true;
    }

    fn assets_ready(&self) -> bool {
        self.assets.is_ready()
    }
}
