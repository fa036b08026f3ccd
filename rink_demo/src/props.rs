//! Reflectable objects sliding across the ice

use rink_engine::assets::{EffectHandle, ModelHandle};
use rink_engine::prelude::*;

/// Half extents of the playable area in world units
const RINK_HALF_LENGTH: f32 = 30.0;
const RINK_HALF_WIDTH: f32 = 15.0;

/// A moving object drawn in both the main and the reflection pass
pub struct Prop {
    name: &'static str,
    model: ModelHandle,
    effect: EffectHandle,
    position: Vec3,
    velocity: Vec3,
    clip_plane: Option<ClipPlane>,
    clipped_draws: usize,
}

impl Prop {
    pub fn new(name: &'static str, model: ModelHandle, effect: EffectHandle, position: Vec3, velocity: Vec3) -> Self {
        Self {
            name,
            model,
            effect,
            position,
            velocity,
            clip_plane: None,
            clipped_draws: 0,
        }
    }

    /// Slide and bounce off the boards
    pub fn update(&mut self, time: &GameTime) {
        self.position += self.velocity * time.elapsed_secs();

        if self.position.x.abs() > RINK_HALF_LENGTH {
            self.velocity.x = -self.velocity.x;
            self.position.x = self.position.x.clamp(-RINK_HALF_LENGTH, RINK_HALF_LENGTH);
        }
        if self.position.z.abs() > RINK_HALF_WIDTH {
            self.velocity.z = -self.velocity.z;
            self.position.z = self.position.z.clamp(-RINK_HALF_WIDTH, RINK_HALF_WIDTH);
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Draw calls skipped because the prop was below the clip plane
    pub const fn clipped_draws(&self) -> usize {
        self.clipped_draws
    }
}

impl Reflectable for Prop {
    fn set_clip_plane(&mut self, plane: Option<ClipPlane>) {
        self.clip_plane = plane;
    }

    fn draw(&mut self, device: &mut dyn GraphicsDevice, _time: &GameTime, _camera: &Camera) -> RenderResult<()> {
        if self.clip_plane.is_some_and(|plane| plane.is_clipped(self.position)) {
            log::trace!("{} is below the clip plane", self.name);
            self.clipped_draws += 1;
            return Ok(());
        }
        device.draw_model(self.model, self.effect)
    }
}
