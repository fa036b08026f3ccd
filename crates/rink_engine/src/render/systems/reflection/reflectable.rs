//! The reflectable capability and the non-owning registration list

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::foundation::time::GameTime;
use crate::render::api::GraphicsDevice;
use crate::render::primitives::{Camera, ClipPlane};
use crate::render::RenderResult;

/// Anything that can be drawn into the reflection pass
///
/// Implementors must render correctly both with a clip plane active and with none.
pub trait Reflectable {
    /// Set or clear the clip plane applied to subsequent draws
    fn set_clip_plane(&mut self, plane: Option<ClipPlane>);

    /// Draw from the given camera into the bound surface
    fn draw(&mut self, device: &mut dyn GraphicsDevice, time: &GameTime, camera: &Camera) -> RenderResult<()>;
}

/// Reflectable shared between its owner and the reflection renderer
pub type SharedReflectable = Rc<RefCell<dyn Reflectable>>;

/// Registration list holding weak references in registration order
#[derive(Default)]
pub struct ReflectableRegistry {
    entries: Vec<Weak<RefCell<dyn Reflectable>>>,
}

impl ReflectableRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reflectable; duplicates are kept
    pub fn register(&mut self, reflectable: &SharedReflectable) {
        self.entries.push(Rc::downgrade(reflectable));
    }

    /// Number of registrations, including ones whose owner has gone away
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was ever registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Draw every live reflectable with `plane` set around its own draw call
    ///
    /// Entries whose owner has gone away or currently holds a borrow are skipped.
    /// The plane is cleared again even when the draw fails.
    pub fn draw_clipped(
        &self,
        device: &mut dyn GraphicsDevice,
        time: &GameTime,
        camera: &Camera,
        plane: ClipPlane,
    ) -> RenderResult<()> {
        for (index, entry) in self.entries.iter().enumerate() {
            let Some(reflectable) = entry.upgrade() else {
                log::warn!("Reflectable #{} was dropped by its owner, skipping", index);
                continue;
            };
            let Ok(mut reflectable) = reflectable.try_borrow_mut() else {
                log::warn!("Reflectable #{} is already borrowed, skipping", index);
                continue;
            };

            reflectable.set_clip_plane(Some(plane));
            let result = reflectable.draw(device, time, camera);
            reflectable.set_clip_plane(None);
            result?;
        }
        Ok(())
    }
}
