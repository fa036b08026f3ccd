//! # Planar Reflection
//!
//! Renders every registered [`Reflectable`] from a camera mirrored through the
//! `y = 0` surface into an off-screen target, then composites the surface with that
//! target as its reflection map.
//!
//! ## Pass Ordering
//!
//! 1. Push the mirrored view matrix to the surface effect
//! 2. Bind the reflection target and clear it to the neutral fill
//! 3. For each reflectable in registration order: set the clip plane, draw, clear it
//! 4. Restore the default surface (also on error, via [`RenderTargetScope`])
//! 5. Point the effect's reflection map at the filled target
//! 6. Clear the default surface to the background color

pub mod effect;
pub mod reflectable;
pub mod surface;
pub mod target_scope;

#[cfg(test)]
mod tests;

pub use effect::SurfaceEffect;
pub use reflectable::{Reflectable, ReflectableRegistry, SharedReflectable};
pub use surface::ReflectiveSurface;
pub use target_scope::RenderTargetScope;
