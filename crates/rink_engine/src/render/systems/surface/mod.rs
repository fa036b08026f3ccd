//! Surface compositing parameters
//!
//! The reflective surface blends its own texture with the reflection map using a
//! small set of tunable values. [`SurfaceShaderState`] owns those values and the
//! bounded steps that change them; pushing them to the effect is the renderer's job.

pub mod shader_state;

pub use shader_state::{BlurMode, SurfaceShaderState};
