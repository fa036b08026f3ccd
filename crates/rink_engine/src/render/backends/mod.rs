//! Backend implementations for the render module
//!
//! Only the recording headless backend ships with the engine. Hardware backends
//! implement [`GraphicsDevice`](crate::render::GraphicsDevice) in the host binary.

/// Recording backend for tests and headless drivers
pub mod headless;
