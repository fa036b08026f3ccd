//! Core rendering primitives

pub mod camera;
pub mod clip_plane;

pub use camera::Camera;
pub use clip_plane::ClipPlane;
