//! Scene objects driven by a game session

pub mod entity;

pub use entity::GameEntity;
