//! # Core Engine Module
//!
//! Shared configuration used by every subsystem.
//!
//! ## Organization
//!
//! - **Config**: Unified configuration for the engine, the reflective surface,
//!   the gameplay screen and asset keys

pub mod config;

// Re-export commonly used config types
pub use config::{
    ApplicationConfig,
    AssetConfig,
    EngineConfig,
    ScreenConfig,
    SurfaceConfig,
};
pub use crate::config::{Config, ConfigError};
