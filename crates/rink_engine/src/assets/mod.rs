//! Asset loading collaborator
//!
//! The engine never reads content itself. Geometry, effects, textures and fonts are
//! requested by string key from an [`AssetLoader`] supplied by the host, which hands
//! back opaque handles the graphics backend understands. Failures here are fatal at
//! startup: there is no partial-asset fallback.

pub mod memory;

pub use memory::MemoryAssetLoader;

use thiserror::Error;

/// Handle to loaded geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelHandle(pub u64);

/// Handle to a loaded shader effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectHandle(pub u64);

/// Handle to a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Handle to a loaded sprite font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontHandle(pub u64);

/// Asset loading errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// No asset is registered under the key
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// The asset exists but could not be loaded
    #[error("Failed to load asset '{key}': {reason}")]
    LoadFailed {
        /// Key that was requested
        key: String,
        /// Loader-specific failure description
        reason: String,
    },
}

/// Result type for asset operations
pub type AssetResult<T> = Result<T, AssetError>;

/// Content loading interface implemented by the host
pub trait AssetLoader {
    /// Load geometry by key
    fn load_model(&mut self, key: &str) -> AssetResult<ModelHandle>;

    /// Load a shader effect by key
    fn load_effect(&mut self, key: &str) -> AssetResult<EffectHandle>;

    /// Load a texture by key
    fn load_texture(&mut self, key: &str) -> AssetResult<TextureHandle>;

    /// Load a sprite font by key
    fn load_font(&mut self, key: &str) -> AssetResult<FontHandle>;

    /// Whether every previously requested asset is resident and ready to use
    fn is_ready(&self) -> bool {
        true
    }
}
