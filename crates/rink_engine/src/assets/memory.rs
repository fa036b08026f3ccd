//! In-memory asset registry
//!
//! Serves handles for keys registered up front. Used by headless drivers and tests
//! where no real content pipeline is available.

use std::collections::HashMap;

use super::{AssetError, AssetLoader, AssetResult, EffectHandle, FontHandle, ModelHandle, TextureHandle};
use crate::core::config::AssetConfig;

/// Kind of asset registered under a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Geometry
    Model,
    /// Shader effect
    Effect,
    /// Texture
    Texture,
    /// Sprite font
    Font,
}

#[derive(Debug, Clone)]
struct Entry {
    kind: AssetKind,
    id: u64,
}

/// Asset loader backed by a key registry
#[derive(Debug, Clone)]
pub struct MemoryAssetLoader {
    entries: HashMap<String, Entry>,
    next_id: u64,
    ready: bool,
    load_count: usize,
}

impl MemoryAssetLoader {
    /// Create an empty registry that reports itself ready
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next_id: 0,
            ready: true,
            load_count: 0,
        }
    }

    /// Create a registry holding every key the engine asks for
    pub fn with_keys(keys: &AssetConfig) -> Self {
        let mut loader = Self::new();
        loader.register(AssetKind::Model, &keys.surface_model);
        loader.register(AssetKind::Effect, &keys.surface_effect);
        loader.register(AssetKind::Texture, &keys.surface_texture);
        loader.register(AssetKind::Font, &keys.game_font);
        loader
    }

    /// Register an asset under a key; re-registering keeps the original handle
    pub fn register(&mut self, kind: AssetKind, key: impl Into<String>) -> u64 {
        let next_id = &mut self.next_id;
        self.entries
            .entry(key.into())
            .or_insert_with(|| {
                *next_id += 1;
                Entry { kind, id: *next_id }
            })
            .id
    }

    /// Control the readiness signal reported to activation gates
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Number of successful loads served so far
    pub const fn load_count(&self) -> usize {
        self.load_count
    }

    fn lookup(&mut self, key: &str, kind: AssetKind) -> AssetResult<u64> {
        let entry = self
            .entries
            .get(key)
            .ok_or_else(|| AssetError::NotFound(key.to_string()))?;

        if entry.kind != kind {
            return Err(AssetError::LoadFailed {
                key: key.to_string(),
                reason: format!("expected {:?}, registered as {:?}", kind, entry.kind),
            });
        }

        self.load_count += 1;
        log::trace!("Loaded {:?} asset '{}' as #{}", kind, key, entry.id);
        Ok(entry.id)
    }
}

impl Default for MemoryAssetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetLoader for MemoryAssetLoader {
    fn load_model(&mut self, key: &str) -> AssetResult<ModelHandle> {
        self.lookup(key, AssetKind::Model).map(ModelHandle)
    }

    fn load_effect(&mut self, key: &str) -> AssetResult<EffectHandle> {
        self.lookup(key, AssetKind::Effect).map(EffectHandle)
    }

    fn load_texture(&mut self, key: &str) -> AssetResult<TextureHandle> {
        self.lookup(key, AssetKind::Texture).map(TextureHandle)
    }

    fn load_font(&mut self, key: &str) -> AssetResult<FontHandle> {
        self.lookup(key, AssetKind::Font).map(FontHandle)
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}
