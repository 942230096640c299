// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashMap;
use std::path::PathBuf;

use vectonauta_core::asset::{TextureLoader, DEFAULT_TEXTURE_EXTENSION, DEFAULT_TEXTURE_KEY};
use vectonauta_core::Handle;

use crate::ecs::Texture;

/// A session-scoped cache of textures, keyed by name.
///
/// Each key is loaded at most once; later requests receive a clone of the cached
/// handle. Loading is synchronous, so a cache miss blocks the caller until the
/// file has been decoded or has failed to decode.
pub struct ResourceManager {
    root: PathBuf,
    loader: Box<dyn TextureLoader>,
    textures: HashMap<String, Handle<Texture>>,
}

impl ResourceManager {
    /// Creates an empty cache that loads files from `root` through `loader`.
    pub fn new(root: impl Into<PathBuf>, loader: impl TextureLoader + 'static) -> Self {
        Self {
            root: root.into(),
            loader: Box::new(loader),
            textures: HashMap::new(),
        }
    }

    /// Loads `<root>/<key>.<extension>` and caches it under `key`.
    ///
    /// Returns `true` if the key was already cached or the image decoded. A failed
    /// decode still caches a degraded texture (so the key resolves to a blank
    /// sprite instead of the default) and returns `false`.
    pub fn load_texture(&mut self, key: &str, extension: &str) -> bool {
        self.load_entry(key, extension).1
    }

    /// Returns the texture cached under `key`.
    ///
    /// An unknown key falls back to [`DEFAULT_TEXTURE_KEY`], which is loaded on
    /// first use if needed.
    pub fn get_texture(&mut self, key: &str) -> Handle<Texture> {
        if let Some(texture) = self.textures.get(key) {
            return texture.clone();
        }

        log::warn!("ResourceManager: texture '{key}' not found, using default texture");
        let (texture, loaded) = self.load_entry(DEFAULT_TEXTURE_KEY, DEFAULT_TEXTURE_EXTENSION);
        if !loaded {
            log::error!("ResourceManager: default texture could not be loaded");
        }
        texture
    }

    /// Returns `true` if `key` has been loaded (successfully or not).
    pub fn contains(&self, key: &str) -> bool {
        self.textures.contains_key(key)
    }

    /// The number of cached textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Returns `true` if nothing has been cached.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    fn load_entry(&mut self, key: &str, extension: &str) -> (Handle<Texture>, bool) {
        if let Some(texture) = self.textures.get(key) {
            return (texture.clone(), true);
        }

        let texture = Texture::load(key, extension, &self.root, self.loader.as_ref());
        let loaded = texture.is_loaded();
        let texture = Handle::new(texture);
        self.textures.insert(key.to_owned(), texture.clone());
        (texture, loaded)
    }
}
