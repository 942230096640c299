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

//! Provides the foundational types for texture assets.
//!
//! This module defines the decoded image representation and the loading contract.
//! It has no knowledge of file formats: concrete decoders live in the infra crate,
//! and the caching resolver lives in the data crate.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The key every resolver falls back to when a requested texture is unknown.
pub const DEFAULT_TEXTURE_KEY: &str = "Default";

/// The extension assumed when none is given.
pub const DEFAULT_TEXTURE_EXTENSION: &str = "png";

/// A decoded image held in CPU memory as tightly packed RGBA8 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 pixel data, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl TextureImage {
    /// Creates an image from raw RGBA8 pixels.
    ///
    /// Returns `None` if the buffer length does not match the dimensions.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        (pixels.len() == expected).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Returns the size as `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// An error raised while loading a texture from storage.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file could not be read.
    #[error("failed to read texture '{path}': {source}")]
    Io {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file was read but could not be decoded as an image.
    #[error("failed to decode texture '{path}': {message}")]
    Decode {
        /// The path that was decoded.
        path: PathBuf,
        /// The decoder's description of the failure.
        message: String,
    },
}

/// Decodes texture files into [`TextureImage`]s.
///
/// Loads are synchronous: a call blocks the current frame until it completes or fails.
pub trait TextureLoader {
    /// Loads and decodes the image at `path`.
    fn load(&self, path: &Path) -> Result<TextureImage, AssetError>;
}

/// Builds the on-disk path of a texture: `<root>/<key>.<extension>`.
pub fn texture_path(root: &Path, key: &str, extension: &str) -> PathBuf {
    root.join(format!("{key}.{extension}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_size_must_match_pixels() {
        assert!(TextureImage::from_rgba8(2, 2, vec![0; 16]).is_some());
        assert!(TextureImage::from_rgba8(2, 2, vec![0; 15]).is_none());
        assert_eq!(
            TextureImage::from_rgba8(3, 1, vec![0; 12]).unwrap().size(),
            (3, 1)
        );
    }

    #[test]
    fn path_joins_key_and_extension() {
        let path = texture_path(Path::new("assets"), "Circle", "png");
        assert_eq!(path, Path::new("assets").join("Circle.png"));
    }
}
