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

use std::path::Path;

use vectonauta_core::asset::{AssetError, TextureImage, TextureLoader};

/// Reads texture files from disk and decodes them with the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageTextureLoader;

impl ImageTextureLoader {
    /// Creates a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Decodes an in-memory encoded image (PNG, JPEG, BMP).
    pub fn decode(&self, bytes: &[u8], path: &Path) -> Result<TextureImage, AssetError> {
        let img = image::load_from_memory(bytes).map_err(|e| AssetError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        Ok(TextureImage {
            width,
            height,
            pixels: rgba_img.into_raw(),
        })
    }
}

impl TextureLoader for ImageTextureLoader {
    fn load(&self, path: &Path) -> Result<TextureImage, AssetError> {
        let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let image = self.decode(&bytes, path)?;
        log::trace!(
            "Decoded '{}' ({}x{})",
            path.display(),
            image.width,
            image.height
        );
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    #[test]
    fn decodes_a_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Circle.png");
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.save_with_format(&path, ImageFormat::Png).unwrap();

        let texture = ImageTextureLoader::new().load(&path).unwrap();
        assert_eq!(texture.size(), (3, 2));
        assert_eq!(texture.pixels.len(), 3 * 2 * 4);
        assert_eq!(&texture.pixels[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageTextureLoader::new()
            .load(&dir.path().join("nope.png"))
            .unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = ImageTextureLoader::new().load(&path).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
        assert!(err.to_string().contains("garbage.png"));
    }
}
