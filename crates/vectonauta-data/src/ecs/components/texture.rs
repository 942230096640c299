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

use vectonauta_core::asset::{texture_path, TextureImage, TextureLoader};
use vectonauta_core::renderer::{Drawable, RenderSurface, Sprite};

use crate::ecs::{Component, ComponentType};

/// A decoded image paired with the sprite that displays it.
///
/// A texture whose file could not be loaded is still a valid component: it keeps
/// its key and extension, has no image, and renders as a blank sprite.
#[derive(Debug, Clone)]
pub struct Texture {
    key: String,
    extension: String,
    image: Option<TextureImage>,
    sprite: Sprite,
}

impl Texture {
    /// Loads `<root>/<key>.<extension>` through `loader`.
    ///
    /// A failed load is logged and yields a texture without an image.
    pub fn load(
        key: impl Into<String>,
        extension: impl Into<String>,
        root: &Path,
        loader: &dyn TextureLoader,
    ) -> Self {
        let key = key.into();
        let extension = extension.into();
        let path = texture_path(root, &key, &extension);

        let image = match loader.load(&path) {
            Ok(image) => {
                log::debug!(
                    "Loaded texture '{}' ({}x{})",
                    key,
                    image.width,
                    image.height
                );
                Some(image)
            }
            Err(e) => {
                log::error!("Texture::load: {e}");
                None
            }
        };

        Self {
            key,
            extension,
            image,
            sprite: Sprite::default(),
        }
    }

    /// Wraps an already decoded image.
    pub fn from_image(
        key: impl Into<String>,
        extension: impl Into<String>,
        image: TextureImage,
    ) -> Self {
        Self {
            key: key.into(),
            extension: extension.into(),
            image: Some(image),
            sprite: Sprite::default(),
        }
    }

    /// The key this texture was requested under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The file extension this texture was loaded with.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The decoded image, or `None` if loading failed.
    pub fn image(&self) -> Option<&TextureImage> {
        self.image.as_ref()
    }

    /// Returns `true` if the image decoded successfully.
    pub fn is_loaded(&self) -> bool {
        self.image.is_some()
    }

    /// The sprite used when the texture is rendered on its own.
    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

impl Component for Texture {
    fn component_type(&self) -> ComponentType {
        ComponentType::Texture
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        surface.draw(Drawable::Sprite {
            sprite: &self.sprite,
            texture: self.image.as_ref(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use vectonauta_core::asset::AssetError;
    use vectonauta_infra::{DrawRecord, HeadlessSurface};

    struct SolidLoader;

    impl TextureLoader for SolidLoader {
        fn load(&self, _path: &Path) -> Result<TextureImage, AssetError> {
            TextureImage::from_rgba8(1, 1, vec![255, 0, 0, 255]).ok_or_else(|| {
                AssetError::Decode {
                    path: PathBuf::new(),
                    message: "bad size".into(),
                }
            })
        }
    }

    struct MissingLoader;

    impl TextureLoader for MissingLoader {
        fn load(&self, path: &Path) -> Result<TextureImage, AssetError> {
            Err(AssetError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        }
    }

    #[test]
    fn successful_load_keeps_the_image() {
        let texture = Texture::load("Circle", "png", Path::new("assets"), &SolidLoader);
        assert!(texture.is_loaded());
        assert_eq!(texture.key(), "Circle");
        assert_eq!(texture.extension(), "png");
        assert_eq!(texture.image().map(TextureImage::size), Some((1, 1)));
        assert_eq!(texture.component_type(), ComponentType::Texture);
    }

    #[test]
    fn failed_load_degrades_instead_of_failing() {
        let texture = Texture::load("Nope", "png", Path::new("assets"), &MissingLoader);
        assert!(!texture.is_loaded());
        assert_eq!(texture.key(), "Nope");
        assert_eq!(*texture.sprite(), Sprite::default());
    }

    #[test]
    fn render_draws_the_sprite_with_its_image() {
        let texture = Texture::load("Circle", "png", Path::new("assets"), &SolidLoader);
        let mut surface = HeadlessSurface::new(800, 600);

        texture.render(&mut surface);

        assert_eq!(
            surface.pending_draws(),
            &[DrawRecord::Sprite {
                sprite: Sprite::default(),
                texture_size: Some((1, 1)),
            }]
        );
    }

    #[test]
    fn degraded_texture_renders_a_blank_sprite() {
        let texture = Texture::load("Nope", "png", Path::new("assets"), &MissingLoader);
        let mut surface = HeadlessSurface::new(800, 600);

        texture.render(&mut surface);

        assert_eq!(
            surface.pending_draws(),
            &[DrawRecord::Sprite {
                sprite: Sprite::default(),
                texture_size: None,
            }]
        );
    }
}
