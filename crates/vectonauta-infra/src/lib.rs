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

//! Concrete implementations of the contracts defined in `vectonauta-core`.
//!
//! - [`graphics::HeadlessSurface`]: a [`RenderSurface`](vectonauta_core::renderer::RenderSurface)
//!   that records draw calls instead of presenting them.
//! - [`assets::ImageTextureLoader`]: a [`TextureLoader`](vectonauta_core::asset::TextureLoader)
//!   backed by the `image` crate.

#![warn(missing_docs)]

pub mod assets;
pub mod graphics;

pub use assets::ImageTextureLoader;
pub use graphics::{DrawRecord, FrameRecord, HeadlessSurface};
