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

use vectonauta_core::math::LinearRgba;
use vectonauta_core::renderer::{Drawable, RenderSurface, ShapePrimitive, Sprite};
use vectonauta_core::FrameClock;

/// An owned copy of one draw call received by a [`HeadlessSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawRecord {
    /// A shape draw.
    Shape {
        /// The primitive as it was at draw time.
        primitive: ShapePrimitive,
        /// Size of the bound texture, if one was bound and decoded.
        texture_size: Option<(u32, u32)>,
    },
    /// A sprite draw.
    Sprite {
        /// The sprite as it was at draw time.
        sprite: Sprite,
        /// Size of the sprite's image, if it decoded.
        texture_size: Option<(u32, u32)>,
    },
}

impl DrawRecord {
    /// Returns `true` for shape draws.
    pub fn is_shape(&self) -> bool {
        matches!(self, DrawRecord::Shape { .. })
    }
}

impl From<Drawable<'_>> for DrawRecord {
    fn from(drawable: Drawable<'_>) -> Self {
        match drawable {
            Drawable::Shape { primitive, texture } => DrawRecord::Shape {
                primitive: primitive.clone(),
                texture_size: texture.map(|t| t.size()),
            },
            Drawable::Sprite { sprite, texture } => DrawRecord::Sprite {
                sprite: sprite.clone(),
                texture_size: texture.map(|t| t.size()),
            },
        }
    }
}

/// Everything presented in one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameRecord {
    /// The color the frame was cleared to, if it was cleared.
    pub clear_color: Option<LinearRgba>,
    /// Draw calls in submission order.
    pub draws: Vec<DrawRecord>,
}

/// A [`RenderSurface`] without a window.
///
/// Draw calls are recorded instead of rasterized, which makes the surface usable
/// both for tests and for running the engine on machines without a display.
/// The surface closes itself when its frame budget is spent or when a close has
/// been requested, at the next [`handle_events`](RenderSurface::handle_events).
#[derive(Debug)]
pub struct HeadlessSurface {
    size: (u32, u32),
    open: bool,
    close_requested: bool,
    frame_limit: Option<u64>,
    frames_presented: u64,
    clock: FrameClock,
    current: FrameRecord,
    last_frame: Option<FrameRecord>,
}

impl HeadlessSurface {
    /// Creates an open surface of the given size, timed by the wall clock.
    pub fn new(width: u32, height: u32) -> Self {
        log::info!("Creating headless surface ({width}x{height})");
        Self {
            size: (width, height),
            open: true,
            close_requested: false,
            frame_limit: None,
            frames_presented: 0,
            clock: FrameClock::measured(),
            current: FrameRecord::default(),
            last_frame: None,
        }
    }

    /// Closes the surface after `frames` frames have been presented.
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    /// Reports `step` seconds for every frame instead of measuring time.
    pub fn with_fixed_delta(mut self, step: f32) -> Self {
        self.clock = FrameClock::fixed(step);
        self
    }

    /// Asks the surface to close at the next event poll, like a window's close button.
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// The number of frames presented so far.
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Draw calls received since the last [`display`](RenderSurface::display).
    pub fn pending_draws(&self) -> &[DrawRecord] {
        &self.current.draws
    }

    /// The most recently presented frame.
    pub fn last_frame(&self) -> Option<&FrameRecord> {
        self.last_frame.as_ref()
    }
}

impl RenderSurface for HeadlessSurface {
    fn is_open(&self) -> bool {
        self.open
    }

    fn handle_events(&mut self) {
        if !self.open {
            return;
        }

        let budget_spent = self
            .frame_limit
            .is_some_and(|limit| self.frames_presented >= limit);
        if self.close_requested || budget_spent {
            log::info!(
                "Headless surface closing after {} frame(s)",
                self.frames_presented
            );
            self.close();
            return;
        }

        self.clock.tick();
    }

    fn clear(&mut self, color: LinearRgba) {
        self.current.draws.clear();
        self.current.clear_color = Some(color);
    }

    fn draw(&mut self, drawable: Drawable<'_>) {
        self.current.draws.push(drawable.into());
    }

    fn display(&mut self) {
        let frame = std::mem::take(&mut self.current);
        log::trace!(
            "Frame {} presented with {} draw call(s)",
            self.frames_presented,
            frame.draws.len()
        );
        self.last_frame = Some(frame);
        self.frames_presented += 1;
    }

    fn delta_time(&self) -> f32 {
        self.clock.delta()
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn close(&mut self) {
        self.open = false;
    }
}
