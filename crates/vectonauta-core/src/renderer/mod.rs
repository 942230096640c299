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

//! Rendering contracts.
//!
//! The engine never talks to a graphics backend directly. Components describe what
//! they want drawn as [`Drawable`]s and hand them to a [`RenderSurface`], which any
//! backend (a real window, or the headless recorder used in tests) can implement.

use crate::asset::TextureImage;
use crate::math::{LinearRgba, Vec2};

/// The outline of a 2D shape, in the shape's local space.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A circle centered on its bounding box.
    Circle {
        /// The radius in pixels.
        radius: f32,
    },
    /// An axis-aligned rectangle anchored at its top-left corner.
    Rectangle {
        /// Width and height in pixels.
        size: Vec2,
    },
    /// A convex polygon given by its vertices in order.
    Convex {
        /// The polygon's vertices.
        points: Vec<Vec2>,
    },
}

impl Geometry {
    /// The number of outline points a backend needs to tessellate this shape.
    pub fn point_count(&self) -> usize {
        match self {
            // Same default tessellation as common 2D libraries.
            Geometry::Circle { .. } => 30,
            Geometry::Rectangle { .. } => 4,
            Geometry::Convex { points } => points.len(),
        }
    }
}

/// A drawable 2D shape: geometry plus placement and fill.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapePrimitive {
    /// The shape's outline.
    pub geometry: Geometry,
    /// Screen-space position of the shape's origin.
    pub position: Vec2,
    /// Rotation in degrees, clockwise.
    pub rotation: f32,
    /// Per-axis scale factors.
    pub scale: Vec2,
    /// The fill color, multiplied with the bound texture if any.
    pub fill_color: LinearRgba,
}

impl ShapePrimitive {
    /// Creates an untransformed primitive with a white fill.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            fill_color: LinearRgba::WHITE,
        }
    }
}

/// A textured quad sized to its image.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Screen-space position of the top-left corner.
    pub position: Vec2,
    /// Rotation in degrees, clockwise.
    pub rotation: f32,
    /// Per-axis scale factors.
    pub scale: Vec2,
    /// Tint multiplied with the image.
    pub color: LinearRgba,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            color: LinearRgba::WHITE,
        }
    }
}

/// A single draw request submitted to a [`RenderSurface`].
#[derive(Debug, Clone, Copy)]
pub enum Drawable<'a> {
    /// A filled shape, optionally textured.
    Shape {
        /// The shape to draw.
        primitive: &'a ShapePrimitive,
        /// The image mapped onto the shape, if one is bound and decoded.
        texture: Option<&'a TextureImage>,
    },
    /// A sprite. A `None` texture draws a blank quad.
    Sprite {
        /// The sprite to draw.
        sprite: &'a Sprite,
        /// The sprite's image, if it decoded successfully.
        texture: Option<&'a TextureImage>,
    },
}

/// A trait that abstracts the presentation surface the engine draws into.
///
/// Any backend (a desktop window, an offscreen target, a recorder) can implement
/// this trait to be driven by the frame loop. All calls happen on the thread that
/// owns the loop.
pub trait RenderSurface {
    /// Returns `false` once the surface has been closed; the frame loop stops then.
    fn is_open(&self) -> bool;

    /// Drains pending platform events. A close request closes the surface.
    fn handle_events(&mut self);

    /// Clears the back buffer to `color`.
    fn clear(&mut self, color: LinearRgba);

    /// Queues a drawable for the current frame.
    fn draw(&mut self, drawable: Drawable<'_>);

    /// Presents the current frame.
    fn display(&mut self);

    /// Seconds elapsed during the previous frame.
    fn delta_time(&self) -> f32;

    /// Returns the drawable area as `(width, height)` in pixels.
    fn size(&self) -> (u32, u32);

    /// Closes the surface.
    fn close(&mut self);
}
