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

use serde::{Deserialize, Serialize};
use vectonauta_core::math::{LinearRgba, Vec2};
use vectonauta_core::renderer::{Drawable, Geometry, RenderSurface, ShapePrimitive};
use vectonauta_core::Handle;

use crate::ecs::components::Texture;
use crate::ecs::{Component, ComponentType};

/// The outline presets a [`Shape`] can be created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeType {
    /// No geometry.
    #[default]
    Empty,
    /// A circle of radius 10.
    Circle,
    /// A 100x50 rectangle.
    Rectangle,
    /// A three-point convex shape.
    Triangle,
    /// A five-point convex shape.
    Polygon,
}

impl ShapeType {
    fn geometry(self) -> Option<Geometry> {
        let geometry = match self {
            ShapeType::Empty => return None,
            ShapeType::Circle => Geometry::Circle { radius: 10.0 },
            ShapeType::Rectangle => Geometry::Rectangle {
                size: Vec2::new(100.0, 50.0),
            },
            ShapeType::Triangle => Geometry::Convex {
                points: vec![
                    Vec2::new(0.0, 0.0),
                    Vec2::new(50.0, 100.0),
                    Vec2::new(100.0, 0.0),
                ],
            },
            ShapeType::Polygon => Geometry::Convex {
                points: vec![
                    Vec2::new(0.0, 0.0),
                    Vec2::new(50.0, 100.0),
                    Vec2::new(100.0, 0.0),
                    Vec2::new(75.0, -50.0),
                    Vec2::new(-25.0, -50.0),
                ],
            },
        };
        Some(geometry)
    }
}

/// A component that draws a filled 2D primitive, optionally textured.
///
/// A shape starts out uninitialized. Until [`create_shape`](Self::create_shape)
/// succeeds, every setter and [`render`](Component::render) logs an error and
/// leaves the shape untouched.
#[derive(Debug, Default)]
pub struct Shape {
    shape_type: ShapeType,
    primitive: Option<ShapePrimitive>,
    texture: Option<Handle<Texture>>,
}

impl Shape {
    /// Creates an uninitialized shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shape and immediately builds its primitive.
    pub fn with_type(shape_type: ShapeType) -> Self {
        let mut shape = Self::new();
        shape.create_shape(shape_type);
        shape
    }

    /// Builds the drawable primitive for `shape_type` with a white fill.
    ///
    /// Any previous primitive is replaced. [`ShapeType::Empty`] is rejected and
    /// leaves the shape uninitialized.
    pub fn create_shape(&mut self, shape_type: ShapeType) {
        self.shape_type = shape_type;
        self.primitive = shape_type.geometry().map(ShapePrimitive::new);
        if self.primitive.is_none() {
            log::error!("Shape::create_shape: unknown shape type {shape_type:?}");
        }
    }

    /// The preset this shape was last created with.
    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    /// Returns `true` once a primitive exists.
    pub fn is_initialized(&self) -> bool {
        self.primitive.is_some()
    }

    /// The drawable primitive, if created.
    pub fn primitive(&self) -> Option<&ShapePrimitive> {
        self.primitive.as_ref()
    }

    /// The texture bound to the primitive, if any.
    pub fn texture(&self) -> Option<&Handle<Texture>> {
        self.texture.as_ref()
    }

    /// Moves the shape to `position`.
    pub fn set_position(&mut self, position: Vec2) {
        if let Some(primitive) = self.primitive_mut("set_position") {
            primitive.position = position;
        }
    }

    /// Moves the shape to `(x, y)`.
    pub fn set_position_xy(&mut self, x: f32, y: f32) {
        self.set_position(Vec2::new(x, y));
    }

    /// Sets the fill color.
    pub fn set_fill_color(&mut self, color: LinearRgba) {
        if let Some(primitive) = self.primitive_mut("set_fill_color") {
            primitive.fill_color = color;
        }
    }

    /// Sets the rotation in degrees.
    pub fn set_rotation(&mut self, angle: f32) {
        if let Some(primitive) = self.primitive_mut("set_rotation") {
            primitive.rotation = angle;
        }
    }

    /// Sets the per-axis scale.
    pub fn set_scale(&mut self, scale: Vec2) {
        if let Some(primitive) = self.primitive_mut("set_scale") {
            primitive.scale = scale;
        }
    }

    /// Binds `texture` to the primitive. The texture is shared, not copied.
    pub fn set_texture(&mut self, texture: Handle<Texture>) {
        if self.primitive_mut("set_texture").is_some() {
            self.texture = Some(texture);
        }
    }

    fn primitive_mut(&mut self, operation: &str) -> Option<&mut ShapePrimitive> {
        if self.primitive.is_none() {
            log::error!("Shape::{operation}: shape is not initialized");
        }
        self.primitive.as_mut()
    }
}

impl Component for Shape {
    fn component_type(&self) -> ComponentType {
        ComponentType::Shape
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        let Some(primitive) = self.primitive.as_ref() else {
            log::error!("Shape::render: shape is not initialized");
            return;
        };

        let texture = self.texture.as_ref().map(|texture| texture.borrow());
        surface.draw(Drawable::Shape {
            primitive,
            texture: texture.as_ref().and_then(|texture| texture.image()),
        });
    }
}
