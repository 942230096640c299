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

use vectonauta_core::renderer::RenderSurface;
use vectonauta_core::Handle;

use crate::ecs::{Component, Entity, Shape, Texture, Transform};

/// A named entity that always carries a [`Shape`] and a [`Transform`].
///
/// Both are attached by the constructor, shape first, so [`get_component`] for
/// either never misses on a freshly built actor. Each [`update`] copies the
/// transform onto the shape: game code moves the transform, the shape follows.
///
/// [`get_component`]: Actor::get_component
/// [`update`]: Actor::update
#[derive(Debug)]
pub struct Actor {
    name: String,
    entity: Entity,
}

impl Actor {
    /// Creates an actor named `name` with a default shape and transform.
    pub fn new(name: impl Into<String>) -> Self {
        let mut entity = Entity::new();
        entity.add_component(Handle::new(Shape::new()));
        entity.add_component(Handle::new(Transform::default()));

        Self {
            name: name.into(),
            entity,
        }
    }

    /// The actor's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying component list.
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Appends a component.
    pub fn add_component<T: Component>(&mut self, component: Handle<T>) {
        self.entity.add_component(component);
    }

    /// Returns the first component of type `T`.
    pub fn get_component<T: Component>(&self) -> Option<Handle<T>> {
        self.entity.get_component::<T>()
    }

    /// Runs every component's `start` hook.
    pub fn start(&mut self) {
        log::debug!("Actor '{}' starting", self.name);
        self.entity.start();
    }

    /// Copies the transform's position, rotation, and scale onto the shape.
    ///
    /// Call this after anything that moved the transform this frame and before
    /// [`render`](Self::render).
    pub fn update(&mut self, _delta_time: f32) {
        let (Some(transform), Some(shape)) = (
            self.get_component::<Transform>(),
            self.get_component::<Shape>(),
        ) else {
            return;
        };

        let transform = *transform.borrow();
        let mut shape = shape.borrow_mut();
        shape.set_position(transform.position);
        shape.set_rotation(transform.rotation);
        shape.set_scale(transform.scale);
    }

    /// Renders every shape component, in insertion order.
    ///
    /// Other kinds are skipped; a bound texture is drawn as part of its shape.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        for shape in self.entity.get_components::<Shape>() {
            shape.borrow().render(surface);
        }
    }

    /// Releases nothing: components are freed when their last handle drops.
    pub fn destroy(&mut self) {
        log::debug!("Actor '{}' destroyed", self.name);
    }

    /// Binds `texture` to the actor's shape and attaches it as a component.
    pub fn set_texture(&mut self, texture: Handle<Texture>) {
        let Some(shape) = self.get_component::<Shape>() else {
            return;
        };
        shape.borrow_mut().set_texture(texture.clone());
        self.add_component(texture);
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new("Actor")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::{ComponentType, ShapeType};
    use vectonauta_core::asset::TextureImage;
    use vectonauta_core::math::Vec2;
    use vectonauta_infra::HeadlessSurface;

    fn texture() -> Handle<Texture> {
        Handle::new(Texture::from_image(
            "Circle",
            "png",
            TextureImage::from_rgba8(1, 1, vec![0, 0, 0, 255]).unwrap(),
        ))
    }

    #[test]
    fn new_actor_has_shape_then_transform() {
        let actor = Actor::new("X");
        assert_eq!(actor.name(), "X");
        assert!(actor.get_component::<Shape>().is_some());
        assert!(actor.get_component::<Transform>().is_some());

        let kinds: Vec<_> = actor
            .entity()
            .components()
            .iter()
            .map(|c| c.component_type())
            .collect();
        assert_eq!(kinds, [ComponentType::Shape, ComponentType::Transform]);
    }

    #[test]
    fn default_actor_is_named_actor() {
        assert_eq!(Actor::default().name(), "Actor");
    }

    #[test]
    fn update_copies_the_transform_onto_the_shape() {
        let mut actor = Actor::new("Circle");
        let shape = actor.get_component::<Shape>().unwrap();
        shape.borrow_mut().create_shape(ShapeType::Circle);

        {
            let transform = actor.get_component::<Transform>().unwrap();
            let mut transform = transform.borrow_mut();
            transform.position = Vec2::new(120.0, 80.0);
            transform.rotation = 30.0;
            transform.scale = Vec2::new(3.0, 3.0);
        }

        actor.update(0.016);

        let shape = shape.borrow();
        let primitive = shape.primitive().unwrap();
        assert_eq!(primitive.position, Vec2::new(120.0, 80.0));
        assert_eq!(primitive.rotation, 30.0);
        assert_eq!(primitive.scale, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn update_with_uninitialized_shape_is_harmless() {
        let mut actor = Actor::new("Ghost");
        actor.update(0.016);
        assert!(!actor.get_component::<Shape>().unwrap().borrow().is_initialized());
    }

    #[test]
    fn render_draws_shapes_only() {
        let mut actor = Actor::new("Circle");
        actor
            .get_component::<Shape>()
            .unwrap()
            .borrow_mut()
            .create_shape(ShapeType::Circle);
        actor.set_texture(texture());

        let mut surface = HeadlessSurface::new(800, 600);
        actor.render(&mut surface);

        // One shape draw; the attached texture is not drawn on its own.
        assert_eq!(surface.pending_draws().len(), 1);
        assert!(surface.pending_draws()[0].is_shape());
    }

    #[test]
    fn set_texture_binds_and_attaches() {
        let mut actor = Actor::new("Circle");
        actor
            .get_component::<Shape>()
            .unwrap()
            .borrow_mut()
            .create_shape(ShapeType::Circle);
        let texture = texture();
        actor.set_texture(texture.clone());

        assert_eq!(actor.entity().len(), 3);
        assert!(actor.get_component::<Texture>().unwrap().ptr_eq(&texture));
        let shape = actor.get_component::<Shape>().unwrap();
        assert!(shape.borrow().texture().unwrap().ptr_eq(&texture));
    }
}
