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

use vectonauta_core::Handle;

use crate::ecs::{Component, ComponentHandle};

/// An ordered collection of owned components.
///
/// Components are appended and never replaced or deduplicated: two components of
/// the same kind may coexist, and lookups return the first one added. Dropping the
/// entity drops its handles, which frees every component no one else holds.
#[derive(Debug, Default, Clone)]
pub struct Entity {
    components: Vec<ComponentHandle>,
}

impl Entity {
    /// Creates an entity with no components.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `component` to the end of the component list.
    pub fn add_component<T: Component>(&mut self, component: Handle<T>) {
        self.components.push(ComponentHandle::new(component));
    }

    /// Returns the first component of type `T`, in insertion order.
    ///
    /// This is a linear scan; entities carry a handful of components.
    pub fn get_component<T: Component>(&self) -> Option<Handle<T>> {
        self.components
            .iter()
            .find_map(|component| component.downcast::<T>())
    }

    /// Iterates over every component of type `T`, in insertion order.
    pub fn get_components<T: Component>(&self) -> impl Iterator<Item = Handle<T>> + '_ {
        self.components
            .iter()
            .filter_map(|component| component.downcast::<T>())
    }

    /// Returns `true` if at least one component of type `T` is attached.
    pub fn has_component<T: Component>(&self) -> bool {
        self.components.iter().any(ComponentHandle::is::<T>)
    }

    /// All components, in insertion order.
    pub fn components(&self) -> &[ComponentHandle] {
        &self.components
    }

    /// The number of attached components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if no component is attached.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Runs the `start` hook of every component, in insertion order.
    pub fn start(&self) {
        for component in &self.components {
            match component.as_dyn().try_borrow_mut() {
                Some(mut component) => component.start(),
                None => log::error!(
                    "Entity::start: {:?} component is already borrowed",
                    component.component_type()
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::{ComponentType, Shape, Texture, Transform};
    use std::cell::Cell;
    use std::rc::Rc;
    use vectonauta_core::math::Vec2;

    struct Probe {
        starts: Rc<Cell<u32>>,
    }

    impl Component for Probe {
        fn component_type(&self) -> ComponentType {
            ComponentType::Empty
        }

        fn start(&mut self) {
            self.starts.set(self.starts.get() + 1);
        }
    }

    #[test]
    fn lookup_returns_the_same_object() {
        let mut entity = Entity::new();
        let transform = Handle::new(Transform::from_position(Vec2::new(5.0, 5.0)));
        entity.add_component(transform.clone());

        let found = entity.get_component::<Transform>().expect("transform attached");
        assert!(found.ptr_eq(&transform));

        found.borrow_mut().position = Vec2::new(9.0, 9.0);
        assert_eq!(transform.borrow().position, Vec2::new(9.0, 9.0));
    }

    #[test]
    fn lookup_of_a_missing_type_is_none() {
        let mut entity = Entity::new();
        entity.add_component(Handle::new(Transform::default()));

        assert!(entity.get_component::<Shape>().is_none());
        assert!(entity.get_component::<Texture>().is_none());
        assert!(!entity.has_component::<Shape>());
    }

    #[test]
    fn duplicates_are_kept_and_the_first_wins() {
        let mut entity = Entity::new();
        let first = Handle::new(Transform::from_position(Vec2::new(1.0, 0.0)));
        let second = Handle::new(Transform::from_position(Vec2::new(2.0, 0.0)));
        entity.add_component(first.clone());
        entity.add_component(Handle::new(Shape::new()));
        entity.add_component(second.clone());

        assert_eq!(entity.len(), 3);
        assert!(entity.get_component::<Transform>().unwrap().ptr_eq(&first));

        let all: Vec<_> = entity.get_components::<Transform>().collect();
        assert_eq!(all.len(), 2);
        assert!(all[1].ptr_eq(&second));
    }

    #[test]
    fn components_keep_insertion_order() {
        let mut entity = Entity::new();
        entity.add_component(Handle::new(Shape::new()));
        entity.add_component(Handle::new(Transform::default()));

        let kinds: Vec<_> = entity
            .components()
            .iter()
            .map(ComponentHandle::component_type)
            .collect();
        assert_eq!(kinds, [ComponentType::Shape, ComponentType::Transform]);
    }

    #[test]
    fn start_reaches_every_component() {
        let starts = Rc::new(Cell::new(0));
        let mut entity = Entity::new();
        entity.add_component(Handle::new(Probe {
            starts: starts.clone(),
        }));
        entity.add_component(Handle::new(Probe {
            starts: starts.clone(),
        }));

        entity.start();
        assert_eq!(starts.get(), 2);
    }

    #[test]
    fn dropping_the_entity_releases_its_components() {
        let transform = Handle::new(Transform::default());
        let mut entity = Entity::new();
        entity.add_component(transform.clone());
        assert!(transform.strong_count() > 1);

        drop(entity);
        assert_eq!(transform.strong_count(), 1);
    }
}
