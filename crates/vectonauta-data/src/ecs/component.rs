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

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use vectonauta_core::renderer::RenderSurface;
use vectonauta_core::{AnyHandle, Handle};

/// The kind tag carried by every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComponentType {
    /// No specific kind.
    #[default]
    Empty,
    /// A drawable shape.
    Shape,
    /// A decoded image with its sprite.
    Texture,
    /// Position, rotation, and scale.
    Transform,
}

/// The capability set shared by everything that can be attached to an entity.
///
/// Every hook has an empty default, so a component only implements what it needs.
/// None of the hooks can fail: problems are logged and the call becomes a no-op.
pub trait Component: Any {
    /// The kind tag of this component. Must match the concrete type.
    fn component_type(&self) -> ComponentType;

    /// Called once before the first update.
    fn start(&mut self) {}

    /// Called once per frame with the seconds elapsed since the previous frame.
    fn update(&mut self, _delta_time: f32) {}

    /// Submits the component's drawables to `surface`.
    fn render(&self, _surface: &mut dyn RenderSurface) {}

    /// Explicit teardown beyond releasing memory.
    fn destroy(&mut self) {}
}

/// A component owned by an entity, with its concrete type erased.
///
/// The handle keeps two views of the same allocation: one for calling the
/// [`Component`] hooks, and one for recovering the concrete type. Both share the
/// allocation's reference count.
#[derive(Clone)]
pub struct ComponentHandle {
    kind: ComponentType,
    erased: AnyHandle,
    dynamic: Handle<dyn Component>,
}

impl ComponentHandle {
    /// Erases a typed component handle.
    pub fn new<T: Component>(component: Handle<T>) -> Self {
        let kind = component.borrow().component_type();
        let erased = component.erase();
        let dynamic: Rc<RefCell<dyn Component>> = component.as_rc().clone();
        Self {
            kind,
            erased,
            dynamic: Handle::from_rc(dynamic),
        }
    }

    /// The kind tag recorded when the component was attached.
    pub fn component_type(&self) -> ComponentType {
        self.kind
    }

    /// Recovers the typed handle if the component is a `T`.
    pub fn downcast<T: Component>(&self) -> Option<Handle<T>> {
        self.erased.downcast::<T>()
    }

    /// Returns `true` if the component is a `T`.
    pub fn is<T: Component>(&self) -> bool {
        self.erased.is::<T>()
    }

    /// The component viewed through its capability set.
    pub fn as_dyn(&self) -> &Handle<dyn Component> {
        &self.dynamic
    }

    /// Returns `true` if `component` is this very allocation.
    pub fn refers_to<T: Component>(&self, component: &Handle<T>) -> bool {
        self.erased.refers_to(component)
    }
}

impl<T: Component> From<Handle<T>> for ComponentHandle {
    fn from(component: Handle<T>) -> Self {
        Self::new(component)
    }
}

impl fmt::Debug for ComponentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentHandle")
            .field("kind", &self.kind)
            .field("strong_count", &self.erased.strong_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counter {
        started: Rc<Cell<u32>>,
    }

    impl Component for Counter {
        fn component_type(&self) -> ComponentType {
            ComponentType::Empty
        }

        fn start(&mut self) {
            self.started.set(self.started.get() + 1);
        }
    }

    struct Other;

    impl Component for Other {
        fn component_type(&self) -> ComponentType {
            ComponentType::Empty
        }
    }

    #[test]
    fn both_views_share_the_allocation() {
        let started = Rc::new(Cell::new(0));
        let typed = Handle::new(Counter {
            started: started.clone(),
        });
        let erased = ComponentHandle::new(typed.clone());

        // typed + erased view + dynamic view
        assert_eq!(typed.strong_count(), 3);
        assert!(erased.refers_to(&typed));

        erased.as_dyn().borrow_mut().start();
        assert_eq!(started.get(), 1);

        drop(erased);
        assert_eq!(typed.strong_count(), 1);
    }

    #[test]
    fn downcast_matches_only_the_concrete_type() {
        let erased: ComponentHandle = Handle::new(Other).into();
        assert!(erased.is::<Other>());
        assert!(erased.downcast::<Other>().is_some());
        assert!(erased.downcast::<Counter>().is_none());
        assert_eq!(erased.component_type(), ComponentType::Empty);
    }
}
