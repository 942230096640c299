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

//! The entity-component model.
//!
//! Components are owned through shared [`Handle`](vectonauta_core::Handle)s. An
//! [`Entity`] keeps them in insertion order and answers typed lookups; an [`Actor`]
//! is an entity that always carries a [`Shape`] and a [`Transform`] and keeps the
//! two in sync every frame.

mod actor;
mod component;
pub mod components;
mod entity;

pub use actor::Actor;
pub use component::{Component, ComponentHandle, ComponentType};
pub use components::{Shape, ShapeType, Texture, Transform};
pub use entity::Entity;
