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

//! # Vectonauta Data
//!
//! The entity-component model of the engine: components (shape, texture,
//! transform), entities and actors that own them, the steering behaviours that
//! move actors, and the texture cache that feeds them.

#![warn(missing_docs)]

pub mod assets;
pub mod ecs;
pub mod steering;

pub use assets::ResourceManager;
pub use ecs::{Actor, Component, ComponentHandle, ComponentType, Entity};
pub use steering::{PatrolError, WaypointPatrol};
