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

//! # Vectonauta Core
//!
//! Foundational crate containing the shared ownership handle, math types, and the
//! interface contracts (rendering surface, texture loading) that the rest of the
//! engine is written against.

#![warn(missing_docs)]

pub mod asset;
pub mod handle;
pub mod math;
pub mod renderer;
pub mod utils;

pub use handle::{AnyHandle, Handle};
pub use utils::timer::{FrameClock, Stopwatch};
