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

use vectonauta_core::math::Vec2;

use crate::ecs::{Component, ComponentType};

/// An entity's position, rotation, and scale in screen space.
///
/// This is the logical state that game code and steering behaviours modify. The
/// owning [`Actor`](crate::ecs::Actor) copies it onto its shape once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in pixels.
    pub position: Vec2,
    /// Rotation in degrees, clockwise.
    pub rotation: f32,
    /// Per-axis scale factors.
    pub scale: Vec2,
}

impl Transform {
    /// Creates a `Transform` at `position` with no rotation and unit scale.
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Moves `position` toward `target` at no more than `max_speed` units per second.
    ///
    /// Nothing happens once the target is within `arrival_radius`. Otherwise the
    /// step is `min(max_speed * delta_time, distance)`, so a single call never
    /// carries the position past the target.
    ///
    /// Returns `true` if the position changed.
    pub fn seek(
        &mut self,
        target: Vec2,
        max_speed: f32,
        delta_time: f32,
        arrival_radius: f32,
    ) -> bool {
        let offset = target - self.position;
        let distance = offset.length();

        if distance.is_nan() || distance <= arrival_radius || distance <= 0.0 {
            return false;
        }

        let step = max_speed * delta_time;
        if !step.is_finite() || step <= 0.0 {
            return false;
        }

        if step >= distance {
            self.position = target;
        } else {
            self.position += offset * (step / distance);
        }
        true
    }
}

impl Default for Transform {
    /// Returns the identity transform at the origin.
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
        }
    }
}

impl Component for Transform {
    fn component_type(&self) -> ComponentType {
        ComponentType::Transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn first_step_is_bounded_by_speed() {
        let mut transform = Transform::default();
        let target = Vec2::new(100.0, 0.0);

        assert!(transform.seek(target, 200.0, 0.1, 10.0));
        assert!(transform.position.x > 0.0 && transform.position.x <= 20.0);
        assert_relative_eq!(transform.position.x, 20.0);
        assert_eq!(transform.position.y, 0.0);
    }

    #[test]
    fn distance_never_increases_and_settles() {
        let mut transform = Transform::default();
        let target = Vec2::new(100.0, 0.0);
        let mut previous = transform.position.distance(target);
        let mut steps = 0;

        while transform.seek(target, 200.0, 0.1, 10.0) {
            let distance = transform.position.distance(target);
            assert!(distance <= previous);
            previous = distance;
            steps += 1;
            assert!(steps < 100, "seek must converge");
        }

        assert!(previous <= 10.0);
        let settled = transform.position;
        assert!(!transform.seek(target, 200.0, 0.1, 10.0));
        assert_eq!(transform.position, settled);
    }

    #[test]
    fn never_overshoots_the_target() {
        let mut transform = Transform::from_position(Vec2::new(0.0, 0.0));
        let target = Vec2::new(3.0, 4.0);

        assert!(transform.seek(target, 1000.0, 1.0, 1.0));
        assert_eq!(transform.position, target);
    }

    #[test]
    fn moves_along_the_displacement() {
        let mut transform = Transform::default();
        transform.seek(Vec2::new(30.0, 40.0), 10.0, 1.0, 0.0);
        assert_relative_eq!(transform.position.x, 6.0, epsilon = 1e-5);
        assert_relative_eq!(transform.position.y, 8.0, epsilon = 1e-5);
    }

    #[test]
    fn degenerate_inputs_do_not_move() {
        let mut transform = Transform::default();
        let target = Vec2::new(50.0, 0.0);

        assert!(!transform.seek(target, 0.0, 0.1, 1.0));
        assert!(!transform.seek(target, 100.0, 0.0, 1.0));
        assert!(!transform.seek(target, -100.0, 0.1, 1.0));
        assert!(!transform.seek(Vec2::new(f32::NAN, 0.0), 100.0, 0.1, 1.0));
        assert!(!transform.seek(Vec2::ZERO, 100.0, 0.1, -1.0));
        assert_eq!(transform.position, Vec2::ZERO);
    }

    #[test]
    fn identity_defaults() {
        let transform = Transform::default();
        assert_eq!(transform.scale, Vec2::ONE);
        assert_eq!(transform.rotation, 0.0);
        assert_eq!(transform.component_type(), ComponentType::Transform);
    }
}
