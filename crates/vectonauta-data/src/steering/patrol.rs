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

use thiserror::Error;
use vectonauta_core::math::Vec2;

use crate::ecs::{Actor, Transform};

/// Speed used by the demo patrol, in pixels per second.
pub const DEFAULT_MAX_SPEED: f32 = 200.0;
/// Distance at which a waypoint counts as reached, in pixels.
pub const DEFAULT_ARRIVAL_THRESHOLD: f32 = 10.0;

/// A patrol route that cannot be driven.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PatrolError {
    /// The route has no waypoints.
    #[error("a patrol route needs at least one waypoint")]
    EmptyRoute,
    /// The speed is zero, negative, or not finite.
    #[error("patrol max speed must be positive and finite, got {0}")]
    InvalidSpeed(f32),
    /// The arrival threshold is zero, negative, or not finite.
    #[error("patrol arrival threshold must be positive and finite, got {0}")]
    InvalidThreshold(f32),
}

/// Moves a transform through an ordered, endlessly repeating list of waypoints.
///
/// Every [`step`](Self::step) first checks whether the current waypoint has been
/// reached and, if so, advances to the next one (wrapping to the first after the
/// last). It then seeks toward whichever waypoint is current.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointPatrol {
    waypoints: Vec<Vec2>,
    current: usize,
    max_speed: f32,
    arrival_threshold: f32,
}

impl WaypointPatrol {
    /// Creates a patrol starting at the first waypoint.
    pub fn new(
        waypoints: Vec<Vec2>,
        max_speed: f32,
        arrival_threshold: f32,
    ) -> Result<Self, PatrolError> {
        if waypoints.is_empty() {
            return Err(PatrolError::EmptyRoute);
        }
        if !max_speed.is_finite() || max_speed <= 0.0 {
            return Err(PatrolError::InvalidSpeed(max_speed));
        }
        if !arrival_threshold.is_finite() || arrival_threshold <= 0.0 {
            return Err(PatrolError::InvalidThreshold(arrival_threshold));
        }

        Ok(Self {
            waypoints,
            current: 0,
            max_speed,
            arrival_threshold,
        })
    }

    /// Creates a patrol with [`DEFAULT_MAX_SPEED`] and [`DEFAULT_ARRIVAL_THRESHOLD`].
    pub fn with_defaults(waypoints: Vec<Vec2>) -> Result<Self, PatrolError> {
        Self::new(waypoints, DEFAULT_MAX_SPEED, DEFAULT_ARRIVAL_THRESHOLD)
    }

    /// The route, in visiting order.
    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    /// Index of the waypoint currently being sought.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The waypoint currently being sought.
    pub fn current_waypoint(&self) -> Vec2 {
        self.waypoints[self.current]
    }

    /// Maximum speed in pixels per second.
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Distance at which a waypoint counts as reached.
    pub fn arrival_threshold(&self) -> f32 {
        self.arrival_threshold
    }

    /// Moves on to the next waypoint, wrapping after the last.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.waypoints.len();
        log::debug!(
            "Patrol advancing to waypoint {} at {:?}",
            self.current,
            self.current_waypoint()
        );
    }

    /// Advances one frame.
    ///
    /// The arrival test is inclusive (`distance <= threshold`), matching the
    /// radius at which [`Transform::seek`] stops moving; a strict test could
    /// leave a transform parked exactly on the radius forever.
    ///
    /// Returns `true` if the transform moved.
    pub fn step(&mut self, transform: &mut Transform, delta_time: f32) -> bool {
        let distance = transform.position.distance(self.current_waypoint());
        if distance <= self.arrival_threshold {
            self.advance();
        }

        transform.seek(
            self.current_waypoint(),
            self.max_speed,
            delta_time,
            self.arrival_threshold,
        )
    }

    /// Steps the transform of `actor`. Returns `false` if it has none.
    pub fn drive(&mut self, actor: &Actor, delta_time: f32) -> bool {
        match actor.get_component::<Transform>() {
            Some(transform) => self.step(&mut transform.borrow_mut(), delta_time),
            None => {
                log::error!("WaypointPatrol::drive: actor '{}' has no transform", actor.name());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route() -> Vec<Vec2> {
        vec![
            Vec2::new(400.0, 150.0),
            Vec2::new(700.0, 300.0),
            Vec2::new(1000.0, 150.0),
            Vec2::new(1200.0, 500.0),
        ]
    }

    #[test]
    fn rejects_unusable_routes() {
        assert_eq!(
            WaypointPatrol::with_defaults(Vec::new()),
            Err(PatrolError::EmptyRoute)
        );
        assert_eq!(
            WaypointPatrol::new(route(), 0.0, 10.0),
            Err(PatrolError::InvalidSpeed(0.0))
        );
        assert!(matches!(
            WaypointPatrol::new(route(), 200.0, f32::NAN),
            Err(PatrolError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn advances_once_the_waypoint_is_reached() {
        let mut patrol = WaypointPatrol::with_defaults(route()).unwrap();
        let mut transform = Transform::from_position(Vec2::new(395.0, 150.0));

        patrol.step(&mut transform, 0.016);
        assert_eq!(patrol.current_index(), 1);
    }

    #[test]
    fn stays_on_the_waypoint_while_far_away() {
        let mut patrol = WaypointPatrol::with_defaults(route()).unwrap();
        let mut transform = Transform::default();

        assert!(patrol.step(&mut transform, 0.1));
        assert_eq!(patrol.current_index(), 0);
        assert!(transform.position.distance(route()[0]) < route()[0].length());
    }

    #[test]
    fn wraps_after_the_last_waypoint() {
        let mut patrol = WaypointPatrol::with_defaults(route()).unwrap();
        for _ in 0..3 {
            patrol.advance();
        }
        assert_eq!(patrol.current_index(), 3);

        let mut transform = Transform::from_position(Vec2::new(1200.0, 495.0));
        patrol.step(&mut transform, 0.016);
        assert_eq!(patrol.current_index(), 0);
    }

    #[test]
    fn single_waypoint_route_keeps_its_index() {
        let mut patrol = WaypointPatrol::with_defaults(vec![Vec2::new(5.0, 5.0)]).unwrap();
        let mut transform = Transform::from_position(Vec2::new(5.0, 5.0));
        assert!(!patrol.step(&mut transform, 0.1));
        assert_eq!(patrol.current_index(), 0);
    }
}
