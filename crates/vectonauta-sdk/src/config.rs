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

//! Application configuration, stored as RON.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vectonauta_core::math::{LinearRgba, Vec2};
use vectonauta_data::ecs::ShapeType;
use vectonauta_data::steering::{DEFAULT_ARRIVAL_THRESHOLD, DEFAULT_MAX_SPEED};
use vectonauta_data::{PatrolError, WaypointPatrol};

/// A configuration file that could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config file '{path}'")]
    Io {
        /// The file that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The text is not a valid configuration.
    #[error("invalid config: {0}")]
    Parse(String),
    /// The configuration could not be written out.
    #[error("failed to serialize config: {0}")]
    Serialize(String),
}

/// What the engine does when [`Application::init`](crate::Application::init) fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitPolicy {
    /// Log the failure and return it without running any frame.
    #[default]
    Abort,
    /// Log the failure and run the frame loop anyway.
    Continue,
}

/// The route followed by the demo actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatrolConfig {
    /// Points visited in order, wrapping to the first after the last.
    pub waypoints: Vec<Vec2>,
    /// Speed cap in pixels per second.
    pub max_speed: f32,
    /// Distance at which a waypoint counts as reached.
    pub arrival_threshold: f32,
}

impl PatrolConfig {
    /// Builds a patrol from this route, validating speed and threshold.
    pub fn build(&self) -> Result<WaypointPatrol, PatrolError> {
        WaypointPatrol::new(
            self.waypoints.clone(),
            self.max_speed,
            self.arrival_threshold,
        )
    }
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            waypoints: vec![
                Vec2::new(400.0, 150.0),
                Vec2::new(700.0, 300.0),
                Vec2::new(1000.0, 150.0),
                Vec2::new(1200.0, 500.0),
            ],
            max_speed: DEFAULT_MAX_SPEED,
            arrival_threshold: DEFAULT_ARRIVAL_THRESHOLD,
        }
    }
}

/// Top-level settings for an engine run.
///
/// Every field has a default, so a file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name shown in the startup log and used as the window title.
    pub window_title: String,
    /// Surface width and height in pixels.
    pub window_size: (u32, u32),
    /// Color the surface is cleared to before each frame is rendered.
    pub clear_color: LinearRgba,
    /// Directory textures are loaded from.
    pub asset_root: PathBuf,
    /// Close the surface after this many frames. `None` runs until closed.
    pub frame_limit: Option<u64>,
    /// Report this many seconds per frame instead of measuring wall time.
    pub fixed_delta: Option<f32>,
    /// What to do when the application fails to initialize.
    pub init_policy: InitPolicy,
    /// Outline preset of the patrolling actor's shape.
    pub shape: ShapeType,
    /// Route of the patrolling actor.
    pub patrol: PatrolConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "VectonautaEngine".to_owned(),
            window_size: (800, 600),
            clear_color: LinearRgba::BLACK,
            asset_root: PathBuf::from("assets"),
            frame_limit: None,
            fixed_delta: None,
            init_policy: InitPolicy::Abort,
            shape: ShapeType::Circle,
            patrol: PatrolConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads a configuration file.
    ///
    /// A missing file is not an error: the defaults are returned instead.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!(
                    "No config file at '{}', using default settings",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = Self::from_ron_str(&text)?;
        log::info!("Loaded config from '{}'", path.display());
        Ok(config)
    }

    /// Parses a configuration from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        ron::de::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serializes the configuration as pretty-printed RON.
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let pretty_config = ron::ser::PrettyConfig::default().indentor("  ".to_string());
        ron::ser::to_string_pretty(self, pretty_config)
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}
