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

// Vectonauta Engine Sandbox
// A circle actor patrolling four waypoints on a headless surface.

use std::path::PathBuf;

use anyhow::{Context, Result};
use vectonauta_infra::ImageTextureLoader;
use vectonauta_sdk::prelude::*;

const CONFIG_PATH: &str = "sandbox/config.ron";
/// Frames to run when the configuration sets no budget; the headless surface
/// has no close button.
const FALLBACK_FRAME_BUDGET: u64 = 600;

struct PatrolDemo {
    actor: Actor,
    patrol: Option<WaypointPatrol>,
    resources: Option<ResourceManager>,
}

impl PatrolDemo {
    fn new() -> Self {
        Self {
            actor: Actor::new("Circle"),
            patrol: None,
            resources: None,
        }
    }
}

impl Application for PatrolDemo {
    fn init(&mut self, context: EngineContext<'_>) -> Result<()> {
        let config = context.config;

        let shape = self
            .actor
            .get_component::<Shape>()
            .context("circle actor has no shape")?;
        {
            let mut shape = shape.borrow_mut();
            shape.create_shape(config.shape);
            shape.set_fill_color(LinearRgba::BLUE);
        }
        self.actor
            .get_component::<Transform>()
            .context("circle actor has no transform")?
            .borrow_mut()
            .position = Vec2::new(200.0, 150.0);

        let mut resources = ResourceManager::new(config.asset_root.clone(), ImageTextureLoader::new());
        if !resources.load_texture("Circle", "png") {
            log::warn!("Circle texture unavailable, the shape will be drawn untextured");
        }
        self.actor.set_texture(resources.get_texture("Circle"));
        self.resources = Some(resources);

        let patrol = config
            .patrol
            .build()
            .context("invalid patrol route in configuration")?;
        log::info!(
            "Patrolling {} waypoints at {} px/s",
            patrol.waypoints().len(),
            patrol.max_speed()
        );
        self.patrol = Some(patrol);

        self.actor.start();
        Ok(())
    }

    fn update(&mut self, delta_time: f32) {
        if let Some(patrol) = self.patrol.as_mut() {
            patrol.drive(&self.actor, delta_time);
        }
        self.actor.update(delta_time);
    }

    fn render(&mut self, surface: &mut dyn RenderSurface) {
        self.actor.render(surface);
    }

    fn destroy(&mut self) {
        if let Some(transform) = self.actor.get_component::<Transform>() {
            log::info!("'{}' stopped at {:?}", self.actor.name(), transform.borrow().position);
        }
        self.actor.destroy();
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_PATH));
    let mut config = AppConfig::load(&config_path)
        .with_context(|| format!("failed to load '{}'", config_path.display()))?;
    if config.frame_limit.is_none() {
        log::info!("No frame budget configured, stopping after {FALLBACK_FRAME_BUDGET} frames");
        config.frame_limit = Some(FALLBACK_FRAME_BUDGET);
    }

    let engine = Engine::new(config);
    let mut surface = engine.headless_surface();
    let mut app = PatrolDemo::new();
    engine.run(&mut app, &mut surface)?;
    Ok(())
}
