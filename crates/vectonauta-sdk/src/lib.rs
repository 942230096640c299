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

//! The public-facing Software Development Kit (SDK) for the Vectonauta engine.
//!
//! An application implements [`Application`] and hands itself to
//! [`Engine::run`] together with a [`RenderSurface`]. The engine owns the frame
//! loop: poll events, update, clear, render, present, until the surface closes.

#![warn(missing_docs)]

use anyhow::Result;
use vectonauta_core::renderer::RenderSurface;
use vectonauta_infra::HeadlessSurface;

pub mod config;

pub use config::{AppConfig, ConfigError, InitPolicy, PatrolConfig};

/// Commonly used types, re-exported for applications.
pub mod prelude {
    pub use crate::{AppConfig, Application, Engine, EngineContext, InitPolicy};
    pub use vectonauta_core::math::{LinearRgba, Vec2};
    pub use vectonauta_core::renderer::RenderSurface;
    pub use vectonauta_data::ecs::{Shape, ShapeType, Texture, Transform};
    pub use vectonauta_data::{Actor, ResourceManager, WaypointPatrol};
}

/// What an application can see while it initializes.
pub struct EngineContext<'a> {
    /// The configuration the engine was created with.
    pub config: &'a AppConfig,
    /// Size of the surface the application will render to, in pixels.
    pub surface_size: (u32, u32),
}

/// The hooks the engine calls on the user's application.
pub trait Application {
    /// Called once before the first frame.
    ///
    /// What happens on failure is decided by [`AppConfig::init_policy`].
    fn init(&mut self, context: EngineContext<'_>) -> Result<()>;

    /// Called every frame for game logic, with the surface's elapsed frame time.
    fn update(&mut self, delta_time: f32);

    /// Called every frame, between clear and present.
    fn render(&mut self, surface: &mut dyn RenderSurface);

    /// Called once after the last frame.
    fn destroy(&mut self) {}
}

/// The public entry point for the Vectonauta engine.
pub struct Engine {
    config: AppConfig,
}

impl Engine {
    /// Creates an engine driven by `config`.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Builds a [`HeadlessSurface`] sized, timed, and budgeted from the configuration.
    pub fn headless_surface(&self) -> HeadlessSurface {
        let (width, height) = self.config.window_size;
        let mut surface = HeadlessSurface::new(width, height);
        if let Some(frames) = self.config.frame_limit {
            surface = surface.with_frame_limit(frames);
        }
        if let Some(step) = self.config.fixed_delta {
            surface = surface.with_fixed_delta(step);
        }
        surface
    }

    /// Initializes `app` and runs the frame loop until `surface` closes.
    ///
    /// Each frame polls events, then (if the surface is still open) updates the
    /// application, clears to the configured color, renders, and presents.
    /// [`Application::destroy`] runs once after the loop ends.
    ///
    /// Returns the number of frames presented. Under [`InitPolicy::Abort`], a
    /// failed [`Application::init`] is returned as an error before any frame runs.
    pub fn run<A: Application>(&self, app: &mut A, surface: &mut dyn RenderSurface) -> Result<u64> {
        log::info!("{}: starting...", self.config.window_title);

        let context = EngineContext {
            config: &self.config,
            surface_size: surface.size(),
        };
        if let Err(e) = app.init(context) {
            match self.config.init_policy {
                InitPolicy::Abort => {
                    log::error!("Application failed to initialize: {e:#}");
                    surface.close();
                    return Err(e.context("application initialization failed"));
                }
                InitPolicy::Continue => {
                    log::warn!("Application failed to initialize, continuing anyway: {e:#}");
                }
            }
        }

        log::info!("Entering frame loop");
        let mut frames = 0u64;
        while surface.is_open() {
            surface.handle_events();
            if !surface.is_open() {
                break;
            }

            let delta_time = surface.delta_time();
            app.update(delta_time);

            surface.clear(self.config.clear_color);
            app.render(surface);
            surface.display();

            frames += 1;
            log::trace!("Frame {frames} done (dt = {delta_time:.4}s)");
        }

        log::info!("Surface closed after {frames} frame(s), shutting down...");
        app.destroy();
        log::info!("Shutdown complete.");

        Ok(frames)
    }
}
