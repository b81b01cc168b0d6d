//! Snowfall application implementing winit ApplicationHandler
//!
//! The timer drives the update step; each applied tick requests a redraw,
//! and the redraw renders the particles. Update and render both run on the
//! event-loop thread, so a frame never sees a half-updated store.

use crate::config::AppConfig;
use snowfall_core::Viewport;
use snowfall_particles::{ParticleRng, SnowfallSystem};
use snowfall_render::{CircleBatch, CirclePipeline, RenderContext};
use snowfall_runtime::{AnimationState, RuntimeSystem, TickTimer};
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

pub struct SnowfallApp {
    config: AppConfig,

    // Simulation
    system: SnowfallSystem,
    state: AnimationState,
    timer: TickTimer,

    // Rendering
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    pipeline: Option<CirclePipeline>,
    batch: CircleBatch,

    /// Startup failure, reported once the event loop returns
    startup_error: Option<anyhow::Error>,
}

impl SnowfallApp {
    pub fn new(config: AppConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ParticleRng::new(seed),
            None => ParticleRng::from_entropy(),
        };
        let system = SnowfallSystem::new(config.snowfall.clone(), rng);
        let timer = TickTimer::new(config.window.tick_period(), Instant::now());
        Self {
            config,
            system,
            state: AnimationState::Running,
            timer,
            window: None,
            render_context: None,
            pipeline: None,
            batch: CircleBatch::new(),
            startup_error: None,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Take the error that aborted startup, if any
    pub fn take_startup_error(&mut self) -> Option<anyhow::Error> {
        self.startup_error.take()
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window_attrs = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(PhysicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        self.window = Some(window.clone());

        let render_context = pollster::block_on(RenderContext::new(window.clone()))?;
        let pipeline = CirclePipeline::new(&render_context.device, render_context.format());

        let viewport = viewport_of(&render_context);
        self.system.initialize(viewport)?;

        self.render_context = Some(render_context);
        self.pipeline = Some(pipeline);
        self.timer.reset(Instant::now());

        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            "snowfall started (Space or click to pause, Escape to quit)"
        );
        Ok(())
    }

    fn viewport(&self) -> Option<Viewport> {
        self.render_context.as_ref().map(viewport_of)
    }

    fn toggle(&mut self) {
        let state = self.state.toggle();
        if state.is_running() {
            self.timer.reset(Instant::now());
        }
        if let Some(window) = &self.window {
            let title = match state {
                AnimationState::Running => self.config.window.title.clone(),
                AnimationState::Paused => format!("{} (paused)", self.config.window.title),
            };
            window.set_title(&title);
            window.request_redraw();
        }
    }

    /// Poll the tick timer and apply one update step if it fired while running.
    ///
    /// The timer keeps its schedule while paused; only the update is gated.
    /// Returns whether the particles moved, i.e. whether a redraw is due.
    /// A failed step costs only this tick.
    pub fn on_timer(&mut self, now: Instant, viewport: Viewport) -> bool {
        if !self.timer.poll(now) || !self.state.is_running() {
            return false;
        }
        match self.system.tick(viewport) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "tick skipped");
                false
            }
        }
    }

    fn render(&mut self) {
        let Some(context) = &self.render_context else {
            return;
        };
        let Some(pipeline) = &self.pipeline else {
            return;
        };

        let output = match context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                context.reconfigure();
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "frame skipped");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.batch.clear();
        self.system.draw(&mut self.batch);
        self.batch.submit(
            pipeline,
            &context.device,
            &context.queue,
            &view,
            context.config.width,
            context.config.height,
            self.config.window.background,
        );

        if let Some(window) = &self.window {
            window.pre_present_notify();
        }
        output.present();
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(e) = self.system.shutdown() {
            tracing::warn!(error = %e, "shutdown failed");
        }
        event_loop.exit();
    }
}

fn viewport_of(context: &RenderContext) -> Viewport {
    Viewport::new(context.config.width, context.config.height)
}

impl ApplicationHandler for SnowfallApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.initialize(event_loop) {
            tracing::error!(error = %e, "startup failed");
            self.startup_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                if let Some(context) = &mut self.render_context {
                    context.resize(new_size);
                }
                if let Some(viewport) = self.viewport() {
                    if let Err(e) = self.system.resize(viewport) {
                        tracing::warn!(error = %e, "resize failed");
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Space) => self.toggle(),
                    PhysicalKey::Code(KeyCode::Escape) => self.shutdown(event_loop),
                    _ => {}
                }
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.toggle();
            }

            WindowEvent::RedrawRequested => {
                self.render();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(viewport) = self.viewport() else {
            return;
        };

        if self.on_timer(Instant::now(), viewport) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.timer.deadline()));
    }
}
