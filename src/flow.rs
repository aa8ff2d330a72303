//! Application event loop.
//!
//! This module owns the window and drives the scene: it builds the GPU
//! context, renderer and scene once the window exists, routes keyboard and
//! mouse input to the camera controller, and renders a frame on every redraw.
//!
//! # Lifecycle
//!
//! The event loop follows this pattern each frame:
//! 1. Collect window/device events and feed them to the camera controller
//! 2. Move the camera by the time elapsed since the last frame
//! 3. Upload the view, record the scene's draws and submit them
//! 4. Present the frame and request the next redraw

use std::sync::Arc;

use anyhow::Context as _;
use instant::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{DeviceEvent, DeviceId, KeyEvent, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window},
};

use crate::{
    camera::ViewCommand,
    config::SceneConfig,
    context::Context,
    render::Renderer,
    scene::SceneManager,
};

/// Scroll distance of one wheel notch on touchpads reporting pixels.
const PIXELS_PER_SCROLL_LINE: f64 = 40.0;

struct AppState {
    ctx: Context,
    renderer: Renderer,
    scene: SceneManager,
}

impl AppState {
    async fn new(window: Arc<Window>, config: &SceneConfig) -> anyhow::Result<Self> {
        let ctx = Context::new(window, config)
            .await
            .context("Cannot create the main context")?;
        let renderer = Renderer::new(&ctx.device, &ctx.queue, ctx.config.format);
        let mut scene = SceneManager::new(&config.texture_dir);
        scene.prepare(&ctx.device, &ctx.queue, renderer.texture_layout());
        Ok(Self {
            ctx,
            renderer,
            scene,
        })
    }

    fn set_mouse_lock(&self, locked: bool) {
        let window = self.ctx.window();
        let grab = if locked {
            // not every platform can lock the cursor in place
            window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            window.set_cursor_grab(CursorGrabMode::None)
        };
        if let Err(e) = grab {
            log::warn!("Unable to change the cursor grab: {}", e);
        }
        window.set_cursor_visible(!locked);
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.scene.release();
        event_loop.exit();
    }
}

pub struct App {
    async_runtime: tokio::runtime::Runtime,
    config: SceneConfig,
    state: Option<AppState>,
    last_time: Instant,
}

impl App {
    fn new(config: SceneConfig) -> anyhow::Result<Self> {
        let async_runtime =
            tokio::runtime::Runtime::new().context("Failed to start the async runtime")?;
        Ok(Self {
            async_runtime,
            config,
            state: None,
            last_time: Instant::now(),
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let window_attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));
        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Unable to create a window: {}", e);
                event_loop.exit();
                return;
            }
        };

        match self
            .async_runtime
            .block_on(AppState::new(window, &self.config))
        {
            Ok(state) => {
                state.set_mouse_lock(state.ctx.controller.is_mouse_locked());
                state.ctx.window().request_redraw();
                self.state = Some(state);
                self.last_time = Instant::now();
            }
            Err(e) => {
                log::error!("App initialization failed: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            state.ctx.controller.handle_mouse(dx, dy);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => state.shutdown(event_loop),
            WindowEvent::Resized(size) => state.ctx.resize(size.width, size.height),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                let command = state.ctx.controller.handle_key(
                    code,
                    key_state.is_pressed(),
                    &mut state.ctx.projection,
                );
                match command {
                    Some(ViewCommand::Exit) => state.shutdown(event_loop),
                    Some(ViewCommand::LockMouse(locked)) => state.set_mouse_lock(locked),
                    None => (),
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(position) => {
                        (position.y / PIXELS_PER_SCROLL_LINE) as f32
                    }
                };
                state.ctx.controller.handle_scroll(lines);
            }
            WindowEvent::RedrawRequested => {
                let dt = self.last_time.elapsed();
                self.last_time = Instant::now();

                state
                    .ctx
                    .controller
                    .update(&mut state.ctx.camera, dt);

                match state.renderer.render(&state.ctx, &mut state.scene) {
                    Ok(()) => (),
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.ctx.window().inner_size();
                        state.ctx.resize(size.width, size.height);
                    }
                    Err(e) => {
                        log::error!("Unable to render {}", e);
                    }
                }
                state.ctx.window().request_redraw();
            }
            _ => {}
        }
    }
}

/// Open the viewer window and render the scene until it is closed.
pub fn run(config: SceneConfig) -> anyhow::Result<()> {
    let logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    if let Err(e) = logger {
        println!("Warning: Could not initialize logger: {}", e);
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config)?;

    event_loop.run_app(&mut app)?;

    Ok(())
}
