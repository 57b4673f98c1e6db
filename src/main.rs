use anyhow::Context;
use glam::Vec2;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use terrain_viewer::renderer::State;
use terrain_viewer::{Camera, MovementInput, Scene, ViewerConfig, ViewportTracker};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

struct App {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    state: Option<State>,
    tracker: ViewportTracker,
    input: MovementInput,
    cursor_position: winit::dpi::PhysicalPosition<f64>,
    last_tick: Instant,
    title: String,
}

impl App {
    fn new(config: ViewerConfig) -> Self {
        let camera = Camera::new(Vec2::ZERO, config.camera.radius, config.camera.speed);
        let tracker = ViewportTracker::new(
            camera,
            config.chunk.dims(),
            config.window.width,
            config.window.height,
        );
        Self {
            config,
            window: None,
            state: None,
            tracker,
            input: MovementInput::default(),
            cursor_position: Default::default(),
            last_tick: Instant::now(),
            title: String::new(),
        }
    }

    fn report_pointer(&self) {
        let pixel = Vec2::new(self.cursor_position.x as f32, self.cursor_position.y as f32);
        let coords = self.tracker.pointer_query(pixel);
        log::info!("Mouse (world): {}, {}", coords.world.x, coords.world.y);
        log::info!("Mouse (screen): {}, {}", coords.screen.x, coords.screen.y);
        log::info!("Mouse (chunk): {}, {}", coords.chunk.x, coords.chunk.y);
    }

    fn refresh_title(&mut self) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        let title = format!("{} | {}", self.config.window.title, self.tracker.overlay_lines().join(" | "));
        if title != self.title {
            window.set_title(&title);
            self.title = title;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let window_attributes = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(LogicalSize::new(self.config.window.width, self.config.window.height));
        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        let size = window.inner_size();
        self.tracker.resize(size.width, size.height);

        match pollster::block_on(State::new(window)) {
            Ok(state) => self.state = Some(state),
            Err(e) => {
                log::error!("Failed to create state: {e:#}");
                event_loop.exit();
            }
        }
        self.last_tick = Instant::now();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if id != window.id() {
            return;
        }

        if self.input.process_events(&event) {
            return;
        }

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = position;
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.report_pointer();
            }
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        logical_key: Key::Named(NamedKey::Escape),
                        ..
                    },
                ..
            } => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(state) = self.state.as_mut() {
                    state.resize(physical_size);
                }
                self.tracker.resize(physical_size.width, physical_size.height);
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                let Some(state) = self.state.as_mut() else {
                    return;
                };
                match state.render(&self.tracker) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        state.resize(state.size())
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                    Err(e) => log::warn!("{e:?}"),
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let measured = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        self.tracker.update(self.config.frame_seconds(measured), &self.input);
        self.refresh_title();

        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = ViewerConfig::load(config_path.as_deref())?;
    log::info!("chunk size {:?}, camera speed {}", config.chunk.dims().world_size(), config.camera.speed);

    let event_loop = EventLoop::new().context("creating event loop")?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app).context("running event loop")?;
    Ok(())
}
