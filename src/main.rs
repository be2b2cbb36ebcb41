use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use scene_viewer::cli::Cli;
use scene_viewer::config::ViewerConfig;
use scene_viewer::frame::FrameIterator;
use scene_viewer::input::WinitInput;
use scene_viewer::renderer::SceneRenderer;
use scene_viewer::session::{Session, WINDOW_HEIGHT, WINDOW_WIDTH};
use scene_viewer::texture::TextureSet;

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    session: Session,
    textures: TextureSet,
    input: WinitInput,
    frames: FrameIterator,
}

impl App {
    fn new(config: &ViewerConfig) -> Self {
        let mut rng = match config.texture_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            window: None,
            renderer: None,
            session: Session::new(config.scene.build(), config.steering()),
            textures: TextureSet::synthesize(&mut rng),
            input: WinitInput::new(1.0),
            frames: FrameIterator::new(config.timestep),
        }
    }

    fn redraw(&mut self) {
        if let Some(frame) = self.frames.next() {
            self.session.update(frame.ticks);
        }

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };
        match renderer.render(window, &self.session.render()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let title = format!("Scene Viewer - {}", self.session.scene().name());
        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(title)
                .with_resizable(false)
                .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(SceneRenderer::new(window.clone(), &self.textures)) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.input.set_scale_factor(window.scale_factor());
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::RedrawRequested => self.redraw(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            other => {
                if let Some(input) = self.input.translate(&other) {
                    if !self.session.handle(input) {
                        event_loop.exit();
                    }
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = ViewerConfig::resolve(&cli).context("loading viewer configuration")?;
    log::info!("Starting {:?} scene with {:?}", config.scene, config);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(&config);

    log::info!("Controls: arrows steer, PageUp/PageDown pitch, drag sliders, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
