//! Flappy Bird entry point
//!
//! Loads configuration and sprites, opens the window and drives the game
//! from the winit event loop.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use flappy_bird::assets::{DEFAULT_MANIFEST, SpriteSheet};
use flappy_bird::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS, WINDOW_TITLE};
use flappy_bird::pacing::FramePacer;
use flappy_bird::renderer::{RenderState, tessellate};
use flappy_bird::{Control, Game, GameConfig, InputEvent, Tuning, input};

struct Gfx {
    window: Arc<Window>,
    render: RenderState,
}

struct App {
    game: Game,
    gfx: Option<Gfx>,
    pacer: FramePacer,
    pending: Vec<InputEvent>,
    fatal: Option<anyhow::Error>,
}

impl App {
    fn new(game: Game) -> Self {
        let pacer = FramePacer::new(TARGET_FPS, Instant::now());
        log::debug!("Frame period {:?}", pacer.period());
        Self {
            game,
            gfx: None,
            pacer,
            pending: Vec::new(),
            fatal: None,
        }
    }

    fn create_gfx(event_loop: &ActiveEventLoop) -> Result<Gfx> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );
        let render =
            RenderState::for_window(window.clone()).context("failed to initialise renderer")?;
        log::info!("Window created: {}x{}", render.size.0, render.size.1);
        Ok(Gfx { window, render })
    }

    /// Run one game frame with everything queued so far
    fn step(&mut self, event_loop: &ActiveEventLoop) {
        let events = std::mem::take(&mut self.pending);
        if self.game.frame(&events) == Control::Quit {
            event_loop.exit();
            return;
        }
        if let Some(gfx) = &self.gfx {
            gfx.window.request_redraw();
        }
    }

    fn redraw(&mut self) {
        let Some(gfx) = self.gfx.as_mut() else {
            return;
        };
        let vertices = tessellate(&self.game.scene(), self.game.sprites());
        match gfx.render.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gfx.render.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory while rendering");
            }
            Err(e) => {
                log::warn!("Render error: {:?}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }
        match Self::create_gfx(event_loop) {
            Ok(gfx) => self.gfx = Some(gfx),
            Err(e) => {
                self.fatal = Some(e);
                event_loop.exit();
            }
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
                self.pending.push(InputEvent::Quit);
                self.step(event_loop);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(ev) = input::from_key_event(&event) {
                    self.pending.push(ev);
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(gfx) = self.gfx.as_mut() {
                    gfx.render.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.gfx.is_some() && self.pacer.is_due(now) {
            self.pacer.advance(now);
            self.step(event_loop);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.deadline()));
    }
}

fn load_config() -> Result<(GameConfig, SpriteSheet)> {
    let manifest = std::env::var_os("FLAPPY_ASSETS")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST));
    let sprites = SpriteSheet::load(&manifest)
        .with_context(|| format!("failed to load sprites from {}", manifest.display()))?;

    let tuning = match std::env::var_os("FLAPPY_TUNING") {
        Some(path) => {
            let path = PathBuf::from(path);
            Tuning::load(&path)
                .with_context(|| format!("failed to load tuning from {}", path.display()))?
        }
        None => Tuning::default(),
    };

    let config = GameConfig::new(tuning, sprites.metrics());
    config.validate().context("tuning does not fit the sprites")?;
    Ok((config, sprites))
}

fn seed() -> Result<u64> {
    match std::env::var("FLAPPY_SEED") {
        Ok(value) => value
            .parse::<u64>()
            .with_context(|| format!("FLAPPY_SEED is not a u64: {value:?}")),
        Err(_) => Ok(SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()),
    }
}

fn run() -> Result<()> {
    let (config, sprites) = load_config()?;
    let game = Game::new(config, sprites, seed()?);

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(game);
    event_loop.run_app(&mut app).context("event loop error")?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
