use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use log::{info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop, EventLoopProxy},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::assets::Loader;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::render::{create_graphics, frame::Frame, Graphics};

/// What the loop should do after a game callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The game side of the main loop.
pub trait Game {
    /// Called once, right after the graphics context is up.
    fn load(&mut self, loader: &mut Loader<'_>) -> anyhow::Result<()>;

    /// Called for every fresh (non-repeat) key press.
    fn key_pressed(&mut self, key: KeyCode) -> Flow;

    /// Called once per fixed tick.
    fn update(&mut self) -> Flow;

    fn draw(&self, frame: &mut Frame);
}

enum State {
    Ready(Graphics),
    Init(Option<EventLoopProxy<Graphics>>),
}

pub struct EngineContext {
    config: EngineConfig,
    asset_root: PathBuf,
    event_loop: EventLoop<Graphics>,
}

struct App<G> {
    state: State,
    game: G,
    config: EngineConfig,
    asset_root: PathBuf,
    next_tick: Instant,
    failure: Option<anyhow::Error>,
}

impl<G: Game> App<G> {
    fn new(event_loop: &EventLoop<Graphics>, config: EngineConfig, asset_root: PathBuf, game: G) -> Self {
        Self {
            state: State::Init(Some(event_loop.create_proxy())),
            game,
            config,
            asset_root,
            next_tick: Instant::now(),
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        event_loop.exit();
    }

    fn draw(&mut self) {
        if let State::Ready(gfx) = &mut self.state {
            let mut frame = Frame::new(gfx.canvas());
            self.game.draw(&mut frame);
            match gfx.render(&frame) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gfx.reconfigure(),
                Err(err) => warn!("failed to render frame: {err}"),
            }
        }
    }

    fn resized(&mut self, size: PhysicalSize<u32>) {
        if let State::Ready(gfx) = &mut self.state {
            gfx.resize(size);
        }
    }
}

impl<G: Game> ApplicationHandler<Graphics> for App<G> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let State::Init(proxy) = &mut self.state {
            if let Some(proxy) = proxy.take() {
                let window = &self.config.window;
                let win_attr = Window::default_attributes()
                    .with_title(window.title.clone())
                    .with_inner_size(LogicalSize::new(window.width, window.height))
                    .with_resizable(false);

                let window = match event_loop.create_window(win_attr) {
                    Ok(window) => Arc::new(window),
                    Err(err) => return self.fail(event_loop, EngineError::from(err).into()),
                };

                if let Err(err) =
                    pollster::block_on(create_graphics(window, &self.config.window, proxy))
                {
                    self.fail(event_loop, err.into());
                }
            }
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, mut graphics: Graphics) {
        let mut loader = Loader::new(&mut graphics, self.asset_root.clone());
        if let Err(err) = self.game.load(&mut loader) {
            return self.fail(event_loop, err.context("failed to load assets"));
        }
        info!("assets loaded, starting loop");

        graphics.request_redraw();
        self.next_tick = Instant::now();
        self.state = State::Ready(graphics);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("quit requested");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => self.resized(size),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } if matches!(self.state, State::Ready(_)) => {
                if self.game.key_pressed(code) == Flow::Exit {
                    event_loop.exit();
                }
            }
            WindowEvent::RedrawRequested => self.draw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let State::Ready(gfx) = &self.state else {
            return;
        };

        let now = Instant::now();
        if now >= self.next_tick {
            if self.game.update() == Flow::Exit {
                event_loop.exit();
                return;
            }
            gfx.request_redraw();

            self.next_tick += self.config.tick;
            if self.next_tick < now {
                self.next_tick = now + self.config.tick;
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }
}

impl EngineContext {
    pub fn new(config: EngineConfig, asset_root: impl Into<PathBuf>) -> Result<Self, EngineError> {
        let event_loop = EventLoop::<Graphics>::with_user_event().build()?;
        event_loop.set_control_flow(ControlFlow::Wait);
        Ok(Self {
            config,
            asset_root: asset_root.into(),
            event_loop,
        })
    }

    /// Runs `game` on the current thread until it exits or the window is closed.
    ///
    /// Returns the first fatal error raised while creating the window, the
    /// graphics context or loading assets.
    pub fn run<G: Game>(self, game: G) -> anyhow::Result<()> {
        let EngineContext {
            config,
            asset_root,
            event_loop,
        } = self;

        let mut app = App::new(&event_loop, config, asset_root, game);
        event_loop.run_app(&mut app).map_err(EngineError::from)?;

        match app.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
