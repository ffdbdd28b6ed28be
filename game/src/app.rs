use glam::Vec2;
use log::info;
use rand::Rng;
use snake_engine::{Audio, Color, Flow, Frame, Game, KeyCode, Loader, Rect};

use crate::assets::SnakeAssets;
use crate::grid::Position;
use crate::input::{command_for_key, Command, Gamepads};
use crate::session::{Session, TickOutcome};
use crate::settings::Settings;
use crate::sprites::segment_sprites;

const BACKGROUND: Color = Color::BLACK;
const TEXT: Color = Color::WHITE;
const SCORE_ORIGIN: Vec2 = Vec2::new(10.0, 10.0);

/// The snake game as driven by the engine loop.
pub struct SnakeApp {
    session: Session,
    settings: Settings,
    gamepads: Gamepads,
    audio: Audio,
    assets: Option<SnakeAssets>,
}

impl SnakeApp {
    pub fn new(settings: Settings, audio: Audio, gamepads: Gamepads) -> Self {
        let session = Session::new(settings.grid(), settings.initial_length);
        Self {
            session,
            settings,
            gamepads,
            audio,
            assets: None,
        }
    }

    fn tile_rect(&self, position: Position) -> Rect {
        let tile = self.settings.tile_size as f32;
        Rect::new(position.x as f32 * tile, position.y as f32 * tile, tile, tile)
    }

    fn draw_board(&self, assets: &SnakeAssets, frame: &mut Frame) {
        frame.draw_sprite(assets.food, self.tile_rect(self.session.food().position()));

        for (position, sprite) in segment_sprites(self.session.snake()) {
            if let Some(sprite) = sprite {
                frame.draw_sprite(assets.segment(sprite), self.tile_rect(position));
            }
        }

        let score = format!("Score: {}", self.session.score());
        frame.draw_text(&assets.font, &score, TEXT, SCORE_ORIGIN);
    }

    fn draw_game_over(&self, assets: &SnakeAssets, frame: &mut Frame) {
        let height = frame.canvas().y;
        let line = assets.font.size_px();

        frame.draw_text_centered(&assets.font, "Game Over", TEXT, height / 3.0 - line);
        frame.draw_text_centered(
            &assets.font,
            &format!("Final Score: {}", self.session.score()),
            TEXT,
            height / 2.0 - line / 2.0,
        );
        frame.draw_text_centered(&assets.font, "Press Esc to exit", TEXT, height * 2.0 / 3.0);
    }
}

/// Feeds a player command to the session. Exit is only honoured once the game is over.
pub fn apply<R: Rng>(session: &mut Session<R>, command: Command) -> Flow {
    match command {
        Command::Steer(direction) => {
            session.steer(direction);
            Flow::Continue
        }
        Command::Exit if session.is_over() => {
            info!("exiting with final score {}", session.score());
            Flow::Exit
        }
        Command::Exit => Flow::Continue,
    }
}

impl Game for SnakeApp {
    fn load(&mut self, loader: &mut Loader<'_>) -> anyhow::Result<()> {
        self.assets = Some(SnakeAssets::load(loader, &self.settings.assets)?);
        Ok(())
    }

    fn key_pressed(&mut self, key: KeyCode) -> Flow {
        match command_for_key(key) {
            Some(command) => apply(&mut self.session, command),
            None => Flow::Continue,
        }
    }

    fn update(&mut self) -> Flow {
        for command in self.gamepads.poll() {
            if apply(&mut self.session, command) == Flow::Exit {
                return Flow::Exit;
            }
        }

        if let TickOutcome::Ate = self.session.tick() {
            if let Some(assets) = &self.assets {
                self.audio.play(&assets.eat_sound);
            }
        }
        Flow::Continue
    }

    fn draw(&self, frame: &mut Frame) {
        frame.clear(BACKGROUND);
        let Some(assets) = &self.assets else {
            return;
        };

        if self.session.is_over() {
            self.draw_game_over(assets, frame);
        } else {
            self.draw_board(assets, frame);
        }
    }
}
