pub mod app;
pub mod assets;
pub mod direction;
pub mod food;
pub mod grid;
pub mod input;
pub mod session;
pub mod settings;
pub mod snake;
pub mod sprites;

pub use app::SnakeApp;
pub use direction::Direction;
pub use food::Food;
pub use grid::{Grid, Position};
pub use session::{GameOverReason, Phase, Session, TickOutcome};
pub use settings::Settings;
pub use snake::Snake;
pub use sprites::SegmentSprite;
