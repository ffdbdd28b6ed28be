pub mod assets;
pub mod audio;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod render;
pub mod text;

pub use assets::Loader;
pub use audio::{Audio, Sound};
pub use config::{EngineConfig, WindowConfig};
pub use context::{EngineContext, Flow, Game};
pub use error::EngineError;
pub use render::frame::{Color, DrawCommand, Frame, Rect};
pub use render::TextureId;
pub use text::Font;

pub use winit::keyboard::KeyCode;
