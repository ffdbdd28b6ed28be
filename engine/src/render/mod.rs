pub mod frame;
pub mod graphics;
mod sprite;
mod texture;

pub use graphics::{create_graphics, Graphics};
pub use texture::TextureId;
