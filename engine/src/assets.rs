use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::{debug, error};

use crate::audio::Sound;
use crate::error::{EngineError, Result};
use crate::render::{Graphics, TextureId};
use crate::text::Font;

/// Reads an image file and converts it to 8-bit RGBA.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    match image::open(path) {
        Ok(image) => Ok(image.to_rgba8()),
        Err(source) => {
            error!("failed to load texture {}: {source}", path.display());
            Err(EngineError::Texture {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Asset loading handed to [`crate::Game::load`] once the graphics context exists.
///
/// Relative paths are resolved against the asset root.
pub struct Loader<'a> {
    graphics: &'a mut Graphics,
    root: PathBuf,
}

impl<'a> Loader<'a> {
    pub fn new(graphics: &'a mut Graphics, root: impl Into<PathBuf>) -> Self {
        Self {
            graphics,
            root: root.into(),
        }
    }

    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    pub fn texture(&mut self, relative: impl AsRef<Path>) -> Result<TextureId> {
        let path = self.resolve(relative);
        let image = load_image(&path)?;
        debug!("loaded texture {}", path.display());
        Ok(self
            .graphics
            .upload_texture(&path.display().to_string(), &image))
    }

    pub fn font(&self, relative: impl AsRef<Path>, size_px: f32) -> Result<Font> {
        let path = self.resolve(relative);
        let font = Font::load(&path, size_px)?;
        debug!("loaded font {} at {size_px}px", path.display());
        Ok(font)
    }

    pub fn sound(&self, relative: impl AsRef<Path>) -> Result<Sound> {
        Sound::load(&self.resolve(relative))
    }
}
