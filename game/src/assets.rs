use anyhow::Context;
use snake_engine::{Font, Loader, Sound, TextureId};

use crate::settings::AssetSettings;
use crate::sprites::SegmentSprite;

/// Everything the game draws or plays, loaded once at startup.
pub struct SnakeAssets {
    pub font: Font,
    pub eat_sound: Sound,
    pub food: TextureId,
    segments: [TextureId; 14],
}

impl SnakeAssets {
    pub fn load(loader: &mut Loader<'_>, settings: &AssetSettings) -> anyhow::Result<Self> {
        let font = loader
            .font(&settings.font, settings.font_size)
            .context("loading font")?;
        let eat_sound = loader.sound(&settings.sound).context("loading sound")?;

        let mut segments = [TextureId(0); 14];
        for sprite in SegmentSprite::ALL {
            segments[sprite.index()] = loader
                .texture(sprite.file_name())
                .with_context(|| format!("loading {sprite:?} sprite"))?;
        }
        let food = loader.texture(&settings.food).context("loading food sprite")?;

        Ok(Self {
            font,
            eat_sound,
            food,
            segments,
        })
    }

    pub fn segment(&self, sprite: SegmentSprite) -> TextureId {
        self.segments[sprite.index()]
    }
}
