use std::{path::PathBuf, time::Duration};

use serde::Deserialize;
use snake_engine::{EngineConfig, WindowConfig};
use thiserror::Error;

use crate::grid::Grid;

/// Name of the optional settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "snake.toml";

/// Largest playing field accepted from settings.
pub const MAX_GRID_CELLS: usize = 1 << 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("tile_size must be positive")]
    ZeroTileSize,
    #[error("tick_ms must be positive")]
    ZeroTick,
    #[error("window {width}x{height} holds no {tile_size}px tile")]
    EmptyGrid {
        width: u32,
        height: u32,
        tile_size: u32,
    },
    #[error("a {width}x{height} grid exceeds {MAX_GRID_CELLS} cells")]
    GridTooLarge { width: i32, height: i32 },
    #[error("initial_length {length} does not fit a {width}-cell row")]
    InitialLength { length: usize, width: i32 },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    pub root: PathBuf,
    pub font: PathBuf,
    pub font_size: f32,
    pub sound: PathBuf,
    pub food: PathBuf,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            font: PathBuf::from("arial.ttf"),
            font_size: 24.0,
            sound: PathBuf::from("eat.wav"),
            food: PathBuf::from("food.png"),
        }
    }
}

/// Everything tunable about a game, loaded from [`SETTINGS_FILE`] when present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tick_ms: u64,
    pub tile_size: u32,
    pub initial_length: usize,
    pub window: WindowConfig,
    pub assets: AssetSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            tile_size: 20,
            initial_length: 5,
            window: WindowConfig::default(),
            assets: AssetSettings::default(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn grid(&self) -> Grid {
        Grid::from_screen(self.window.width, self.window.height, self.tile_size)
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            window: self.window.clone(),
            tick: Duration::from_millis(self.tick_ms),
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tile_size == 0 {
            return Err(SettingsError::ZeroTileSize);
        }
        if self.tick_ms == 0 {
            return Err(SettingsError::ZeroTick);
        }
        let grid = self.grid();
        if grid.cell_count() == 0 {
            return Err(SettingsError::EmptyGrid {
                width: self.window.width,
                height: self.window.height,
                tile_size: self.tile_size,
            });
        }
        if grid.cell_count() > MAX_GRID_CELLS {
            return Err(SettingsError::GridTooLarge {
                width: grid.width,
                height: grid.height,
            });
        }
        if self.initial_length == 0 || self.initial_length > grid.width as usize {
            return Err(SettingsError::InitialLength {
                length: self.initial_length,
                width: grid.width,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(settings.grid(), Grid::new(32, 24));
        assert_eq!(settings.engine_config().tick, Duration::from_millis(100));
        assert_eq!(settings.window.title, "Snake Game");
    }

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn nested_tables_override_selected_fields() {
        let settings = Settings::from_toml_str(
            r#"
            tile_size = 40

            [window]
            width = 800

            [assets]
            root = "assets"
            "#,
        )
        .unwrap();
        assert_eq!(settings.tile_size, 40);
        assert_eq!(settings.window.width, 800);
        assert_eq!(settings.window.height, 480);
        assert_eq!(settings.assets.root, PathBuf::from("assets"));
        assert_eq!(settings.assets.font, PathBuf::from("arial.ttf"));
        assert_eq!(settings.grid(), Grid::new(20, 12));
    }

    #[test]
    fn zero_values_are_rejected() {
        let settings = Settings {
            tile_size: 0,
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::ZeroTileSize));

        let settings = Settings {
            tick_ms: 0,
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::ZeroTick));
    }

    #[test]
    fn oversized_tiles_leave_no_grid() {
        let settings = Settings {
            tile_size: 1000,
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::EmptyGrid { .. })));
    }

    #[test]
    fn huge_window_is_rejected_without_overflow() {
        let settings = Settings::from_toml_str(
            r#"
            tile_size = 1

            [window]
            width = 100000
            height = 100000
            "#,
        )
        .unwrap();
        assert_eq!(
            settings.validate(),
            Err(SettingsError::GridTooLarge {
                width: 100_000,
                height: 100_000
            })
        );
    }

    #[test]
    fn initial_length_must_fit_first_row() {
        let settings = Settings {
            initial_length: 33,
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::InitialLength {
                length: 33,
                width: 32
            })
        );

        let settings = Settings {
            initial_length: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
