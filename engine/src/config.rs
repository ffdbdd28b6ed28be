use std::{path::Path, time::Duration};

use log::{debug, info};
use serde::{de::DeserializeOwned, Deserialize};

use crate::error::{EngineError, Result};

/// Window configuration.
///
/// `width`/`height` are logical pixels and double as the canvas size draw
/// commands are expressed in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("Snake Game"),
            width: 640,
            height: 480,
            vsync: true,
        }
    }
}

/// Engine run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub window: WindowConfig,
    /// Fixed delay between two calls to [`crate::Game::update`].
    pub tick: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            tick: Duration::from_millis(100),
        }
    }
}

/// Reads a TOML file into `T`, or returns `T::default()` when the file does not exist.
pub fn load_or_default<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!("no config at {}, using defaults", path.display());
            return Ok(T::default());
        }
        Err(source) => {
            return Err(EngineError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let value = toml::from_str(&text).map_err(|source| EngineError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded config from {}", path.display());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config: WindowConfig = load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, WindowConfig::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "title = \"Tiny\"\nwidth = 320").unwrap();

        let config: WindowConfig = load_or_default(file.path()).unwrap();
        assert_eq!(config.title, "Tiny");
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 480);
        assert!(config.vsync);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "width = \"wide\"").unwrap();

        let err = load_or_default::<WindowConfig>(file.path()).unwrap_err();
        assert!(matches!(err, EngineError::Config { .. }));
    }
}
