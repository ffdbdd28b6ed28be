use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while bringing the engine up or loading assets.
///
/// None of these are recoverable at runtime; callers bubble them out to `main`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("event loop closed before graphics were delivered")]
    EventLoopClosed,

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible graphics adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to request graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("failed to load texture {}: {source}", .path.display())]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to load font {}: {reason}", .path.display())]
    Font { path: PathBuf, reason: String },

    #[error("failed to load sound {}: {source}", .path.display())]
    Sound {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("failed to open audio output: {0}")]
    Audio(#[from] rodio::StreamError),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
