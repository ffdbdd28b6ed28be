/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn,snake_engine=info,snake_game=info";

/// Installs the global logger.
///
/// Allows the setting of the log level through the RUST_LOG env var.
/// It also allows wgpu logs to be seen. Calling it twice is harmless.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_millis()
        .try_init();
}
