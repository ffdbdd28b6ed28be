use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use log::{error, info};
use snake_engine::{config, logging, Audio, EngineContext};
use snake_game::{input::Gamepads, settings::SETTINGS_FILE, Settings, SnakeApp};

fn run() -> anyhow::Result<()> {
    let settings: Settings = config::load_or_default(Path::new(SETTINGS_FILE))?;
    settings.validate().context("invalid settings")?;
    info!(
        "starting {}x{} grid, {} ms tick",
        settings.grid().width,
        settings.grid().height,
        settings.tick_ms
    );

    // ---- Audio first, window and graphics come up inside the loop ----
    let audio = Audio::new()?;
    let ctx = EngineContext::new(settings.engine_config(), settings.assets.root.clone())?;
    let app = SnakeApp::new(settings, audio, Gamepads::new());
    ctx.run(app)
}

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
