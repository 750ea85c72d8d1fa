pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod model;
pub mod presets;
pub mod preview;
pub mod resolve;
pub use error::{AppError, AppResult};

use clap::Parser;

/// Entrypoint used by the binary.
pub fn run() -> AppResult<()> {
    logging::init();
    let cli = cli::Cli::parse();
    tracing::debug!(command = ?cli.command, "starting buttonsmith");

    let config = config::load_app_config();
    let presets = presets::PresetStore::open_default()?;
    let clipboard = clipboard::WlCopyBackend::default();
    let mut app = app::App::new(config, presets, &clipboard);

    let stdout = std::io::stdout();
    app.execute(&cli.command, &mut stdout.lock())
}
