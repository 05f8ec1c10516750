mod config;
mod game_app;
mod setup;

use anyhow::{anyhow, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::game_app::GameApp;

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("Invalid TTT_LOG filter {:?}", config.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        "Starting Tic-Tac-Toe: {} vs {:?} (computer: {}, seed: {:?})",
        config.player1_name, config.player2_name, config.vs_computer, config.seed
    );

    let app = GameApp::new(&config);
    eframe::run_native(
        "Tic-Tac-Toe",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("Failed to run the game window: {e}"))
}
