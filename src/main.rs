use anyhow::Result;

use storyterm::config::Config;
use storyterm::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration (defaults when no file is present)
    let config = Config::load()?;

    // Install the file logger before the TUI takes over the terminal
    logger::init(&config.logging)?;

    // Run the TUI application
    ui::run_app(&config).await?;

    Ok(())
}
