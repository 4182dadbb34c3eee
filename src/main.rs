use anyhow::Result;
use tracing::info;

use gambit_uci::UciEngine;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();
    info!("gambit starting");
    UciEngine::new().run()?;
    Ok(())
}
