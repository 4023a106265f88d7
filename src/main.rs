use anyhow::Result;
use homedeck::config::Config;
use homedeck::logger::{init_logging, LogBuffer};
use homedeck::ui;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;

    let log_buffer = LogBuffer::new();
    init_logging(&config.logging, &log_buffer)?;
    log::info!("Starting {} v{}", homedeck::constants::APP_NAME, env!("CARGO_PKG_VERSION"));

    ui::run_app(config, log_buffer).await?;

    Ok(())
}
