//! Binary entry point: parse arguments, bootstrap logging and
//! configuration, hand off to the library.

use std::path::PathBuf;

use clap::Parser;

/// Lumen - a terminal control panel for MQTT-connected RGB lighting
#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(about = "A terminal control panel for MQTT-connected RGB lighting", long_about = None)]
struct Args {
    /// Path to a broker config file (default: ~/.config/lumen/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Broker host, overriding the config file
    #[arg(long)]
    host: Option<String>,

    /// Broker port, overriding the config file
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    lumen_core::logging::init()?;

    let mut config = lumen_mqtt::load_config(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    lumen::run(config).await?;
    Ok(())
}
