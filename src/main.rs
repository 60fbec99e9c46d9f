use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tokio::sync::watch;

use crate::input::manager::{Manager, RemapEngine};
use crate::state::StateFile;
use crate::udev::unhide_all;

mod drivers;
mod input;
mod state;
mod udev;

/// HID remapping daemon for PCsensor/QinHeng USB foot switches
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Remap engine to run with
    #[arg(long, value_enum, default_value_t = RemapEngine::Report)]
    engine: RemapEngine,

    /// Path of the pedal state publication file
    #[arg(long, default_value = "/dev/shm/footpedal")]
    state_file: PathBuf,

    /// Use the given hidraw node instead of discovering one
    #[arg(long)]
    device: Option<String>,

    /// Leave the source device visible to other HID consumers
    #[arg(long)]
    keep_visible: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args = Args::parse();

    let log_level = match env::var("LOG_LEVEL") {
        Ok(value) => value,
        Err(_) => "info".to_string(),
    };
    env::set_var("RUST_LOG", log_level);
    env_logger::init();
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    log::info!("Starting footswitchd v{}", VERSION);

    // Setup CTRL+C handler
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        log::info!("Shutting down");
        shutdown_tx.send_replace(true);

        // A second CTRL+C skips the cooperative teardown
        tokio::signal::ctrl_c().await.unwrap();
        log::info!("Un-hiding all devices");
        if let Err(e) = unhide_all().await {
            log::error!("Unable to un-hide devices: {:?}", e);
        }
        process::exit(1);
    });

    let mut manager = Manager::new(
        args.engine,
        StateFile::new(args.state_file),
        args.device,
        !args.keep_visible,
        shutdown_rx,
    );
    manager.run().await?;

    log::info!("footswitchd stopped");

    Ok(())
}
