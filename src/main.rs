mod config;
mod errors;
mod logging;
mod metadata;
mod reporter;
mod utils;

use crate::config::Config;
use crate::errors::Error;
use crate::utils::get_version_string;
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args: Vec<String> = env::args().collect();

    if args.contains(&String::from("--version")) {
        println!("{}", get_version_string());
        return Ok(());
    }

    // Keep the provider alive, dropping it stops the OTLP export
    let _provider = logging::setup_tracing()?;
    let config = Config::from_env()?;
    info!("Starting instance-details {}", get_version_string());
    reporter::run(config).await
}
