pub mod cli;
pub mod config;
pub mod llm;
pub mod models;
pub mod relay;
pub mod server;

use cli::Args;
use config::AppConfig;
use log::info;
use server::Server;
use std::error::Error;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::from_args(&args);

    info!("--- Core Configuration ---");
    info!("Server Address: {}", config.server_addr);
    info!("Upstream Endpoint: {}", config.api_url);
    info!("Static Dir: {}", config.static_dir.display());
    info!("Upstream Timeout: {}s", config.upstream_timeout.as_secs());
    info!("-------------------------");

    let server = Server::new(config);
    server.run().await
}
