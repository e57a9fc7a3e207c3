pub mod api;

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use log::info;

use crate::config::AppConfig;
use crate::relay::ChatRelay;

pub struct Server {
    config: AppConfig,
}

impl Server {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let relay = Arc::new(ChatRelay::new(&self.config)?);
        let app = api::router(api::AppState { relay }, &self.config.static_dir);

        let addr = self.config.server_addr.parse::<SocketAddr>()?;
        info!("Starting HTTP server on: http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}
