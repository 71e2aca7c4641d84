use axum::Router;
use mgmt_app::{rest_api, state::AppState};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::Result;

pub fn build_app(config: &ServerConfig) -> Router {
    let state = AppState::new(&config.services, config.timeout);
    rest_api::router().with_state(state)
}

pub async fn run(config: ServerConfig) -> Result<()> {
    let ip: std::net::IpAddr = config.listen_address.parse()?;
    let addr = std::net::SocketAddr::from((ip, config.port));
    let listener = TcpListener::bind(&addr).await?;
    run_with_listener(config, listener).await
}

pub async fn run_with_listener(config: ServerConfig, listener: TcpListener) -> Result<()> {
    let app = build_app(&config);
    info!(
        "Listening on {}, auth service {}, datastore writer {}",
        listener.local_addr()?,
        config.services.auth_url,
        config.services.datastore_writer_url
    );
    axum::serve(listener, app).await?;
    Ok(())
}
