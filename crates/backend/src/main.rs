pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::shared::app_state::AppState;
use crate::shared::commerce::CommerceApiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    tracing::info!(
        "Commerce API: {} (token {})",
        config.commerce_api.base_url,
        if config.commerce_api.api_token.is_empty() {
            "not set"
        } else {
            "set"
        }
    );

    let client = CommerceApiClient::new(&config.commerce_api)?;
    let state = AppState::new(Arc::new(client));
    let app = routes::configure_routes(state, &config.server.static_dir);

    let port = config.server.port;
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
