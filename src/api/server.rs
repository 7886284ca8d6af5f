use tokio::net::TcpListener;
use tracing::info;

use crate::api::{routes, AppState};
use crate::config::{RenderConfig, ServerConfig};

/// Starts and runs the HTTP server using Axum web framework
///
/// # Arguments
/// * `config` - Listen address and request logging switch
/// * `render` - Render settings handed to every request
///
/// # Returns
/// * `Result<(), Box<dyn std::error::Error>>` - Error if binding or serving fails
pub async fn launch_server(
    config: &ServerConfig,
    render: RenderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = routes::app(AppState::new(render), config.log_requests);

    let listener = TcpListener::bind(config.address.as_str()).await?;
    info!("Server is listening on: {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
