/// Request handlers driving decode and render
pub mod handlers;
/// Routes configuration and setup
pub mod routes;
/// HTTP server implementation
pub mod server;

use std::sync::Arc;

use crate::config::RenderConfig;

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Render settings, fixed at start-up
    pub render: Arc<RenderConfig>,
}

impl AppState {
    pub fn new(render: RenderConfig) -> Self {
        AppState {
            render: Arc::new(render),
        }
    }
}
