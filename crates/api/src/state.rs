use std::sync::Arc;

use awe_core::session::SessionCodec;

use crate::config::ServerConfig;
use crate::views::Templates;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: awe_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Session token codec built once from `config.session`.
    pub sessions: Arc<SessionCodec>,
    /// Compiled page templates.
    pub templates: Arc<Templates>,
}

impl AppState {
    /// Assemble state from a pool and configuration, compiling templates.
    pub fn new(
        pool: awe_db::DbPool,
        config: ServerConfig,
    ) -> Result<Self, handlebars::TemplateError> {
        let sessions = Arc::new(config.session.codec());
        let templates = Arc::new(Templates::new()?);
        Ok(Self {
            pool,
            config: Arc::new(config),
            sessions,
            templates,
        })
    }
}
