//! Runtime use-cases: opening the quote service and serving the page.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::port::inbound::quote::QuoteService;

/// Inputs for `serve`.
#[derive(Debug, Clone, Default)]
pub struct ServeRequest {
    pub config_toml: Option<String>,
    pub port: Option<u16>,
    /// Keep quotes in memory instead of SQLite.
    pub ephemeral: bool,
}

/// Startup summary printed before the server blocks.
#[derive(Debug, Clone)]
pub struct ServeSnapshot {
    pub address: String,
    pub table: String,
    pub storage: String,
    pub model: String,
}

#[async_trait]
pub trait RuntimeOperator: Send + Sync {
    /// Open the persistent quote service for one-shot commands.
    fn open_quotes(&self, config_toml: Option<&str>) -> Result<Arc<dyn QuoteService>>;

    /// Resolve what `serve` will bind and use.
    fn prepare_serve(&self, request: &ServeRequest) -> Result<ServeSnapshot>;

    /// Run the web server until shutdown.
    async fn serve(&self, request: ServeRequest) -> Result<()>;
}
