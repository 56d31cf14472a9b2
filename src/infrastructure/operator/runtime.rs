//! Runtime operator implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::adapter::inbound::http::server;
use crate::adapter::inbound::http::state::AppState;
use crate::error::Result;
use crate::infrastructure::bootstrap::{build_service, StoreKind};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::instance;
use crate::port::inbound::operator::runtime::{RuntimeOperator, ServeRequest, ServeSnapshot};
use crate::port::inbound::quote::QuoteService;

use super::entry::Operator;

fn store_kind(request: &ServeRequest) -> StoreKind {
    if request.ephemeral {
        StoreKind::Memory
    } else {
        StoreKind::Sqlite
    }
}

fn serve_config(request: &ServeRequest) -> Result<Config> {
    let mut config = Operator::load(request.config_toml.as_deref())?;
    if let Some(port) = request.port {
        config.server.port = port;
    }
    Ok(config)
}

#[async_trait]
impl RuntimeOperator for Operator {
    fn open_quotes(&self, config_toml: Option<&str>) -> Result<Arc<dyn QuoteService>> {
        let config = Self::load(config_toml)?;

        // One-shot commands only surface problems.
        let mut logging = config.logging.clone();
        logging.level = "warn".to_string();
        logging.init();

        build_service(&config, StoreKind::Sqlite)
    }

    fn prepare_serve(&self, request: &ServeRequest) -> Result<ServeSnapshot> {
        let config = serve_config(request)?;
        let storage = match store_kind(request) {
            StoreKind::Memory => "memory".to_string(),
            StoreKind::Sqlite => config.database.clone(),
        };

        Ok(ServeSnapshot {
            address: config.server.address(),
            table: config.table,
            storage,
            model: config.llm.model,
        })
    }

    async fn serve(&self, request: ServeRequest) -> Result<()> {
        let config = serve_config(&request)?;
        config.init_logging();

        let service = build_service(&config, store_kind(&request))?;

        let ip = if config.server.instance_metadata {
            instance::lookup_address(&config.server.instance_metadata_url).await
        } else {
            None
        };

        info!(
            address = %config.server.address(),
            table = %config.table,
            ephemeral = request.ephemeral,
            "quotebook starting"
        );

        let state = AppState::new(service, ip)?;
        server::serve(&config.server.address(), state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_serve_applies_port_override() {
        let request = ServeRequest {
            config_toml: Some("[server]\nport = 7000".into()),
            port: Some(8123),
            ephemeral: true,
        };

        let snapshot = Operator::new().prepare_serve(&request).unwrap();
        assert_eq!(snapshot.address, "0.0.0.0:8123");
        assert_eq!(snapshot.storage, "memory");
        assert_eq!(snapshot.table, "words_to_live_by");
    }

    #[test]
    fn prepare_serve_reports_database_path() {
        let request = ServeRequest {
            config_toml: Some("database = \"/tmp/quotes.db\"".into()),
            ..ServeRequest::default()
        };

        let snapshot = Operator::new().prepare_serve(&request).unwrap();
        assert_eq!(snapshot.storage, "/tmp/quotes.db");
    }
}
