//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::adapter::outbound::llm::gemini::{Gemini, API_KEY_ENV};
use crate::adapter::outbound::memory::MemoryQuoteStore;
use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
use crate::adapter::outbound::sqlite::store::SqliteQuoteStore;
use crate::application::generator::QuoteGenerator;
use crate::application::orchestrator::Orchestrator;
use crate::domain::history::HistoryWindow;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::quote::QuoteService;
use crate::port::outbound::llm::Llm;

/// Where quotes are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    /// SQLite database at `config.database`.
    #[default]
    Sqlite,
    /// Process-local map, lost on exit.
    Memory,
}

/// Build the Gemini client from configuration.
///
/// A missing API key is fatal here rather than at the first generation.
pub(crate) fn build_llm(config: &Config) -> Result<Arc<dyn Llm>> {
    let api_key = config
        .llm
        .api_key
        .clone()
        .ok_or(ConfigError::MissingField { field: API_KEY_ENV })?;

    let client = Gemini::new(
        api_key,
        config.llm.api_url.as_str(),
        config.llm.model.as_str(),
        config.llm.temperature,
        Duration::from_secs(config.llm.timeout_secs),
    );
    info!(model = %config.llm.model, "LLM client initialized");
    Ok(Arc::new(client))
}

/// Build the quote generator around an LLM client.
pub(crate) fn build_generator(config: &Config, llm: Arc<dyn Llm>) -> Result<QuoteGenerator> {
    let history = HistoryWindow::try_new(config.generator.history_capacity)?;
    Ok(QuoteGenerator::new(llm, config.prompt.as_str())
        .with_max_attempts(config.generator.max_attempts)
        .with_history(history))
}

/// Build the full quote service with the configured backend.
///
/// # Errors
///
/// Returns an error if the API key is missing or the store cannot be opened.
pub fn build_service(config: &Config, store: StoreKind) -> Result<Arc<dyn QuoteService>> {
    let llm = build_llm(config)?;
    build_service_with_llm(config, llm, store)
}

/// Build the quote service around an explicit LLM client.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or migrated.
pub fn build_service_with_llm(
    config: &Config,
    llm: Arc<dyn Llm>,
    store: StoreKind,
) -> Result<Arc<dyn QuoteService>> {
    let generator = build_generator(config, llm)?;

    match store {
        StoreKind::Sqlite => {
            let pool = create_pool(&config.database)?;
            run_migrations(&pool)?;
            info!(
                database = %config.database,
                table = %config.table,
                "Quote store opened"
            );
            let store = SqliteQuoteStore::new(pool, config.table.as_str());
            Ok(Arc::new(Orchestrator::new(generator, store)))
        }
        StoreKind::Memory => {
            info!("Using in-memory quote store");
            Ok(Arc::new(Orchestrator::new(generator, MemoryQuoteStore::new())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testkit::llm::ScriptedLlm;

    fn config_with_key(key: Option<&str>) -> Config {
        let mut config = Config::default();
        config.llm.api_key = key.map(str::to_string);
        config
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let result = build_llm(&config_with_key(None));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField {
                field: "GEMINI_API_KEY"
            }))
        ));
    }

    #[test]
    fn api_key_builds_gemini() {
        let llm = build_llm(&config_with_key(Some("key"))).unwrap();
        assert_eq!(llm.name(), "gemini");
    }

    #[test]
    fn zero_history_capacity_is_rejected() {
        let mut config = Config::default();
        config.generator.history_capacity = 0;
        let llm: Arc<dyn Llm> = Arc::new(ScriptedLlm::new());

        assert!(build_generator(&config, llm).is_err());
    }

    #[tokio::test]
    async fn memory_service_starts_empty() {
        let llm: Arc<dyn Llm> = Arc::new(ScriptedLlm::always(r#"{"quote": "Hello."}"#));
        let service = build_service_with_llm(&Config::default(), llm, StoreKind::Memory).unwrap();

        let current = service.view_current().await.unwrap();
        assert_eq!(current.quote_count, 0);

        let quote = service.generate_and_store().await.unwrap();
        assert_eq!(quote.id.get(), 1);
    }

    #[tokio::test]
    async fn sqlite_service_persists_across_builds() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.database = dir.path().join("quotes.db").to_string_lossy().to_string();

        let llm: Arc<dyn Llm> = Arc::new(ScriptedLlm::always(r#"{"quote": "Persist."}"#));
        let service = build_service_with_llm(&config, Arc::clone(&llm), StoreKind::Sqlite).unwrap();
        service.generate_and_store().await.unwrap();
        drop(service);

        let service = build_service_with_llm(&config, llm, StoreKind::Sqlite).unwrap();
        let current = service.view_current().await.unwrap();
        assert_eq!(current.quote_count, 1);
        assert_eq!(current.quote, "Persist.");
    }
}
