//! Quotebook - AI-generated quotes with durable, numbered storage.
//!
//! A web page shows the latest generated quote and how many exist. Posting to
//! `/generate` asks Gemini for a new quote (validated, retried, kept distinct
//! from the recent ones) and stores it under the next sequential id; posting
//! to `/clear` deletes them all.
//!
//! # Architecture
//!
//! Hexagonal layout: the application core depends only on ports, adapters
//! implement them, infrastructure wires the graph.
//!
//! - **`domain`** - Quote ids, texts, the display view and the history window
//! - **`port`** - `QuoteService` (inbound), `Llm` and `QuoteStore` (outbound)
//! - **`application`** - `QuoteGenerator` (retry + history) and `Orchestrator`
//! - **`adapter`** - axum routes, CLI, Gemini client, SQLite and memory stores
//! - **`infrastructure`** - Configuration, bootstrap and host lookup
//!
//! # Features
//!
//! - `testkit` - Scripted LLM and failing store for downstream tests
//! - `integration-tests` - Tests that call the real Gemini API
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use quotebook::adapter::outbound::memory::MemoryQuoteStore;
//! use quotebook::application::generator::QuoteGenerator;
//! use quotebook::application::orchestrator::Orchestrator;
//! use quotebook::adapter::outbound::llm::gemini::{Gemini, DEFAULT_MODEL};
//!
//! # async fn example() -> quotebook::error::Result<()> {
//! let llm = Arc::new(Gemini::from_env(DEFAULT_MODEL)?);
//! let generator = QuoteGenerator::new(llm, "Generate a short quote.");
//! let orchestrator = Orchestrator::new(generator, MemoryQuoteStore::new());
//!
//! let quote = orchestrator.generate_and_store().await?;
//! println!("#{} {}", quote.id, quote.text);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
