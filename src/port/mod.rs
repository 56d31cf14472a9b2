//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems (the generative backend, the quote database) or to drive the
//! application (HTTP, CLI).
//!
//! # Architecture
//!
//! ```text
//!        ┌──────────┐                              ┌──────────┐
//!        │   HTTP   │                              │   CLI    │
//!        └────┬─────┘                              └────┬─────┘
//!             │            inbound::QuoteService        │
//!             └───────────────────┬─────────────────────┘
//!                                 ▼
//!                    ┌─────────────────────────┐
//!                    │      Orchestrator       │
//!                    └────────────┬────────────┘
//!                   ┌─────────────┴─────────────┐
//!                   ▼                           ▼
//!            outbound::Llm              outbound::QuoteStore
//!          ┌─────────────┐          ┌──────────────┬────────────┐
//!          │   Gemini    │          │    SQLite    │   Memory   │
//!          └─────────────┘          └──────────────┴────────────┘
//! ```

pub mod inbound;
pub mod outbound;
