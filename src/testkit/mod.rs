//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`llm`]: [`ScriptedLlm`](llm::ScriptedLlm), a backend that replays
//!   canned responses and records every request.
//! - [`store`]: [`FailingStore`](store::FailingStore), a quote store whose
//!   every operation reports the store as unavailable.

pub mod llm;
pub mod store;
