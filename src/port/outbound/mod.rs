//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the two infrastructure dependencies of the
//! application: the generative-text backend and the quote store.

pub mod llm;
pub mod store;
