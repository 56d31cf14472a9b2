//! Adapters connecting the application to the outside world.
//!
//! - [`inbound`] - HTTP routes and CLI commands driving [`QuoteService`]
//! - [`outbound`] - Gemini client and quote stores behind the outbound ports
//!
//! [`QuoteService`]: crate::port::inbound::quote::QuoteService

pub mod inbound;
pub mod outbound;
