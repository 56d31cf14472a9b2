//! Shared handler state.

use std::sync::Arc;

use super::page::PageRenderer;
use crate::error::Result;
use crate::port::inbound::quote::QuoteService;

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn QuoteService>,
    pub page: Arc<PageRenderer>,
    /// Host address shown in the page footer.
    pub ip: Option<Arc<str>>,
}

impl AppState {
    /// Build state around a quote service.
    ///
    /// # Errors
    ///
    /// Returns an error if the page template fails to compile.
    pub fn new(service: Arc<dyn QuoteService>, ip: Option<String>) -> Result<Self> {
        Ok(Self {
            service,
            page: Arc::new(PageRenderer::new()?),
            ip: ip.map(Arc::from),
        })
    }
}
