//! Server-rendered quote page.

use minijinja::{context, Environment};

use crate::domain::quote::DisplayQuote;
use crate::error::Result;

const QUOTE_PAGE: &str = "quote.html";
const QUOTE_TEMPLATE: &str = include_str!("../../../../templates/quote.html");

/// Outcome banner shown after a failed form post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    GenerateFailed,
    ClearFailed,
}

impl Notice {
    /// Parse the `notice` query value. Unknown codes are ignored.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "generate_failed" => Some(Self::GenerateFailed),
            "clear_failed" => Some(Self::ClearFailed),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::GenerateFailed => "generate_failed",
            Self::ClearFailed => "clear_failed",
        }
    }

    /// Redirect target carrying this notice.
    #[must_use]
    pub const fn location(self) -> &'static str {
        match self {
            Self::GenerateFailed => "/?notice=generate_failed",
            Self::ClearFailed => "/?notice=clear_failed",
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::GenerateFailed => "Could not generate a new quote. Please try again.",
            Self::ClearFailed => "Could not clear the quotes. Please try again.",
        }
    }
}

/// Renders the quote page from the embedded template.
///
/// The template name ends in `.html`, so minijinja escapes every value.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Compile the embedded template.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to parse.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(QUOTE_PAGE, QUOTE_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render the page for the current quote.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render(
        &self,
        current: &DisplayQuote,
        ip: Option<&str>,
        notice: Option<Notice>,
    ) -> Result<String> {
        let template = self.env.get_template(QUOTE_PAGE)?;
        let html = template.render(context! {
            quote_count => current.quote_count,
            quote => current.quote.as_str(),
            ip => ip,
            notice => notice.map(Notice::message),
        })?;
        Ok(html)
    }
}

impl std::fmt::Debug for PageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRenderer").finish_non_exhaustive()
    }
}
