//! Handlers for `show`, `generate`, `list` and `clear`.

use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Confirm};
use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::quote::Quote;
use crate::error::{ConfigError, Result};
use crate::port::inbound::quote::QuoteService;

#[derive(Tabled)]
struct QuoteRow {
    #[tabled(rename = "Id")]
    id: u64,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Quote")]
    quote: String,
}

impl From<&Quote> for QuoteRow {
    fn from(quote: &Quote) -> Self {
        Self {
            id: quote.id.get(),
            created: quote.created_at.format("%Y-%m-%d %H:%M").to_string(),
            quote: quote.text.to_string(),
        }
    }
}

fn quote_json(quote: &Quote) -> serde_json::Value {
    json!({
        "id": quote.id.get(),
        "quote": quote.text.as_str(),
        "created_at": quote.created_at.to_rfc3339(),
    })
}

/// Execute `show`.
pub async fn show(service: &dyn QuoteService) -> Result<()> {
    let current = service.view_current().await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "show",
            "quote_count": current.quote_count,
            "quote": current.quote,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::quote(&current.quote);
    output::field("Quotes", current.quote_count);
    if current.is_empty() {
        output::hint(&format!(
            "run {} to create one",
            output::highlight("quotebook generate")
        ));
    }
    Ok(())
}

/// Execute `generate`.
pub async fn generate(service: &dyn QuoteService) -> Result<()> {
    let pb = output::spinner("Generating quote...");
    let quote = match service.generate_and_store().await {
        Ok(quote) => {
            output::spinner_success(&pb, &format!("Stored quote #{}", quote.id));
            quote
        }
        Err(err) => {
            output::spinner_fail(&pb, "Generation failed");
            return Err(err);
        }
    };

    if output::is_json() {
        let mut payload = quote_json(&quote);
        payload["command"] = json!("generate");
        output::json_output(payload);
        return Ok(());
    }

    output::quote(quote.text.as_str());
    Ok(())
}

/// Execute `list`.
pub async fn list(service: &dyn QuoteService) -> Result<()> {
    let quotes = service.list().await?;

    if output::is_json() {
        let items: Vec<_> = quotes.iter().map(quote_json).collect();
        output::json_output(json!({ "command": "list", "quotes": items }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    if quotes.is_empty() {
        output::note("No quotes stored.");
        return Ok(());
    }

    let rows: Vec<QuoteRow> = quotes.iter().map(QuoteRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    output::field("Total", quotes.len());
    Ok(())
}

/// Execute `clear`.
///
/// Asks for confirmation on a terminal unless `yes` is set. Non-interactive
/// runs must pass `--yes`.
pub async fn clear(service: &dyn QuoteService, yes: bool) -> Result<()> {
    if !yes {
        if output::is_json() || !std::io::stdin().is_terminal() {
            return Err(ConfigError::InvalidValue {
                field: "yes",
                reason: "pass --yes to clear without a prompt".to_string(),
            }
            .into());
        }

        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Delete every stored quote?")
            .default(false)
            .interact()?;
        if !confirmed {
            output::note("Nothing deleted.");
            return Ok(());
        }
    }

    let deleted = service.clear().await?;

    if output::is_json() {
        output::json_output(json!({ "command": "clear", "deleted": deleted }));
        return Ok(());
    }

    output::success(&format!("Deleted {deleted} quotes"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quote::{QuoteId, QuoteText};

    #[test]
    fn quote_row_formats_fields() {
        let quote = Quote::new(
            QuoteId::try_new(7).unwrap(),
            QuoteText::try_new("Breathe.").unwrap(),
        );
        let row = QuoteRow::from(&quote);

        assert_eq!(row.id, 7);
        assert_eq!(row.quote, "Breathe.");
        assert_eq!(row.created.len(), "2025-01-01 00:00".len());
    }

    #[test]
    fn quote_json_has_rfc3339_timestamp() {
        let quote = Quote::new(QuoteId::FIRST, QuoteText::try_new("Hi.").unwrap());
        let value = quote_json(&quote);

        assert_eq!(value["id"], 1);
        assert_eq!(value["quote"], "Hi.");
        let created = value["created_at"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(created).is_ok());
    }
}
