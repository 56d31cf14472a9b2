//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::quotes;

/// Database row for a quote.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = quotes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct QuoteRow {
    pub collection: String,
    pub quote_id: i64,
    pub quote: String,
    pub created_at: String,
}
