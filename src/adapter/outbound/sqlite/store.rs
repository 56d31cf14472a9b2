//! SQLite quote store implementation.
//!
//! Provides persistent storage for quotes using SQLite and Diesel ORM.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::{error, warn};

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::QuoteRow;
use crate::adapter::outbound::sqlite::database::schema::quotes;
use crate::domain::quote::{Quote, QuoteId, QuoteText};
use crate::error::{Error, Result, StoreError};
use crate::port::outbound::store::QuoteStore;

type Conn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// SQLite-backed quote store.
///
/// All operations are scoped to one collection, so several logical tables
/// can share a database file.
pub struct SqliteQuoteStore {
    /// Database connection pool.
    pool: DbPool,
    /// Collection (logical table) this store reads and writes.
    collection: String,
}

fn unavailable(operation: &'static str, err: impl std::fmt::Display) -> Error {
    warn!(operation, error = %err, "Quote store operation failed");
    StoreError::Unavailable(err.to_string()).into()
}

fn to_sql_id(id: QuoteId) -> Result<i64> {
    i64::try_from(id.get())
        .map_err(|_| StoreError::Unavailable(format!("quote id {id} exceeds storage range")).into())
}

impl SqliteQuoteStore {
    /// Create a new SQLite quote store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool, collection: impl Into<String>) -> Self {
        Self {
            pool,
            collection: collection.into(),
        }
    }

    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    fn conn(&self) -> Result<Conn> {
        self.pool.get().map_err(|e| unavailable("connect", e))
    }

    fn to_row(collection: &str, quote: &Quote) -> Result<QuoteRow> {
        Ok(QuoteRow {
            collection: collection.to_string(),
            quote_id: to_sql_id(quote.id)?,
            quote: quote.text.as_str().to_string(),
            created_at: quote.created_at.to_rfc3339(),
        })
    }

    fn from_row(row: QuoteRow) -> Result<Quote> {
        let malformed = |reason: String| -> Error {
            error!(quote_id = row.quote_id, reason = %reason, "Malformed quote record");
            StoreError::MalformedRecord {
                id: row.quote_id,
                reason,
            }
            .into()
        };

        let id = u64::try_from(row.quote_id)
            .map_err(|e| e.to_string())
            .and_then(|id| QuoteId::try_new(id).map_err(|e| e.to_string()))
            .map_err(malformed)?;
        let text = QuoteText::try_new(&row.quote).map_err(|e| malformed(e.to_string()))?;
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| malformed(e.to_string()))?
            .with_timezone(&Utc);

        Ok(Quote {
            id,
            text,
            created_at,
        })
    }
}

impl QuoteStore for SqliteQuoteStore {
    async fn insert(&self, id: QuoteId, text: &QuoteText) -> Result<()> {
        let row = Self::to_row(&self.collection, &Quote::new(id, text.clone()))?;
        let mut conn = self.conn()?;

        diesel::replace_into(quotes::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| unavailable("insert", e))?;

        Ok(())
    }

    async fn insert_next(&self, text: &QuoteText) -> Result<Quote> {
        let mut conn = self.conn()?;
        let collection = self.collection.as_str();

        let outcome = conn
            .immediate_transaction(|conn| -> std::result::Result<_, DieselError> {
                let count: i64 = quotes::table
                    .filter(quotes::collection.eq(collection))
                    .count()
                    .get_result(conn)?;
                let id = QuoteId::after_count(u64::try_from(count).unwrap_or(0));
                let quote = Quote::new(id, text.clone());
                let row = QuoteRow {
                    collection: collection.to_string(),
                    quote_id: count.saturating_add(1),
                    quote: quote.text.as_str().to_string(),
                    created_at: quote.created_at.to_rfc3339(),
                };

                match diesel::insert_into(quotes::table).values(&row).execute(conn) {
                    Ok(_) => Ok(Ok(quote)),
                    Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                        Ok(Err(id))
                    }
                    Err(e) => Err(e),
                }
            })
            .map_err(|e| unavailable("insert_next", e))?;

        outcome.map_err(|id| {
            warn!(quote_id = %id, "Next quote id already taken");
            StoreError::Conflict { id }.into()
        })
    }

    async fn count(&self) -> Result<u64> {
        let mut conn = self.conn()?;

        let count: i64 = quotes::table
            .filter(quotes::collection.eq(self.collection.as_str()))
            .count()
            .get_result(&mut conn)
            .map_err(|e| unavailable("count", e))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn get(&self, id: QuoteId) -> Result<Option<Quote>> {
        let Ok(quote_id) = i64::try_from(id.get()) else {
            return Ok(None);
        };
        let mut conn = self.conn()?;

        let row: Option<QuoteRow> = quotes::table
            .find((self.collection.as_str(), quote_id))
            .select(QuoteRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| unavailable("get", e))?;

        row.map(Self::from_row).transpose()
    }

    async fn latest(&self) -> Result<Option<Quote>> {
        let mut conn = self.conn()?;

        let row: Option<QuoteRow> = quotes::table
            .filter(quotes::collection.eq(self.collection.as_str()))
            .order(quotes::quote_id.desc())
            .select(QuoteRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| unavailable("latest", e))?;

        row.map(Self::from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Quote>> {
        let mut conn = self.conn()?;

        let rows: Vec<QuoteRow> = quotes::table
            .filter(quotes::collection.eq(self.collection.as_str()))
            .order(quotes::quote_id.asc())
            .select(QuoteRow::as_select())
            .load(&mut conn)
            .map_err(|e| unavailable("list", e))?;

        rows.into_iter().map(Self::from_row).collect()
    }

    async fn clear_all(&self) -> Result<u64> {
        let mut conn = self.conn()?;

        let scoped = quotes::table.filter(quotes::collection.eq(self.collection.as_str()));
        let deleted = diesel::delete(scoped)
            .execute(&mut conn)
            .map_err(|e| unavailable("clear_all", e))?;

        Ok(deleted as u64)
    }
}
