//! SQLite persistence for received quotes.
//!
//! One append-only table, `cotacoes`, with the eleven quote fields stored as TEXT in the
//! provider's own column names. Rows are never updated or deleted by the server.
use std::fs;
use std::path::Path;
use std::time::Duration;

use log::debug;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool};
use sqlx::FromRow;
use usdbrl_common::QuoteItem;

use crate::error::ServerError;

const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS cotacoes (
        "code"        TEXT,
        "codein"      TEXT,
        "name"        TEXT,
        "high"        TEXT,
        "low"         TEXT,
        "varBid"      TEXT,
        "pctChange"   TEXT,
        "bid"         TEXT,
        "ask"         TEXT,
        "timestamp"   TEXT,
        "create_date" TEXT
    )
"#;

const INSERT_SQL: &str = r#"
    INSERT INTO cotacoes
        ("code", "codein", "name", "high", "low", "varBid", "pctChange", "bid", "ask", "timestamp", "create_date")
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

/// Persisted form of a [`QuoteItem`], one row of `cotacoes`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct QuoteRecord {
    /// Quoted currency code.
    pub code: String,
    /// Counter currency code.
    pub codein: String,
    /// Display name of the pair.
    pub name: String,
    /// Session high.
    pub high: String,
    /// Session low.
    pub low: String,
    /// Absolute variation of the bid, column `varBid`.
    #[sqlx(rename = "varBid")]
    pub var_bid: String,
    /// Percent change, column `pctChange`.
    #[sqlx(rename = "pctChange")]
    pub pct_change: String,
    /// Bid price.
    pub bid: String,
    /// Ask price.
    pub ask: String,
    /// Epoch seconds as sent by the provider.
    pub timestamp: String,
    /// Provider-side creation date.
    pub create_date: String,
}

impl From<&QuoteItem> for QuoteRecord {
    fn from(item: &QuoteItem) -> Self {
        QuoteRecord {
            code: item.code.clone(),
            codein: item.codein.clone(),
            name: item.name.clone(),
            high: item.high.clone(),
            low: item.low.clone(),
            var_bid: item.var_bid.clone(),
            pct_change: item.pct_change.clone(),
            bid: item.bid.clone(),
            ask: item.ask.clone(),
            timestamp: item.timestamp.clone(),
            create_date: item.create_date.clone(),
        }
    }
}

/// Process-wide handle to the quote database.
///
/// The pool serializes access to the file internally.
#[derive(Debug)]
pub struct QuoteStore {
    pub(crate) pool: SqlitePool,
}

impl QuoteStore {
    /// Open (creating if absent) the SQLite file at `path` and ensure `cotacoes` exists.
    ///
    /// `busy_timeout` bounds how long a statement waits on another writer's lock; keep it
    /// no longer than the insert deadline.
    pub async fn connect(path: &Path, busy_timeout: Duration) -> Result<Self, ServerError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(busy_timeout);

        let pool = SqlitePool::connect_with(opts).await?;
        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<(), ServerError> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        debug!("Table cotacoes ensured");
        Ok(())
    }

    /// Append one row.
    ///
    /// The insert runs in its own transaction. If this future is dropped before the commit,
    /// the transaction is rolled back and no row is left behind.
    pub async fn insert(&self, record: &QuoteRecord) -> Result<(), ServerError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(INSERT_SQL)
            .bind(&record.code)
            .bind(&record.codein)
            .bind(&record.name)
            .bind(&record.high)
            .bind(&record.low)
            .bind(&record.var_bid)
            .bind(&record.pct_change)
            .bind(&record.bid)
            .bind(&record.ask)
            .bind(&record.timestamp)
            .bind(&record.create_date)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    /// Number of stored quotes.
    pub async fn count(&self) -> Result<i64, ServerError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cotacoes")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    #[cfg(test)]
    pub(crate) async fn records(&self) -> Result<Vec<QuoteRecord>, ServerError> {
        let rows = sqlx::query_as::<_, QuoteRecord>("SELECT * FROM cotacoes ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
