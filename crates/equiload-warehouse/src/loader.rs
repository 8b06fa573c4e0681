//! Truncate-and-reload of RAW tables.
//!
//! Each load selects the working schema, clears the destination table,
//! and stages one batched multi-row insert on the session's open
//! transaction. The loader never commits; the caller owns the single
//! commit covering both datasets. Destination tables must pre-exist:
//! an absent table fails the truncate and surfaces as a [`LoadError`].

use serde::Serialize;
use thiserror::Error;

use equiload_core::{FundamentalsRecord, PriceRecord};

use crate::session::Session;

/// Working schema holding the destination tables.
pub const RAW_SCHEMA: &str = "RAW";

/// A statement failed while replacing a table's contents.
#[derive(Debug, Error)]
#[error("bulk load into RAW.{table} failed with {rows} rows staged: {source}")]
pub struct LoadError {
    pub table: &'static str,
    pub rows: usize,
    #[source]
    pub source: ::duckdb::Error,
}

/// Outcome of one table replacement.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub table: &'static str,
    pub rows_loaded: usize,
}

/// A record type bound to a destination table.
pub trait TableRecord {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    /// Render the record as one parenthesized SQL value tuple.
    fn sql_tuple(&self) -> String;
}

impl TableRecord for PriceRecord {
    const TABLE: &'static str = "PRICES";
    const COLUMNS: &'static [&'static str] = &["symbol", "date", "close", "volume"];

    fn sql_tuple(&self) -> String {
        format!(
            "('{}', '{}', {}, {})",
            escape_sql_string(self.symbol.as_str()),
            escape_sql_string(self.date.as_str()),
            self.close,
            self.volume,
        )
    }
}

impl TableRecord for FundamentalsRecord {
    const TABLE: &'static str = "FUNDAMENTALS";
    const COLUMNS: &'static [&'static str] = &[
        "symbol",
        "fiscal_year",
        "revenue",
        "ebitda",
        "net_income",
        "fcf",
        "total_debt",
        "cash",
        "shares_out",
        "dividends",
    ];

    fn sql_tuple(&self) -> String {
        format!(
            "('{}', {}, {}, {}, {}, {}, {}, {}, {}, {})",
            escape_sql_string(self.symbol.as_str()),
            self.fiscal_year,
            self.revenue,
            self.ebitda,
            self.net_income,
            self.fcf,
            self.total_debt,
            self.cash,
            self.shares_out,
            self.dividends,
        )
    }
}

impl Session {
    /// Replace the contents of a RAW table with the given rows.
    ///
    /// Truncates the table and, if `rows` is non-empty, issues a
    /// single multi-row insert preserving input order. Nothing is
    /// committed here; on failure the transaction is left
    /// commit-pending for the caller to abandon.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] naming the table and the staged row count
    /// on any statement failure, including a missing table.
    pub fn bulk_load<R: TableRecord>(&self, rows: &[R]) -> Result<LoadReport, LoadError> {
        let wrap = |source| LoadError {
            table: R::TABLE,
            rows: rows.len(),
            source,
        };

        self.execute_batch(&format!("SET schema = '{RAW_SCHEMA}'"))
            .map_err(wrap)?;
        self.execute_batch(&format!("TRUNCATE {}", R::TABLE))
            .map_err(wrap)?;

        if rows.is_empty() {
            return Ok(LoadReport {
                table: R::TABLE,
                rows_loaded: 0,
            });
        }

        let tuples = rows
            .iter()
            .map(TableRecord::sql_tuple)
            .collect::<Vec<_>>()
            .join(",\n");
        let insert = format!(
            "INSERT INTO {} ({}) VALUES\n{}",
            R::TABLE,
            R::COLUMNS.join(", "),
            tuples,
        );
        self.execute_batch(insert.as_str()).map_err(wrap)?;

        Ok(LoadReport {
            table: R::TABLE,
            rows_loaded: rows.len(),
        })
    }
}

fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}
