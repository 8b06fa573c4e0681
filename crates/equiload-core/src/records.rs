//! Immutable row values parsed from the source CSV exports.
//!
//! Records are created in bulk by reading a whole file, held for the
//! duration of one load call, and discarded once the insert statement
//! has been issued. Nothing here outlives a run.

/// One daily closing price observation.
///
/// Invariants, enforced at parse time: `close` is finite and
/// `volume >= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    pub symbol: String,
    /// Calendar date, kept as text and cast by the destination column.
    pub date: String,
    pub close: f64,
    pub volume: i64,
}

/// One annual fundamentals row: a fiscal year of reported figures.
#[derive(Debug, Clone, PartialEq)]
pub struct FundamentalsRecord {
    pub symbol: String,
    pub fiscal_year: i64,
    pub revenue: f64,
    pub ebitda: f64,
    pub net_income: f64,
    pub fcf: f64,
    pub total_debt: f64,
    pub cash: f64,
    pub shares_out: f64,
    pub dividends: f64,
}
