//! Fixed schemas for the two source datasets.

use std::path::Path;

use crate::reader::{read_rows, Coercion, Column, Field, RowParseError};
use crate::records::{FundamentalsRecord, PriceRecord};

/// Columns of the daily prices export.
pub const PRICES_SCHEMA: &[Column] = &[
    ("symbol", Coercion::Text),
    ("date", Coercion::Text),
    ("close", Coercion::Float),
    ("volume", Coercion::UInt),
];

/// Columns of the annual fundamentals export.
pub const FUNDAMENTALS_SCHEMA: &[Column] = &[
    ("symbol", Coercion::Text),
    ("fiscal_year", Coercion::Int),
    ("revenue", Coercion::Float),
    ("ebitda", Coercion::Float),
    ("net_income", Coercion::Float),
    ("fcf", Coercion::Float),
    ("total_debt", Coercion::Float),
    ("cash", Coercion::Float),
    ("shares_out", Coercion::Float),
    ("dividends", Coercion::Float),
];

/// Read a prices CSV into typed records, in file order.
///
/// # Errors
///
/// Returns [`RowParseError`] on unreadable input, a header missing a
/// declared column, or any field failing its coercion.
pub fn read_prices(path: &Path) -> Result<Vec<PriceRecord>, RowParseError> {
    let rows = read_rows(path, PRICES_SCHEMA)?;
    Ok(rows.into_iter().map(price_from_row).collect())
}

/// Read a fundamentals CSV into typed records, in file order.
///
/// # Errors
///
/// Same failure modes as [`read_prices`].
pub fn read_fundamentals(path: &Path) -> Result<Vec<FundamentalsRecord>, RowParseError> {
    let rows = read_rows(path, FUNDAMENTALS_SCHEMA)?;
    Ok(rows.into_iter().map(fundamentals_from_row).collect())
}

fn price_from_row(row: Vec<Field>) -> PriceRecord {
    let mut fields = row.into_iter();
    PriceRecord {
        symbol: take_text(fields.next()),
        date: take_text(fields.next()),
        close: take_float(fields.next()),
        volume: take_int(fields.next()),
    }
}

fn fundamentals_from_row(row: Vec<Field>) -> FundamentalsRecord {
    let mut fields = row.into_iter();
    FundamentalsRecord {
        symbol: take_text(fields.next()),
        fiscal_year: take_int(fields.next()),
        revenue: take_float(fields.next()),
        ebitda: take_float(fields.next()),
        net_income: take_float(fields.next()),
        fcf: take_float(fields.next()),
        total_debt: take_float(fields.next()),
        cash: take_float(fields.next()),
        shares_out: take_float(fields.next()),
        dividends: take_float(fields.next()),
    }
}

// The schema constants above guarantee field count and variants; a
// mismatch here is a programming error, not bad input.

fn take_text(field: Option<Field>) -> String {
    match field {
        Some(Field::Text(value)) => value,
        other => unreachable!("schema yields text, got {other:?}"),
    }
}

fn take_int(field: Option<Field>) -> i64 {
    match field {
        Some(Field::Int(value)) => value,
        other => unreachable!("schema yields integer, got {other:?}"),
    }
}

fn take_float(field: Option<Field>) -> f64 {
    match field {
        Some(Field::Float(value)) => value,
        other => unreachable!("schema yields float, got {other:?}"),
    }
}
