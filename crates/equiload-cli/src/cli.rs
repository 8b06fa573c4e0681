//! CLI argument definitions for equiload.

use std::path::PathBuf;

use clap::Parser;

/// Replace the RAW warehouse tables from local CSV exports.
///
/// Reads the daily prices and annual fundamentals files, truncates
/// RAW.PRICES and RAW.FUNDAMENTALS, bulk-inserts the parsed rows, and
/// commits both replacements together. Connection settings come from
/// the environment (a local `.env` file is honored).
#[derive(Debug, Parser)]
#[command(name = "equiload", version, about = "Batch CSV loader for the equity warehouse")]
pub struct Cli {
    /// Daily prices CSV (columns: symbol, date, close, volume).
    #[arg(long, default_value = "data/prices.csv")]
    pub prices: PathBuf,

    /// Annual fundamentals CSV (columns: symbol, fiscal_year, revenue,
    /// ebitda, net_income, fcf, total_debt, cash, shares_out, dividends).
    #[arg(long, default_value = "data/fundamentals.csv")]
    pub fundamentals: PathBuf,

    /// Pretty-print the JSON load summary.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}
