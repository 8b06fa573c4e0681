//! The sequenced load pipeline.
//!
//! Settings, session, prices, fundamentals, commit, strictly in that
//! order. A failure at any stage aborts the rest; the session rolls
//! back and closes during unwind, so nothing becomes durable unless
//! the single commit at the end succeeds.

use serde::Serialize;
use tracing::info;

use equiload_core::{read_fundamentals, read_prices};
use equiload_warehouse::{LoadReport, Session, Settings};

use crate::cli::Cli;
use crate::error::CliError;

/// Per-table reports for one completed run.
#[derive(Debug, Clone, Serialize)]
pub struct LoadSummary {
    pub prices: LoadReport,
    pub fundamentals: LoadReport,
}

/// Run the full load against the warehouse named by `settings`.
///
/// # Errors
///
/// Surfaces the first failing stage as a [`CliError`]; the session is
/// released on every path.
pub fn run(cli: &Cli, settings: &Settings) -> Result<LoadSummary, CliError> {
    info!(
        role = settings.role.as_str(),
        warehouse = settings.warehouse.as_str(),
        database = settings.database.as_str(),
        "settings resolved"
    );

    load_and_commit(cli, settings, Session::connect(settings)?)
}

/// Same flow as [`run`], against an explicit database file path.
///
/// # Errors
///
/// Same failure modes as [`run`].
pub fn run_at(
    cli: &Cli,
    settings: &Settings,
    db_path: impl AsRef<std::path::Path>,
) -> Result<LoadSummary, CliError> {
    load_and_commit(cli, settings, Session::connect_at(settings, db_path)?)
}

fn load_and_commit(
    cli: &Cli,
    settings: &Settings,
    session: Session,
) -> Result<LoadSummary, CliError> {
    info!(account = settings.account.as_str(), "session open");

    let prices = read_prices(cli.prices.as_path())?;
    let prices_report = session.bulk_load(prices.as_slice())?;
    info!(
        table = prices_report.table,
        rows = prices_report.rows_loaded,
        "table replacement staged"
    );

    let fundamentals = read_fundamentals(cli.fundamentals.as_path())?;
    let fundamentals_report = session.bulk_load(fundamentals.as_slice())?;
    info!(
        table = fundamentals_report.table,
        rows = fundamentals_report.rows_loaded,
        "table replacement staged"
    );

    session.commit()?;
    info!("both table replacements committed");

    Ok(LoadSummary {
        prices: prices_report,
        fundamentals: fundamentals_report,
    })
}
