//! Behavior tests for the truncate-and-reload flow.
//!
//! These verify the user-visible outcomes: committed table contents
//! match the source files, reloading is idempotent, and an empty
//! export leaves an empty table.

use std::fmt::Write as _;

use duckdb::Connection;
use equiload_core::{read_fundamentals, read_prices};
use equiload_tests::{bootstrap_raw_tables, test_settings, write_csv, FUNDAMENTALS_HEADER};
use equiload_warehouse::Session;
use tempfile::tempdir;

#[test]
fn committed_prices_match_the_source_file() {
    let temp = tempdir().expect("tempdir");
    let settings = test_settings();
    let db_path = bootstrap_raw_tables(&temp, &settings);

    let csv = write_csv(
        temp.path(),
        "prices.csv",
        "symbol,date,close,volume\n\
         AAPL,2026-01-02,187.5,48210000\n\
         MSFT,2026-01-02,415.2,21034000\n",
    );

    let session = Session::connect_at(&settings, &db_path).expect("connect");
    let records = read_prices(&csv).expect("parse");
    let report = session.bulk_load(records.as_slice()).expect("load");
    assert_eq!(report.table, "PRICES");
    assert_eq!(report.rows_loaded, 2);
    session.commit().expect("commit");

    let verify = Connection::open(&db_path).expect("verify connection");
    let (close, volume): (f64, i64) = verify
        .query_row(
            "SELECT close, volume FROM RAW.PRICES WHERE symbol = 'AAPL'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .expect("query");
    assert_eq!(close, 187.5);
    assert_eq!(volume, 48_210_000);
}

#[test]
fn committed_fundamentals_carry_all_ten_columns() {
    let temp = tempdir().expect("tempdir");
    let settings = test_settings();
    let db_path = bootstrap_raw_tables(&temp, &settings);

    let mut contents = String::from(FUNDAMENTALS_HEADER);
    contents.push_str("AAPL,2025,391035.0,134661.0,93736.0,108807.0,106629.0,65171.0,15115.8,15234.0\n");
    let csv = write_csv(temp.path(), "fundamentals.csv", &contents);

    let session = Session::connect_at(&settings, &db_path).expect("connect");
    let records = read_fundamentals(&csv).expect("parse");
    session.bulk_load(records.as_slice()).expect("load");
    session.commit().expect("commit");

    let verify = Connection::open(&db_path).expect("verify connection");
    let (fiscal_year, revenue, dividends): (i64, f64, f64) = verify
        .query_row(
            "SELECT fiscal_year, revenue, dividends FROM RAW.FUNDAMENTALS WHERE symbol = 'AAPL'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .expect("query");
    assert_eq!(fiscal_year, 2025);
    assert_eq!(revenue, 391_035.0);
    assert_eq!(dividends, 15_234.0);
}

#[test]
fn reloading_an_unchanged_file_is_idempotent() {
    let temp = tempdir().expect("tempdir");
    let settings = test_settings();
    let db_path = bootstrap_raw_tables(&temp, &settings);

    let csv = write_csv(
        temp.path(),
        "prices.csv",
        "symbol,date,close,volume\nAAPL,2026-01-02,187.5,48210000\n",
    );

    for _ in 0..2 {
        let session = Session::connect_at(&settings, &db_path).expect("connect");
        let records = read_prices(&csv).expect("parse");
        session.bulk_load(records.as_slice()).expect("load");
        session.commit().expect("commit");
    }

    let verify = Connection::open(&db_path).expect("verify connection");
    let count: i64 = verify
        .query_row("SELECT COUNT(*) FROM RAW.PRICES", [], |row| row.get(0))
        .expect("count");
    assert_eq!(count, 1);
}

#[test]
fn header_only_file_truncates_and_inserts_nothing() {
    let temp = tempdir().expect("tempdir");
    let settings = test_settings();
    let db_path = bootstrap_raw_tables(&temp, &settings);

    // Seed a stale row that the empty reload must clear.
    let seed = Session::connect_at(&settings, &db_path).expect("connect");
    seed.execute_batch(
        "INSERT INTO RAW.PRICES VALUES ('STALE', DATE '2020-01-01', 1.0, 1)",
    )
    .expect("seed");
    seed.commit().expect("seed commit");

    let csv = write_csv(temp.path(), "prices.csv", "symbol,date,close,volume\n");

    let session = Session::connect_at(&settings, &db_path).expect("connect");
    let records = read_prices(&csv).expect("parse");
    let report = session.bulk_load(records.as_slice()).expect("load");
    assert_eq!(report.rows_loaded, 0);
    session.commit().expect("commit");

    let verify = Connection::open(&db_path).expect("verify connection");
    let count: i64 = verify
        .query_row("SELECT COUNT(*) FROM RAW.PRICES", [], |row| row.get(0))
        .expect("count");
    assert_eq!(count, 0);
}

#[test]
fn thousand_row_file_round_trips() {
    let temp = tempdir().expect("tempdir");
    let settings = test_settings();
    let db_path = bootstrap_raw_tables(&temp, &settings);

    let mut contents = String::from("symbol,date,close,volume\n");
    for index in 0..1000 {
        writeln!(contents, "SYM{index},2026-01-02,{}.25,{}", 100 + index, index).expect("format");
    }
    let csv = write_csv(temp.path(), "prices.csv", &contents);

    let session = Session::connect_at(&settings, &db_path).expect("connect");
    let records = read_prices(&csv).expect("parse");
    assert_eq!(records.len(), 1000);
    session.bulk_load(records.as_slice()).expect("load");
    session.commit().expect("commit");

    let verify = Connection::open(&db_path).expect("verify connection");
    let (count, total_volume): (i64, i64) = verify
        .query_row(
            "SELECT COUNT(*), CAST(SUM(volume) AS BIGINT) FROM RAW.PRICES",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .expect("aggregate");
    assert_eq!(count, 1000);
    assert_eq!(total_volume, (0..1000).sum::<i64>());
}
