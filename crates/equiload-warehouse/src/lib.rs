//! # Equiload Warehouse
//!
//! Connection settings, the warehouse session, and the bulk loader
//! that replaces RAW table contents. The engine is embedded DuckDB;
//! the `DATABASE` setting names the database file under the data home.
//!
//! A [`Session`] owns exactly one connection and one transaction: it
//! begins the load transaction on connect, [`Session::commit`] makes
//! both table replacements durable together, and dropping an
//! uncommitted session rolls back.

pub mod config;
pub mod loader;
pub mod session;

pub use config::{ConfigurationError, Credential, Settings};
pub use loader::{LoadError, LoadReport, TableRecord, RAW_SCHEMA};
pub use session::{ConnectionError, Session};
