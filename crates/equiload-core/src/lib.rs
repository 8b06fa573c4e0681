//! # Equiload Core
//!
//! Record types and schema-driven CSV parsing for the equiload batch
//! loader. The reader is parameterized by an ordered column schema so
//! both datasets share one parsing path; `datasets` pins the schemas
//! for the prices and fundamentals files and produces typed records.

pub mod datasets;
pub mod reader;
pub mod records;

pub use datasets::{read_fundamentals, read_prices, FUNDAMENTALS_SCHEMA, PRICES_SCHEMA};
pub use reader::{read_rows, Coercion, Column, Field, RowParseError};
pub use records::{FundamentalsRecord, PriceRecord};
