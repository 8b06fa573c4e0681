//! Schema-driven CSV reading.
//!
//! A schema is an ordered list of `(column-name, coercion)` pairs. The
//! reader resolves each declared column against the header row, then
//! eagerly coerces every data row in file order. Downstream insertion
//! is batch-oriented, so there is no streaming path; one bad field
//! aborts the whole read with the file, row, and column attached.

use std::path::Path;

use thiserror::Error;

/// How a raw text field is turned into a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Pass-through text (strings, calendar dates).
    Text,
    /// Signed integer parse.
    Int,
    /// Integer parse rejecting negative values.
    UInt,
    /// Float parse rejecting non-finite values.
    Float,
}

impl Coercion {
    fn expected(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Int => "integer",
            Self::UInt => "non-negative integer",
            Self::Float => "finite float",
        }
    }
}

/// One declared column: header name plus coercion.
pub type Column = (&'static str, Coercion);

/// A coerced field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Malformed CSV content or a header that does not match the schema.
#[derive(Debug, Error)]
pub enum RowParseError {
    #[error("{file}: column '{column}' missing from header")]
    MissingColumn { file: String, column: &'static str },

    #[error("{file}: row {row}, column '{column}': expected {expected}, got '{value}'")]
    BadField {
        file: String,
        /// 1-based over data rows; the header is row zero.
        row: usize,
        column: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },
}

/// Read an entire CSV file into coerced rows, in file order.
///
/// Fields come back in schema order regardless of the column order in
/// the file. The whole sequence is materialized before returning; this
/// is a one-shot, non-restartable read.
///
/// # Errors
///
/// Returns [`RowParseError`] if the file cannot be read, a declared
/// column is absent from the header, or any field fails its coercion.
pub fn read_rows(path: &Path, schema: &[Column]) -> Result<Vec<Vec<Field>>, RowParseError> {
    let file = path.display().to_string();

    let mut reader = csv::Reader::from_path(path).map_err(|source| RowParseError::Csv {
        file: file.clone(),
        source,
    })?;
    let headers = reader
        .headers()
        .map_err(|source| RowParseError::Csv {
            file: file.clone(),
            source,
        })?
        .clone();

    let mut positions = Vec::with_capacity(schema.len());
    for &(column, coercion) in schema {
        let index = headers
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| RowParseError::MissingColumn {
                file: file.clone(),
                column,
            })?;
        positions.push((index, column, coercion));
    }

    let mut rows = Vec::new();
    for (offset, record) in reader.records().enumerate() {
        let record = record.map_err(|source| RowParseError::Csv {
            file: file.clone(),
            source,
        })?;
        let row = offset + 1;

        let mut fields = Vec::with_capacity(positions.len());
        for &(index, column, coercion) in &positions {
            let raw = record.get(index).unwrap_or("");
            let field = coerce(raw, coercion).ok_or_else(|| RowParseError::BadField {
                file: file.clone(),
                row,
                column,
                expected: coercion.expected(),
                value: raw.to_string(),
            })?;
            fields.push(field);
        }
        rows.push(fields);
    }

    Ok(rows)
}

fn coerce(raw: &str, coercion: Coercion) -> Option<Field> {
    match coercion {
        Coercion::Text => Some(Field::Text(raw.to_string())),
        Coercion::Int => raw.trim().parse::<i64>().ok().map(Field::Int),
        Coercion::UInt => raw
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|value| *value >= 0)
            .map(Field::Int),
        Coercion::Float => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Field::Float),
    }
}
