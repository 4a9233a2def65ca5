//! CSV Data Loader Module
//! Reads the semicolon-delimited roster file into a Polars DataFrame.

use crate::data::schema;
use polars::prelude::*;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// UTF-8 byte order mark written by the exporter.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing column: {0}")]
    MissingColumn(String),
    #[error("Column {column} is not numeric ({dtype})")]
    NotNumeric { column: String, dtype: DataType },
    #[error("No data loaded")]
    NoData,
}

/// Check whether a dtype can feed the mean/sum aggregates.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// Loads and validates the roster table.
pub struct DataLoader {
    separator: u8,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new(b';')
    }
}

impl DataLoader {
    pub fn new(separator: u8) -> Self {
        Self { separator }
    }

    /// Load the roster file at `path`.
    pub fn load_csv(&self, path: &Path) -> Result<DataFrame, LoaderError> {
        let bytes = std::fs::read(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_bytes(bytes)
    }

    /// Parse roster bytes, normalize labels and validate the schema.
    pub fn load_bytes(&self, mut bytes: Vec<u8>) -> Result<DataFrame, LoaderError> {
        if bytes.starts_with(UTF8_BOM) {
            bytes.drain(..UTF8_BOM.len());
        }

        let separator = self.separator;
        let mut df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .map_parse_options(|opts| opts.with_separator(separator))
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()?;

        Self::normalize_columns(&mut df)?;
        Self::validate(&df)?;
        Ok(df)
    }

    /// Trim and lower-case every column label.
    pub fn normalize_columns(df: &mut DataFrame) -> Result<(), LoaderError> {
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| schema::normalize_label(s.as_str()))
            .collect();
        df.set_column_names(names)?;
        Ok(())
    }

    /// Reject tables the dashboard cannot render.
    pub fn validate(df: &DataFrame) -> Result<(), LoaderError> {
        for name in schema::required_columns() {
            if df.column(name).is_err() {
                return Err(LoaderError::MissingColumn(name.to_string()));
            }
        }

        if df.height() == 0 {
            return Err(LoaderError::NoData);
        }

        for name in schema::NUMERIC_COLUMNS {
            let dtype = df.column(name)?.dtype();
            if !is_numeric_dtype(dtype) {
                return Err(LoaderError::NotNumeric {
                    column: name.to_string(),
                    dtype: dtype.clone(),
                });
            }
        }
        Ok(())
    }

    /// Get list of column names from a DataFrame.
    pub fn get_columns(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}
