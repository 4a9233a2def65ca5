//! CSV Export Module
//! Re-encodes the loaded roster as semicolon-delimited UTF-8 with a BOM.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to encode CSV: {0}")]
    Encode(#[from] PolarsError),
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes a DataFrame in the same dialect the loader reads.
pub struct CsvExporter {
    separator: u8,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new(b';')
    }
}

impl CsvExporter {
    pub fn new(separator: u8) -> Self {
        Self { separator }
    }

    /// Encode the table to bytes: BOM, header row, one line per record.
    pub fn to_bytes(&self, df: &DataFrame) -> Result<Vec<u8>, ExportError> {
        let mut buf: Vec<u8> = Vec::new();
        // CsvWriter needs a mutable frame for rechunking
        let mut df = df.clone();
        CsvWriter::new(&mut buf)
            .include_bom(true)
            .include_header(true)
            .with_separator(self.separator)
            .finish(&mut df)?;
        Ok(buf)
    }

    /// Encode and save to `path`, returning the number of bytes written.
    pub fn write_file(&self, df: &DataFrame, path: &Path) -> Result<usize, ExportError> {
        let bytes = self.to_bytes(df)?;
        std::fs::write(path, &bytes)?;
        log::info!("Exported {} rows to {} ({} bytes)", df.height(), path.display(), bytes.len());
        Ok(bytes.len())
    }
}
