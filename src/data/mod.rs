//! Data module - roster loading and export

pub mod export;
pub mod loader;
pub mod schema;

pub use export::{CsvExporter, ExportError};
pub use loader::{DataLoader, LoaderError};
