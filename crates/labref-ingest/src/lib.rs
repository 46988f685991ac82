//! Input loading for laboratory result sheets and test catalogs.
//!
//! Both loaders pick the format from the file extension: `.json` documents
//! deserialize straight into the `labref-model` types, `.csv` tables are
//! mapped column by column with loose header matching.
//!
//! # Example
//!
//! ```ignore
//! use labref_ingest::{read_catalog, read_result_sheet};
//!
//! let catalog = read_catalog("catalog.csv")?;
//! let sheet = read_result_sheet("visit.json")?;
//! ```

mod catalog;
mod columns;
mod csv_table;
mod error;
mod sheet;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loaders ===
pub use catalog::read_catalog;
pub use sheet::read_result_sheet;
pub use source::SourceFormat;
