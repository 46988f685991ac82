//! Data model for laboratory reference ranges and result sheets.
//!
//! Types only: parsing and classification live in `labref-range`.

pub mod catalog;
pub mod color;
mod de;
pub mod enums;
pub mod error;
pub mod range;
pub mod sheet;

pub use catalog::{TestDefinition, find_test};
pub use color::Rgb;
pub use enums::{InputType, RangeKind, RangeStatus, Sex};
pub use error::ModelError;
pub use range::RangeDescriptor;
pub use sheet::{PatientInfo, ResultEntry, ResultSheet};
