//! Laboratory reference range engine.
//!
//! Parses free-text reference ranges, classifies entered result values
//! against them, and maps each status to report styling.
//!
//! # Overview
//!
//! This crate provides:
//! - **Range parsing**: `"7.94 - 20.07"`, `"< 40"`, `"> 100"`, en/em-dash
//!   separators, trailing units, multi-line qualified ranges
//! - **Status classification**: NORMAL / HIGH / LOW / BOUNDARY
//! - **Presentation**: foreground, background and boldness per status
//! - **Reference resolution**: gender-specific ranges and structured bounds
//!   from the test catalog
//!
//! # Example
//!
//! ```
//! use labref_range::{classify, color_for, parse_range};
//! use labref_model::RangeStatus;
//!
//! let range = parse_range("7.94 - 20.07");
//! let status = classify("25.5", range.as_ref());
//! assert_eq!(status, RangeStatus::High);
//! assert_eq!(color_for(status).as_array(), [176, 0, 32]);
//! ```
//!
//! # Design Principles
//!
//! - **Stateless functions**: every operation is a pure function of its inputs
//! - **No failure path**: unstructured text yields no descriptor and
//!   non-numeric values classify as NORMAL
//! - **Caching at the edge**: callers that repeat references own a [`RangeCache`]

mod cache;
mod classify;
mod evaluate;
mod numeric;
mod parser;
mod presentation;
mod reference;

// Parsing
pub use parser::{normalize_whitespace, parse_range};

// Classification
pub use classify::{classify, classify_text};
pub use numeric::{Measurement, is_measurement, parse_measurement};

// Presentation
pub use presentation::{
    BOUNDARY_BACKGROUND, BOUNDARY_FOREGROUND, HIGH_BACKGROUND, HIGH_FOREGROUND, LOW_BACKGROUND,
    LOW_FOREGROUND, NORMAL_FOREGROUND, Presentation, background_for, color_for, is_bold,
    presentation_for,
};

// Catalog references
pub use reference::{
    NO_REFERENCE, descriptor_for, display_reference, reference_text_for, synthesize_reference,
};

// Caller-side helpers
pub use cache::RangeCache;
pub use evaluate::{EvaluatedResult, SheetSummary, evaluate_entry, evaluate_sheet};
