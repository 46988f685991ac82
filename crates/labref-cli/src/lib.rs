//! Library side of the `labref` CLI: logging setup and report assembly.

pub mod logging;
pub mod report;
