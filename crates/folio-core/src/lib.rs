//! folio-core
//!
//! Pure domain types for review reports: CSV rows, section grouping and
//! output file naming. No PDF or HTTP dependency.

pub mod error;
pub mod ingest;
pub mod models;
pub mod naming;
