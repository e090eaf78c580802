//! folio-export
//!
//! Review report PDF generation: block planning, text layout and PDF output.

pub mod error;
pub mod layout;
pub mod logo;
pub mod metrics;
pub mod pdf;
pub mod styles;

pub use pdf::{render, render_with_styles};
