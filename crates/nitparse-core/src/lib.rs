//! Core library for NIT (Notice Inviting Tender) processing.
//!
//! This crate provides:
//! - Text extraction from tender PDFs (via `pdf-extract`)
//! - Line-item parsing from linearized NIT text
//! - Email composition for BQ requests and OEM authorization workflows

pub mod email;
pub mod error;
pub mod extract;
pub mod models;
pub mod nit;

pub use error::{ExtractError, NitError, Result};
pub use extract::{PdfTextExtractor, TextExtractor};
pub use models::config::{CompanyDetails, TenderDetails};
pub use models::item::{Item, NOT_AVAILABLE, NO_DESCRIPTION};
pub use nit::ItemParser;
