//! Core types and trait definitions for the digital-ID comparison pipeline.
//!
//! This crate is deliberately free of I/O and parsing dependencies. Every
//! other crate depends on it; it depends on nothing beyond serde.

pub mod catalog;
pub mod country;
pub mod error;
pub mod indicator;
pub mod record;
pub mod source;
pub mod tier;

pub use error::{Error, Result};

/// Trim an identifier cell.
pub fn normalize_id(s: &str) -> String { s.trim().to_string() }

/// Trim and uppercase a country code; country ids are case-insensitive.
pub fn normalize_country_id(s: &str) -> String {
  s.trim().to_ascii_uppercase()
}
