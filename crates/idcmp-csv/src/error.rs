//! Error types for the idcmp-csv codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("row {row}: cannot decode record: {source}")]
  Decode {
    /// 1-based data-row number (the header is row 0).
    row:    usize,
    #[source]
    source: serde::de::value::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
