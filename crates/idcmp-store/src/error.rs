//! Error type for `idcmp-store`.

use idcmp_core::source::SourceFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// One of the three required files could not be fetched. Fatal for the
  /// whole load.
  #[error("failed to load {file}: {reason}")]
  RequiredSource { file: SourceFile, reason: String },

  #[error("{file}: {source}")]
  Decode {
    file:   SourceFile,
    #[source]
    source: idcmp_csv::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
