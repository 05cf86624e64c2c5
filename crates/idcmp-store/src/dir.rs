//! [`DirSource`]: reads CSV files from a local directory.

use std::{
  future::Future,
  path::{Path, PathBuf},
};

use idcmp_core::source::{DataSource, SourceFile};

/// A data directory such as `./data`.
#[derive(Debug, Clone)]
pub struct DirSource {
  root: PathBuf,
}

impl DirSource {
  pub fn new(root: impl AsRef<Path>) -> Self {
    Self {
      root: root.as_ref().to_path_buf(),
    }
  }
}

impl DataSource for DirSource {
  type Error = std::io::Error;

  fn fetch(
    &self,
    file: SourceFile,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + '_ {
    let path = self.root.join(file.file_name());
    async move { tokio::fs::read_to_string(path).await }
  }
}
