//! Data sources for the binary: a local directory or an HTTP base URL.

use std::{future::Future, time::Duration};

use anyhow::{Context, Result};
use idcmp_core::source::{DataSource, SourceFile};
use idcmp_store::{DataStore, DirSource};
use reqwest::Client;

/// Fetches `{base_url}/{file}` over HTTP(S).
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpSource {
  client:   Client,
  base_url: String,
}

impl HttpSource {
  pub fn new(base_url: &str) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
    })
  }

  fn url(&self, file: SourceFile) -> String {
    format!("{}/{}", self.base_url, file.file_name())
  }
}

impl DataSource for HttpSource {
  type Error = reqwest::Error;

  /// `GET {base}/{file}`; a non-2xx status is an error.
  fn fetch(
    &self,
    file: SourceFile,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + '_ {
    let url = self.url(file);
    async move {
      self
        .client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
    }
  }
}

/// Where the CSV files live.
pub enum Source {
  Dir(DirSource),
  Http(HttpSource),
}

impl Source {
  /// `http://` and `https://` locations are fetched; anything else is a path.
  pub fn from_location(location: &str) -> Result<Self> {
    if location.starts_with("http://") || location.starts_with("https://") {
      Ok(Self::Http(HttpSource::new(location)?))
    } else {
      Ok(Self::Dir(DirSource::new(location)))
    }
  }

  pub async fn load(&self) -> idcmp_store::Result<DataStore> {
    match self {
      Self::Dir(s) => idcmp_store::load(s).await,
      Self::Http(s) => idcmp_store::load(s).await,
    }
  }
}

/// Load every source from `location`. Fails only on a required file.
pub async fn load_store(location: &str) -> Result<DataStore> {
  let source = Source::from_location(location)?;
  source
    .load()
    .await
    .with_context(|| format!("failed to load data from {location}"))
}
