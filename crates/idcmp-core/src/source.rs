//! The CSV source catalog and the [`DataSource`] trait.
//!
//! Sources are implemented by the store crate (a local directory) and the
//! binary (an HTTP base URL). Higher layers depend only on this trait.

use std::future::Future;

use strum::EnumIter;

/// Every CSV file the pipeline reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SourceFile {
  Countries,
  Indicators,
  CountryIndicator,
  CountryBasic,
  TranslationsJa,
  Events,
  BenchmarkDefs,
  Benchmarks,
  BasicDefs,
  ItDefs,
  CountryIt,
}

impl SourceFile {
  pub fn file_name(self) -> &'static str {
    match self {
      Self::Countries => "countries.csv",
      Self::Indicators => "indicators.csv",
      Self::CountryIndicator => "country_indicator.csv",
      Self::CountryBasic => "country_basic.csv",
      Self::TranslationsJa => "translations_ja.csv",
      Self::Events => "events.csv",
      Self::BenchmarkDefs => "digital_gov_benchmark_defs.csv",
      Self::Benchmarks => "digital_gov_benchmarks.csv",
      Self::BasicDefs => "basic_defs.csv",
      Self::ItDefs => "it_defs.csv",
      Self::CountryIt => "country_it.csv",
    }
  }

  /// A required file failing to load aborts the whole load; any other file
  /// degrades to an empty collection.
  pub fn is_required(self) -> bool {
    matches!(
      self,
      Self::Countries | Self::Indicators | Self::CountryIndicator
    )
  }
}

impl std::fmt::Display for SourceFile {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.file_name())
  }
}

/// Abstraction over wherever the CSV text comes from.
///
/// Implementations return the raw file text; parsing is the loader's job.
pub trait DataSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch the full text of `file`.
  fn fetch(
    &self,
    file: SourceFile,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + '_;
}
