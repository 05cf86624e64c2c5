//! The loader: fetch every source concurrently, then build a [`DataStore`].
//!
//! The three required files must all arrive; any other file that fails to
//! fetch or decode is logged and treated as empty.

use std::fmt::Display;

use idcmp_core::source::{DataSource, SourceFile};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::{
  Error, Result,
  store::{Collections, DataStore},
};

/// How many untranslated detail strings to include in the log line.
const MISSING_SAMPLE: usize = 20;

/// Decode one fetched file. Failures of a required file are errors; any
/// other file is logged and degrades to an empty collection.
fn rows<T, E>(file: SourceFile, fetched: Result<String, E>) -> Result<Vec<T>>
where
  T: DeserializeOwned,
  E: Display,
{
  let text = match fetched {
    Ok(text) => text,
    Err(e) if file.is_required() => {
      return Err(Error::RequiredSource {
        file,
        reason: e.to_string(),
      });
    }
    Err(e) => {
      warn!(%file, error = %e, "optional source not loaded");
      return Ok(Vec::new());
    }
  };
  match idcmp_csv::parse_as(&text) {
    Ok(rows) => Ok(rows),
    Err(source) if file.is_required() => Err(Error::Decode { file, source }),
    Err(e) => {
      warn!(%file, error = %e, "optional source could not be decoded");
      Ok(Vec::new())
    }
  }
}

/// Fetch all eleven sources from `source` concurrently and build the store.
///
/// Fails only when a required source (`countries.csv`, `indicators.csv`,
/// `country_indicator.csv`) cannot be fetched or decoded.
pub async fn load<S: DataSource>(source: &S) -> Result<DataStore> {
  let (
    countries,
    indicators,
    indicator_values,
    basics,
    translations,
    events,
    benchmark_defs,
    benchmarks,
    basic_defs,
    it_defs,
    it_values,
  ) = tokio::join!(
    source.fetch(SourceFile::Countries),
    source.fetch(SourceFile::Indicators),
    source.fetch(SourceFile::CountryIndicator),
    source.fetch(SourceFile::CountryBasic),
    source.fetch(SourceFile::TranslationsJa),
    source.fetch(SourceFile::Events),
    source.fetch(SourceFile::BenchmarkDefs),
    source.fetch(SourceFile::Benchmarks),
    source.fetch(SourceFile::BasicDefs),
    source.fetch(SourceFile::ItDefs),
    source.fetch(SourceFile::CountryIt),
  );

  let collections = Collections {
    countries:        rows(SourceFile::Countries, countries)?,
    indicators:       rows(SourceFile::Indicators, indicators)?,
    indicator_values: rows(SourceFile::CountryIndicator, indicator_values)?,
    basics:           rows(SourceFile::CountryBasic, basics)?,
    basic_defs:       rows(SourceFile::BasicDefs, basic_defs)?,
    benchmark_defs:   rows(SourceFile::BenchmarkDefs, benchmark_defs)?,
    benchmarks:       rows(SourceFile::Benchmarks, benchmarks)?,
    it_defs:          rows(SourceFile::ItDefs, it_defs)?,
    it_values:        rows(SourceFile::CountryIt, it_values)?,
    translations:     rows(SourceFile::TranslationsJa, translations)?,
    events:           rows(SourceFile::Events, events)?,
  };

  let store = DataStore::new(collections);
  info!(
    countries = store.countries().len(),
    indicators = store.indicators().len(),
    indicator_values = store.indicator_values().len(),
    basics = store.basics().len(),
    benchmarks = store.benchmarks().len(),
    it_values = store.it_values().len(),
    events = store.events().len(),
    translations = store.dictionary().len(),
    "data loaded"
  );
  report_translation_gaps(&store);
  Ok(store)
}

/// Log detail strings without a translation; never surfaced to end users.
fn report_translation_gaps(store: &DataStore) {
  if store.translations_missing() {
    warn!("translations_ja.csv is empty or not loaded; details stay untranslated");
    return;
  }
  let details: Vec<String> = store
    .indicator_values()
    .rows()
    .iter()
    .map(|r| idcmp_csv::split_value(&r.value).detail)
    .collect();
  let missing = store.dictionary().missing(details.iter().map(String::as_str));
  if !missing.is_empty() {
    info!(
      missing = missing.len(),
      sample = ?&missing[..missing.len().min(MISSING_SAMPLE)],
      "translations_ja.csv: detail entries without a translation"
    );
  }
}
