//! [`DataStore`]: owns every parsed collection for one load.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use idcmp_core::{
  country::Country,
  indicator::Indicator,
  normalize_country_id,
  record::{
    BasicDefinition, BasicFact, BenchmarkDefinition, BenchmarkValue,
    EventRecord, IndicatorValue, ItDefinition, ItValue, Keyed,
    TranslationEntry,
  },
};

use crate::Dictionary;

// ─── Composite-key index ─────────────────────────────────────────────────────

type Key = (String, String, String, String);

fn key(country_id: &str, item_id: &str, version: &str, status: &str) -> Key {
  (
    normalize_country_id(country_id),
    item_id.trim().to_string(),
    version.trim().to_string(),
    status.trim().to_string(),
  )
}

/// Rows of one versioned kind plus a `(country, item, version, status)`
/// index. When a key repeats, the later row wins the index.
#[derive(Debug, Clone)]
pub struct KeyedRows<T> {
  rows:  Vec<T>,
  index: HashMap<Key, usize>,
}

impl<T> Default for KeyedRows<T> {
  fn default() -> Self {
    Self {
      rows:  Vec::new(),
      index: HashMap::new(),
    }
  }
}

impl<T: Keyed> KeyedRows<T> {
  /// Normalise the key columns of `rows` and index them.
  pub fn new(mut rows: Vec<T>) -> Self {
    let mut index = HashMap::with_capacity(rows.len());
    for (i, row) in rows.iter_mut().enumerate() {
      row.normalize();
      index.insert(
        key(
          row.country_id(),
          row.item_id(),
          row.version(),
          row.review_status(),
        ),
        i,
      );
    }
    Self { rows, index }
  }

  pub fn get(
    &self,
    country_id: &str,
    item_id: &str,
    version: &str,
    status: &str,
  ) -> Option<&T> {
    self
      .index
      .get(&key(country_id, item_id, version, status))
      .map(|&i| &self.rows[i])
  }

  pub fn rows(&self) -> &[T] { &self.rows }

  /// The rows the index resolves to: one per key, the later duplicate
  /// winning, in original order.
  pub fn current(&self) -> impl Iterator<Item = &T> + '_ {
    self.rows.iter().enumerate().filter_map(move |(i, row)| {
      let k = key(row.country_id(), row.item_id(), row.version(), row.review_status());
      (self.index.get(&k) == Some(&i)).then_some(row)
    })
  }

  pub fn len(&self) -> usize { self.rows.len() }

  pub fn is_empty(&self) -> bool { self.rows.is_empty() }

  /// Number of rows tagged with each non-blank version.
  pub fn version_counts(&self) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for row in &self.rows {
      let v = row.version();
      if !v.is_empty() {
        *counts.entry(v).or_insert(0) += 1;
      }
    }
    counts
  }
}

// ─── Collections ─────────────────────────────────────────────────────────────

/// Raw decoded collections, as produced by the loader.
#[derive(Debug, Clone, Default)]
pub struct Collections {
  pub countries:        Vec<Country>,
  pub indicators:       Vec<Indicator>,
  pub indicator_values: Vec<IndicatorValue>,
  pub basics:           Vec<BasicFact>,
  pub basic_defs:       Vec<BasicDefinition>,
  pub benchmark_defs:   Vec<BenchmarkDefinition>,
  pub benchmarks:       Vec<BenchmarkValue>,
  pub it_defs:          Vec<ItDefinition>,
  pub it_values:        Vec<ItValue>,
  pub translations:     Vec<TranslationEntry>,
  pub events:           Vec<EventRecord>,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// Every record of one load, indexed for composite-key lookup.
///
/// Immutable once built; reloading replaces the whole store.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
  countries:        Vec<Country>,
  country_index:    HashMap<String, usize>,
  indicators:       Vec<Indicator>,
  indicator_values: KeyedRows<IndicatorValue>,
  basics:           KeyedRows<BasicFact>,
  basic_defs:       Vec<BasicDefinition>,
  benchmark_defs:   Vec<BenchmarkDefinition>,
  benchmarks:       KeyedRows<BenchmarkValue>,
  it_defs:          Vec<ItDefinition>,
  it_values:        KeyedRows<ItValue>,
  events:           Vec<EventRecord>,
  dictionary:       Dictionary,
}

impl DataStore {
  pub fn new(c: Collections) -> Self {
    let mut countries = c.countries;
    let mut country_index = HashMap::with_capacity(countries.len());
    for (i, country) in countries.iter_mut().enumerate() {
      country.normalize();
      if !country.country_id.is_empty() {
        country_index.insert(country.country_id.clone(), i);
      }
    }

    let mut indicators = c.indicators;
    indicators.iter_mut().for_each(Indicator::normalize);

    let mut basic_defs = c.basic_defs;
    for d in &mut basic_defs {
      d.basic_id = d.basic_id.trim().to_string();
    }
    let mut benchmark_defs = c.benchmark_defs;
    for d in &mut benchmark_defs {
      d.benchmark_id = d.benchmark_id.trim().to_string();
    }
    let mut it_defs = c.it_defs;
    for d in &mut it_defs {
      d.it_id = d.it_id.trim().to_string();
    }

    let mut events = c.events;
    events.iter_mut().for_each(EventRecord::normalize);

    Self {
      countries,
      country_index,
      indicators,
      indicator_values: KeyedRows::new(c.indicator_values),
      basics: KeyedRows::new(c.basics),
      basic_defs,
      benchmark_defs,
      benchmarks: KeyedRows::new(c.benchmarks),
      it_defs,
      it_values: KeyedRows::new(c.it_values),
      events,
      dictionary: Dictionary::from_entries(&c.translations),
    }
  }

  // ── Countries & indicators ──────────────────────────────────────────────

  pub fn countries(&self) -> &[Country] { &self.countries }

  pub fn country(&self, country_id: &str) -> Option<&Country> {
    self
      .country_index
      .get(&normalize_country_id(country_id))
      .map(|&i| &self.countries[i])
  }

  /// The country row, or a code-only placeholder when none exists.
  pub fn country_or_placeholder(&self, country_id: &str) -> Country {
    self
      .country(country_id)
      .cloned()
      .unwrap_or_else(|| Country::unknown(country_id))
  }

  pub fn indicators(&self) -> &[Indicator] { &self.indicators }

  /// Distinct country codes that appear in the indicator values, sorted.
  pub fn indicator_country_ids(&self) -> Vec<String> {
    self
      .indicator_values
      .rows()
      .iter()
      .map(|r| r.country_id.clone())
      .filter(|id| !id.is_empty())
      .collect::<BTreeSet<_>>()
      .into_iter()
      .collect()
  }

  // ── Versioned rows ──────────────────────────────────────────────────────

  pub fn indicator_values(&self) -> &KeyedRows<IndicatorValue> { &self.indicator_values }

  pub fn indicator_value(
    &self,
    country_id: &str,
    indicator_id: &str,
    version: &str,
    status: &str,
  ) -> Option<&IndicatorValue> {
    self.indicator_values.get(country_id, indicator_id, version, status)
  }

  pub fn basics(&self) -> &KeyedRows<BasicFact> { &self.basics }

  pub fn basic_fact(
    &self,
    country_id: &str,
    basic_id: &str,
    version: &str,
    status: &str,
  ) -> Option<&BasicFact> {
    self.basics.get(country_id, basic_id, version, status)
  }

  pub fn benchmarks(&self) -> &KeyedRows<BenchmarkValue> { &self.benchmarks }

  pub fn benchmark_value(
    &self,
    country_id: &str,
    benchmark_id: &str,
    version: &str,
    status: &str,
  ) -> Option<&BenchmarkValue> {
    self.benchmarks.get(country_id, benchmark_id, version, status)
  }

  pub fn it_values(&self) -> &KeyedRows<ItValue> { &self.it_values }

  pub fn it_value(
    &self,
    country_id: &str,
    it_id: &str,
    version: &str,
    status: &str,
  ) -> Option<&ItValue> {
    self.it_values.get(country_id, it_id, version, status)
  }

  // ── Definitions ─────────────────────────────────────────────────────────

  pub fn basic_defs(&self) -> &[BasicDefinition] { &self.basic_defs }

  pub fn basic_def(&self, basic_id: &str) -> Option<&BasicDefinition> {
    self.basic_defs.iter().find(|d| d.basic_id == basic_id)
  }

  pub fn benchmark_defs(&self) -> &[BenchmarkDefinition] { &self.benchmark_defs }

  pub fn it_defs(&self) -> &[ItDefinition] { &self.it_defs }

  // ── Events & translations ───────────────────────────────────────────────

  pub fn events(&self) -> &[EventRecord] { &self.events }

  /// Timeline for one country, ascending by date string.
  pub fn events_for(&self, country_id: &str) -> Vec<&EventRecord> {
    let id = normalize_country_id(country_id);
    let mut out: Vec<&EventRecord> =
      self.events.iter().filter(|e| e.country_id == id).collect();
    out.sort_by(|a, b| a.event_date.cmp(&b.event_date));
    out
  }

  pub fn dictionary(&self) -> &Dictionary { &self.dictionary }

  /// True when no translation table was loaded at all.
  pub fn translations_missing(&self) -> bool { self.dictionary.is_empty() }

  pub fn translate(&self, text: &str) -> String { self.dictionary.translate(text) }
}
