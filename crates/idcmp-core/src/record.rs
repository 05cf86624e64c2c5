//! Versioned value rows and the auxiliary record kinds.
//!
//! Every record mirrors one CSV row. All fields are plain strings that decode
//! to `""` when their column is absent; typed interpretation happens at the
//! point of use, never at load time.

use serde::{Deserialize, Serialize};

use crate::{normalize_country_id, normalize_id};

// ─── Keyed ───────────────────────────────────────────────────────────────────

/// A row addressed by `(country_id, item_id, version, review_status)`.
pub trait Keyed {
  fn country_id(&self) -> &str;
  /// The indicator, basic, benchmark or IT code this row belongs to.
  fn item_id(&self) -> &str;
  fn version(&self) -> &str;
  fn review_status(&self) -> &str;
  /// Canonicalise the key columns in place.
  fn normalize(&mut self);
}

macro_rules! keyed {
  ($ty:ty, $item:ident) => {
    impl Keyed for $ty {
      fn country_id(&self) -> &str { &self.country_id }

      fn item_id(&self) -> &str { &self.$item }

      fn version(&self) -> &str { &self.version }

      fn review_status(&self) -> &str { &self.review_status }

      fn normalize(&mut self) {
        self.country_id = normalize_country_id(&self.country_id);
        self.$item = normalize_id(&self.$item);
        self.version = self.version.trim().to_string();
        self.review_status = self.review_status.trim().to_string();
      }
    }
  };
}

// ─── Indicator values ────────────────────────────────────────────────────────

/// One row of `country_indicator.csv`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorValue {
  pub country_id:    String,
  pub indicator_id:  String,
  pub version:       String,
  pub review_status: String,
  /// `main[<delimiter>detail…]`; see `idcmp_csv::split_value`.
  pub value:         String,
  pub tags:          String,
  /// JSON array of URLs or a `;`-delimited legacy list.
  pub source_url:    String,
  pub year:          String,
}

keyed!(IndicatorValue, indicator_id);

// ─── Basic facts ─────────────────────────────────────────────────────────────

/// One row of `country_basic.csv`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicFact {
  pub country_id:    String,
  pub basic_id:      String,
  pub version:       String,
  pub review_status: String,
  pub value:         String,
  pub source_url:    String,
  pub year:          String,
}

keyed!(BasicFact, basic_id);

/// One row of `basic_defs.csv`; overrides the built-in catalog labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicDefinition {
  pub basic_id:      String,
  pub label_ja:      String,
  pub label_en:      String,
  pub definition_ja: String,
  pub unit:          String,
  pub higher_better: String,
}

// ─── Benchmarks ──────────────────────────────────────────────────────────────

/// One row of `digital_gov_benchmark_defs.csv`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkDefinition {
  pub benchmark_id:   String,
  pub name_en:        String,
  pub name_ja:        String,
  pub source_name:    String,
  pub score_min:      String,
  pub score_max:      String,
  /// Boolean-ish; blank means "infer from the value format".
  pub higher_better:  String,
  pub metric_note_ja: String,
  pub display_order:  String,
}

/// One row of `digital_gov_benchmarks.csv`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkValue {
  pub country_id:    String,
  pub benchmark_id:  String,
  pub version:       String,
  pub review_status: String,
  /// A numeric score, or an ordinal such as `Rank 3 / 193`.
  pub value:         String,
  pub year:          String,
  pub source_url:    String,
}

keyed!(BenchmarkValue, benchmark_id);

// ─── IT infrastructure ───────────────────────────────────────────────────────

/// One row of `it_defs.csv`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItDefinition {
  pub it_id:         String,
  pub name_en:       String,
  pub name_ja:       String,
  pub definition_ja: String,
  pub display_order: String,
}

/// One row of `country_it.csv`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItValue {
  pub country_id:    String,
  pub it_id:         String,
  pub version:       String,
  pub review_status: String,
  pub value:         String,
  pub year:          String,
  pub source_url:    String,
}

keyed!(ItValue, it_id);

// ─── Translations & events ───────────────────────────────────────────────────

/// One `en → ja` pair from `translations_ja.csv`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationEntry {
  pub en: String,
  pub ja: String,
}

/// One row of `events.csv`: an entry on a country's timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRecord {
  pub country_id:  String,
  /// ISO-like date string; ordering is lexical.
  pub event_date:  String,
  pub title:       String,
  pub event_type:  String,
  pub severity:    String,
  pub description: String,
  pub source_url:  String,
}

impl EventRecord {
  pub fn normalize(&mut self) {
    self.country_id = normalize_country_id(&self.country_id);
    self.event_date = self.event_date.trim().to_string();
  }
}

/// Parse a numeric `display_order` cell; blank or unparseable sorts last.
pub fn display_order(cell: &str) -> f64 {
  let cell = cell.trim();
  if cell.is_empty() {
    return crate::indicator::DEFAULT_DISPLAY_ORDER;
  }
  cell
    .parse::<f64>()
    .ok()
    .filter(|n| n.is_finite())
    .unwrap_or(crate::indicator::DEFAULT_DISPLAY_ORDER)
}
