//! [`ViewState`]: the selection and toggle state shared by every render.
//!
//! The store is immutable; everything the user can change lives here and is
//! passed explicitly into each renderer.

use std::collections::BTreeSet;

use idcmp_core::{normalize_country_id, normalize_id, tier::ReviewStatus};
use serde::Serialize;

/// Country always shown, always leftmost.
pub const BASELINE_COUNTRY: &str = "JPN";

/// Initial selection for a fresh session.
pub const DEFAULT_COUNTRIES: &[&str] = &["JPN", "EST", "DNK", "KOR"];

// ─── Expanded rows ───────────────────────────────────────────────────────────

/// Which table a definition toggle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
  Indicator,
  Basic,
  Benchmark,
  It,
}

/// Per-table sets of row ids whose definition block is open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpandedRows {
  indicators: BTreeSet<String>,
  basics:     BTreeSet<String>,
  benchmarks: BTreeSet<String>,
  it:         BTreeSet<String>,
}

impl ExpandedRows {
  fn set(&self, kind: RowKind) -> &BTreeSet<String> {
    match kind {
      RowKind::Indicator => &self.indicators,
      RowKind::Basic => &self.basics,
      RowKind::Benchmark => &self.benchmarks,
      RowKind::It => &self.it,
    }
  }

  fn set_mut(&mut self, kind: RowKind) -> &mut BTreeSet<String> {
    match kind {
      RowKind::Indicator => &mut self.indicators,
      RowKind::Basic => &mut self.basics,
      RowKind::Benchmark => &mut self.benchmarks,
      RowKind::It => &mut self.it,
    }
  }

  pub fn is_expanded(&self, kind: RowKind, id: &str) -> bool {
    self.set(kind).contains(id.trim())
  }

  /// Flip one row; returns whether it is now expanded.
  pub fn toggle(&mut self, kind: RowKind, id: &str) -> bool {
    let id = normalize_id(id);
    let set = self.set_mut(kind);
    if set.remove(&id) {
      false
    } else {
      set.insert(id);
      true
    }
  }
}

// ─── View state ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
  baseline: String,
  selected: BTreeSet<String>,
  version:  String,
  status:   ReviewStatus,
  expanded: ExpandedRows,
}

impl Default for ViewState {
  fn default() -> Self { Self::new(BASELINE_COUNTRY, DEFAULT_COUNTRIES.iter().copied()) }
}

impl ViewState {
  /// A fresh state with `baseline` forced into `initial`.
  pub fn new<I, S>(baseline: &str, initial: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let baseline = normalize_country_id(baseline);
    let mut selected: BTreeSet<String> = initial
      .into_iter()
      .map(|id| normalize_country_id(id.as_ref()))
      .filter(|id| !id.is_empty())
      .collect();
    selected.insert(baseline.clone());
    Self {
      baseline,
      selected,
      version: String::new(),
      status: ReviewStatus::default(),
      expanded: ExpandedRows::default(),
    }
  }

  pub fn baseline(&self) -> &str { &self.baseline }

  pub fn selected(&self) -> &BTreeSet<String> { &self.selected }

  pub fn is_selected(&self, country_id: &str) -> bool {
    self.selected.contains(&normalize_country_id(country_id))
  }

  /// Flip one country; the baseline cannot be deselected. Returns whether
  /// the country is selected afterwards.
  pub fn toggle_country(&mut self, country_id: &str) -> bool {
    let id = normalize_country_id(country_id);
    if id.is_empty() {
      return false;
    }
    if id == self.baseline {
      return true;
    }
    if self.selected.remove(&id) {
      false
    } else {
      self.selected.insert(id);
      true
    }
  }

  pub fn select_all<I, S>(&mut self, country_ids: I)
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    self.selected.extend(
      country_ids
        .into_iter()
        .map(|id| normalize_country_id(id.as_ref()))
        .filter(|id| !id.is_empty()),
    );
  }

  /// Deselect everything except the baseline.
  pub fn clear_selection(&mut self) {
    self.selected.clear();
    self.selected.insert(self.baseline.clone());
  }

  pub fn version(&self) -> &str { &self.version }

  pub fn set_version(&mut self, version: impl Into<String>) {
    self.version = version.into().trim().to_string();
  }

  pub fn status(&self) -> ReviewStatus { self.status }

  pub fn set_status(&mut self, status: ReviewStatus) { self.status = status; }

  pub fn expanded(&self) -> &ExpandedRows { &self.expanded }

  pub fn toggle_definition(&mut self, kind: RowKind, id: &str) -> bool {
    self.expanded.toggle(kind, id)
  }

  /// Column order: baseline first, then the other selections by code.
  pub fn columns(&self) -> Vec<String> {
    std::iter::once(self.baseline.clone())
      .chain(
        self
          .selected
          .iter()
          .filter(|id| **id != self.baseline)
          .cloned(),
      )
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn baseline_is_always_first_column() {
    let state = ViewState::new("jpn", ["KOR", "aut", "EST"]);
    assert_eq!(state.columns(), ["JPN", "AUT", "EST", "KOR"]);

    let state = ViewState::new("ZZZ", ["AAA"]);
    assert_eq!(state.columns(), ["ZZZ", "AAA"]);
  }

  #[test]
  fn baseline_survives_toggle_and_clear() {
    let mut state = ViewState::new("JPN", ["EST"]);
    assert!(state.toggle_country("jpn"));
    assert!(state.is_selected("JPN"));

    assert!(!state.toggle_country("EST"));
    assert!(state.toggle_country("dnk"));
    state.clear_selection();
    assert_eq!(state.columns(), ["JPN"]);

    state.select_all(["EST", "KOR"]);
    assert_eq!(state.columns(), ["JPN", "EST", "KOR"]);
  }

  #[test]
  fn definition_toggles_are_per_kind() {
    let mut state = ViewState::default();
    assert!(state.toggle_definition(RowKind::Indicator, "I01"));
    assert!(state.expanded().is_expanded(RowKind::Indicator, "I01"));
    assert!(!state.expanded().is_expanded(RowKind::Basic, "I01"));
    assert!(!state.toggle_definition(RowKind::Indicator, " I01 "));
    assert!(!state.expanded().is_expanded(RowKind::Indicator, "I01"));
  }
}
