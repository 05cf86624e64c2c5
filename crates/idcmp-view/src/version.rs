//! Version resolution: which dataset snapshots can be selected.

use std::collections::BTreeMap;

use idcmp_store::DataStore;
use serde::Serialize;

/// Selectable versions, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Versions {
  /// What the version picker offers.
  pub available: Vec<String>,
  /// Versions with a row for every country × indicator pair.
  pub complete:  Vec<String>,
}

impl Versions {
  /// The pre-selected version.
  pub fn default_version(&self) -> Option<&str> {
    self.available.first().map(String::as_str)
  }
}

fn descending(counts: &BTreeMap<&str, usize>) -> Vec<String> {
  counts.keys().rev().map(|v| v.to_string()).collect()
}

/// Enumerate versions from the indicator values.
///
/// Complete versions are preferred; otherwise every observed version is
/// offered; with no versioned indicator rows at all, the versions seen in
/// the basic facts are used instead.
pub fn resolve_versions(store: &DataStore) -> Versions {
  let counts = store.indicator_values().version_counts();
  let expected = store.countries().len() * store.indicators().len();

  let all = descending(&counts);
  let complete: Vec<String> = all
    .iter()
    .filter(|v| counts.get(v.as_str()) == Some(&expected))
    .cloned()
    .collect();

  let available = if !complete.is_empty() {
    complete.clone()
  } else if !all.is_empty() {
    all
  } else {
    descending(&store.basics().version_counts())
  };

  tracing::debug!(?available, ?complete, expected, "versions resolved");
  Versions {
    available,
    complete,
  }
}

#[cfg(test)]
mod tests {
  use idcmp_core::{
    country::Country,
    indicator::Indicator,
    record::{BasicFact, IndicatorValue},
  };
  use idcmp_store::Collections;

  use super::*;

  fn country(id: &str) -> Country {
    Country {
      country_id: id.into(),
      ..Default::default()
    }
  }

  fn value(c: &str, i: &str, v: &str) -> IndicatorValue {
    IndicatorValue {
      country_id: c.into(),
      indicator_id: i.into(),
      version: v.into(),
      review_status: "published".into(),
      ..Default::default()
    }
  }

  #[test]
  fn complete_version_beats_later_incomplete_one() {
    let countries: Vec<_> =
      ["JPN", "EST", "DNK", "KOR"].map(country).into();
    let indicators: Vec<_> = (1..=10)
      .map(|n| Indicator {
        indicator_id: format!("I{n:02}"),
        ..Default::default()
      })
      .collect();

    let mut values = Vec::new();
    for c in &countries {
      for i in &indicators {
        values.push(value(&c.country_id, &i.indicator_id, "v1"));
      }
    }
    values.push(value("JPN", "I01", "v2"));

    let store = DataStore::new(Collections {
      countries,
      indicators,
      indicator_values: values,
      ..Default::default()
    });
    let versions = resolve_versions(&store);
    assert_eq!(versions.complete, ["v1"]);
    assert_eq!(versions.available, ["v1"]);
    assert_eq!(versions.default_version(), Some("v1"));
  }

  #[test]
  fn falls_back_to_all_versions_then_basics() {
    let store = DataStore::new(Collections {
      countries: vec![country("JPN"), country("EST")],
      indicators: vec![Indicator {
        indicator_id: "I01".into(),
        ..Default::default()
      }],
      indicator_values: vec![value("JPN", "I01", "v1"), value("JPN", "I01", "v2")],
      ..Default::default()
    });
    assert_eq!(resolve_versions(&store).available, ["v2", "v1"]);

    let store = DataStore::new(Collections {
      countries: vec![country("JPN")],
      indicator_values: vec![value("JPN", "I01", "")],
      basics: vec![BasicFact {
        country_id: "JPN".into(),
        basic_id: "A01".into(),
        version: "2024-01".into(),
        ..Default::default()
      }],
      ..Default::default()
    });
    let versions = resolve_versions(&store);
    assert!(versions.complete.is_empty());
    assert_eq!(versions.available, ["2024-01"]);
  }

  #[test]
  fn nothing_versioned_yields_no_default() {
    let store = DataStore::new(Collections::default());
    assert_eq!(resolve_versions(&store).default_version(), None);
  }
}
