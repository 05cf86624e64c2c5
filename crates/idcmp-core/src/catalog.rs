//! Built-in catalogs for basic facts and IT-infrastructure codes.
//!
//! The CSV definition files may relabel these codes, but the set of codes
//! and how each one is classified is fixed here.

use crate::tier::{Direction, Tier};

// ─── Basic facts ─────────────────────────────────────────────────────────────

/// How a basic fact is turned into a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicKind {
  /// Ranked within the selected cohort.
  Ranked(Direction),
  /// Absolute thresholds on a count of official languages.
  LanguageCount,
  /// Fixed label map: unitary / federal / confederal.
  Governance,
  /// Fixed label map: strong / medium / weak regional autonomy.
  Decentralization,
}

#[derive(Debug, Clone, Copy)]
pub struct BasicSpec {
  pub id:    &'static str,
  pub label: &'static str,
  pub kind:  BasicKind,
}

use BasicKind::*;
use Direction::*;

pub const BASICS: &[BasicSpec] = &[
  BasicSpec { id: "A01", label: "人口", kind: Ranked(HigherBetter) },
  BasicSpec { id: "A02", label: "都市化率", kind: Ranked(HigherBetter) },
  BasicSpec { id: "A03", label: "インターネット普及率", kind: Ranked(HigherBetter) },
  BasicSpec { id: "A04", label: "スマホ普及率（代理指標）", kind: Ranked(HigherBetter) },
  BasicSpec { id: "A05", label: "1人あたりGDP", kind: Ranked(HigherBetter) },
  BasicSpec { id: "A06", label: "主要言語数", kind: LanguageCount },
  BasicSpec { id: "B01", label: "統治構造", kind: Governance },
  BasicSpec { id: "B02", label: "地方分権の強さ", kind: Decentralization },
  BasicSpec { id: "B03", label: "政府への信頼度", kind: Ranked(HigherBetter) },
  BasicSpec { id: "C01", label: "プライバシー懸念", kind: Ranked(LowerBetter) },
  BasicSpec { id: "C02", label: "デジタルスキル", kind: Ranked(HigherBetter) },
  BasicSpec { id: "C03", label: "オンライン行政利用率", kind: Ranked(HigherBetter) },
];

/// Codes shown in the comparison page's basic-facts summary.
pub const BASIC_SUMMARY_IDS: &[&str] =
  &["A01", "A02", "A03", "A04", "A05", "A06", "B01", "B02"];

pub fn basic_spec(id: &str) -> Option<&'static BasicSpec> {
  BASICS.iter().find(|b| b.id == id)
}

// ─── IT infrastructure ───────────────────────────────────────────────────────

/// Fallback row order and labels when `it_defs.csv` is absent.
pub const IT_CODES: &[(&str, &str)] = &[
  ("IT01", "ガバメントクラウド"),
  ("IT02", "データ連携基盤"),
  ("IT03", "ID基盤のホスティング"),
];

const IT_STRONG: &[&str] = &["advanced", "established", "integrated"];
const IT_PARTIAL: &[&str] = &["intermediate", "partial", "hybrid"];
const IT_NONE: &[&str] = &["basic", "none", "absent", "on-premise"];

/// Map an IT posture value to its fixed category.
pub fn it_category(main: &str) -> Option<Tier> {
  let v = main.trim().to_lowercase();
  if IT_STRONG.contains(&v.as_str()) {
    Some(Tier::Strong)
  } else if IT_PARTIAL.contains(&v.as_str()) {
    Some(Tier::Partial)
  } else if IT_NONE.contains(&v.as_str()) {
    Some(Tier::None)
  } else {
    None
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn catalog_has_twelve_unique_codes() {
    let mut ids: Vec<_> = BASICS.iter().map(|b| b.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 12);
    assert!(BASIC_SUMMARY_IDS.iter().all(|id| basic_spec(id).is_some()));
  }

  #[test]
  fn it_categories() {
    assert_eq!(it_category("Advanced"), Some(Tier::Strong));
    assert_eq!(it_category(" hybrid "), Some(Tier::Partial));
    assert_eq!(it_category("on-premise"), Some(Tier::None));
    assert_eq!(it_category("unknown"), None);
  }
}
