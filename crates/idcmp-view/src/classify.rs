//! The classification engine: fixed vocabularies and cohort ranking.

use std::collections::BTreeMap;

use idcmp_core::{
  catalog::{BasicKind, basic_spec, it_category},
  record::BenchmarkDefinition,
  tier::{Direction, Tier},
};
use idcmp_csv::{coerce_metric, coerce_number, parse_flag, split_value};

// ─── Fixed vocabularies ──────────────────────────────────────────────────────

const STRONG: &[&str] = &[
  "yes",
  "nationwide",
  "national",
  "shared-platform",
  "adequacy",
  "common",
];
const PARTIAL: &[&str] = &[
  "partial",
  "local",
  "restricted",
  "multiple",
  "procurement",
  "migration",
  "equivalent",
];
const NONE: &[&str] = &["no", "none", "planned", "developing", "pilot", "paused"];

/// Classify an indicator cell's main value. Unknown values are `Partial`.
pub fn classify_value(main: &str) -> Tier {
  let v = main.trim().to_lowercase();
  let v = v.as_str();
  if STRONG.contains(&v) {
    Tier::Strong
  } else if PARTIAL.contains(&v) {
    Tier::Partial
  } else if NONE.contains(&v) {
    Tier::None
  } else {
    Tier::Partial
  }
}

/// IT posture categories are a closed set; anything else is unclassified.
pub fn it_tier(main: &str) -> Option<Tier> { it_category(main) }

// ─── Cohort ranking ──────────────────────────────────────────────────────────

/// Rank `(country_id, value)` pairs within the cohort and assign tiers.
///
/// Entries are sorted ascending by value, ties broken by country code, and
/// split into three equal-position buckets. One entry is `Partial`; two
/// entries take the two extreme tiers.
pub fn rank_cohort<S: AsRef<str>>(
  entries: &[(S, f64)],
  direction: Direction,
) -> BTreeMap<String, Tier> {
  let mut sorted: Vec<(&str, f64)> = entries
    .iter()
    .map(|(id, v)| (id.as_ref(), *v))
    .filter(|(_, v)| v.is_finite())
    .collect();
  sorted.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));

  let n = sorted.len();
  sorted
    .into_iter()
    .enumerate()
    .map(|(i, (id, _))| {
      let tier = match n {
        1 => Tier::Partial,
        2 => direction.tier_for_bucket(i * 2),
        _ => direction.tier_for_bucket(i * 3 / n),
      };
      (id.to_string(), tier)
    })
    .collect()
}

// ─── Basic facts ─────────────────────────────────────────────────────────────

/// Count of major languages: 1 → none, 2 → partial, 3+ → strong.
pub fn language_count_tier(main: &str) -> Option<Tier> {
  let n = coerce_number(main)?;
  if n < 1.0 {
    return None;
  }
  Some(match n.round() as i64 {
    1 => Tier::None,
    2 => Tier::Partial,
    _ => Tier::Strong,
  })
}

/// Unitary → strong, federal → partial, confederal → none.
pub fn governance_tier(main: &str) -> Option<Tier> {
  let v = main.trim().to_lowercase();
  if v.is_empty() {
    None
  } else if v.contains("confedera") || v.contains("国家連合") {
    Some(Tier::None)
  } else if v.contains("unitary") || v.contains("単一") {
    Some(Tier::Strong)
  } else if v.contains("federal") || v.contains("連邦") {
    Some(Tier::Partial)
  } else {
    None
  }
}

/// Regional autonomy strength: strong / medium / weak.
pub fn decentralization_tier(main: &str) -> Option<Tier> {
  let v = main.trim().to_lowercase();
  let starts = |words: &[&str]| words.iter().any(|w| v.starts_with(w));
  if v.is_empty() {
    None
  } else if starts(&["strong", "high", "強"]) {
    Some(Tier::Strong)
  } else if starts(&["medium", "moderate", "mid", "中"]) {
    Some(Tier::Partial)
  } else if starts(&["weak", "low", "弱"]) {
    Some(Tier::None)
  } else {
    None
  }
}

fn unmapped(_: &str) -> Option<Tier> { None }

/// Classify one basic fact across the cohort of `(country_id, raw value)`.
///
/// Ranked codes use `direction`; the language count uses absolute
/// thresholds; governance and decentralisation use a fixed label map that
/// wins over any numeric ranking. Countries absent from the result are
/// unclassified.
pub fn basic_tiers<S: AsRef<str>>(
  basic_id: &str,
  direction: Direction,
  cohort: &[(S, S)],
) -> BTreeMap<String, Tier> {
  let mains: Vec<(&str, String)> = cohort
    .iter()
    .map(|(id, raw)| (id.as_ref(), split_value(raw.as_ref()).main))
    .collect();

  let fixed: fn(&str) -> Option<Tier> =
    match basic_spec(basic_id).map(|s| s.kind) {
      Some(BasicKind::LanguageCount) => {
        return mains
          .iter()
          .filter_map(|(id, main)| {
            language_count_tier(main).map(|t| (id.to_string(), t))
          })
          .collect();
      }
      Some(BasicKind::Governance) => governance_tier,
      Some(BasicKind::Decentralization) => decentralization_tier,
      Some(BasicKind::Ranked(_)) | None => unmapped,
    };

  let numeric: Vec<(&str, f64)> = mains
    .iter()
    .filter_map(|(id, main)| coerce_number(main).map(|n| (*id, n)))
    .collect();
  let mut tiers = rank_cohort(&numeric, direction);
  for (id, main) in &mains {
    if let Some(t) = fixed(main) {
      tiers.insert(id.to_string(), t);
    }
  }
  tiers
}

/// Direction of a basic fact: the definition file's flag, then the catalog.
pub fn basic_direction(basic_id: &str, higher_better: Option<&str>) -> Direction {
  match higher_better.and_then(parse_flag) {
    Some(true) => Direction::HigherBetter,
    Some(false) => Direction::LowerBetter,
    None => match basic_spec(basic_id).map(|s| s.kind) {
      Some(BasicKind::Ranked(d)) => d,
      _ => Direction::HigherBetter,
    },
  }
}

// ─── Benchmarks ──────────────────────────────────────────────────────────────

/// Explicit `higher_better`, else lower-is-better when any value is a rank.
pub fn benchmark_direction<S: AsRef<str>>(
  def: Option<&BenchmarkDefinition>,
  values: &[S],
) -> Direction {
  match def.and_then(|d| parse_flag(&d.higher_better)) {
    Some(true) => Direction::HigherBetter,
    Some(false) => Direction::LowerBetter,
    None if values
      .iter()
      .filter_map(|v| coerce_metric(&split_value(v.as_ref()).main))
      .any(|m| m.is_rank) =>
    {
      Direction::LowerBetter
    }
    None => Direction::HigherBetter,
  }
}

/// Rank benchmark values (scores or `Rank N / M` ordinals) in the cohort.
pub fn benchmark_tiers<S: AsRef<str>>(
  cohort: &[(S, S)],
  direction: Direction,
) -> BTreeMap<String, Tier> {
  let metrics: Vec<(&str, f64)> = cohort
    .iter()
    .filter_map(|(id, raw)| {
      coerce_metric(&split_value(raw.as_ref()).main).map(|m| (id.as_ref(), m.value))
    })
    .collect();
  rank_cohort(&metrics, direction)
}
