//! Display classifications and the review-status filter.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::{Error, Result};

// ─── Tier ────────────────────────────────────────────────────────────────────

/// One of the three classifications that drive cell colouring.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  AsRefStr,
  EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Tier {
  Strong,
  Partial,
  None,
}

/// Whether a larger metric value is the better outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
  #[default]
  HigherBetter,
  /// E.g. an international rank where 1st is best.
  LowerBetter,
}

impl Direction {
  /// Map a position bucket (0 = lowest sorted value, 2 = highest) to a tier.
  pub fn tier_for_bucket(self, bucket: usize) -> Tier {
    let bucket = bucket.min(2);
    let bucket = match self {
      Self::HigherBetter => bucket,
      Self::LowerBetter => 2 - bucket,
    };
    match bucket {
      0 => Tier::None,
      1 => Tier::Partial,
      _ => Tier::Strong,
    }
  }
}

// ─── Cell class ──────────────────────────────────────────────────────────────

/// The visual class of a rendered cell: a tier, or one of two placeholders.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CellClass {
  Strong,
  Partial,
  None,
  /// No record exists for the requested key.
  NoData,
  /// A record exists but carries nothing classifiable.
  Unclassified,
}

impl From<Tier> for CellClass {
  fn from(t: Tier) -> Self {
    match t {
      Tier::Strong => Self::Strong,
      Tier::Partial => Self::Partial,
      Tier::None => Self::None,
    }
  }
}

impl From<Option<Tier>> for CellClass {
  fn from(t: Option<Tier>) -> Self { t.map_or(Self::Unclassified, Self::from) }
}

// ─── Review status ───────────────────────────────────────────────────────────

/// Publication-state filter applied to every versioned row.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Serialize,
  Deserialize,
  Display,
  AsRefStr,
  EnumString,
  EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ReviewStatus {
  #[default]
  Published,
  Reviewed,
  Draft,
}

impl ReviewStatus {
  /// Parse a status, defaulting to `published` when blank.
  pub fn parse(s: &str) -> Result<Self> {
    let s = s.trim();
    if s.is_empty() {
      return Ok(Self::default());
    }
    s.parse().map_err(|_| Error::UnknownStatus(s.to_string()))
  }

  /// The next status in the closed set, wrapping around.
  pub fn next(self) -> Self {
    let all: Vec<Self> = Self::iter().collect();
    let idx = all.iter().position(|s| *s == self).unwrap_or(0);
    all[(idx + 1) % all.len()]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bucket_mapping_inverts_for_lower_better() {
    assert_eq!(Direction::HigherBetter.tier_for_bucket(0), Tier::None);
    assert_eq!(Direction::HigherBetter.tier_for_bucket(2), Tier::Strong);
    assert_eq!(Direction::LowerBetter.tier_for_bucket(0), Tier::Strong);
    assert_eq!(Direction::LowerBetter.tier_for_bucket(1), Tier::Partial);
    assert_eq!(Direction::LowerBetter.tier_for_bucket(2), Tier::None);
  }

  #[test]
  fn status_parsing() {
    assert_eq!(ReviewStatus::parse("").unwrap(), ReviewStatus::Published);
    assert_eq!(ReviewStatus::parse("Draft").unwrap(), ReviewStatus::Draft);
    assert!(ReviewStatus::parse("archived").is_err());
    assert_eq!(ReviewStatus::Published.as_ref(), "published");
  }

  #[test]
  fn status_cycles_through_closed_set() {
    let s = ReviewStatus::Published;
    assert_eq!(s.next().next().next(), s);
  }

  #[test]
  fn cell_class_strings() {
    assert_eq!(CellClass::NoData.to_string(), "no_data");
    assert_eq!(CellClass::from(Some(Tier::Strong)), CellClass::Strong);
    assert_eq!(CellClass::from(None), CellClass::Unclassified);
  }
}
