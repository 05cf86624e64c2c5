//! Indicators: the comparable policy dimensions forming table rows.

use serde::{Deserialize, Serialize};

use crate::{normalize_id, record::display_order};

/// Sort key used when `display_order` is blank.
pub const DEFAULT_DISPLAY_ORDER: f64 = 999.0;

/// Legacy indicator code that is never displayed.
pub const EXCLUDED_INDICATOR: &str = "I11";

/// One row of `indicators.csv`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Indicator {
  pub indicator_id:      String,
  pub name_en:           String,
  pub name_ja:           String,
  pub display_order:     String,
  pub definition_ja:     String,
  /// Newline-delimited `label:description` lines.
  pub classification_ja: String,
}

/// One `label: description` line of an indicator's classification guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationLine {
  pub label:       String,
  pub description: String,
}

impl Indicator {
  pub fn normalize(&mut self) { self.indicator_id = normalize_id(&self.indicator_id); }

  pub fn order(&self) -> f64 { display_order(&self.display_order) }

  /// Row label: Japanese name, then English, then the code.
  pub fn label(&self) -> &str {
    [&self.name_ja, &self.name_en, &self.indicator_id]
      .into_iter()
      .map(|s| s.trim())
      .find(|s| !s.is_empty())
      .unwrap_or_default()
  }

  pub fn is_displayed(&self) -> bool { self.indicator_id != EXCLUDED_INDICATOR }

  pub fn has_definition(&self) -> bool {
    !self.definition_ja.trim().is_empty()
      || !self.classification_ja.trim().is_empty()
  }

  /// Split `classification_ja` into lines. A line without a colon (ASCII or
  /// full-width) becomes a label with an empty description.
  pub fn classification_lines(&self) -> Vec<ClassificationLine> {
    self
      .classification_ja
      .lines()
      .map(str::trim)
      .filter(|l| !l.is_empty())
      .map(|line| {
        match line.char_indices().find(|(_, c)| matches!(c, ':' | '：')) {
          Some((pos, c)) => ClassificationLine {
            label:       line[..pos].trim().to_string(),
            description: line[pos + c.len_utf8()..].trim().to_string(),
          },
          None => ClassificationLine {
            label:       line.to_string(),
            description: String::new(),
          },
        }
      })
      .collect()
  }
}

/// Displayed indicators ordered by `display_order`, then code.
pub fn display_sequence(indicators: &[Indicator]) -> Vec<&Indicator> {
  let mut out: Vec<&Indicator> =
    indicators.iter().filter(|i| i.is_displayed()).collect();
  out.sort_by(|a, b| {
    a.order()
      .total_cmp(&b.order())
      .then_with(|| a.indicator_id.cmp(&b.indicator_id))
  });
  out
}
