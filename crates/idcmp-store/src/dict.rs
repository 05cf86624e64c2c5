//! [`Dictionary`]: the flat `en → ja` lookup for detail text.

use std::collections::{BTreeSet, HashMap};

use idcmp_core::record::TranslationEntry;

/// Translation table built from `translations_ja.csv`.
///
/// Only the detail part of a value is ever translated; the main value is
/// shown as written.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
  entries: HashMap<String, String>,
}

impl Dictionary {
  pub fn from_entries(entries: &[TranslationEntry]) -> Self {
    let entries = entries
      .iter()
      .filter(|e| !e.en.trim().is_empty())
      .map(|e| (e.en.trim().to_string(), e.ja.trim().to_string()))
      .collect();
    Self { entries }
  }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  pub fn contains(&self, text: &str) -> bool { self.entries.contains_key(text.trim()) }

  /// The Japanese text for `text`, or `text` itself when no entry exists.
  /// Blank input yields an empty string.
  pub fn translate(&self, text: &str) -> String {
    let key = text.trim();
    if key.is_empty() {
      return String::new();
    }
    self
      .entries
      .get(key)
      .cloned()
      .unwrap_or_else(|| key.to_string())
  }

  /// Distinct non-blank inputs that have no entry, sorted.
  pub fn missing<'a>(
    &self,
    texts: impl IntoIterator<Item = &'a str>,
  ) -> Vec<String> {
    texts
      .into_iter()
      .map(str::trim)
      .filter(|t| !t.is_empty() && !self.entries.contains_key(*t))
      .map(str::to_string)
      .collect::<BTreeSet<_>>()
      .into_iter()
      .collect()
  }
}
