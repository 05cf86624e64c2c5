//! [`Record`]: one CSV row keyed by header name.

use serde::de::{DeserializeOwned, value::MapDeserializer};

/// A parsed row: one `(header, trimmed value)` entry per distinct header, in
/// first-appearance order. A repeated header keeps its last value. Absent
/// columns read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
  fields: Vec<(String, String)>,
}

impl Record {
  /// The value under `header`, or `""` when the column does not exist.
  pub fn get(&self, header: &str) -> &str {
    self
      .fields
      .iter()
      .find(|(h, _)| h == header)
      .map(|(_, v)| v.as_str())
      .unwrap_or_default()
  }

  pub fn len(&self) -> usize { self.fields.len() }

  pub fn is_empty(&self) -> bool { self.fields.is_empty() }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.fields.iter().map(|(h, v)| (h.as_str(), v.as_str()))
  }

  /// Decode into a struct whose fields are named after the headers.
  ///
  /// Targets should use `#[serde(default)]` so absent columns become empty
  /// strings; unknown columns are ignored unless the target denies them.
  pub fn decode<T: DeserializeOwned>(
    &self,
  ) -> Result<T, serde::de::value::Error> {
    let de = MapDeserializer::<_, serde::de::value::Error>::new(self.iter());
    T::deserialize(de)
  }
}

impl FromIterator<(String, String)> for Record {
  fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
    let mut fields: Vec<(String, String)> = Vec::new();
    for (header, value) in iter {
      match fields.iter_mut().find(|(h, _)| *h == header) {
        Some(slot) => slot.1 = value,
        None => fields.push((header, value)),
      }
    }
    Self { fields }
  }
}
