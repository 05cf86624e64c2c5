//! Declarative render trees.
//!
//! Every renderer reads the immutable [`DataStore`] plus a [`ViewState`] and
//! returns a fresh `Serialize` tree; nothing is patched in place. A
//! presentation layer (terminal UI, JSON, text) maps the tree to output.
//!
//! [`DataStore`]: idcmp_store::DataStore
//! [`ViewState`]: crate::ViewState

mod comparison;
mod country;
mod map;
mod panels;

use idcmp_core::{
  country::{Country, FlagImage, FlagSize, country_link},
  indicator::ClassificationLine,
  tier::CellClass,
};
use idcmp_csv::parse_source_urls;
use serde::Serialize;

pub use comparison::{
  Chip, ComparisonPage, Meta, render_chips, render_comparison,
  render_comparison_page,
};
pub use country::{
  CountryHeader, CountryPage, Item, TimelineEntry, render_country_page,
  subject_from_query,
};
pub use map::{MapPin, render_map};
pub use panels::{render_basic_summary, render_benchmarks, render_it_infra};

use crate::labels::{self, SourceStyle};

// ─── Shared nodes ────────────────────────────────────────────────────────────

/// A country heading: flag, display name and optional detail-page link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryLabel {
  pub id:    String,
  pub name:  String,
  /// Visible text; `name (ID)` when the code is shown.
  pub text:  String,
  /// Hover text, always `name (ID)`.
  pub title: String,
  pub flag:  Option<FlagImage>,
  pub link:  Option<String>,
}

impl CountryLabel {
  pub fn new(country: &Country, show_code: bool, linked: bool) -> Self {
    let id = country.country_id.clone();
    let name = country.display_name().to_string();
    let title = format!("{name} ({id})");
    Self {
      text: if show_code { title.clone() } else { name.clone() },
      flag: country.flag_image(FlagSize::SMALL),
      link: linked.then(|| country_link(&id)),
      id,
      name,
      title,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLink {
  pub label: String,
  pub url:   String,
}

/// Number each URL of a source cell.
pub fn source_links(raw: &str, style: SourceStyle) -> Vec<SourceLink> {
  parse_source_urls(raw)
    .into_iter()
    .enumerate()
    .map(|(i, url)| SourceLink {
      label: style.label(i + 1),
      url,
    })
    .collect()
}

/// One table cell or list item body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
  pub class:       CellClass,
  pub main:        String,
  #[serde(skip_serializing_if = "String::is_empty")]
  pub detail:      String,
  #[serde(skip_serializing_if = "String::is_empty")]
  pub tags:        String,
  #[serde(skip_serializing_if = "String::is_empty")]
  pub year:        String,
  pub sources:     Vec<SourceLink>,
  /// `出典なし` when a record exists but lists no sources.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub source_note: Option<String>,
}

impl Cell {
  /// The placeholder for a missing record.
  pub fn no_data() -> Self {
    Self {
      class:       CellClass::NoData,
      main:        labels::NO_DATA_MAIN.to_string(),
      detail:      labels::NO_DATA_DETAIL.to_string(),
      tags:        String::new(),
      year:        String::new(),
      sources:     Vec::new(),
      source_note: None,
    }
  }

  /// A cell for an existing record; attaches its numbered sources.
  fn record(
    class: CellClass,
    main: String,
    detail: String,
    source_url: &str,
    style: SourceStyle,
  ) -> Self {
    let sources = source_links(source_url, style);
    let source_note = sources
      .is_empty()
      .then(|| labels::NO_SOURCE.to_string());
    Self {
      class,
      main,
      detail,
      tags: String::new(),
      year: String::new(),
      sources,
      source_note,
    }
  }

  fn with_tags(mut self, tags: &str) -> Self {
    self.tags = tags.trim().to_string();
    self
  }

  fn with_year(mut self, year: &str) -> Self {
    self.year = year.trim().to_string();
    self
  }
}

/// Explanatory block shown under an expanded row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Definition {
  #[serde(skip_serializing_if = "String::is_empty")]
  pub text:  String,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub lines: Vec<ClassificationLine>,
  /// Units, score range, source name, direction.
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub notes: Vec<String>,
}

impl Definition {
  pub fn is_empty(&self) -> bool {
    self.text.is_empty() && self.lines.is_empty() && self.notes.is_empty()
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
  pub id:             String,
  pub label:          String,
  pub has_definition: bool,
  /// Present only while the row is expanded.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub definition:     Option<Definition>,
  pub cells:          Vec<Cell>,
}

impl Row {
  fn new(
    id: &str,
    label: &str,
    definition: Definition,
    expanded: bool,
    cells: Vec<Cell>,
  ) -> Self {
    let has_definition = !definition.is_empty();
    Self {
      id: id.to_string(),
      label: label.to_string(),
      has_definition,
      definition: (has_definition && expanded).then_some(definition),
      cells,
    }
  }
}

/// A country-column table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
  #[serde(skip_serializing_if = "String::is_empty")]
  pub title:   String,
  /// Header of the row-label column.
  pub heading: String,
  pub columns: Vec<CountryLabel>,
  pub rows:    Vec<Row>,
}

/// A side panel whose optional source may be absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "content", rename_all = "snake_case")]
pub enum Panel<T> {
  Ready(T),
  Unavailable(String),
}

impl<T> Panel<T> {
  pub fn unavailable(message: &str) -> Self { Self::Unavailable(message.to_string()) }

  pub fn ready(&self) -> Option<&T> {
    match self {
      Self::Ready(t) => Some(t),
      Self::Unavailable(_) => None,
    }
  }
}

/// Order by a numeric `display_order` cell, then by code.
fn by_display_order<'a, T>(
  items: &'a [T],
  key: impl Fn(&T) -> (&str, &str),
) -> Vec<&'a T> {
  let mut out: Vec<&T> = items.iter().collect();
  out.sort_by(|a, b| {
    let (a_id, a_order) = key(a);
    let (b_id, b_order) = key(b);
    idcmp_core::record::display_order(a_order)
      .total_cmp(&idcmp_core::record::display_order(b_order))
      .then_with(|| a_id.cmp(b_id))
  });
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sources_are_numbered_or_noted() {
    let cell = Cell::record(
      CellClass::Strong,
      "Yes".into(),
      String::new(),
      r#"["http://a","http://b"]"#,
      SourceStyle::Table,
    );
    assert_eq!(cell.sources.len(), 2);
    assert_eq!(cell.sources[1].label, "出典2");
    assert_eq!(cell.source_note, None);

    let bare = Cell::record(
      CellClass::None,
      "No".into(),
      String::new(),
      "",
      SourceStyle::Official,
    );
    assert_eq!(bare.source_note.as_deref(), Some("出典なし"));
  }

  #[test]
  fn country_label_text() {
    let c = Country {
      country_id: "EST".into(),
      name_ja: "エストニア".into(),
      ..Default::default()
    };
    let label = CountryLabel::new(&c, true, true);
    assert_eq!(label.text, "エストニア (EST)");
    assert_eq!(label.link.as_deref(), Some("./country.html?id=EST"));
    assert_eq!(label.flag.unwrap().src, "https://flagcdn.com/20x15/ee.png");
  }

  #[test]
  fn panel_serializes_with_state_tag() {
    let p: Panel<Vec<u8>> = Panel::unavailable("none");
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["state"], "unavailable");
    assert_eq!(json["content"], "none");
  }
}
