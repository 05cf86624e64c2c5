//! The single-country page: header, basic facts, indicators and timeline.

use idcmp_core::{
  catalog::BASICS,
  indicator::display_sequence,
  normalize_country_id,
  record::EventRecord,
};
use idcmp_store::DataStore;
use serde::Serialize;
use tracing::debug;

use super::{
  Cell, CountryLabel, Definition, Panel, SourceLink,
  comparison::indicator_cell,
  panels::{basic_cell, basic_row_spec},
};
use crate::{
  classify::basic_tiers,
  labels::{self, SourceStyle},
  state::{RowKind, ViewState},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryHeader {
  pub label:    CountryLabel,
  pub subtitle: String,
  pub meta:     String,
}

/// A labelled value in a single-country list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
  pub id:             String,
  pub label:          String,
  pub has_definition: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub definition:     Option<Definition>,
  pub cell:           Cell,
}

impl Item {
  fn new(id: &str, label: &str, definition: Definition, expanded: bool, cell: Cell) -> Self {
    let has_definition = !definition.is_empty();
    Self {
      id: id.to_string(),
      label: label.to_string(),
      has_definition,
      definition: (has_definition && expanded).then_some(definition),
      cell,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
  pub date:        String,
  pub title:       String,
  /// `type / severity`.
  pub meta:        String,
  pub description: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub source:      Option<SourceLink>,
}

impl From<&EventRecord> for TimelineEntry {
  fn from(e: &EventRecord) -> Self {
    let url = e.source_url.trim();
    Self {
      date:        e.event_date.clone(),
      title:       e.title.trim().to_string(),
      meta:        format!("{} / {}", e.event_type.trim(), e.severity.trim())
        .trim()
        .to_string(),
      description: e.description.trim().to_string(),
      source:      (!url.is_empty()).then(|| SourceLink {
        label: labels::EVENT_SOURCE.to_string(),
        url:   url.to_string(),
      }),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryPage {
  pub header:     CountryHeader,
  pub basics:     Panel<Vec<Item>>,
  pub indicators: Vec<Item>,
  pub timeline:   Panel<Vec<TimelineEntry>>,
}

/// The page subject from a query string such as `?id=est&x=1`; the
/// baseline when `id` is absent or blank. Values are percent-decoded.
pub fn subject_from_query(query: &str, baseline: &str) -> String {
  url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
    .find(|(k, _)| k == "id")
    .map(|(_, v)| normalize_country_id(&v))
    .filter(|id| !id.is_empty())
    .unwrap_or_else(|| normalize_country_id(baseline))
}

/// Basic facts for one country. Ranked codes are placed against every
/// country reporting that code in the same version and status.
fn basic_items(store: &DataStore, state: &ViewState, country_id: &str) -> Panel<Vec<Item>> {
  if store.basics().is_empty() {
    return Panel::unavailable(labels::BASICS_UNAVAILABLE);
  }
  let status = state.status();
  let items = BASICS
    .iter()
    .map(|b| {
      let spec = basic_row_spec(store, b.id);
      let cohort: Vec<(&str, &str)> = store
        .basics()
        .current()
        .filter(|r| {
          r.basic_id == b.id
            && r.version == state.version()
            && r.review_status == status.as_ref()
        })
        .map(|r| (r.country_id.as_str(), r.value.as_str()))
        .collect();
      let tiers = basic_tiers(b.id, spec.direction, &cohort);
      let rec = store.basic_fact(country_id, b.id, state.version(), status.as_ref());
      let cell = basic_cell(rec, tiers.get(country_id).copied().into(), SourceStyle::Table);
      let expanded = state.expanded().is_expanded(RowKind::Basic, b.id);
      Item::new(b.id, &spec.label, spec.definition, expanded, cell)
    })
    .collect();
  Panel::Ready(items)
}

/// Render the detail page for `country_id` (any case).
pub fn render_country_page(
  store: &DataStore,
  state: &ViewState,
  country_id: &str,
) -> CountryPage {
  let id = normalize_country_id(country_id);
  let status = state.status();
  let country = store.country_or_placeholder(&id);

  let mut present = 0;
  let indicators: Vec<Item> = display_sequence(store.indicators())
    .into_iter()
    .map(|ind| {
      let rec = store.indicator_value(&id, &ind.indicator_id, state.version(), status.as_ref());
      present += usize::from(rec.is_some());
      let definition = Definition {
        text:  ind.definition_ja.trim().to_string(),
        lines: ind.classification_lines(),
        notes: Vec::new(),
      };
      let expanded = state
        .expanded()
        .is_expanded(RowKind::Indicator, &ind.indicator_id);
      Item::new(
        &ind.indicator_id,
        ind.label(),
        definition,
        expanded,
        indicator_cell(store, rec, SourceStyle::Official),
      )
    })
    .collect();

  let events = store.events_for(&id);
  let timeline = if events.is_empty() {
    Panel::unavailable(labels::TIMELINE_UNAVAILABLE)
  } else {
    Panel::Ready(events.into_iter().map(TimelineEntry::from).collect())
  };

  debug!(country = %id, indicators = indicators.len(), present, "rendered country page");
  CountryPage {
    header: CountryHeader {
      label:    CountryLabel::new(&country, true, false),
      subtitle: labels::country_subtitle(state.version(), status.as_ref()),
      meta:     labels::country_meta(&id, present),
    },
    basics: basic_items(store, state, &id),
    indicators,
    timeline,
  }
}
