//! The comparison page: chips, the indicator table and its meta line.

use idcmp_core::{indicator::display_sequence, record::IndicatorValue};
use idcmp_csv::{SplitValue, split_value};
use idcmp_store::DataStore;
use serde::Serialize;
use tracing::debug;

use super::{
  Cell, CountryLabel, Definition, Panel, Row, Table, panels,
};
use crate::{
  classify::classify_value,
  labels::{self, SourceStyle},
  state::{RowKind, ViewState},
};

/// One selectable country in the chip list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chip {
  pub label:    CountryLabel,
  pub selected: bool,
}

/// Summary line and data-quality notices above the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meta {
  pub version:   String,
  pub status:    String,
  pub countries: Vec<String>,
  pub note:      String,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub warnings:  Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonPage {
  pub meta:          Meta,
  pub chips:         Vec<Chip>,
  pub table:         Table,
  pub basic_summary: Panel<Table>,
  pub benchmarks:    Panel<Table>,
  pub it_infra:      Panel<Table>,
}

/// Every country with indicator data except the baseline, which is always
/// selected and never offered as a chip.
pub fn render_chips(store: &DataStore, state: &ViewState) -> Vec<Chip> {
  store
    .indicator_country_ids()
    .into_iter()
    .filter(|id| id != state.baseline())
    .map(|id| Chip {
      label:    CountryLabel::new(&store.country_or_placeholder(&id), false, false),
      selected: state.is_selected(&id),
    })
    .collect()
}

/// The column headers shared by every comparison table.
pub(super) fn column_labels(store: &DataStore, columns: &[String]) -> Vec<CountryLabel> {
  columns
    .iter()
    .map(|id| CountryLabel::new(&store.country_or_placeholder(id), false, true))
    .collect()
}

pub(super) fn indicator_cell(
  store: &DataStore,
  rec: Option<&IndicatorValue>,
  style: SourceStyle,
) -> Cell {
  let Some(rec) = rec else {
    return Cell::no_data();
  };
  let SplitValue { main, detail } = split_value(&rec.value);
  let class = classify_value(&main).into();
  Cell::record(class, main, store.translate(&detail), &rec.source_url, style)
    .with_tags(&rec.tags)
    .with_year(&rec.year)
}

/// The main indicator table for the current selection.
///
/// Rows are the displayed indicators in order; columns are the baseline then
/// the other selected countries. A missing record yields a no-data cell so
/// the table shape never depends on coverage.
pub fn render_comparison(store: &DataStore, state: &ViewState) -> Table {
  let columns = state.columns();
  let status = state.status();

  let rows: Vec<Row> = display_sequence(store.indicators())
    .into_iter()
    .map(|ind| {
      let id = ind.indicator_id.as_str();
      let cells = columns
        .iter()
        .map(|cid| {
          let rec = store.indicator_value(cid, id, state.version(), status.as_ref());
          indicator_cell(store, rec, SourceStyle::Table)
        })
        .collect();
      let definition = Definition {
        text:  ind.definition_ja.trim().to_string(),
        lines: ind.classification_lines(),
        notes: Vec::new(),
      };
      let expanded = state.expanded().is_expanded(RowKind::Indicator, id);
      Row::new(id, ind.label(), definition, expanded, cells)
    })
    .collect();

  debug!(
    columns = columns.len(),
    rows = rows.len(),
    version = state.version(),
    status = %status,
    "rendered comparison table"
  );
  Table {
    title: String::new(),
    heading: labels::INDICATOR_HEADING.to_string(),
    columns: column_labels(store, &columns),
    rows,
  }
}

/// The whole comparison page. Every panel is joined against the same
/// columns, version and status as the main table.
pub fn render_comparison_page(store: &DataStore, state: &ViewState) -> ComparisonPage {
  let columns = state.columns();
  let status = state.status().to_string();
  let mut warnings = Vec::new();
  if store.translations_missing() {
    warnings.push(labels::TRANSLATIONS_UNAVAILABLE.to_string());
  }

  ComparisonPage {
    meta: Meta {
      note: labels::comparison_meta(state.version(), &status, &columns),
      version: state.version().to_string(),
      status,
      countries: columns,
      warnings,
    },
    chips: render_chips(store, state),
    table: render_comparison(store, state),
    basic_summary: panels::render_basic_summary(store, state),
    benchmarks: panels::render_benchmarks(store, state),
    it_infra: panels::render_it_infra(store, state),
  }
}
