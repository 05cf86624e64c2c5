//! Side panels: basic-facts summary, benchmarks and IT infrastructure.
//!
//! Each panel reads its own optional source but uses the comparison's
//! columns, version and status. An empty source renders as unavailable.

use std::collections::BTreeMap;

use idcmp_core::{
  catalog::{BASIC_SUMMARY_IDS, BasicKind, IT_CODES, basic_spec},
  record::BasicFact,
  tier::{CellClass, Direction, Tier},
};
use idcmp_csv::{SplitValue, split_value};
use idcmp_store::DataStore;
use tracing::debug;

use super::{Cell, Definition, Panel, Row, Table, by_display_order, comparison::column_labels};
use crate::{
  classify::{basic_direction, basic_tiers, benchmark_direction, benchmark_tiers, it_tier},
  labels::{self, SourceStyle},
  state::{RowKind, ViewState},
};

fn tier_class(tiers: &BTreeMap<String, Tier>, country_id: &str) -> CellClass {
  CellClass::from(tiers.get(country_id).copied())
}

fn direction_note(direction: Direction) -> String {
  match direction {
    Direction::HigherBetter => labels::HIGHER_BETTER,
    Direction::LowerBetter => labels::LOWER_BETTER,
  }
  .to_string()
}

fn main_or_na(main: String) -> String {
  if main.is_empty() {
    labels::NOT_AVAILABLE.to_string()
  } else {
    main
  }
}

// ─── Basic facts ─────────────────────────────────────────────────────────────

/// Label, direction and definition block for one basic fact code.
pub(super) struct BasicRowSpec {
  pub label:      String,
  pub direction:  Direction,
  pub definition: Definition,
}

pub(super) fn basic_row_spec(store: &DataStore, basic_id: &str) -> BasicRowSpec {
  let spec = basic_spec(basic_id);
  let def = store.basic_def(basic_id);

  let label = def
    .map(|d| d.label_ja.trim())
    .filter(|l| !l.is_empty())
    .or_else(|| spec.map(|s| s.label))
    .unwrap_or(basic_id)
    .to_string();
  let direction = basic_direction(basic_id, def.map(|d| d.higher_better.as_str()));

  let mut definition = Definition {
    text: def.map(|d| d.definition_ja.trim().to_string()).unwrap_or_default(),
    ..Default::default()
  };
  if let Some(d) = def
    && !d.unit.trim().is_empty()
  {
    definition.notes.push(labels::unit_note(&d.unit));
  }
  if matches!(spec.map(|s| s.kind), Some(BasicKind::Ranked(_)) | None) {
    definition.notes.push(direction_note(direction));
  }

  BasicRowSpec {
    label,
    direction,
    definition,
  }
}

pub(super) fn basic_cell(
  rec: Option<&BasicFact>,
  class: CellClass,
  style: SourceStyle,
) -> Cell {
  let Some(rec) = rec else {
    return Cell::no_data();
  };
  let SplitValue { main, detail } = split_value(&rec.value);
  Cell::record(class, main_or_na(main), detail, &rec.source_url, style)
    .with_year(&rec.year)
}

/// The basic-facts summary above the comparison table.
pub fn render_basic_summary(store: &DataStore, state: &ViewState) -> Panel<Table> {
  if store.basics().is_empty() {
    return Panel::unavailable(labels::BASICS_UNAVAILABLE);
  }
  let columns = state.columns();
  let status = state.status();

  let rows = BASIC_SUMMARY_IDS
    .iter()
    .map(|&bid| {
      let spec = basic_row_spec(store, bid);
      let records: Vec<(&str, Option<&BasicFact>)> = columns
        .iter()
        .map(|cid| {
          (
            cid.as_str(),
            store.basic_fact(cid, bid, state.version(), status.as_ref()),
          )
        })
        .collect();
      let cohort: Vec<(&str, &str)> = records
        .iter()
        .filter_map(|(cid, rec)| rec.map(|r| (*cid, r.value.as_str())))
        .collect();
      let tiers = basic_tiers(bid, spec.direction, &cohort);

      let cells = records
        .iter()
        .map(|(cid, rec)| basic_cell(*rec, tier_class(&tiers, cid), SourceStyle::Table))
        .collect();
      let expanded = state.expanded().is_expanded(RowKind::Basic, bid);
      Row::new(bid, &spec.label, spec.definition, expanded, cells)
    })
    .collect::<Vec<_>>();

  debug!(rows = rows.len(), "rendered basic summary");
  Panel::Ready(Table {
    title: labels::BASIC_SUMMARY_TITLE.to_string(),
    heading: labels::ITEM_HEADING.to_string(),
    columns: column_labels(store, &columns),
    rows,
  })
}

// ─── Benchmarks ──────────────────────────────────────────────────────────────

/// International benchmark scores and ranks, ranked within the columns.
///
/// Rows follow the definitions file; without one, every benchmark code seen
/// in the values is listed by code.
pub fn render_benchmarks(store: &DataStore, state: &ViewState) -> Panel<Table> {
  if store.benchmarks().is_empty() {
    return Panel::unavailable(labels::BENCHMARKS_UNAVAILABLE);
  }
  let columns = state.columns();
  let status = state.status();

  let mut ids: Vec<String> = by_display_order(store.benchmark_defs(), |d| {
    (d.benchmark_id.as_str(), d.display_order.as_str())
  })
  .into_iter()
  .map(|d| d.benchmark_id.clone())
  .filter(|id| !id.is_empty())
  .collect();
  if ids.is_empty() {
    ids = store
      .benchmarks()
      .rows()
      .iter()
      .map(|r| r.benchmark_id.clone())
      .filter(|id| !id.is_empty())
      .collect::<std::collections::BTreeSet<_>>()
      .into_iter()
      .collect();
  }

  let rows = ids
    .iter()
    .map(|bid| {
      let def = store.benchmark_defs().iter().find(|d| d.benchmark_id == *bid);
      let records: Vec<_> = columns
        .iter()
        .map(|cid| {
          (
            cid.as_str(),
            store.benchmark_value(cid, bid, state.version(), status.as_ref()),
          )
        })
        .collect();
      let cohort: Vec<(&str, &str)> = records
        .iter()
        .filter_map(|(cid, rec)| rec.map(|r| (*cid, r.value.as_str())))
        .collect();
      let values: Vec<&str> = cohort.iter().map(|(_, v)| *v).collect();
      let direction = benchmark_direction(def, &values);
      let tiers = benchmark_tiers(&cohort, direction);

      let cells = records
        .iter()
        .map(|(cid, rec)| match rec {
          None => Cell::no_data(),
          Some(r) => {
            let SplitValue { main, detail } = split_value(&r.value);
            Cell::record(
              tier_class(&tiers, cid),
              main_or_na(main),
              detail,
              &r.source_url,
              SourceStyle::Table,
            )
            .with_year(&r.year)
          }
        })
        .collect();

      let mut definition = Definition::default();
      let mut label = bid.as_str();
      if let Some(d) = def {
        definition.text = d.metric_note_ja.trim().to_string();
        if !d.source_name.trim().is_empty() {
          definition.notes.push(labels::source_name_note(&d.source_name));
        }
        if !d.score_min.trim().is_empty() || !d.score_max.trim().is_empty() {
          definition
            .notes
            .push(labels::score_range_note(&d.score_min, &d.score_max));
        }
        label = [d.name_ja.trim(), d.name_en.trim()]
          .into_iter()
          .find(|s| !s.is_empty())
          .unwrap_or(label);
      }
      definition.notes.push(direction_note(direction));

      let expanded = state.expanded().is_expanded(RowKind::Benchmark, bid);
      Row::new(bid, label, definition, expanded, cells)
    })
    .collect::<Vec<_>>();

  debug!(rows = rows.len(), "rendered benchmarks");
  Panel::Ready(Table {
    title: labels::BENCHMARK_TITLE.to_string(),
    heading: labels::ITEM_HEADING.to_string(),
    columns: column_labels(store, &columns),
    rows,
  })
}

// ─── IT infrastructure ───────────────────────────────────────────────────────

/// IT posture per country, classified by the fixed category vocabulary.
pub fn render_it_infra(store: &DataStore, state: &ViewState) -> Panel<Table> {
  if store.it_values().is_empty() {
    return Panel::unavailable(labels::IT_UNAVAILABLE);
  }
  let columns = state.columns();
  let status = state.status();

  let defs = by_display_order(store.it_defs(), |d| {
    (d.it_id.as_str(), d.display_order.as_str())
  });
  let specs: Vec<(String, String, Definition)> = if defs.is_empty() {
    IT_CODES
      .iter()
      .map(|(id, label)| (id.to_string(), label.to_string(), Definition::default()))
      .collect()
  } else {
    defs
      .into_iter()
      .filter(|d| !d.it_id.is_empty())
      .map(|d| {
        let label = [d.name_ja.trim(), d.name_en.trim(), d.it_id.as_str()]
          .into_iter()
          .find(|s| !s.is_empty())
          .unwrap_or_default();
        let definition = Definition {
          text: d.definition_ja.trim().to_string(),
          ..Default::default()
        };
        (d.it_id.clone(), label.to_string(), definition)
      })
      .collect()
  };

  let rows = specs
    .into_iter()
    .map(|(id, label, definition)| {
      let cells = columns
        .iter()
        .map(|cid| match store.it_value(cid, &id, state.version(), status.as_ref()) {
          None => Cell::no_data(),
          Some(r) => {
            let SplitValue { main, detail } = split_value(&r.value);
            Cell::record(
              it_tier(&main).into(),
              main_or_na(main),
              store.translate(&detail),
              &r.source_url,
              SourceStyle::Table,
            )
            .with_year(&r.year)
          }
        })
        .collect();
      let expanded = state.expanded().is_expanded(RowKind::It, &id);
      Row::new(&id, &label, definition, expanded, cells)
    })
    .collect::<Vec<_>>();

  debug!(rows = rows.len(), "rendered IT infrastructure");
  Panel::Ready(Table {
    title: labels::IT_TITLE.to_string(),
    heading: labels::ITEM_HEADING.to_string(),
    columns: column_labels(store, &columns),
    rows,
  })
}
