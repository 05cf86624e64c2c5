//! End-to-end rendering tests over small in-memory stores.

use idcmp_core::{
  country::Country,
  indicator::Indicator,
  record::{
    BasicDefinition, BasicFact, BenchmarkDefinition, BenchmarkValue, EventRecord, IndicatorValue,
    ItValue, TranslationEntry,
  },
  tier::{CellClass, ReviewStatus},
};
use idcmp_store::{Collections, DataStore};

use crate::{
  Panel, RowKind, ViewState, render_comparison, render_comparison_page,
  render_country_page, resolve_versions,
};

fn country(id: &str, name_ja: &str) -> Country {
  Country {
    country_id: id.into(),
    name_ja: name_ja.into(),
    ..Default::default()
  }
}

fn indicator_value(c: &str, i: &str, value: &str) -> IndicatorValue {
  IndicatorValue {
    country_id: c.into(),
    indicator_id: i.into(),
    version: "v1".into(),
    review_status: "published".into(),
    value: value.into(),
    ..Default::default()
  }
}

fn basic(c: &str, b: &str, value: &str) -> BasicFact {
  BasicFact {
    country_id: c.into(),
    basic_id: b.into(),
    version: "v1".into(),
    review_status: "published".into(),
    value: value.into(),
    ..Default::default()
  }
}

/// JPN and EST, one indicator, a JPN row only.
fn scenario() -> DataStore {
  DataStore::new(Collections {
    countries: vec![country("JPN", "日本"), country("EST", "エストニア")],
    indicators: vec![Indicator {
      indicator_id: "I01".into(),
      name_en: "A".into(),
      definition_ja: "国民ID制度の有無".into(),
      ..Default::default()
    }],
    indicator_values: vec![indicator_value("JPN", "I01", "Yes \n detail text")],
    translations: vec![TranslationEntry {
      en: "detail text".into(),
      ja: "詳細テキスト".into(),
    }],
    ..Default::default()
  })
}

fn state(version: &str, countries: &[&str]) -> ViewState {
  let mut state = ViewState::new("JPN", countries.iter().copied());
  state.set_version(version);
  state
}

// ─── Comparison ──────────────────────────────────────────────────────────────

#[test]
fn end_to_end_comparison_with_a_hole() {
  let store = scenario();
  let table = render_comparison(&store, &state("v1", &["EST"]));

  let cols: Vec<_> = table.columns.iter().map(|c| c.id.as_str()).collect();
  assert_eq!(cols, ["JPN", "EST"]);
  assert_eq!(table.rows.len(), 1);

  let row = &table.rows[0];
  assert_eq!(row.label, "A");
  assert_eq!(row.cells[0].class, CellClass::Strong);
  assert_eq!(row.cells[0].main, "Yes");
  assert_eq!(row.cells[0].detail, "詳細テキスト");
  assert_eq!(row.cells[0].source_note.as_deref(), Some("出典なし"));

  assert_eq!(row.cells[1].class, CellClass::NoData);
  assert_eq!(row.cells[1].main, "—");
  assert_eq!(row.cells[1].detail, "データなし");
}

#[test]
fn baseline_leads_regardless_of_selection_order() {
  let mut collections = Collections {
    countries: ["AUT", "JPN", "ZAF"].map(|c| country(c, "")).into(),
    indicators: vec![Indicator {
      indicator_id: "I01".into(),
      ..Default::default()
    }],
    ..Default::default()
  };
  collections.indicator_values = vec![indicator_value("AUT", "I01", "No")];
  let store = DataStore::new(collections);

  let table = render_comparison(&store, &state("v1", &["ZAF", "AUT"]));
  let cols: Vec<_> = table.columns.iter().map(|c| c.id.as_str()).collect();
  assert_eq!(cols, ["JPN", "AUT", "ZAF"]);
  assert_eq!(table.rows[0].cells[0].class, CellClass::NoData);
  assert_eq!(table.rows[0].cells[1].class, CellClass::None);
}

#[test]
fn status_filter_and_legacy_indicator() {
  let mut collections = Collections {
    countries: vec![country("JPN", "日本")],
    indicators: vec![
      Indicator {
        indicator_id: "I11".into(),
        display_order: "1".into(),
        ..Default::default()
      },
      Indicator {
        indicator_id: "I02".into(),
        display_order: "2".into(),
        ..Default::default()
      },
      Indicator {
        indicator_id: "I01".into(),
        display_order: "2".into(),
        ..Default::default()
      },
    ],
    ..Default::default()
  };
  let mut draft = indicator_value("JPN", "I01", "Pilot");
  draft.review_status = "draft".into();
  collections.indicator_values = vec![indicator_value("JPN", "I01", "Yes"), draft];
  let store = DataStore::new(collections);

  let mut view = state("v1", &[]);
  let ids: Vec<_> = render_comparison(&store, &view)
    .rows
    .iter()
    .map(|r| r.id.clone())
    .collect();
  assert_eq!(ids, ["I01", "I02"]);

  view.set_status(ReviewStatus::Draft);
  let table = render_comparison(&store, &view);
  assert_eq!(table.rows[0].cells[0].main, "Pilot");
  assert_eq!(table.rows[0].cells[0].class, CellClass::None);
}

#[test]
fn definition_appears_only_when_expanded() {
  let store = scenario();
  let mut view = state("v1", &[]);
  let table = render_comparison(&store, &view);
  assert!(table.rows[0].has_definition);
  assert!(table.rows[0].definition.is_none());

  view.toggle_definition(RowKind::Indicator, "I01");
  let table = render_comparison(&store, &view);
  let def = table.rows[0].definition.as_ref().unwrap();
  assert_eq!(def.text, "国民ID制度の有無");
}

#[test]
fn render_is_idempotent() {
  let store = scenario();
  let view = state("v1", &["EST"]);
  assert_eq!(
    render_comparison_page(&store, &view),
    render_comparison_page(&store, &view)
  );
}

// ─── Side panels ─────────────────────────────────────────────────────────────

#[test]
fn empty_optional_sources_render_unavailable_panels() {
  let store = DataStore::new(Collections {
    countries: vec![country("JPN", "日本")],
    ..Default::default()
  });
  let page = render_comparison_page(&store, &state("v1", &[]));
  assert!(matches!(page.basic_summary, Panel::Unavailable(_)));
  assert!(matches!(page.benchmarks, Panel::Unavailable(_)));
  assert!(matches!(page.it_infra, Panel::Unavailable(_)));
  assert_eq!(page.meta.warnings.len(), 1);
  assert!(page.chips.is_empty());
}

#[test]
fn panels_share_the_comparison_columns() {
  let mut collections = Collections {
    countries: ["JPN", "EST", "KOR"].map(|c| country(c, "")).into(),
    indicators: vec![Indicator {
      indicator_id: "I01".into(),
      ..Default::default()
    }],
    indicator_values: ["JPN", "EST", "KOR"]
      .map(|c| indicator_value(c, "I01", "Yes"))
      .into(),
    basics: vec![
      basic("JPN", "A03", "82.9%"),
      basic("EST", "A03", "91%"),
      basic("KOR", "A03", "97%"),
      basic("JPN", "B01", "Unitary state"),
    ],
    ..Default::default()
  };
  collections.benchmark_defs = vec![BenchmarkDefinition {
    benchmark_id: "EGDI".into(),
    name_ja: "電子政府ランキング".into(),
    ..Default::default()
  }];
  collections.benchmarks = [("JPN", "Rank 13 / 193"), ("EST", "Rank 2 / 193")]
    .map(|(c, v)| BenchmarkValue {
      country_id: c.into(),
      benchmark_id: "EGDI".into(),
      version: "v1".into(),
      review_status: "published".into(),
      value: v.into(),
      ..Default::default()
    })
    .into();
  collections.it_values = vec![ItValue {
    country_id: "EST".into(),
    it_id: "IT01".into(),
    version: "v1".into(),
    review_status: "published".into(),
    value: "Advanced".into(),
    ..Default::default()
  }];
  let store = DataStore::new(collections);
  let page = render_comparison_page(&store, &state("v1", &["EST"]));

  assert_eq!(page.meta.countries, ["JPN", "EST"]);
  assert_eq!(page.chips.len(), 2);
  assert!(page.chips.iter().any(|c| c.label.id == "EST" && c.selected));

  let basics = page.basic_summary.ready().unwrap();
  assert_eq!(basics.columns.len(), 2);
  let a03 = basics.rows.iter().find(|r| r.id == "A03").unwrap();
  assert_eq!(a03.cells[0].class, CellClass::None);
  assert_eq!(a03.cells[1].class, CellClass::Strong);
  let b01 = basics.rows.iter().find(|r| r.id == "B01").unwrap();
  assert_eq!(b01.cells[0].class, CellClass::Strong);
  assert_eq!(b01.cells[1].class, CellClass::NoData);

  let bench = page.benchmarks.ready().unwrap();
  assert_eq!(bench.rows[0].label, "電子政府ランキング");
  assert_eq!(bench.rows[0].cells[0].class, CellClass::None);
  assert_eq!(bench.rows[0].cells[1].class, CellClass::Strong);

  let it = page.it_infra.ready().unwrap();
  assert_eq!(it.rows.len(), 3);
  assert_eq!(it.rows[0].cells[0].class, CellClass::NoData);
  assert_eq!(it.rows[0].cells[1].class, CellClass::Strong);
}

#[test]
fn basic_definitions_override_catalog_label_and_direction() {
  let store = DataStore::new(Collections {
    countries: ["JPN", "EST"].map(|c| country(c, "")).into(),
    basics: vec![basic("JPN", "A03", "82.9%"), basic("EST", "A03", "91%")],
    basic_defs: vec![BasicDefinition {
      basic_id: "A03".into(),
      label_ja: "ネット利用率".into(),
      definition_ja: "利用者の割合".into(),
      higher_better: "false".into(),
      ..Default::default()
    }],
    ..Default::default()
  });
  let mut view = state("v1", &["EST"]);
  view.toggle_definition(RowKind::Basic, "A03");

  let Panel::Ready(table) = crate::render_basic_summary(&store, &view) else {
    panic!("basic summary should be ready");
  };
  let a03 = table.rows.iter().find(|r| r.id == "A03").unwrap();
  assert_eq!(a03.label, "ネット利用率");
  assert_eq!(a03.cells[0].class, CellClass::Strong);
  assert_eq!(a03.cells[1].class, CellClass::None);

  let def = a03.definition.as_ref().unwrap();
  assert_eq!(def.text, "利用者の割合");
  assert!(def.notes.iter().any(|n| n == crate::labels::LOWER_BETTER));
}

// ─── Country page ────────────────────────────────────────────────────────────

#[test]
fn country_page_lists_indicators_and_timeline() {
  let mut collections = Collections {
    countries: vec![country("EST", "エストニア")],
    indicators: vec![Indicator {
      indicator_id: "I01".into(),
      name_ja: "国民ID".into(),
      ..Default::default()
    }],
    ..Default::default()
  };
  let mut rec = indicator_value("EST", "I01", "Yes");
  rec.source_url = "https://a.example;https://b.example".into();
  collections.indicator_values = vec![rec];
  collections.events = vec![
    EventRecord {
      country_id: "EST".into(),
      event_date: "2007-01-01".into(),
      title: "Later".into(),
      ..Default::default()
    },
    EventRecord {
      country_id: "EST".into(),
      event_date: "2002-01-01".into(),
      title: "Earlier".into(),
      ..Default::default()
    },
  ];
  let store = DataStore::new(collections);
  let versions = resolve_versions(&store);

  let mut view = ViewState::default();
  view.set_version(versions.default_version().unwrap());
  let page = render_country_page(&store, &view, "est");

  assert_eq!(page.header.label.text, "エストニア (EST)");
  assert_eq!(page.header.meta, "国: EST / 行数: 1");
  let cell = &page.indicators[0].cell;
  assert_eq!(cell.sources[1].label, "公式出典2");
  assert!(matches!(page.basics, Panel::Unavailable(_)));

  let timeline = page.timeline.ready().unwrap();
  assert_eq!(timeline[0].title, "Earlier");
  assert_eq!(timeline[1].title, "Later");
}

#[test]
fn unknown_country_page_is_all_placeholders() {
  let store = scenario();
  let page = render_country_page(&store, &state("v1", &[]), "xxx");
  assert_eq!(page.header.label.text, "XXX (XXX)");
  assert_eq!(page.indicators[0].cell.class, CellClass::NoData);
  assert!(matches!(page.timeline, Panel::Unavailable(_)));
}

#[test]
fn country_page_basics_rank_the_latest_duplicate() {
  let store = DataStore::new(Collections {
    countries: ["JPN", "EST"].map(|c| country(c, "")).into(),
    basics: vec![
      basic("JPN", "A03", "90"),
      basic("EST", "A03", "50"),
      basic("JPN", "A03", "10"),
    ],
    ..Default::default()
  });
  let page = render_country_page(&store, &state("v1", &[]), "JPN");

  let items = page.basics.ready().unwrap();
  let a03 = items.iter().find(|i| i.id == "A03").unwrap();
  assert_eq!(a03.cell.main, "10");
  assert_eq!(a03.cell.class, CellClass::None);
}
