//! Application state machine and event dispatcher.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use idcmp_store::DataStore;
use idcmp_view::{
  Panel, RowKind, Table, ViewState, Versions,
  render::{Chip, CountryPage},
  render_basic_summary, render_benchmarks, render_chips, render_comparison,
  render_country_page, render_it_infra, resolve_versions,
};

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  /// Chip list on the left, one comparison table on the right.
  Comparison,
  /// A single country's page.
  Country,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
  Chips,
  Table,
}

/// Which comparison table fills the right pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
  Indicators,
  Basics,
  Benchmarks,
  It,
}

impl Pane {
  pub fn next(self) -> Self {
    match self {
      Self::Indicators => Self::Basics,
      Self::Basics => Self::Benchmarks,
      Self::Benchmarks => Self::It,
      Self::It => Self::Indicators,
    }
  }

  pub fn title(self) -> &'static str {
    match self {
      Self::Indicators => "制度比較",
      Self::Basics => "基本情報",
      Self::Benchmarks => "国際ベンチマーク",
      Self::It => "IT基盤",
    }
  }

  fn row_kind(self) -> RowKind {
    match self {
      Self::Indicators => RowKind::Indicator,
      Self::Basics => RowKind::Basic,
      Self::Benchmarks => RowKind::Benchmark,
      Self::It => RowKind::It,
    }
  }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state. The store never changes; every frame is
/// re-rendered from it and [`ViewState`].
pub struct App {
  pub screen: Screen,
  pub focus:  Focus,
  pub pane:   Pane,

  pub store:    DataStore,
  pub state:    ViewState,
  pub versions: Versions,

  /// Current fuzzy-filter string for the chip list.
  pub filter:        String,
  /// Whether the user is typing a filter query.
  pub filter_active: bool,

  /// Cursor within the *filtered* chip list.
  pub chip_cursor: usize,
  /// Cursor within the visible table's rows.
  pub row_cursor:  usize,

  /// Subject of the country screen.
  pub country_id:     String,
  pub country_scroll: u16,

  /// One-line status message shown in the status bar.
  pub status_msg: String,
}

impl App {
  pub fn new(store: DataStore, state: ViewState) -> Self {
    let versions = resolve_versions(&store);
    let status_msg = if versions.available.is_empty() {
      "No versioned data found.".to_string()
    } else {
      String::new()
    };
    Self {
      screen: Screen::Comparison,
      focus: Focus::Chips,
      pane: Pane::Indicators,
      country_id: state.baseline().to_string(),
      store,
      state,
      versions,
      filter: String::new(),
      filter_active: false,
      chip_cursor: 0,
      row_cursor: 0,
      country_scroll: 0,
      status_msg,
    }
  }

  // ── Derived views ─────────────────────────────────────────────────────────

  /// Chips that match the current filter query.
  pub fn filtered_chips(&self) -> Vec<Chip> {
    let chips = render_chips(&self.store, &self.state);
    if self.filter.is_empty() {
      return chips;
    }
    let matcher = SkimMatcherV2::default();
    chips
      .into_iter()
      .filter(|c| {
        matcher.fuzzy_match(&c.label.name, &self.filter).is_some()
          || matcher.fuzzy_match(&c.label.id, &self.filter).is_some()
      })
      .collect()
  }

  pub fn cursor_chip(&self) -> Option<Chip> {
    self.filtered_chips().into_iter().nth(self.chip_cursor)
  }

  /// The table for the current pane, or the message of an empty panel.
  pub fn pane_table(&self) -> Panel<Table> {
    match self.pane {
      Pane::Indicators => Panel::Ready(render_comparison(&self.store, &self.state)),
      Pane::Basics => render_basic_summary(&self.store, &self.state),
      Pane::Benchmarks => render_benchmarks(&self.store, &self.state),
      Pane::It => render_it_infra(&self.store, &self.state),
    }
  }

  fn pane_row_ids(&self) -> Vec<String> {
    match self.pane_table() {
      Panel::Ready(t) => t.rows.into_iter().map(|r| r.id).collect(),
      Panel::Unavailable(_) => Vec::new(),
    }
  }

  pub fn country_page(&self) -> CountryPage {
    render_country_page(&self.store, &self.state, &self.country_id)
  }

  // ── Filters ───────────────────────────────────────────────────────────────

  fn cycle_version(&mut self) {
    let available = &self.versions.available;
    if available.is_empty() {
      return;
    }
    let next = available
      .iter()
      .position(|v| v == self.state.version())
      .map_or(0, |i| (i + 1) % available.len());
    let version = available[next].clone();
    self.status_msg = format!("version={version}");
    self.state.set_version(version);
  }

  fn cycle_status(&mut self) {
    let status = self.state.status().next();
    self.state.set_status(status);
    self.status_msg = format!("status={status}");
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    if self.filter_active {
      self.handle_filter_key(key);
      return true;
    }

    match self.screen {
      Screen::Comparison => self.handle_comparison_key(key),
      Screen::Country => self.handle_country_key(key),
    }
  }

  fn handle_filter_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.filter_active = false;
        self.filter.clear();
        self.chip_cursor = 0;
      }
      KeyCode::Enter => {
        self.filter_active = false;
        self.chip_cursor = 0;
      }
      KeyCode::Backspace => {
        self.filter.pop();
        self.chip_cursor = 0;
      }
      KeyCode::Char(c) => {
        self.filter.push(c);
        self.chip_cursor = 0;
      }
      _ => {}
    }
  }

  fn handle_comparison_key(&mut self, key: KeyEvent) -> bool {
    self.status_msg.clear();
    match key.code {
      KeyCode::Char('q') => return false,

      KeyCode::Tab => {
        self.focus = match self.focus {
          Focus::Chips => Focus::Table,
          Focus::Table => Focus::Chips,
        };
      }
      KeyCode::Char('p') => {
        self.pane = self.pane.next();
        self.row_cursor = 0;
      }
      KeyCode::Char('v') => self.cycle_version(),
      KeyCode::Char('s') => self.cycle_status(),

      KeyCode::Down | KeyCode::Char('j') => match self.focus {
        Focus::Chips => {
          let len = self.filtered_chips().len();
          if self.chip_cursor + 1 < len {
            self.chip_cursor += 1;
          }
        }
        Focus::Table => {
          let len = self.pane_row_ids().len();
          if self.row_cursor + 1 < len {
            self.row_cursor += 1;
          }
        }
      },
      KeyCode::Up | KeyCode::Char('k') => match self.focus {
        Focus::Chips => self.chip_cursor = self.chip_cursor.saturating_sub(1),
        Focus::Table => self.row_cursor = self.row_cursor.saturating_sub(1),
      },

      // Selection
      KeyCode::Char(' ') => {
        if let Some(chip) = self.cursor_chip() {
          self.state.toggle_country(&chip.label.id);
        }
      }
      KeyCode::Char('a') => {
        let ids = self.store.indicator_country_ids();
        self.state.select_all(ids);
      }
      KeyCode::Char('c') => self.state.clear_selection(),

      // Definition toggle for the row under the cursor.
      KeyCode::Char('d') => {
        if let Some(id) = self.pane_row_ids().get(self.row_cursor) {
          self.state.toggle_definition(self.pane.row_kind(), id);
        }
      }

      // Country page: the chip under the cursor, or the baseline.
      KeyCode::Enter => {
        self.country_id = match (self.focus, self.cursor_chip()) {
          (Focus::Chips, Some(chip)) => chip.label.id,
          _ => self.state.baseline().to_string(),
        };
        self.country_scroll = 0;
        self.screen = Screen::Country;
      }

      KeyCode::Char('/') => {
        self.focus = Focus::Chips;
        self.filter_active = true;
        self.filter.clear();
        self.chip_cursor = 0;
      }

      _ => {}
    }
    true
  }

  fn handle_country_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,

      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
        self.screen = Screen::Comparison;
      }
      KeyCode::Down | KeyCode::Char('j') => {
        self.country_scroll = self.country_scroll.saturating_add(1);
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.country_scroll = self.country_scroll.saturating_sub(1);
      }
      KeyCode::Char('v') => self.cycle_version(),
      KeyCode::Char('s') => self.cycle_status(),
      _ => {}
    }
    true
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::KeyEvent;
  use idcmp_core::{country::Country, indicator::Indicator, record::IndicatorValue};
  use idcmp_store::Collections;

  use super::*;

  fn app() -> App {
    let countries = ["JPN", "EST", "DNK"];
    let store = DataStore::new(Collections {
      countries: countries
        .map(|c| Country {
          country_id: c.into(),
          ..Default::default()
        })
        .into(),
      indicators: vec![Indicator {
        indicator_id: "I01".into(),
        ..Default::default()
      }],
      indicator_values: countries
        .map(|c| IndicatorValue {
          country_id: c.into(),
          indicator_id: "I01".into(),
          version: "v1".into(),
          review_status: "published".into(),
          value: "Yes".into(),
          ..Default::default()
        })
        .into(),
      ..Default::default()
    });
    let mut state = ViewState::new("JPN", ["JPN"]);
    state.set_version("v1");
    App::new(store, state)
  }

  fn press(app: &mut App, code: KeyCode) -> bool {
    app.handle_key(KeyEvent::from(code))
  }

  #[test]
  fn space_toggles_the_chip_under_the_cursor() {
    let mut app = app();
    // Chips exclude the baseline: DNK, EST.
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.state.columns(), ["JPN", "EST"]);

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.state.columns(), ["JPN", "DNK", "EST"]);
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.state.columns(), ["JPN"]);
  }

  #[test]
  fn filter_narrows_chips() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Enter);
    let ids: Vec<_> = app.filtered_chips().into_iter().map(|c| c.label.id).collect();
    assert_eq!(ids, ["EST"]);
  }

  #[test]
  fn enter_opens_country_and_esc_returns() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen, Screen::Country);
    assert_eq!(app.country_id, "DNK");
    assert!(press(&mut app, KeyCode::Esc));
    assert_eq!(app.screen, Screen::Comparison);
    assert!(!press(&mut app, KeyCode::Char('q')));
  }

  #[test]
  fn status_cycles_and_definitions_toggle() {
    let mut app = app();
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.state.status().to_string(), "reviewed");

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('d'));
    assert!(app.state.expanded().is_expanded(RowKind::Indicator, "I01"));
  }
}
