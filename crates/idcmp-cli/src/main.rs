//! `idcmp`: compare national digital-ID policies across countries.
//!
//! # Usage
//!
//! ```text
//! idcmp --data ./data compare --countries EST,DNK
//! idcmp --data https://example.org/data country EST --format json
//! idcmp --config ~/.config/idcmp/config.toml tui
//! ```

mod app;
mod client;
mod output;
mod settings;
mod ui;

use std::{io, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use app::App;
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use idcmp_core::{catalog::basic_spec, normalize_country_id, tier::ReviewStatus};
use idcmp_store::DataStore;
use idcmp_view::{
  RowKind, ViewState, render_comparison_page, render_country_page, render_map,
  resolve_versions, subject_from_query,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Serialize;
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "idcmp", version, about = "Compare digital-ID policies across countries")]
struct Args {
  /// Path to a TOML config file (data, baseline, default_countries,
  /// default_status).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Data directory or `http(s)://` base URL holding the CSV files.
  #[arg(long, value_name = "PATH|URL")]
  data: Option<String>,

  /// Dataset version (default: the most recent complete version).
  #[arg(long = "version-id", value_name = "VERSION")]
  version_id: Option<String>,

  /// Review status: published, reviewed or draft.
  #[arg(long)]
  status: Option<String>,

  /// Countries to compare, comma-separated; the baseline is always added.
  #[arg(long, value_delimiter = ',', value_name = "A,B")]
  countries: Vec<String>,

  /// Row ids whose definition block should be expanded.
  #[arg(long, value_delimiter = ',', value_name = "ID,..")]
  expand: Vec<String>,

  #[arg(long, value_enum, default_value_t = Format::Text)]
  format: Format,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
  /// List selectable dataset versions.
  Versions,
  /// Render the comparison page.
  Compare,
  /// Render one country's page. Accepts a code or a query such as `id=EST`.
  Country { target: Option<String> },
  /// List world-map pins.
  Map,
  /// Interactive terminal UI (default).
  Tui,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
  Json,
  Text,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();
  let command = args.command.clone().unwrap_or(Command::Tui);

  // Batch commands log to stderr; the TUI owns the terminal.
  let default_level = match command {
    Command::Tui => LevelFilter::OFF,
    _ => LevelFilter::INFO,
  };
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy(),
    )
    .init();

  let settings = Settings::load(args.config.as_deref())?;
  let location = args.data.clone().unwrap_or_else(|| settings.data.clone());
  let store = client::load_store(&location).await?;
  let state = initial_state(&args, &settings, &store)?;

  match command {
    Command::Versions => {
      let versions = resolve_versions(&store);
      emit(args.format, &versions, output::versions)
    }
    Command::Compare => {
      let page = render_comparison_page(&store, &state);
      emit(args.format, &page, output::comparison_page)
    }
    Command::Country { target } => {
      let id = country_target(target.as_deref().unwrap_or_default(), state.baseline());
      let page = render_country_page(&store, &state, &id);
      emit(args.format, &page, output::country_page)
    }
    Command::Map => {
      let pins = render_map(&store);
      emit(args.format, &pins, |p| output::map_pins(p))
    }
    Command::Tui => run_tui(App::new(store, state)),
  }
}

/// Build the starting [`ViewState`]: flags override settings.
fn initial_state(args: &Args, settings: &Settings, store: &DataStore) -> Result<ViewState> {
  let countries = if args.countries.is_empty() {
    &settings.default_countries
  } else {
    &args.countries
  };
  let mut state = ViewState::new(&settings.baseline, countries);

  let versions = resolve_versions(store);
  match &args.version_id {
    Some(v) => {
      if !versions.available.contains(v) {
        tracing::warn!(version = %v, available = ?versions.available, "version is not selectable");
      }
      state.set_version(v.as_str());
    }
    None => state.set_version(versions.default_version().unwrap_or_default()),
  }

  let status = args.status.as_deref().unwrap_or(&settings.default_status);
  state.set_status(ReviewStatus::parse(status).context("invalid --status")?);

  for id in &args.expand {
    state.toggle_definition(row_kind(store, id), id);
  }
  Ok(state)
}

/// Which table a row id belongs to.
fn row_kind(store: &DataStore, id: &str) -> RowKind {
  let id = id.trim();
  if store.indicators().iter().any(|i| i.indicator_id == id) {
    RowKind::Indicator
  } else if id.starts_with("IT") {
    RowKind::It
  } else if basic_spec(id).is_some() || store.basic_def(id).is_some() {
    RowKind::Basic
  } else {
    RowKind::Benchmark
  }
}

/// A bare code, or a page query such as `?id=est`.
fn country_target(target: &str, baseline: &str) -> String {
  if target.contains('=') {
    subject_from_query(target, baseline)
  } else {
    let id = normalize_country_id(target);
    if id.is_empty() { normalize_country_id(baseline) } else { id }
  }
}

fn emit<T: Serialize>(format: Format, value: &T, text: impl Fn(&T) -> String) -> Result<()> {
  match format {
    Format::Json => {
      let json = serde_json::to_string_pretty(value).context("serialising output")?;
      println!("{json}");
    }
    Format::Text => print!("{}", text(value)),
  }
  Ok(())
}

// ─── Terminal UI ──────────────────────────────────────────────────────────────

fn run_tui(mut app: App) -> Result<()> {
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app);

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(Event::Key(key)) = maybe_event
      && !app.handle_key(key)
    {
      break;
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn country_target_accepts_codes_and_queries() {
    assert_eq!(country_target("est", "JPN"), "EST");
    assert_eq!(country_target("?id=kor", "JPN"), "KOR");
    assert_eq!(country_target("", "JPN"), "JPN");
  }

  #[test]
  fn args_parse_lists() {
    let args = Args::parse_from([
      "idcmp",
      "--countries",
      "EST,DNK",
      "--expand",
      "I01,A03",
      "--format",
      "json",
      "compare",
    ]);
    assert_eq!(args.countries, ["EST", "DNK"]);
    assert_eq!(args.expand, ["I01", "A03"]);
    assert_eq!(args.format, Format::Json);
    assert!(matches!(args.command, Some(Command::Compare)));
  }
}
