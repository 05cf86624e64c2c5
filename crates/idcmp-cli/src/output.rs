//! Plain-text rendering of the view trees for batch commands.

use std::fmt::Write as _;

use idcmp_core::tier::CellClass;
use idcmp_view::{
  ComparisonPage, CountryPage, Panel, Table, Versions,
  labels::year_label,
  render::{Cell, Definition, Item, MapPin},
};
use unicode_width::UnicodeWidthStr;

/// One-glyph tier marker used in text tables.
pub fn marker(class: CellClass) -> &'static str {
  match class {
    CellClass::Strong => "[+]",
    CellClass::Partial => "[~]",
    CellClass::None => "[-]",
    CellClass::NoData => "[ ]",
    CellClass::Unclassified => "[?]",
  }
}

fn pad(s: &str, width: usize) -> String {
  let w = s.width();
  format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

fn cell_text(cell: &Cell) -> String { format!("{} {}", marker(cell.class), cell.main) }

fn write_definition(out: &mut String, indent: &str, def: &Definition) {
  if !def.text.is_empty() {
    let _ = writeln!(out, "{indent}{}", def.text);
  }
  for line in &def.lines {
    let _ = writeln!(out, "{indent}  {}: {}", line.label, line.description);
  }
  for note in &def.notes {
    let _ = writeln!(out, "{indent}  {note}");
  }
}

/// An aligned table: one line per row, definitions indented underneath.
pub fn table(t: &Table) -> String {
  let header: Vec<String> = std::iter::once(t.heading.clone())
    .chain(t.columns.iter().map(|c| c.text.clone()))
    .collect();
  let body: Vec<Vec<String>> = t
    .rows
    .iter()
    .map(|r| {
      std::iter::once(r.label.clone())
        .chain(r.cells.iter().map(cell_text))
        .collect()
    })
    .collect();

  let widths: Vec<usize> = (0..header.len())
    .map(|i| {
      std::iter::once(&header)
        .chain(&body)
        .filter_map(|line| line.get(i))
        .map(|s| s.width())
        .max()
        .unwrap_or(0)
    })
    .collect();

  let render = |line: &[String]| -> String {
    line
      .iter()
      .zip(&widths)
      .map(|(s, w)| pad(s, *w))
      .collect::<Vec<_>>()
      .join("  ")
      .trim_end()
      .to_string()
  };

  let mut out = String::new();
  if !t.title.is_empty() {
    let _ = writeln!(out, "{}", t.title);
  }
  let _ = writeln!(out, "{}", render(header.as_slice()));
  for (row, line) in t.rows.iter().zip(&body) {
    let mark = if row.has_definition && row.definition.is_none() { " *" } else { "" };
    let _ = writeln!(out, "{}{mark}", render(line.as_slice()));
    if let Some(def) = &row.definition {
      write_definition(&mut out, "    ", def);
    }
  }
  out
}

fn panel<T>(out: &mut String, p: &Panel<T>, ready: impl Fn(&T) -> String) {
  match p {
    Panel::Ready(t) => out.push_str(&ready(t)),
    Panel::Unavailable(msg) => {
      let _ = writeln!(out, "{msg}");
    }
  }
}

pub fn comparison_page(page: &ComparisonPage) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "{}", page.meta.note);
  for w in &page.meta.warnings {
    let _ = writeln!(out, "{w}");
  }
  out.push('\n');
  panel(&mut out, &page.basic_summary, table);
  out.push('\n');
  out.push_str(&table(&page.table));
  out.push('\n');
  panel(&mut out, &page.benchmarks, table);
  out.push('\n');
  panel(&mut out, &page.it_infra, table);
  out
}

fn item(out: &mut String, it: &Item, with_year: bool) {
  let c = &it.cell;
  let _ = writeln!(out, "{} {}  {}", marker(c.class), it.label, c.main);
  if with_year && c.class != CellClass::NoData {
    let _ = writeln!(out, "    {}", year_label(&c.year));
  }
  if !c.detail.is_empty() {
    let _ = writeln!(out, "    {}", c.detail);
  }
  if !c.tags.is_empty() {
    let _ = writeln!(out, "    tags: {}", c.tags);
  }
  if let Some(note) = &c.source_note {
    let _ = writeln!(out, "    {note}");
  }
  for s in &c.sources {
    let _ = writeln!(out, "    {}: {}", s.label, s.url);
  }
  if let Some(def) = &it.definition {
    write_definition(out, "    ", def);
  }
}

pub fn country_page(page: &CountryPage) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "{}", page.header.label.text);
  let _ = writeln!(out, "{}", page.header.subtitle);
  let _ = writeln!(out, "{}\n", page.header.meta);

  panel(&mut out, &page.basics, |items| {
    let mut s = String::new();
    items.iter().for_each(|i| item(&mut s, i, true));
    s
  });
  out.push('\n');
  for i in &page.indicators {
    item(&mut out, i, false);
  }
  out.push('\n');
  panel(&mut out, &page.timeline, |entries| {
    let mut s = String::new();
    for e in entries {
      let _ = writeln!(s, "{}  {}", e.date, e.title);
      if !e.meta.is_empty() && e.meta != "/" {
        let _ = writeln!(s, "    {}", e.meta);
      }
      if !e.description.is_empty() {
        let _ = writeln!(s, "    {}", e.description);
      }
      if let Some(src) = &e.source {
        let _ = writeln!(s, "    {}: {}", src.label, src.url);
      }
    }
    s
  });
  out
}

pub fn versions(v: &Versions) -> String {
  let mut out = String::new();
  for version in &v.available {
    let complete = if v.complete.contains(version) { "" } else { " (incomplete)" };
    let _ = writeln!(out, "{version}{complete}");
  }
  out
}

pub fn map_pins(pins: &[MapPin]) -> String {
  let mut out = String::new();
  for p in pins {
    let _ = writeln!(out, "{:<4} {:>5.1}% {:>5.1}%  {}", p.id, p.x, p.y, p.name);
  }
  out
}

#[cfg(test)]
mod tests {
  use idcmp_view::render::CountryLabel;

  use super::*;

  #[test]
  fn table_columns_align_on_display_width() {
    let t = Table {
      title:   String::new(),
      heading: "項目".into(),
      columns: vec![CountryLabel {
        id:    "EST".into(),
        name:  "Estonia".into(),
        text:  "Estonia".into(),
        title: "Estonia (EST)".into(),
        flag:  None,
        link:  None,
      }],
      rows:    vec![idcmp_view::Row {
        id:             "A01".into(),
        label:          "人口".into(),
        has_definition: false,
        definition:     None,
        cells:          vec![Cell::no_data()],
      }],
    };
    let text = table(&t);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "項目  Estonia");
    assert_eq!(lines[1], "人口  [ ] —");
  }
}
