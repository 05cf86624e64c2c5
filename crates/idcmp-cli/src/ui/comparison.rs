//! Comparison table pane: right panel.

use idcmp_view::{Panel, Table};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span, Text},
  widgets::{
    Block, Borders, Cell as TuiCell, Paragraph, Row as TuiRow, Table as TuiTable,
    TableState, Wrap,
  },
};

use super::class_color;
use crate::app::{App, Focus};

const LABEL_WIDTH: u16 = 24;

/// Render the current pane's table into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let focused = app.focus == Focus::Table;
  let block = Block::default()
    .title(format!(" {}  [p] next table ", app.pane.title()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let table = match app.pane_table() {
    Panel::Ready(t) => t,
    Panel::Unavailable(msg) => {
      f.render_widget(
        Paragraph::new(msg).style(Style::default().fg(Color::DarkGray)),
        inner,
      );
      return;
    }
  };

  let definition = table
    .rows
    .get(app.row_cursor)
    .and_then(|r| r.definition.as_ref());
  let parts = Layout::default()
    .direction(Direction::Vertical)
    .constraints(if definition.is_some() {
      [Constraint::Min(0), Constraint::Length(8)]
    } else {
      [Constraint::Min(0), Constraint::Length(0)]
    })
    .split(inner);

  draw_table(f, parts[0], &table, app.row_cursor, focused);

  if let Some(def) = definition {
    let mut lines: Vec<Line> = Vec::new();
    if !def.text.is_empty() {
      lines.push(Line::from(def.text.clone()));
    }
    for l in &def.lines {
      lines.push(Line::from(vec![
        Span::styled(l.label.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(": {}", l.description)),
      ]));
    }
    for note in &def.notes {
      lines.push(Line::styled(note.clone(), Style::default().fg(Color::DarkGray)));
    }
    f.render_widget(
      Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::TOP).title(" 定義 ")),
      parts[1],
    );
  }
}

fn draw_table(f: &mut Frame, area: Rect, table: &Table, cursor: usize, focused: bool) {
  let header = TuiRow::new(
    std::iter::once(TuiCell::from(table.heading.clone())).chain(
      table
        .columns
        .iter()
        .map(|c| TuiCell::from(c.text.clone())),
    ),
  )
  .style(Style::default().add_modifier(Modifier::BOLD));

  let rows: Vec<TuiRow> = table
    .rows
    .iter()
    .map(|r| {
      let marker = if r.has_definition { " ▸" } else { "" };
      let label = TuiCell::from(format!("{}{marker}", r.label));
      let cells = r.cells.iter().map(|c| {
        let style = Style::default().fg(class_color(c.class));
        let mut text = Text::from(Line::styled(c.main.clone(), style));
        if !c.detail.is_empty() {
          text.push_line(Line::styled(
            c.detail.clone(),
            Style::default().fg(Color::DarkGray),
          ));
        }
        TuiCell::from(text)
      });
      TuiRow::new(std::iter::once(label).chain(cells)).height(2)
    })
    .collect();

  let widths: Vec<Constraint> = std::iter::once(Constraint::Length(LABEL_WIDTH))
    .chain(table.columns.iter().map(|_| Constraint::Fill(1)))
    .collect();

  let highlight = if focused {
    Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD)
  } else {
    Style::default()
  };
  let mut state = TableState::default().with_selected(Some(cursor));
  f.render_stateful_widget(
    TuiTable::new(rows, widths)
      .header(header)
      .row_highlight_style(highlight),
    area,
    &mut state,
  );
}
