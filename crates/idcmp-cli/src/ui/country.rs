//! Country page: full-width body.

use idcmp_view::{Panel, labels::year_label, render::Item};
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use super::class_color;
use crate::app::App;

fn section(title: &str) -> Line<'static> {
  Line::styled(
    title.to_string(),
    Style::default()
      .fg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  )
}

fn item_lines(item: &Item, with_year: bool, lines: &mut Vec<Line<'static>>) {
  let c = &item.cell;
  let mut head = vec![
    Span::styled(format!("{:<24}", item.label), Style::default().add_modifier(Modifier::BOLD)),
    Span::styled(c.main.clone(), Style::default().fg(class_color(c.class))),
  ];
  if with_year && !c.year.is_empty() {
    head.push(Span::styled(
      format!("  {}", year_label(&c.year)),
      Style::default().fg(Color::DarkGray),
    ));
  }
  lines.push(Line::from(head));

  if !c.detail.is_empty() {
    lines.push(Line::from(format!("  {}", c.detail)));
  }
  if !c.tags.is_empty() {
    lines.push(Line::from(format!("  tags: {}", c.tags)));
  }
  let sources: Vec<String> = c
    .sources
    .iter()
    .map(|s| format!("{} {}", s.label, s.url))
    .chain(c.source_note.clone())
    .collect();
  if !sources.is_empty() {
    lines.push(Line::styled(
      format!("  {}", sources.join(" / ")),
      Style::default().fg(Color::DarkGray),
    ));
  }
}

/// Render the country page for `app.country_id`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let page = app.country_page();

  let block = Block::default()
    .title(format!(" {} ", page.header.label.text))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let mut lines: Vec<Line<'static>> = vec![
    Line::styled(page.header.subtitle.clone(), Style::default().fg(Color::DarkGray)),
    Line::styled(page.header.meta.clone(), Style::default().fg(Color::DarkGray)),
    Line::from(""),
    section("基本情報"),
  ];
  match &page.basics {
    Panel::Ready(items) => items.iter().for_each(|i| item_lines(i, true, &mut lines)),
    Panel::Unavailable(msg) => lines.push(Line::from(msg.clone())),
  }

  lines.push(Line::from(""));
  lines.push(section("制度項目"));
  for i in &page.indicators {
    item_lines(i, false, &mut lines);
  }

  lines.push(Line::from(""));
  lines.push(section("年表"));
  match &page.timeline {
    Panel::Ready(entries) => {
      for e in entries {
        lines.push(Line::from(vec![
          Span::styled(format!("{:<12}", e.date), Style::default().fg(Color::Yellow)),
          Span::raw(e.title.clone()),
        ]));
        if !e.meta.is_empty() && e.meta != "/" {
          lines.push(Line::styled(format!("  {}", e.meta), Style::default().fg(Color::DarkGray)));
        }
        if !e.description.is_empty() {
          lines.push(Line::from(format!("  {}", e.description)));
        }
      }
    }
    Panel::Unavailable(msg) => lines.push(Line::from(msg.clone())),
  }

  f.render_widget(
    Paragraph::new(lines)
      .block(block)
      .wrap(Wrap { trim: false })
      .scroll((app.country_scroll, 0)),
    area,
  );
}
