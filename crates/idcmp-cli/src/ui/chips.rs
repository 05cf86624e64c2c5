//! Country chip list: left panel.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::{App, Focus};

/// Render the chip list into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let chips = app.filtered_chips();
  let focused = app.focus == Focus::Chips;

  let title = format!(
    " Countries ({}/{}) ",
    app.state.selected().len(),
    app.store.indicator_country_ids().len()
  );
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }));

  let items: Vec<ListItem> = chips
    .iter()
    .map(|chip| {
      let mark = if chip.selected { "[x] " } else { "[ ] " };
      ListItem::new(Line::from(vec![
        Span::styled(mark, Style::default().fg(Color::Cyan)),
        Span::raw(chip.label.text.clone()),
        Span::styled(format!(" {}", chip.label.id), Style::default().fg(Color::DarkGray)),
      ]))
    })
    .collect();

  let mut inner_area = block.inner(area);
  f.render_widget(block, area);

  if (app.filter_active || !app.filter.is_empty()) && inner_area.height > 2 {
    let filter_area = Rect {
      x:      inner_area.x,
      y:      inner_area.y + inner_area.height - 1,
      width:  inner_area.width,
      height: 1,
    };
    inner_area.height = inner_area.height.saturating_sub(1);

    let filter_text = if app.filter_active {
      format!("/{}_", app.filter)
    } else {
      format!("/{}", app.filter)
    };
    f.render_widget(
      Paragraph::new(filter_text).style(Style::default().fg(Color::Yellow)),
      filter_area,
    );
  }

  let mut state = ListState::default();
  state.select((!chips.is_empty()).then_some(app.chip_cursor));

  let highlight = if focused {
    Style::default()
      .bg(Color::Blue)
      .fg(Color::White)
      .add_modifier(Modifier::BOLD)
  } else {
    Style::default().add_modifier(Modifier::BOLD)
  };
  f.render_stateful_widget(
    List::new(items).highlight_style(highlight),
    inner_area,
    &mut state,
  );
}
