use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{InputMode, TuiState};
use crate::page::{DetailPanel, ListKind, ListView, Page};

pub fn render(page: &Page, state: &TuiState, frame: &mut Frame) {
    // Layout: search(3) + body(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_search_bar(page, state, frame, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(columns[0]);
    draw_list(page, state, ListKind::SearchResults, frame, left[0]);
    draw_list(page, state, ListKind::Catalog, frame, left[1]);

    if page.details_wrapper_visible {
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Percentage(40)])
            .split(columns[1]);
        draw_details(&page.details, frame, right[0]);
        draw_list(page, state, ListKind::Similar, frame, right[1]);
    } else {
        let hint = Paragraph::new("Wybierz film z listy i naciśnij Enter.")
            .style(Style::default().fg(Color::DarkGray))
            .block(dim_block(" Szczegóły "));
        frame.render_widget(hint, columns[1]);
    }

    draw_status_bar(state, frame, chunks[2]);
}

fn draw_search_bar(page: &Page, state: &TuiState, frame: &mut Frame, area: Rect) {
    let editing = state.input_mode == InputMode::Editing;
    let style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let label = " Tytuł: ";
    let bar = Paragraph::new(format!("{label}{}", page.search_input))
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .title(" Szukaj (/) "),
        );
    frame.render_widget(bar, area);

    if editing {
        let offset = label.chars().count() + page.search_input.chars().count();
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(u16::try_from(offset).unwrap_or(u16::MAX));
        frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn draw_list(page: &Page, state: &TuiState, kind: ListKind, frame: &mut Frame, area: Rect) {
    let list = page.list(kind);
    let focused = state.focus == kind && state.input_mode == InputMode::Normal;

    let items: Vec<ListItem> = list
        .rows()
        .iter()
        .map(|row| {
            let style = if row.is_clickable() {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(Span::styled(row.text.as_str(), style)))
        })
        .collect();

    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {} ", kind.label())),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    if focused && !list.is_empty() {
        list_state.select(Some(state.selected(kind).min(list.len() - 1)));
    }
    frame.render_stateful_widget(widget, area, &mut list_state);
}

fn draw_details(panel: &DetailPanel, frame: &mut Frame, area: Rect) {
    if !panel.visible {
        frame.render_widget(dim_block(" Szczegóły "), area);
        return;
    }

    let mut lines = vec![Line::from(Span::styled(
        panel.title.as_str(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];
    if !panel.subtitle.is_empty() {
        lines.push(Line::from(Span::styled(
            panel.subtitle.as_str(),
            Style::default().fg(Color::Yellow),
        )));
    }
    push_credits(&mut lines, "Aktorzy", &panel.actors);
    push_credits(&mut lines, "Reżyserzy", &panel.directors);
    push_credits(&mut lines, "Gatunki", &panel.genres);

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(dim_block(" Szczegóły "));
    frame.render_widget(card, area);
}

fn push_credits<'a>(lines: &mut Vec<Line<'a>>, heading: &'a str, list: &'a ListView) {
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        heading,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for row in list.rows() {
        lines.push(Line::from(format!("  • {}", row.text)));
    }
}

fn draw_status_bar(state: &TuiState, frame: &mut Frame, area: Rect) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled(" /", key),
        Span::raw(" Szukaj  "),
        Span::styled("Tab", key),
        Span::raw(" Lista  "),
        Span::styled("↑↓", key),
        Span::raw(" Wybór  "),
        Span::styled("Enter", key),
        Span::raw(" Pokaż  "),
        Span::styled("q", key),
        Span::raw(" Wyjście  "),
        Span::styled(state.status_msg.as_str(), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn dim_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
}
