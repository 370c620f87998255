use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::format::format_count;
use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::tables::scroll_offset;

pub fn render_states_view(app: &App, f: &mut Frame<'_>, theme: &Theme) {
    let area = f.area();
    let row_indices = app.visible_table_rows();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Table
            Constraint::Length(1), // Filter line
            Constraint::Length(2), // Key hints
        ])
        .split(area);

    if app.states().is_empty() {
        let block = Block::default()
            .title(" State Statistics ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));
        let paragraph = Paragraph::new("No states loaded.")
            .block(block)
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(theme.dim));
        f.render_widget(paragraph, chunks[0]);
        render_filter_line(app, f, chunks[1], theme);
        render_key_hints(f, chunks[2], theme);
        return;
    }

    let header = Row::new(vec![
        Cell::from("State"),
        Cell::from("Active"),
        Cell::from("Confirmed"),
        Cell::from("Recovered"),
        Cell::from("Deaths"),
    ])
    .style(
        Style::default()
            .fg(theme.highlight_bg)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = row_indices.len();
    let max_visible_rows = chunks[0].height.saturating_sub(3) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.table_index);
    let width = app.prefs.viewport_width();

    let rows = row_indices
        .iter()
        .skip(offset)
        .take(max_visible_rows)
        .enumerate()
        .map(|(visible_index, &state_index)| {
            let state = &app.states()[state_index];
            let is_cursor = visible_index + offset == app.table_index;
            let is_selected = Some(state.code.as_str()) == app.selection.selected_code();

            let style = if is_cursor {
                Style::default()
                    .bg(theme.highlight_bg)
                    .fg(theme.highlight_fg)
                    .add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };

            Row::new(vec![
                Cell::from(state.name.clone()),
                Cell::from(format_count(state.active, width)),
                Cell::from(format_count(state.confirmed, width)),
                Cell::from(format_count(state.recovered, width)),
                Cell::from(format_count(state.deaths, width)),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Min(24),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
    ];

    let direction = if app.sort_descending { "\u{2193}" } else { "\u{2191}" };
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    " State Statistics · sort: {} {} ({} of {}) ",
                    app.table_sort.label(),
                    direction,
                    if total_rows == 0 { 0 } else { app.table_index + 1 },
                    total_rows
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        )
        .column_spacing(1);

    f.render_widget(table, chunks[0]);
    render_filter_line(app, f, chunks[1], theme);
    render_key_hints(f, chunks[2], theme);
}

fn render_filter_line(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect, theme: &Theme) {
    if !app.filtering && app.filter.is_empty() {
        return;
    }

    let cursor = if app.filtering { "\u{2588}" } else { "" };
    let line = TextLine::from(vec![
        Span::styled("Filter: ", Style::default().fg(theme.dim)),
        Span::styled(
            format!("{}{cursor}", app.filter),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_key_hints(f: &mut Frame<'_>, area: ratatui::layout::Rect, theme: &Theme) {
    let key_style = Style::default()
        .fg(theme.highlight_bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(theme.dim);

    let hints = TextLine::from(vec![
        Span::styled("\u{2191}/\u{2193}", key_style),
        Span::styled(": Navigate   ", text_style),
        Span::styled("Enter", key_style),
        Span::styled(": Select state   ", text_style),
        Span::styled("/", key_style),
        Span::styled(": Filter   ", text_style),
        Span::styled("s", key_style),
        Span::styled(": Sort column   ", text_style),
        Span::styled("v", key_style),
        Span::styled(": Reverse   ", text_style),
        Span::styled("Esc", key_style),
        Span::styled(": Back", text_style),
    ]);

    let paragraph = Paragraph::new(hints)
        .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(theme.border)))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, area);
}
