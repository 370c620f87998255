use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::cards::render_status_cards;
use crate::ui::widgets::chart::render_timeline_chart;
use crate::ui::widgets::map::render_circle_map;

pub fn render_dashboard(app: &App, f: &mut Frame<'_>, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(4), // Status cards
            Constraint::Min(8),    // Map and chart
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_title_bar(app, f, layout[0], theme);
    render_status_cards(app, f, layout[1], theme);
    render_body(app, f, layout[2], theme);
    render_status_section(app, f, layout[3], theme);
    render_shortcuts(f, layout[4], theme);
}

fn render_title_bar(app: &App, f: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    f.render_widget(title_block, area);

    let inner = area.inner(Margin::new(1, 1));
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "COVID-19 ",
            Style::default()
                .fg(theme.metric_color(crate::domain::Metric::Confirmed))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "INDIA",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Left);
    f.render_widget(title, chunks[0]);

    let mode_icon = if theme.dark { "\u{263e}" } else { "\u{2600}" };
    let selected_line = app.selected_state().map_or_else(
        || TextLine::from(Span::styled("No state selected", Style::default().fg(theme.dim))),
        |state| {
            let mut spans = vec![Span::styled(
                state.name.clone(),
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            )];
            if !state.last_updated.is_empty() {
                spans.push(Span::styled(
                    format!("  updated {}", state.last_updated),
                    Style::default().fg(theme.dim),
                ));
            }
            spans.push(Span::styled(
                format!("  {mode_icon}"),
                Style::default().fg(theme.dim),
            ));
            TextLine::from(spans)
        },
    );

    let right = Paragraph::new(selected_line).alignment(Alignment::Right);
    f.render_widget(right, chunks[1]);
}

fn render_body(app: &App, f: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_circle_map(app, f, halves[0], theme);
    render_timeline_chart(app, f, halves[1], theme);
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(theme.dim))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let style = if app.status_message.starts_with("Error") {
        Style::default().fg(ratatui::style::Color::Red)
    } else {
        Style::default().fg(theme.dim)
    };

    let status_paragraph = Paragraph::new(Text::from(Span::styled(
        app.status_message.as_str(),
        style,
    )))
    .block(status_block)
    .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let key_style = Style::default()
        .fg(theme.highlight_bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(theme.dim);

    let shortcuts = TextLine::from(vec![
        Span::styled("?", key_style),
        Span::styled(": Help | ", text_style),
        Span::styled("\u{2191}/\u{2193}", key_style),
        Span::styled(": State | ", text_style),
        Span::styled("1-4", key_style),
        Span::styled(": Metric | ", text_style),
        Span::styled("Tab", key_style),
        Span::styled(": Table | ", text_style),
        Span::styled("t", key_style),
        Span::styled(": Dark mode | ", text_style),
        Span::styled("q", key_style),
        Span::styled(": Quit", text_style),
    ]);

    let paragraph = Paragraph::new(shortcuts).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
