use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::format::format_count;
use crate::app::App;
use crate::domain::Metric;
use crate::ui::theme::Theme;

/// The four status cards. The selected metric's card gets a bold border;
/// values abbreviate on narrow viewports.
pub fn render_status_cards(app: &App, f: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let selected = app.selected_state();

    for (index, metric) in Metric::ALL.iter().enumerate() {
        render_card(app, f, columns[index], theme, *metric, selected.is_some());
    }
}

fn render_card(
    app: &App,
    f: &mut Frame<'_>,
    area: Rect,
    theme: &Theme,
    metric: Metric,
    has_selection: bool,
) {
    let is_active = app.selection.metric() == metric;
    let color = theme.metric_color(metric);

    let border_style = if is_active {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border)
    };

    let block = Block::default()
        .title(format!(" {} ", metric.label()))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let value = if has_selection {
        app.selected_state().map_or_else(
            || "-".to_string(),
            |state| format_count(state.count(metric), app.prefs.viewport_width()),
        )
    } else {
        "-".to_string()
    };

    let body = Text::from(vec![
        TextLine::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            "cumulative",
            Style::default().fg(theme.dim),
        )),
    ]);

    let paragraph = Paragraph::new(body)
        .block(block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
