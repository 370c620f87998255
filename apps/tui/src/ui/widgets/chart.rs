use chrono::NaiveDate;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::app::format::pretty_count;
use crate::app::App;
use crate::domain::Metric;
use crate::feed::TimeSeriesEntry;
use crate::ui::theme::Theme;

/// National time-series chart for the selected metric.
pub fn render_timeline_chart(app: &App, f: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let metric = app.selection.metric();

    let block = Block::default()
        .title(format!(" India · {} over time ", metric.label()))
        .title_style(Style::default().fg(theme.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let timeline = app.feed_data().map_or(&[][..], |data| &data.timeline);
    if timeline.is_empty() {
        let paragraph = Paragraph::new("No time-series data in feed")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.dim));
        f.render_widget(paragraph, area);
        return;
    }

    #[allow(clippy::cast_precision_loss)]
    let points: Vec<(f64, f64)> = timeline
        .iter()
        .enumerate()
        .map(|(day, entry)| (day as f64, metric_total(entry, metric) as f64))
        .collect();

    let max_y = points.iter().map(|&(_, y)| y).fold(1.0_f64, f64::max);
    #[allow(clippy::cast_precision_loss)]
    let max_x = (points.len().saturating_sub(1)).max(1) as f64;

    let color = theme.metric_color(metric);
    let datasets = vec![Dataset::default()
        .name(metric.label())
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&points)];

    let x_labels = vec![
        Span::styled(date_label(timeline, 0), Style::default().fg(theme.dim)),
        Span::styled(
            date_label(timeline, timeline.len() / 2),
            Style::default().fg(theme.dim),
        ),
        Span::styled(
            date_label(timeline, timeline.len().saturating_sub(1)),
            Style::default().fg(theme.dim),
        ),
    ];

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let y_labels = vec![
        Span::styled("0", Style::default().fg(theme.dim)),
        Span::styled(
            pretty_count((max_y / 2.0) as u64),
            Style::default().fg(theme.dim),
        ),
        Span::styled(pretty_count(max_y as u64), Style::default().fg(theme.dim)),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(theme.dim))
                .bounds([0.0, max_x])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(theme.dim))
                .bounds([0.0, max_y])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

const fn metric_total(entry: &TimeSeriesEntry, metric: Metric) -> u64 {
    match metric {
        Metric::Active => entry.total_active(),
        Metric::Confirmed => entry.totalconfirmed,
        Metric::Recovered => entry.totalrecovered,
        Metric::Deaths => entry.totaldeceased,
    }
}

/// "2020-01-30" -> "30 Jan 20"; the raw string is the fallback for dates
/// the feed formats unexpectedly.
fn date_label(timeline: &[TimeSeriesEntry], index: usize) -> String {
    timeline.get(index).map_or_else(String::new, |entry| {
        NaiveDate::parse_from_str(&entry.dateymd, "%Y-%m-%d").map_or_else(
            |_| entry.dateymd.clone(),
            |date| date.format("%d %b %y").to_string(),
        )
    })
}
