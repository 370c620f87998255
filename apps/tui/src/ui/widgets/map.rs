use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::domain::Metric;
use crate::ui::theme::Theme;

// Viewport half-spans in degrees around the map center.
const LNG_SPAN: f64 = 14.0;
const LAT_SPAN: f64 = 11.0;

/// The circle map: one circle per state, radius scaled by the selected
/// metric, centered on the selected state's coordinates.
pub fn render_circle_map(app: &App, f: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let metric = app.selection.metric();

    let block = Block::default()
        .title(format!(" Map · {} ", metric.label()))
        .title_style(Style::default().fg(theme.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let Some(center) = app.selection.map_center() else {
        let paragraph = Paragraph::new("No states to map")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.dim));
        f.render_widget(paragraph, area);
        return;
    };

    let states = app.states();
    let color = theme.metric_color(metric);
    let selected_code = app.selection.selected_code();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([center.lng - LNG_SPAN, center.lng + LNG_SPAN])
        .y_bounds([center.lat - LAT_SPAN, center.lat + LAT_SPAN])
        .paint(|ctx| {
            for state in states {
                let radius = circle_radius(state.count(metric), metric);
                if radius > 0.0 {
                    ctx.draw(&Circle {
                        x: state.lng,
                        y: state.lat,
                        radius,
                        color,
                    });
                }
            }

            if let Some(selected) = states
                .iter()
                .find(|state| Some(state.code.as_str()) == selected_code)
            {
                ctx.print(selected.lng, selected.lat, selected.name.clone());
            }
        });

    f.render_widget(canvas, area);
}

/// Circle radius in map degrees. Square-root scaling keeps the national
/// aggregate from swallowing the viewport while small states stay visible.
fn circle_radius(count: u64, metric: Metric) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let sqrt = (count as f64).sqrt();
    sqrt * metric_scale(metric) / 1500.0
}

const fn metric_scale(metric: Metric) -> f64 {
    match metric {
        Metric::Active => 2.0,
        Metric::Confirmed => 0.8,
        Metric::Recovered => 0.9,
        Metric::Deaths => 4.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_draws_nothing() {
        assert!(circle_radius(0, Metric::Active).abs() < f64::EPSILON);
    }

    #[test]
    fn radius_grows_sublinearly() {
        let small = circle_radius(10_000, Metric::Confirmed);
        let large = circle_radius(1_000_000, Metric::Confirmed);
        assert!(large > small);
        assert!(large < small * 100.0);
    }
}
