use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::popup::centered_rect;

/// Shown while the startup fetch is in flight.
pub fn render_loading(app: &App, f: &mut Frame<'_>, theme: &Theme) {
    let area = centered_rect(50, 20, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    f.render_widget(block, area);

    let throbber_area = ratatui::layout::Rect {
        x: area.x + 2,
        y: area.y + area.height / 2,
        width: area.width.saturating_sub(4),
        height: 1,
    };

    let throbber = Throbber::default()
        .label("Fetching statistics feed...")
        .style(Style::default().fg(theme.fg))
        .throbber_style(
            Style::default()
                .fg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX);

    // The spinner state advances in App::update; a clone keeps the draw
    // closure borrowing the app immutably.
    let mut spinner_state = app.throbber.clone();
    f.render_stateful_widget(throbber, throbber_area, &mut spinner_state);
}

/// Explicit error surface for NetworkFailure / MalformedPayload; nothing
/// renders with undefined data behind it.
pub fn render_error(message: &str, f: &mut Frame<'_>, theme: &Theme) {
    let area = centered_rect(60, 40, f.area());

    let block = Block::default()
        .title(" Feed unavailable ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let body = Text::from(vec![
        TextLine::from(Span::styled(
            "Could not load the statistics feed.",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Press q to quit.",
            Style::default().fg(theme.dim),
        )),
    ]);

    let paragraph = Paragraph::new(body)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
