use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::theme::Theme;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};

pub fn render_help_popup(f: &mut Frame<'_>, theme: &Theme) {
    let popup_area = centered_rect(80, 80, f.area());
    f.render_widget(ClearWidget, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight_bg));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines(theme)))
        .block(help_block)
        .style(Style::default().bg(theme.bg).fg(theme.fg))
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(TextLine::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(theme.dim),
    )))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };

    f.render_widget(hint, hint_area);
}

fn build_help_lines(theme: &Theme) -> Vec<TextLine<'static>> {
    let key = |k: &'static str| {
        Span::styled(
            format!("  {k}"),
            Style::default()
                .fg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut lines = vec![
        TextLine::from(Span::styled(
            "COVID-19 India Dashboard",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(
            "Per-state case counts from the covid19india feed: status cards, circle map, national time series, and a sortable state table.",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Dashboard:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(vec![key("\u{2191}/\u{2193}"), Span::raw(" - Previous/next state")]),
        TextLine::from(vec![
            key("1-4 / a c r d"),
            Span::raw(" - Metric: Active, Confirmed, Recovered, Deaths"),
        ]),
        TextLine::from(vec![key("Tab"), Span::raw(" - Open the state table")]),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "State table:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(vec![key("Enter"), Span::raw(" - Select highlighted state")]),
        TextLine::from(vec![key("/"), Span::raw(" - Fuzzy filter by name or code")]),
        TextLine::from(vec![key("s"), Span::raw(" - Cycle sort column")]),
        TextLine::from(vec![key("v"), Span::raw(" - Reverse sort order")]),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Everywhere:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(vec![key("t"), Span::raw(" - Toggle dark mode (persisted)")]),
        TextLine::from(vec![key("?"), Span::raw(" - Toggle this help popup")]),
        TextLine::from(vec![key("q"), Span::raw(" - Quit")]),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "CLI Options:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let help_text = crate::cli::CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}
