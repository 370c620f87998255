// UI module for covid-india-tui
// Handles all UI rendering functions

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::state::{AppScreen, FeedStatus};
use crate::app::App;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use theme::Theme;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let theme = Theme::new(app.prefs.dark_mode());

    // Paint the themed background before any widget lands on it.
    let background = Block::default().style(Style::default().bg(theme.bg).fg(theme.fg));
    f.render_widget(background, f.area());

    match &app.feed {
        FeedStatus::Loading => screens::loading::render_loading(app, f, &theme),
        FeedStatus::Failed(message) => screens::loading::render_error(message, f, &theme),
        FeedStatus::Ready(_) => match app.screen {
            AppScreen::Dashboard => screens::dashboard::render_dashboard(app, f, &theme),
            AppScreen::States => screens::states::render_states_view(app, f, &theme),
        },
    }

    if app.show_help {
        screens::help::render_help_popup(f, &theme);
    }
}
