use crossterm::event::KeyCode;

use crate::app::state::{App, AppScreen};
use crate::domain::Metric;

pub fn handle_input(app: &mut App, key: KeyCode) {
    if handle_help_toggle(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Dashboard => handle_dashboard_input(app, key),
        AppScreen::States => handle_states_input(app, key),
    }
}

fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    // While typing a filter, '?' is input, not help.
    if app.filtering {
        return false;
    }

    if key == KeyCode::F(1) || key == KeyCode::Char('?') {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}

fn handle_dashboard_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('t') => {
            app.prefs.toggle_dark_mode();
        }
        KeyCode::Tab | KeyCode::Char('l') => {
            app.screen = AppScreen::States;
            app.clamp_table_index();
        }
        KeyCode::Up => {
            app.select_adjacent(-1);
        }
        KeyCode::Down => {
            app.select_adjacent(1);
        }
        KeyCode::Char('a') | KeyCode::Char('1') => app.select_metric(Metric::Active),
        KeyCode::Char('c') | KeyCode::Char('2') => app.select_metric(Metric::Confirmed),
        KeyCode::Char('r') | KeyCode::Char('3') => app.select_metric(Metric::Recovered),
        KeyCode::Char('d') | KeyCode::Char('4') => app.select_metric(Metric::Deaths),
        _ => {}
    }
}

fn handle_states_input(app: &mut App, key: KeyCode) {
    if app.filtering {
        handle_filter_input(app, key);
        return;
    }

    match key {
        KeyCode::Esc | KeyCode::Tab => {
            app.screen = AppScreen::Dashboard;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('t') => {
            app.prefs.toggle_dark_mode();
        }
        KeyCode::Char('/') => {
            app.filtering = true;
        }
        KeyCode::Char('s') => {
            app.table_sort = app.table_sort.next();
            app.table_index = 0;
        }
        KeyCode::Char('v') => {
            app.sort_descending = !app.sort_descending;
            app.table_index = 0;
        }
        KeyCode::Up => {
            if app.table_index > 0 {
                app.table_index -= 1;
            }
        }
        KeyCode::Down => {
            let rows = app.visible_table_rows().len();
            if rows > 0 && app.table_index < rows - 1 {
                app.table_index += 1;
            }
        }
        KeyCode::PageUp => {
            app.table_index = app.table_index.saturating_sub(5);
        }
        KeyCode::PageDown => {
            let rows = app.visible_table_rows().len();
            if rows > 0 {
                app.table_index = (app.table_index + 5).min(rows - 1);
            }
        }
        KeyCode::Home => {
            app.table_index = 0;
        }
        KeyCode::End => {
            let rows = app.visible_table_rows().len();
            if rows > 0 {
                app.table_index = rows - 1;
            }
        }
        KeyCode::Enter => {
            app.select_table_row();
        }
        _ => {}
    }
}

fn handle_filter_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.filtering = false;
            app.filter.clear();
            app.clamp_table_index();
        }
        KeyCode::Enter => {
            app.filtering = false;
            app.clamp_table_index();
        }
        KeyCode::Backspace => {
            app.filter.pop();
            app.clamp_table_index();
        }
        KeyCode::Char(c) => {
            app.filter.push(c);
            app.table_index = 0;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{FeedDocument, RawStateStat};

    fn ready_app() -> App {
        let mut app = App::new();
        let statewise = ["TT", "MH", "DL"]
            .iter()
            .map(|code| RawStateStat {
                statecode: (*code).to_string(),
                active: 1,
                confirmed: 2,
                recovered: 1,
                deaths: 0,
                lastupdatedtime: String::new(),
            })
            .collect();
        app.apply_feed(FeedDocument {
            statewise,
            cases_time_series: Vec::new(),
        });
        app
    }

    #[test]
    fn metric_keys_switch_the_card() {
        let mut app = ready_app();
        handle_input(&mut app, KeyCode::Char('d'));
        assert_eq!(app.selection.metric(), Metric::Deaths);
        handle_input(&mut app, KeyCode::Char('1'));
        assert_eq!(app.selection.metric(), Metric::Active);
    }

    #[test]
    fn arrow_keys_move_selection_on_dashboard() {
        let mut app = ready_app();
        handle_input(&mut app, KeyCode::Down);
        assert_eq!(app.selection.selected_code(), Some("MH"));
    }

    #[test]
    fn tab_switches_screens_and_esc_returns() {
        let mut app = ready_app();
        handle_input(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, AppScreen::States);
        handle_input(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, AppScreen::Dashboard);
    }

    #[test]
    fn enter_on_table_selects_highlighted_state() {
        let mut app = ready_app();
        app.screen = AppScreen::States;
        // All counts are equal here, so only the row position matters.
        handle_input(&mut app, KeyCode::Down);
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.selection.selected_code(), Some("MH"));
        assert_eq!(app.screen, AppScreen::Dashboard);
    }

    #[test]
    fn filter_mode_captures_characters() {
        let mut app = ready_app();
        app.screen = AppScreen::States;
        handle_input(&mut app, KeyCode::Char('/'));
        assert!(app.filtering);
        handle_input(&mut app, KeyCode::Char('m'));
        handle_input(&mut app, KeyCode::Char('h'));
        assert_eq!(app.filter, "mh");
        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.filtering);
        assert!(app.filter.is_empty());
    }

    #[test]
    fn dark_mode_toggle_is_reachable_from_both_screens() {
        let mut app = ready_app();
        handle_input(&mut app, KeyCode::Char('t'));
        assert!(app.prefs.dark_mode());
        app.screen = AppScreen::States;
        handle_input(&mut app, KeyCode::Char('t'));
        assert!(!app.prefs.dark_mode());
    }
}
