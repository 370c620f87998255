use std::time::Instant;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use throbber_widgets_tui::ThrobberState;

use crate::app::actions::AppActions;
use crate::app::prefs::Preferences;
use crate::app::selection::Selection;
use crate::config;
use crate::domain::Metric;
use crate::feed::{join_states, EnrichedState, FeedDocument, TimeSeriesEntry};
use crate::geo;

/// Spinner advance interval in milliseconds.
const SPINNER_TICK_MS: u128 = 80;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Dashboard,
    States,
}

/// Lifecycle of the single startup fetch.
#[derive(Debug)]
pub enum FeedStatus {
    Loading,
    Ready(FeedData),
    Failed(String),
}

/// The joined snapshot held read-only for the rest of the session.
#[derive(Debug)]
pub struct FeedData {
    pub states: Vec<EnrichedState>,
    pub dropped: usize,
    pub timeline: Vec<TimeSeriesEntry>,
}

/// Column the states table is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Active,
    Confirmed,
    Recovered,
    Deaths,
}

impl SortColumn {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Active => "Active",
            Self::Confirmed => "Confirmed",
            Self::Recovered => "Recovered",
            Self::Deaths => "Deaths",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Active,
            Self::Active => Self::Confirmed,
            Self::Confirmed => Self::Recovered,
            Self::Recovered => Self::Deaths,
            Self::Deaths => Self::Name,
        }
    }
}

/// Indices into `states` after applying the table filter and sort order.
///
/// An empty filter keeps every row. The sort is stable, so ascending order
/// keeps feed order for ties.
pub fn table_indices(
    states: &[EnrichedState],
    filter: &str,
    sort: SortColumn,
    descending: bool,
) -> Vec<usize> {
    let mut indices: Vec<usize> = if filter.is_empty() {
        (0..states.len()).collect()
    } else {
        let matcher = SkimMatcherV2::default();
        states
            .iter()
            .enumerate()
            .filter(|(_, state)| {
                matcher.fuzzy_match(&state.name, filter).is_some()
                    || matcher.fuzzy_match(&state.code, filter).is_some()
            })
            .map(|(index, _)| index)
            .collect()
    };

    match sort {
        SortColumn::Name => indices.sort_by(|&a, &b| states[a].name.cmp(&states[b].name)),
        SortColumn::Active => indices.sort_by_key(|&i| states[i].active),
        SortColumn::Confirmed => indices.sort_by_key(|&i| states[i].confirmed),
        SortColumn::Recovered => indices.sort_by_key(|&i| states[i].recovered),
        SortColumn::Deaths => indices.sort_by_key(|&i| states[i].deaths),
    }
    if descending {
        indices.reverse();
    }

    indices
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub show_help: bool,
    pub feed: FeedStatus,
    pub selection: Selection,
    pub prefs: Preferences,
    pub actions: AppActions,
    pub status_message: String,
    pub table_sort: SortColumn,
    pub sort_descending: bool,
    pub filter: String,
    pub filtering: bool,
    pub table_index: usize,
    pub throbber: ThrobberState,
    last_tick: Instant,
    tick_accum_ms: u128,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            screen: AppScreen::Dashboard,
            show_help: false,
            feed: FeedStatus::Loading,
            selection: Selection::empty(),
            prefs: Preferences::in_memory(false, 80),
            actions: AppActions::new(),
            status_message: String::new(),
            table_sort: SortColumn::Confirmed,
            sort_descending: true,
            filter: String::new(),
            filtering: false,
            table_index: 0,
            throbber: ThrobberState::default(),
            last_tick: Instant::now(),
            tick_accum_ms: 0,
        }
    }

    /// Reads config and loads the persisted preference, keeping the current
    /// viewport width.
    pub fn initialize(&mut self) {
        self.actions.initialize();
        let width = self.prefs.viewport_width();
        self.prefs = Preferences::load(config::prefs_path(), width);
    }

    /// Advances the loading spinner; called once per loop iteration.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.tick_accum_ms += now.duration_since(self.last_tick).as_millis();
        self.last_tick = now;

        if self.tick_accum_ms >= SPINNER_TICK_MS {
            self.tick_accum_ms = 0;
            self.throbber.calc_next();
        }
    }

    /// Installs a fetched feed document: joins it with the geocode table,
    /// derives the default selection, and reports dropped records.
    pub fn apply_feed(&mut self, document: FeedDocument) {
        let outcome = join_states(&document.statewise, &geo::LATLONG);

        self.selection = Selection::from_states(&outcome.states);
        self.status_message = if outcome.dropped > 0 {
            format!(
                "Loaded {} states ({} records without geo entry dropped)",
                outcome.states.len(),
                outcome.dropped
            )
        } else {
            format!("Loaded {} states", outcome.states.len())
        };

        self.feed = FeedStatus::Ready(FeedData {
            states: outcome.states,
            dropped: outcome.dropped,
            timeline: document.cases_time_series,
        });
    }

    pub fn feed_failed(&mut self, message: String) {
        self.status_message = format!("Error: {message}");
        self.feed = FeedStatus::Failed(message);
    }

    /// The enriched snapshot, empty until the feed is ready.
    pub fn states(&self) -> &[EnrichedState] {
        match &self.feed {
            FeedStatus::Ready(data) => &data.states,
            _ => &[],
        }
    }

    pub const fn feed_data(&self) -> Option<&FeedData> {
        match &self.feed {
            FeedStatus::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn selected_state(&self) -> Option<&EnrichedState> {
        self.selection.selected_state(self.states())
    }

    /// Moves the selection to the previous/next state in feed order, the
    /// dropdown analog on the dashboard screen.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn select_adjacent(&mut self, offset: isize) {
        let states = match &self.feed {
            FeedStatus::Ready(data) => &data.states,
            _ => return,
        };
        let Some(current) = self.selection.selected_index(states) else {
            return;
        };

        let len = states.len() as isize;
        let next = (current as isize + offset).rem_euclid(len) as usize;
        let code = states[next].code.clone();
        if let Err(err) = self.selection.select_state(&code, states) {
            self.status_message = format!("Error: {err}");
        }
    }

    /// Selects the state currently highlighted in the table, if any.
    pub fn select_table_row(&mut self) {
        let indices = table_indices(
            self.states(),
            &self.filter,
            self.table_sort,
            self.sort_descending,
        );
        let Some(&state_index) = indices.get(self.table_index) else {
            return;
        };
        let code = self.states()[state_index].code.clone();
        let states = match &self.feed {
            FeedStatus::Ready(data) => &data.states,
            _ => return,
        };
        match self.selection.select_state(&code, states) {
            Ok(()) => {
                self.status_message = format!("Selected {code}");
                self.screen = AppScreen::Dashboard;
            }
            Err(err) => self.status_message = format!("Error: {err}"),
        }
    }

    pub fn select_metric(&mut self, metric: Metric) {
        self.selection.select_metric(metric);
    }

    pub fn visible_table_rows(&self) -> Vec<usize> {
        table_indices(
            self.states(),
            &self.filter,
            self.table_sort,
            self.sort_descending,
        )
    }

    pub fn clamp_table_index(&mut self) {
        let rows = self.visible_table_rows().len();
        if rows == 0 {
            self.table_index = 0;
        } else if self.table_index >= rows {
            self.table_index = rows - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::RawStateStat;

    fn stat(code: &str, active: u64, confirmed: u64, recovered: u64, deaths: u64) -> RawStateStat {
        RawStateStat {
            statecode: code.to_string(),
            active,
            confirmed,
            recovered,
            deaths,
            lastupdatedtime: String::new(),
        }
    }

    fn ready_app(statewise: Vec<RawStateStat>) -> App {
        let mut app = App::new();
        app.apply_feed(FeedDocument {
            statewise,
            cases_time_series: Vec::new(),
        });
        app
    }

    #[test]
    fn single_state_feed_end_to_end() {
        // Feed has only Maharashtra; geo table resolves it.
        let app = ready_app(vec![stat("MH", 40, 100, 55, 5)]);

        let states = app.states();
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].name, "Maharashtra");

        assert_eq!(app.selection.selected_code(), Some("MH"));
        let center = app.selection.map_center().unwrap();
        assert!((center.lat - 19.7515).abs() < 1e-9);
        assert!((center.lng - 75.7139).abs() < 1e-9);

        assert_eq!(app.selected_state().unwrap().count(Metric::Active), 40);
    }

    #[test]
    fn empty_feed_leaves_no_selection() {
        let app = ready_app(Vec::new());
        assert!(app.states().is_empty());
        assert_eq!(app.selection.selected_code(), None);
        assert_eq!(app.selection.map_center(), None);
    }

    #[test]
    fn dropped_records_are_surfaced_in_status() {
        let app = ready_app(vec![stat("MH", 1, 1, 1, 1), stat("ZZ", 2, 2, 2, 2)]);
        assert_eq!(app.feed_data().unwrap().dropped, 1);
        assert!(app.status_message.contains("1 records without geo entry"));
    }

    #[test]
    fn select_adjacent_wraps_in_feed_order() {
        let mut app = ready_app(vec![
            stat("TT", 3, 3, 3, 3),
            stat("MH", 1, 1, 1, 1),
            stat("DL", 2, 2, 2, 2),
        ]);
        assert_eq!(app.selection.selected_code(), Some("TT"));

        app.select_adjacent(-1);
        assert_eq!(app.selection.selected_code(), Some("DL"));
        app.select_adjacent(1);
        assert_eq!(app.selection.selected_code(), Some("TT"));
    }

    #[test]
    fn table_sorts_by_column_and_direction() {
        let app = ready_app(vec![
            stat("MH", 40, 100, 55, 5),
            stat("DL", 10, 300, 8, 2),
            stat("KL", 20, 200, 30, 1),
        ]);

        let descending = table_indices(app.states(), "", SortColumn::Confirmed, true);
        let codes: Vec<&str> = descending
            .iter()
            .map(|&i| app.states()[i].code.as_str())
            .collect();
        assert_eq!(codes, ["DL", "KL", "MH"]);

        let by_name = table_indices(app.states(), "", SortColumn::Name, false);
        let names: Vec<&str> = by_name
            .iter()
            .map(|&i| app.states()[i].name.as_str())
            .collect();
        assert_eq!(names, ["Delhi", "Kerala", "Maharashtra"]);
    }

    #[test]
    fn table_filter_narrows_rows() {
        let app = ready_app(vec![
            stat("MH", 1, 1, 1, 1),
            stat("DL", 2, 2, 2, 2),
            stat("KL", 3, 3, 3, 3),
        ]);

        let rows = table_indices(app.states(), "kerala", SortColumn::Name, false);
        assert_eq!(rows.len(), 1);
        assert_eq!(app.states()[rows[0]].code, "KL");

        // Code matches too.
        let rows = table_indices(app.states(), "DL", SortColumn::Name, false);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn sort_column_cycle_covers_all_columns() {
        let mut column = SortColumn::Name;
        for _ in 0..4 {
            column = column.next();
            assert_ne!(column, SortColumn::Name);
        }
        assert_eq!(column.next(), SortColumn::Name);
    }
}
