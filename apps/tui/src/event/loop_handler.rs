use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::convert::TryFrom;
use std::fmt;
use std::io::Stdout;

use crate::app::{handle_input, App};
use crate::feed::{EnrichedState, FeedDocument};
use crate::ui;

// Define states for the startup feed load
#[derive(Clone, Copy, PartialEq, Debug)]
enum FeedLoadState {
    Idle,
    Fetching,
    Ready,
    Failed,
}

impl fmt::Display for FeedLoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Fetching => write!(f, "Fetching"),
            Self::Ready => write!(f, "Ready"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

// Define events for the feed load
#[derive(Clone, Debug)]
enum FeedLoadEvent {
    Start,
    Loaded(FeedDocument),
    Error(String),
}

impl fmt::Display for FeedLoadEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::Loaded(document) => {
                write!(f, "Loaded({} statewise records)", document.statewise.len())
            }
            Self::Error(msg) => write!(f, "Error({msg})"),
        }
    }
}

// Define a custom error type for state transitions
#[derive(Debug)]
struct StateTransitionError {
    from: FeedLoadState,
    event: FeedLoadEvent,
}

impl fmt::Display for StateTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid transition from {} with event {}",
            self.from, self.event
        )
    }
}

impl std::error::Error for StateTransitionError {}

// State machine driving the one-shot feed load
struct FeedLoadMachine {
    state: FeedLoadState,
}

impl FeedLoadMachine {
    const fn new(initial_state: FeedLoadState) -> Self {
        Self {
            state: initial_state,
        }
    }

    #[allow(dead_code)]
    const fn state(&self) -> FeedLoadState {
        self.state
    }

    // Process an event and update the state machine and app
    fn process_event(
        &mut self,
        event: &FeedLoadEvent,
        app: &mut App,
    ) -> std::result::Result<(), StateTransitionError> {
        let next_state = NextState::try_from((self.state, event, app))?;
        self.state = next_state.0;
        Ok(())
    }
}

// Helper struct for state transitions
struct NextState(FeedLoadState);

impl NextState {
    const fn new(state: FeedLoadState) -> Self {
        Self(state)
    }
}

impl FeedLoadState {
    const fn next_state(self) -> NextState {
        NextState::new(self)
    }
}

impl TryFrom<(FeedLoadState, &FeedLoadEvent, &mut App)> for NextState {
    type Error = StateTransitionError;

    fn try_from(
        value: (FeedLoadState, &FeedLoadEvent, &mut App),
    ) -> std::result::Result<Self, Self::Error> {
        let (current_state, event, app) = value;

        match (current_state, event) {
            (FeedLoadState::Idle, FeedLoadEvent::Start) => {
                app.status_message = "Fetching statistics feed...".to_string();
                Ok(FeedLoadState::Fetching.next_state())
            }
            (FeedLoadState::Fetching, FeedLoadEvent::Loaded(document)) => {
                app.apply_feed(document.clone());
                Ok(FeedLoadState::Ready.next_state())
            }
            (FeedLoadState::Fetching, FeedLoadEvent::Error(error)) => {
                app.feed_failed(error.clone());
                Ok(FeedLoadState::Failed.next_state())
            }
            _ => Err(StateTransitionError {
                from: current_state,
                event: event.clone(),
            }),
        }
    }
}

/// Run the application without a UI: fetch, join, print a summary.
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    let document = app.actions.fetch_feed().await?;
    app.apply_feed(document);

    let report = build_headless_report(app);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_headless_text(&report);
    }

    Ok(())
}

fn render_headless_text(report: &HeadlessReport) {
    println!("\nCOVID-19 India");
    println!("===============");
    println!(
        "States loaded: {} ({} records dropped)",
        report.total_states, report.dropped_records
    );

    if let Some(national) = &report.national {
        println!("\nNational totals:");
        println!("- Active:    {}", national.active);
        println!("- Confirmed: {}", national.confirmed);
        println!("- Recovered: {}", national.recovered);
        println!("- Deaths:    {}", national.deaths);
    }

    println!("\nTop states by {}:", report.ranked_by);
    for state in &report.top_states {
        println!(
            "- {} | active {} | confirmed {} | recovered {} | deaths {}",
            state.name, state.active, state.confirmed, state.recovered, state.deaths
        );
    }
}

fn build_headless_report(app: &App) -> HeadlessReport {
    let states = app.states();
    let metric = app.selection.metric();

    let national = states
        .iter()
        .find(|state| state.code == "TT")
        .map(HeadlessState::from);

    let mut regional: Vec<&EnrichedState> =
        states.iter().filter(|state| state.code != "TT").collect();
    regional.sort_by(|a, b| b.count(metric).cmp(&a.count(metric)));

    let top_states = regional
        .iter()
        .take(5)
        .map(|state| HeadlessState::from(*state))
        .collect();

    let dropped_records = app.feed_data().map_or(0, |data| data.dropped);

    HeadlessReport {
        total_states: states.len(),
        dropped_records,
        ranked_by: metric.as_str(),
        national,
        top_states,
        states: states.iter().map(HeadlessState::from).collect(),
    }
}

#[derive(serde::Serialize)]
struct HeadlessReport {
    total_states: usize,
    dropped_records: usize,
    ranked_by: &'static str,
    national: Option<HeadlessState>,
    top_states: Vec<HeadlessState>,
    states: Vec<HeadlessState>,
}

#[derive(serde::Serialize)]
struct HeadlessState {
    code: String,
    name: String,
    active: u64,
    confirmed: u64,
    recovered: u64,
    deaths: u64,
}

impl From<&EnrichedState> for HeadlessState {
    fn from(state: &EnrichedState) -> Self {
        Self {
            code: state.code.clone(),
            name: state.name.clone(),
            active: state.active,
            confirmed: state.confirmed,
            recovered: state.recovered,
            deaths: state.deaths,
        }
    }
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let mut feed_machine = FeedLoadMachine::new(FeedLoadState::Idle);

    // Kick off the single startup fetch; the loop below collects it.
    let client = app.actions.feed_client();
    let mut fetch_task = Some(tokio::spawn(async move { client.fetch().await }));
    if feed_machine
        .process_event(&FeedLoadEvent::Start, app)
        .is_err()
    {
        // Non-fatal state transition error
    }

    loop {
        // Advance the loading spinner
        app.update();

        // Draw the UI with better error context
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        // Handle events with improved error context
        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(width, _)) => {
                    app.prefs.set_viewport_width(width);
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events for now
                }
            }
        }

        // Collect the fetch result once the task settles
        if fetch_task
            .as_ref()
            .is_some_and(tokio::task::JoinHandle::is_finished)
        {
            if let Some(task) = fetch_task.take() {
                let load_event = match task.await {
                    Ok(Ok(document)) => FeedLoadEvent::Loaded(document),
                    Ok(Err(error)) => FeedLoadEvent::Error(error.to_string()),
                    Err(error) => FeedLoadEvent::Error(format!("fetch task failed: {error}")),
                };
                if feed_machine.process_event(&load_event, app).is_err() {
                    // Non-fatal state transition error
                }
            }
        }
    }
    Ok(())
}
