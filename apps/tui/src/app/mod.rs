// App module for covid-india-tui
// Handles application state and business logic

pub mod actions;
pub mod format;
pub mod input;
pub mod prefs;
pub mod selection;
pub mod state;

pub use input::handle_input;
pub use selection::{Selection, SelectionError};
pub use state::{App, AppScreen, FeedStatus, SortColumn};
