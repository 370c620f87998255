// Feed module for covid-india-tui
// Loads the remote statistics document and joins it with the geocode table

pub mod client;
pub mod join;
pub mod models;

pub use client::{FeedClient, FeedError};
pub use join::{join_states, EnrichedState, JoinOutcome};
pub use models::{FeedDocument, RawStateStat, TimeSeriesEntry};
