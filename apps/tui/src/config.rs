use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_FEED_URL: &str = "https://data.covid19india.org/data.json";

/// Loads environment variables from a .env file, if present.
pub fn init() {
    dotenv().ok();
}

/// The statistics endpoint, overridable via `FEED_URL`.
pub fn feed_url() -> String {
    env::var("FEED_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string())
}

/// Where the dark-mode flag persists, overridable via `PREFS_PATH`.
pub fn prefs_path() -> PathBuf {
    env::var("PREFS_PATH").map_or_else(|_| PathBuf::from("./.covid_tui_prefs.json"), PathBuf::from)
}
