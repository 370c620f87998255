use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "covid-india-tui", version, about = "COVID-19 India dashboard")]
pub struct CliArgs {
    /// Print a feed summary and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the statistics feed URL
    #[arg(long = "feed-url", value_name = "URL")]
    pub feed_url: Option<String>,

    /// Override the preference file path
    #[arg(long, value_name = "PATH")]
    pub prefs: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.feed_url {
            std::env::set_var("FEED_URL", url);
        }
        if let Some(path) = &self.prefs {
            std::env::set_var("PREFS_PATH", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
