use clap::Parser;
use color_eyre::Result;

use covid_india_tui::app::App;
use covid_india_tui::cli::CliArgs;
use covid_india_tui::{config, event, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    config::init();

    // Initialize application state
    let mut app = App::new();
    let (width, _) = crossterm::terminal::size().unwrap_or((80, 24));
    app.prefs.set_viewport_width(width);
    app.initialize();

    // Run without a UI when asked for, or when stdout is not a terminal
    if args.headless || !is_terminal() {
        return event::run_headless(&mut app, args.json).await;
    }

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup(true, true);

    // Return the result
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
