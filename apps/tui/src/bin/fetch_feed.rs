//! Diagnostic binary: fetch the feed, run the join, print what happened.

use color_eyre::Result;
use covid_india_tui::feed::{join_states, FeedClient};
use covid_india_tui::{config, geo};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    config::init();

    let client = FeedClient::new(config::feed_url());
    println!("Fetching {}", client.url());

    let document = client.fetch().await?;
    println!(
        "Feed: {} statewise records, {} time-series entries",
        document.statewise.len(),
        document.cases_time_series.len()
    );

    let outcome = join_states(&document.statewise, &geo::LATLONG);
    println!(
        "Join: {} enriched states, {} records dropped",
        outcome.states.len(),
        outcome.dropped
    );

    for state in outcome.states.iter().take(5) {
        println!(
            "- {} ({}) at ({:.2}, {:.2}): {} confirmed",
            state.name, state.code, state.lat, state.lng, state.confirmed
        );
    }

    Ok(())
}
