use clap::ArgMatches;
use tracing::info;

use pickset_core::{Command, Store};

use super::helpers;
use super::show::print_state;

pub(crate) fn handle_restore_command(
    global: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = matches
        .get_one::<String>("query")
        .ok_or("Query argument is required")?;
    let json_output = matches.get_flag("json");

    info!(event = "cli.restore_started", json_output = json_output);

    let config = helpers::load_config(global)?;
    let mut store = helpers::build_store(&config)?;
    let events = store.dispatch(Command::RestoreQuery {
        query: query.clone(),
    })?;

    print_state(&store, None, json_output)?;

    info!(event = "cli.restore_completed", event_count = events.len());
    Ok(())
}
