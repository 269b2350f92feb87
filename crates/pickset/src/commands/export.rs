use clap::ArgMatches;
use tracing::{error, info};

use pickset_core::events;

use super::helpers;

pub(crate) fn handle_export_command(
    global: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.export_started", json_output = json_output);

    let config = helpers::load_config(global)?;
    let mut store = helpers::build_store(&config)?;

    if let Some(path) = matches.get_one::<String>("apply") {
        let commands = helpers::read_commands(path)?;
        helpers::dispatch_all(&mut store, commands)?;
    }

    let payload = match store.export() {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("Failed to export selection: {}", e);
            error!(event = "cli.export_failed", error = %e);
            events::log_pickset_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", payload.to_query_string(config.export.separator()));
    }

    info!(
        event = "cli.export_completed",
        field_count = payload.fields().len()
    );
    Ok(())
}
