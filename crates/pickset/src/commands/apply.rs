use clap::ArgMatches;
use tracing::info;

use super::helpers;
use super::show::print_state;

pub(crate) fn handle_apply_command(
    global: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = matches
        .get_one::<String>("file")
        .ok_or("File argument is required")?;
    let json_output = matches.get_flag("json");

    info!(
        event = "cli.apply_started",
        path = %path,
        json_output = json_output
    );

    let mut config = helpers::load_config(global)?;
    if matches.get_flag("strict") {
        config.engine.strict_references = true;
    }
    let mut store = helpers::build_store(&config)?;

    let commands = helpers::read_commands(path)?;
    let command_count = commands.len();
    let events = helpers::dispatch_all(&mut store, commands)?;

    if json_output {
        #[derive(serde::Serialize)]
        struct ApplyOutput<'a> {
            events: &'a [pickset_core::Event],
            summaries: Vec<pickset_core::SelectionSummary>,
            query: Option<String>,
        }

        let output = ApplyOutput {
            events: &events,
            summaries: store.summaries(),
            query: store.query_string().ok(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        if events.is_empty() {
            println!("No changes.");
        }
        for event in &events {
            println!("{}", helpers::describe_event(event));
        }
        println!();
        print_state(&store, None, false)?;
    }

    info!(
        event = "cli.apply_completed",
        command_count = command_count,
        event_count = events.len()
    );
    Ok(())
}
