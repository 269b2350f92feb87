use clap::ArgMatches;
use tracing::{error, info};

use pickset_core::{CategoryId, Command, CoreStore, Store, events};

use super::helpers;
use crate::table::PanelFormatter;

pub(crate) fn handle_show_command(
    global: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let category = matches.get_one::<String>("category");

    info!(
        event = "cli.show_started",
        category = category.map(String::as_str),
        json_output = json_output
    );

    let config = helpers::load_config(global)?;
    let mut store = helpers::build_store(&config)?;

    if let Some(category) = category
        && store.selection().catalog().category(category).is_none()
    {
        eprintln!("Category '{}' not found", category);
        error!(event = "cli.show_failed", category = %category);
        return Err(format!("Category '{}' not found", category).into());
    }

    if let (Some(category), Some(query)) = (category, matches.get_one::<String>("query")) {
        store.dispatch(Command::SetQuery {
            category: CategoryId::new(category.as_str()),
            query: query.clone(),
        })?;
    }

    print_state(&store, category.map(String::as_str), json_output)?;

    info!(event = "cli.show_completed");
    Ok(())
}

/// Print every category (or just `only`) as panels or as JSON views.
pub(crate) fn print_state(
    store: &CoreStore,
    only: Option<&str>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let ids: Vec<String> = match only {
        Some(id) => vec![id.to_string()],
        None => store
            .selection()
            .catalog()
            .categories()
            .map(|c| c.id().to_string())
            .collect(),
    };

    let mut views = Vec::with_capacity(ids.len());
    for id in &ids {
        match store.view(id) {
            Ok(view) => views.push(view),
            Err(e) => {
                events::log_pickset_error(&e);
                return Err(e.into());
            }
        }
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    for (index, view) in views.iter().enumerate() {
        if index > 0 {
            println!();
        }
        PanelFormatter::new(view).print_panel(view);
    }
    Ok(())
}
