use std::io::Read;
use std::path::Path;

use clap::ArgMatches;
use tracing::{error, info, warn};

use pickset_core::config::{PicksetConfig, sample_config};
use pickset_core::{Command, CoreStore, Event, Store, events};

/// Resolve the catalog configuration from the global flags.
///
/// `--sample` wins, then `--config <path>`, then the config hierarchy. A
/// broken hierarchy falls back to defaults with a warning, but an empty
/// catalog is an error since there is nothing to select.
pub fn load_config(matches: &ArgMatches) -> Result<PicksetConfig, Box<dyn std::error::Error>> {
    if matches.get_flag("sample") {
        return Ok(sample_config());
    }

    let config = match matches.get_one::<String>("config") {
        Some(path) => PicksetConfig::load_file(Path::new(path)).inspect_err(|e| {
            eprintln!("Failed to load config '{}': {}", path, e);
            error!(event = "cli.config.load_failed", path = %path, error = %e);
        })?,
        None => load_config_with_warning(),
    };

    if config.categories.is_empty() {
        eprintln!(
            "No categories configured.\n\
             Tip: Add [[categories]] to ./.pickset/config.toml (see 'pickset sample-config') or pass --sample."
        );
        return Err("No categories configured".into());
    }

    Ok(config)
}

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> PicksetConfig {
    match PicksetConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.pickset/config.toml and ./.pickset/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            PicksetConfig::default()
        }
    }
}

pub fn build_store(config: &PicksetConfig) -> Result<CoreStore, Box<dyn std::error::Error>> {
    match CoreStore::new(config) {
        Ok(store) => {
            events::log_catalog_loaded(store.selection().catalog());
            Ok(store)
        }
        Err(e) => {
            eprintln!("Invalid catalog: {}", e);
            events::log_pickset_error(&e);
            Err(e.into())
        }
    }
}

/// Read a JSON array of commands from `path`, or stdin when `path` is `-`.
pub fn read_commands(path: &str) -> Result<Vec<Command>, Box<dyn std::error::Error>> {
    let content = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path, e))?
    };

    let commands: Vec<Command> = serde_json::from_str(&content).map_err(|e| {
        events::log_app_error(&e);
        format!("Invalid command file '{}': {}", path, e)
    })?;

    info!(
        event = "cli.commands_loaded",
        path = path,
        count = commands.len()
    );
    Ok(commands)
}

/// Dispatch `commands` in order, collecting every event.
///
/// Stops at the first failed dispatch (only possible with strict references).
pub fn dispatch_all(
    store: &mut CoreStore,
    commands: Vec<Command>,
) -> Result<Vec<Event>, Box<dyn std::error::Error>> {
    let mut all = Vec::new();
    for (index, cmd) in commands.into_iter().enumerate() {
        match store.dispatch(cmd) {
            Ok(produced) => all.extend(produced),
            Err(e) => {
                eprintln!("Command #{} failed: {}", index + 1, e);
                error!(event = "cli.dispatch_failed", index = index, error = %e);
                events::log_pickset_error(&e);
                return Err(e.into());
            }
        }
    }
    Ok(all)
}

/// One-line human description of an event.
pub fn describe_event(event: &Event) -> String {
    match event {
        Event::ItemSelected { category, item } => format!("+ {}/{}", category, item),
        Event::ItemUnselected { category, item } => format!("- {}/{}", category, item),
        Event::QueryChanged { category, query } if query.is_empty() => {
            format!("? {} filter cleared", category)
        }
        Event::QueryChanged { category, query } => format!("? {} filter '{}'", category, query),
        Event::DragStarted {
            category,
            item,
            source,
        } => format!("~ {}/{} drag from {:?}", category, item, source),
        Event::DragCancelled { reason } => format!("~ drag cancelled ({:?})", reason),
    }
}
