use clap::ArgMatches;
use tracing::error;

use pickset_core::events;

pub mod helpers;

mod apply;
mod completions;
mod export;
mod restore;
mod sample_config;
mod show;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("show", sub_matches)) => show::handle_show_command(matches, sub_matches),
        Some(("apply", sub_matches)) => apply::handle_apply_command(matches, sub_matches),
        Some(("export", sub_matches)) => export::handle_export_command(matches, sub_matches),
        Some(("restore", sub_matches)) => restore::handle_restore_command(matches, sub_matches),
        Some(("sample-config", _)) => sample_config::handle_sample_config_command(),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}
