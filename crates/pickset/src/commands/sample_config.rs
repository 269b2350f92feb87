use tracing::info;

use pickset_core::config::sample_config;

pub(crate) fn handle_sample_config_command() -> Result<(), Box<dyn std::error::Error>> {
    let config = sample_config();
    print!("{}", toml::to_string_pretty(&config)?);

    info!(
        event = "cli.sample_config_completed",
        category_count = config.categories.len()
    );
    Ok(())
}
