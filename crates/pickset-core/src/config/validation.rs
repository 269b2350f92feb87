use crate::catalog::Catalog;
use crate::config::types::PicksetConfig;
use crate::errors::ConfigError;

/// Validate the configuration.
///
/// Checks engine and export settings, then builds the catalog once to catch
/// duplicate ids, unknown defaults and clashing export parameters.
pub fn validate_config(config: &PicksetConfig) -> Result<(), ConfigError> {
    if config.engine.max_query_chars() == 0 {
        return Err(ConfigError::Setting {
            key: "engine.max_query_chars",
            message: "must be greater than zero".to_string(),
        });
    }

    let separator = config.export.separator();
    if separator.is_empty() {
        return Err(ConfigError::Setting {
            key: "export.separator",
            message: "cannot be empty".to_string(),
        });
    }

    if separator.contains(['&', '=']) {
        return Err(ConfigError::Setting {
            key: "export.separator",
            message: format!("'{}' cannot contain '&' or '='", separator),
        });
    }

    Catalog::from_config(config)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::sample_config;
    use crate::config::types::{CategoryConfig, ItemConfig};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&PicksetConfig::default()).is_ok());
    }

    #[test]
    fn test_sample_config_is_valid() {
        assert!(validate_config(&sample_config()).is_ok());
    }

    #[test]
    fn test_zero_query_cap_rejected() {
        let mut config = PicksetConfig::default();
        config.engine.max_query_chars = Some(0);
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("max_query_chars"));
    }

    #[test]
    fn test_empty_separator_rejected() {
        let mut config = PicksetConfig::default();
        config.export.separator = Some(String::new());
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::Setting { .. })
        ));
    }

    #[test]
    fn test_query_syntax_separator_rejected() {
        let mut config = PicksetConfig::default();
        config.export.separator = Some("&".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_catalog_errors_surface() {
        let config = PicksetConfig {
            categories: vec![CategoryConfig {
                id: "region".to_string(),
                name: None,
                param: None,
                fallback: None,
                defaults: vec!["region9".to_string()],
                items: vec![ItemConfig::new("region1", "Europe")],
            }],
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::Catalog(_)));
    }
}
