use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{Config, ForecastSettings, LogSettings, ParameterOverrides};

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix of environment variables that override file settings,
/// e.g. `LISTING_FORECAST_FORECAST__PARAMETERS__HYPE_FACTOR=1.6`.
pub const ENV_PREFIX: &str = "LISTING_FORECAST";

/// Loads the application configuration.
///
/// Reads `path` (which must exist) or, when `None`, the optional `config.toml` in the
/// working directory, then layers `LISTING_FORECAST_*` environment variables on top
/// and deserializes the result into our strongly-typed `Config` struct.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    Ok(config)
}

/// Parses configuration from a TOML string, without environment overrides.
pub fn config_from_toml(toml: &str) -> Result<Config, ConfigError> {
    let config = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?
        .try_deserialize::<Config>()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{CoreError, Variant};

    #[test]
    fn empty_config_uses_extended_defaults() {
        let config = config_from_toml("").unwrap();
        assert_eq!(config.forecast.variant, Variant::Extended);
        assert!(config.forecast.enforce_bounds);
        assert_eq!(config.logging.level, "warn");

        let params = config.forecast.parameter_set().unwrap();
        assert_eq!(params, core_types::ParameterSet::extended_defaults());
    }

    #[test]
    fn file_overrides_apply_on_top_of_variant_defaults() {
        let config = config_from_toml(
            r#"
            [forecast]
            variant = "simple"
            launch_date = "2025-01-06"

            [forecast.parameters]
            hype_factor = 1.6
            new_users = 3000

            [logging]
            level = "debug"
            directory = "logs"
            "#,
        )
        .unwrap();

        let params = config.forecast.parameter_set().unwrap();
        assert_eq!(params.variant, Variant::Simple);
        assert_eq!(params.hype_factor, 1.6);
        assert_eq!(params.new_users, 3_000);
        assert_eq!(params.mau, 100_000);
        assert_eq!(
            config.forecast.launch_date,
            chrono::NaiveDate::from_ymd_opt(2025, 1, 6)
        );
        assert_eq!(config.logging.directory.as_deref(), Some(Path::new("logs")));
    }

    #[test]
    fn out_of_range_parameters_are_rejected_when_enforced() {
        let toml = r#"
            [forecast.parameters]
            conversion_rate = 25.0
        "#;
        let config = config_from_toml(toml).unwrap();
        match config.forecast.parameter_set() {
            Err(ConfigError::InvalidParameters(CoreError::OutOfRange { field, .. })) => {
                assert_eq!(field, "conversionRate")
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }

        let mut relaxed = config.forecast.clone();
        relaxed.enforce_bounds = false;
        assert_eq!(relaxed.parameter_set().unwrap().conversion_rate_pct, 25.0);
    }

    #[test]
    fn later_overrides_win_when_merged() {
        let file = ParameterOverrides {
            mau: Some(200_000),
            hype_factor: Some(1.4),
            ..Default::default()
        };
        let flags = ParameterOverrides {
            hype_factor: Some(2.0),
            ..Default::default()
        };
        let merged = file.merge(flags);
        assert_eq!(merged.mau, Some(200_000));
        assert_eq!(merged.hype_factor, Some(2.0));
        assert_eq!(merged.avg_trade, None);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = load_config(Some(Path::new("does-not-exist.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
