//! Application configuration loading
//!
//! Sources, lowest precedence first:
//! 1. The preset for the running environment (`AppConfig::for_environment`)
//! 2. An optional `config/<environment>.toml` file
//! 3. Explicit environment variables (after `.env` has been loaded)

use config::{Config, ConfigError, File};
use sh_shared::config::{AppConfig, Environment};

/// Load the full configuration for the environment named by `ENVIRONMENT`
pub fn load() -> Result<AppConfig, ConfigError> {
    let environment = Environment::from_env();
    let preset = AppConfig::for_environment(environment);
    let merged = merge_file(preset, environment.config_file())?;
    let config = AppConfig::from_env_or(merged);
    config.validate().map_err(ConfigError::Message)?;
    Ok(config)
}

/// Layer the TOML file at `path` over `base`
///
/// A missing file leaves `base` untouched. The environment itself is never
/// taken from the file.
pub fn merge_file(base: AppConfig, path: &str) -> Result<AppConfig, ConfigError> {
    let environment = base.environment;
    let smtp_password = base.mail.smtp_password.clone();

    let mut merged: AppConfig = Config::builder()
        .add_source(Config::try_from(&base)?)
        .add_source(File::with_name(path).required(false))
        .build()?
        .try_deserialize()?;

    merged.environment = environment;
    // Secrets are not serialized, so the preset's value has to be carried over
    if merged.mail.smtp_password.is_none() {
        merged.mail.smtp_password = smtp_password;
    }

    Ok(merged)
}
