use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{Overrides, ProbeConfig, ProbeTarget};

/// Base name of the optional config file looked up in the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "dbprobe";

/// Loads the probe configuration.
///
/// Reads `dbprobe.toml` from the working directory if it exists (or the file at
/// `path`, which then must exist), then layers `DBPROBE_*` environment
/// variables on top. Anything missing falls back to the defaults.
pub fn load_config(path: Option<&Path>) -> Result<ProbeConfig, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };
    build(file, environment())
}

/// `DBPROBE_SCHEMA`, `DBPROBE_CONNECT_TIMEOUT_SECS`, ...
fn environment() -> config::Environment {
    config::Environment::with_prefix("DBPROBE")
        .prefix_separator("_")
        .try_parsing(true)
}

fn build<S>(file: S, env: config::Environment) -> Result<ProbeConfig, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let builder = config::Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?;

    let config = builder.try_deserialize::<ProbeConfig>()?;
    tracing::debug!(schema = %config.schema, probes = config.probes.len(), "Configuration loaded");

    Ok(config)
}
