mod settings;

use config::{Config, File, Map};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

pub use settings::{ClientConfig, Environment};

/// Prefix of environment variables overriding file settings.
const ENV_PREFIX: &str = "SQUARE";

/// Custom error type for config loading.
#[square_derive::square_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads settings in three layers, later layers winning:
///
/// 1. **Defaults**: `T::default()`, so a partial file or no file at all still yields a
///    complete value.
/// 2. **File**: any format the `config` crate recognizes by extension. When `path` is `None`
///    the loader looks for an optional `square` file in the working directory; an explicit
///    path must exist.
/// 3. **Environment Overrides**: variables prefixed with `SQUARE__`. Nested keys are separated
///    by double underscores (`SQUARE__TIMEOUT_SECONDS` maps to `timeout_seconds`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or the merged settings do
/// not match `T`.
///
/// # Example
/// ```rust
/// use square_kernel::config::{ClientConfig, load_config};
///
/// let cfg: ClientConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(cfg.timeout_seconds > 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Serialize + Default,
{
    load_config_with_vars(path, None)
}

/// Same as [`load_config`], reading overrides from `vars` instead of the process environment
/// when given. Keys keep their `SQUARE__` prefix.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_vars<T>(
    path: Option<impl AsRef<Path>>,
    vars: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Serialize + Default,
{
    let defaults = Config::try_from(&T::default()).context("Failed to build defaults")?;

    let file = match &path {
        Some(p) => {
            info!("Loading config from {}", p.as_ref().display());
            File::from(p.as_ref()).required(true)
        },
        None => {
            info!("Loading config from defaults and optional `square` file");
            File::with_name("square").required(false)
        },
    };

    let config = Config::builder()
        .add_source(defaults)
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake)
                .source(vars),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
