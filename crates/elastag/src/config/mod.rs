//! Layered loading of store options: a configuration file overlaid with `ELASTAG__`
//! environment variables.

use config::{Config, Environment, File};
use elastag_store::StoreOptions;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

const DEFAULT_CONFIG_NAME: &str = "elastag";
const ENV_PREFIX: &str = "ELASTAG";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Adds `.context(...)` to configuration results.
pub trait ConfigErrorExt<T> {
    /// Wraps the error into [`ConfigError`] with the given context.
    ///
    /// # Errors
    /// Returns the wrapped error.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for ConfigError {
    #[inline]
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Loads a configuration structure from a file with environment overrides.
///
/// Sources, later ones overriding earlier ones:
/// 1. `path` when given, which must exist. Without a path, an `elastag.*` file in the
///    current working directory is read if there is one.
/// 2. Variables prefixed with `ELASTAG__`. Nested fields use double underscores
///    (e.g. `ELASTAG__STORE__TIE_BREAK` maps to `store.tie_break`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or the merged sources do
/// not match `T`.
///
/// # Example
/// ```rust
/// use elastag::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     rules: Vec<String>,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/missing")).unwrap_or_default();
/// assert!(cfg.rules.is_empty());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let explicit: Option<&Path> = path.as_ref().map(|path| path.as_ref());
    let file = match explicit {
        Some(path) => {
            info!(path = %path.display(), "Loading elastag config");
            File::from(path).required(true)
        },
        None => {
            debug!(name = DEFAULT_CONFIG_NAME, "Looking for optional elastag config");
            File::with_name(DEFAULT_CONFIG_NAME).required(false)
        },
    };

    Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

/// Loads [`StoreOptions`] the same way as [`load_config`].
///
/// Fields absent from both the file and the environment keep their defaults, so with no
/// path, no `elastag.*` file and no `ELASTAG__*` variables this yields
/// [`StoreOptions::default`].
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or a source holds an unknown
/// tie-break policy or a malformed capacity.
pub fn load_options(path: Option<impl AsRef<Path>>) -> Result<StoreOptions, ConfigError> {
    load_config(path)
}
