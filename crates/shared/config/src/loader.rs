use crate::error::{ConfigErrorExt, Result};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "VISTA";

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Defaults**: Every field of `T` falls back to its `Default` (`#[serde(default)]`).
/// 2. **Base File**: Loads settings from `path` when given. The format follows the extension
///    (`vista.toml`, `vista.json`, ...). A given file must exist.
/// 3. **Environment Overrides**: Overlays values from environment variables prefixed with
///    `VISTA__`. Nested structures are accessed using double underscores
///    (e.g., `VISTA__SERIALIZER__MAX_DEPTH` maps to `serializer.max_depth`).
///
/// # Errors
/// This function will return an error if:
/// * The specified configuration file cannot be found or parsed.
/// * The merged settings do not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use vista_config::{VistaConfig, load_config};
///
/// let cfg: VistaConfig = load_config(None::<&str>).unwrap_or_default();
/// assert_eq!(cfg.serializer.default_format, "json");
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        let path = path.as_ref();
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
