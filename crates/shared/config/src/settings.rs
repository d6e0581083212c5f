use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by the serializer and the logger.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VistaConfigInner {
    pub serializer: SerializerConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct VistaConfig {
    #[serde(flatten, default)]
    inner: Arc<VistaConfigInner>,
}

impl Deref for VistaConfig {
    type Target = VistaConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for VistaConfig {
    fn deref_mut(&mut self) -> &mut VistaConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Serializer behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SerializerConfig {
    /// Format used when the caller does not name one.
    pub default_format: String,
    /// Object nesting depth past which object-valued fields are skipped. `None` disables it.
    pub max_depth: Option<usize>,
    /// Hard nesting limit; exceeding it is an error rather than a skip.
    pub recursion_limit: usize,
    pub json_pretty: bool,
}

/// Logger setup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Application name, used as the log file prefix.
    pub name: String,
    pub level: String,
    pub console: bool,
    /// Write file output as JSON lines.
    pub json: bool,
    /// Directory for rolling log files. No file output when unset.
    pub path: Option<PathBuf>,
    /// Full `EnvFilter` directive, overrides `level` when set.
    pub env_filter: Option<String>,
    pub max_files: usize,
}

// --- Default ---

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            default_format: "json".to_owned(),
            max_depth: None,
            recursion_limit: 64,
            json_pretty: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            name: "vista".to_owned(),
            level: "info".to_owned(),
            console: true,
            json: false,
            path: None,
            env_filter: None,
            max_files: 7,
        }
    }
}
