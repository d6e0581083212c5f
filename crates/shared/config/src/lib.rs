//! # Configuration
//!
//! Settings for the serializer and the logger, loaded from an optional file and `VISTA__`
//! environment variables. Every section has working defaults, so an empty source is valid.

mod error;
mod loader;
mod settings;

pub use crate::error::{ConfigError, ConfigErrorExt};
pub use crate::loader::{ENV_PREFIX, load_config};
pub use crate::settings::{LoggingConfig, SerializerConfig, VistaConfig, VistaConfigInner};
