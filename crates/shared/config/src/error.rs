use std::borrow::Cow;

/// Custom error type for config loading.
#[vista_derive::vista_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}
