use std::borrow::Cow;

/// Failures while installing the process-wide tracing subscriber.
#[vista_derive::vista_error]
pub enum LoggerError {
    /// `tracing-appender` could not open the rotating log file.
    #[error("Cannot open log file{}: {source}", format_context(.context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// Another subscriber owns the global dispatcher.
    #[error("Subscriber already installed{}: {source}", format_context(.context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Cannot prepare log directory{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Logging settings that cannot produce any output, or cannot be parsed.
    #[error("Invalid logging settings{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Logger failure{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
