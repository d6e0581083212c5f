use vista_config::LoggingConfig;
use vista_logger::{Logger, LoggerError};

#[test]
fn second_logger_in_a_process_is_rejected() {
    let config = LoggingConfig { name: "vista-first".into(), ..LoggingConfig::default() };
    let first = Logger::init_from(&config).unwrap();
    assert!(!first.has_file_output());

    let err = Logger::builder().name("vista-second").init().unwrap_err();
    assert!(matches!(err, LoggerError::Subscriber { .. }));
    assert!(err.to_string().starts_with("Subscriber already installed"));
}
