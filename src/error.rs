//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("greeting error: {0}")]
    Greeting(String),

    #[error("usage error: {0}")]
    Usage(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn config_error_display() {
        let e = AppError::Config("missing field".into());
        assert!(e.to_string().starts_with("config error"));
        assert!(e.to_string().contains("missing field"));
    }

    #[test]
    fn greeting_error_display() {
        let e = AppError::Greeting("unknown greeting 'howdy'".into());
        assert!(e.to_string().contains("howdy"));
    }

    #[test]
    fn usage_error_display() {
        let e = AppError::Usage("unexpected argument 'extra'".into());
        assert_eq!(e.to_string(), "usage error: unexpected argument 'extra'");
    }

    #[test]
    fn logger_error_is_std_error() {
        let e = AppError::Logger("unrecognised log level: 'verbose'".into());
        assert!(e.to_string().starts_with("logger error"));
        let _: &dyn Error = &e;
    }
}
