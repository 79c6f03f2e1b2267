use crate::config::LoggingConfig;
use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. The terminal UI owns stdout and stderr, so
/// events only go to a file; without one, logging stays off.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let filter = env_filter(&config.level)?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| Error::Logging(err.to_string()))?;

    tracing::info!(path = %path.display(), level = %config.level, "logging initialized");
    Ok(true)
}

fn env_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|err| Error::Logging(format!("invalid level '{level}': {err}")))
}

#[cfg(test)]
mod tests {
    use super::{env_filter, init};
    use crate::config::LoggingConfig;
    use crate::error::Error;
    use std::fs;

    #[test]
    fn no_file_means_no_subscriber() {
        let installed = init(&LoggingConfig::default()).expect("init");
        assert!(!installed);
    }

    #[test]
    fn directives_are_parsed() {
        assert!(env_filter("info").is_ok());
        assert!(env_filter("personal_form=debug,warn").is_ok());
    }

    #[test]
    fn bad_directive_is_a_logging_error() {
        let err = env_filter("personal_form=loud").expect_err("unknown level");
        let Error::Logging(message) = err else {
            panic!("expected a logging error, got {err:?}");
        };
        assert!(message.contains("personal_form=loud"));
    }

    // The only test that installs the global subscriber.
    #[test]
    fn file_subscriber_writes_events() {
        let path = std::env::temp_dir().join(format!("personal-form-{}.log", std::process::id()));
        let _ = fs::remove_file(&path);

        let config = LoggingConfig {
            level: "info".to_string(),
            file: Some(path.clone()),
        };
        assert!(init(&config).expect("init"));

        let written = fs::read_to_string(&path).expect("log file");
        let _ = fs::remove_file(&path);
        assert!(written.contains("logging initialized"));
    }
}
