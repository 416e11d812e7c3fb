use snipcheck_core::api::{CliError, LoggingConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "snipcheck.log";

/// Installs the global subscriber. Logs go to stderr so `analyze` output on
/// stdout stays machine readable. `RUST_LOG` wins over `logging.level`.
///
/// Keep the returned guard alive until exit or buffered file output is lost.
pub fn init(cfg: &LoggingConfig) -> Result<Option<WorkerGuard>, CliError> {
    let filter = build_filter(cfg)?;
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    match &cfg.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()
                .map_err(|e| CliError::Logging(e.to_string()))?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init()
                .map_err(|e| CliError::Logging(e.to_string()))?;
            Ok(None)
        }
    }
}

fn build_filter(cfg: &LoggingConfig) -> Result<EnvFilter, CliError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&cfg.level)
            .map_err(|e| CliError::Logging(format!("invalid log level '{}': {e}", cfg.level))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_is_accepted() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let cfg = LoggingConfig {
            level: "snipcheck_core=debug,warn".into(),
            directory: None,
        };
        assert!(build_filter(&cfg).is_ok());
    }

    #[test]
    fn garbage_level_is_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let cfg = LoggingConfig {
            level: "snipcheck=loud".into(),
            directory: None,
        };
        assert!(matches!(build_filter(&cfg), Err(CliError::Logging(_))));
    }
}
