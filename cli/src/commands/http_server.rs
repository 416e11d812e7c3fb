//! `serve` command handler.

use std::sync::Arc;
use std::time::Duration;

use snipcheck_core::api::{AppContext, CliError};
use tokio::sync::broadcast;

use crate::commands::cli::ServeArgs;
use crate::http::{server, AppState};

/// CLI flags win over config.
pub fn server_config(args: &ServeArgs, ctx: &AppContext) -> server::ServerConfig {
    let config = &ctx.cfg().http_server;
    server::ServerConfig {
        host: args.host.clone().unwrap_or_else(|| config.host.clone()),
        port: args.port.unwrap_or(config.port),
        request_timeout: Duration::from_millis(config.request_timeout_ms),
    }
}

pub async fn handle_http_server(args: ServeArgs, ctx: &AppContext) -> Result<(), CliError> {
    let config = server_config(&args, ctx);

    let dispatcher = ctx.build_dispatcher()?;
    tracing::info!(
        languages = ?dispatcher.registry().languages(),
        "analysis dispatcher ready"
    );

    let (shutdown_tx, _) = broadcast::channel(1);
    let state = AppState::new(Arc::new(dispatcher), shutdown_tx);

    server::start_server(config, state)
        .await
        .map_err(|e| CliError::Command(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use snipcheck_core::api::{AnalysisDispatcher, AppConfig, CoreError, ServicesFactory};

    struct NoServices;

    impl ServicesFactory for NoServices {
        fn build_dispatcher(&self, _cfg: &AppConfig) -> Result<AnalysisDispatcher, CoreError> {
            Err(CoreError::Dependency("unused".into()))
        }
    }

    fn ctx() -> AppContext {
        let mut cfg = AppConfig::default();
        cfg.http_server.host = "0.0.0.0".into();
        cfg.http_server.port = 7000;
        AppContext::new(cfg, Arc::new(NoServices))
    }

    #[test]
    fn config_fills_missing_flags() {
        let c = server_config(&ServeArgs { host: None, port: None }, &ctx());
        assert_eq!(c.host, "0.0.0.0");
        assert_eq!(c.port, 7000);
        assert_eq!(c.request_timeout, Duration::from_millis(60_000));
    }

    #[test]
    fn flags_override_config() {
        let args = ServeArgs {
            host: Some("127.0.0.1".into()),
            port: Some(8080),
        };
        let c = server_config(&args, &ctx());
        assert_eq!(c.host, "127.0.0.1");
        assert_eq!(c.port, 8080);
    }

    #[tokio::test]
    async fn factory_failure_is_reported() {
        let err = handle_http_server(ServeArgs { host: None, port: None }, &ctx())
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::Dependency(_))));
    }
}
