use std::path::Path;
use std::sync::Arc;

use clap::Parser;
mod commands;
mod http;
mod logging;
use commands::{analyze, cli, http_server};
use snipcheck_core::api::{AppConfig, AppContext, CliError};
use snipcheck_core::config;
use snipcheck_plugins::PluginServicesFactory;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let args = cli::Args::parse();

    let cfg = load_config(args.config.as_deref())?;
    let log_guard = logging::init(&cfg.logging)?;
    let ctx = AppContext::new(cfg, Arc::new(PluginServicesFactory));

    match args.command {
        cli::Commands::Serve(serve_args) => http_server::handle_http_server(serve_args, &ctx).await,
        cli::Commands::Analyze(analyze_args) => {
            let exit = analyze::handle_analyze(analyze_args, &ctx).await?;
            drop(log_guard);
            std::process::exit(exit);
        }
    }
}

fn load_config(path: Option<&str>) -> Result<AppConfig, CliError> {
    let cfg = match path {
        Some(path) => {
            let mut cfg = config::load_from(Path::new(path))?;
            config::apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
            cfg
        }
        None => config::load_default()?,
    };
    Ok(cfg)
}
