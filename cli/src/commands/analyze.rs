//! `analyze` command handler: one request, JSON on stdout.

use std::path::Path;

use snipcheck_core::api::{AnalysisRequest, AnalysisResponse, AppContext, CliError, PersistMode};
use snipcheck_core::language::language_for_extension;
use tokio::io::AsyncReadExt;

use crate::commands::cli::AnalyzeArgs;

/// Returns the process exit code: 0 for a clean response, 1 when it carries an error.
pub async fn handle_analyze(args: AnalyzeArgs, ctx: &AppContext) -> Result<i32, CliError> {
    let request = build_request(&args).await?;

    // The process exits right after printing, so a background save would be lost.
    let mut cfg = ctx.cfg().clone();
    if args.no_persist {
        cfg.storage.enabled = false;
    } else {
        cfg.storage.persist = PersistMode::Inline;
    }

    let dispatcher = ctx.with_cfg(cfg).build_dispatcher()?;
    let response = dispatcher.analyze(&request).await?;

    let out = render(&response)?;
    println!("{out}");
    Ok(exit_code(&response))
}

async fn build_request(args: &AnalyzeArgs) -> Result<AnalysisRequest, CliError> {
    let code = match (&args.code, &args.file) {
        (Some(code), _) => code.clone(),
        (None, Some(path)) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| CliError::Input {
                    path: path.clone(),
                    source,
                })?
        }
        (None, None) => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .map_err(|source| CliError::Input {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            buf
        }
    };

    let mut request = AnalysisRequest::new(code);
    request.language = args
        .language
        .clone()
        .or_else(|| args.file.as_deref().and_then(language_from_path));
    Ok(request)
}

fn language_from_path(path: &str) -> Option<String> {
    let ext = Path::new(path).extension()?.to_str()?;
    language_for_extension(ext).map(str::to_string)
}

fn render(response: &AnalysisResponse) -> Result<String, CliError> {
    serde_json::to_string_pretty(response)
        .map_err(|e| CliError::Command(format!("failed to encode response: {e}")))
}

fn exit_code(response: &AnalysisResponse) -> i32 {
    if response.is_success() {
        0
    } else {
        1
    }
}
