use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::AppConfig;

const CONFIG_FILE: &str = "config.toml";

/// `./config.toml`, then `~/.snipcheck/config.toml`, then defaults; env vars
/// are applied on top in every case.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    let mut cfg = match candidate_paths().into_iter().find(|p| p.exists()) {
        Some(path) => load_from(&path)?,
        None => AppConfig::default(),
    };
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    Ok(cfg)
}

pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let display = path.display().to_string();
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: display.clone(),
        source,
    })?;
    toml::from_str::<AppConfig>(&s).map_err(|source| ConfigError::Parse {
        path: display,
        source,
    })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".snipcheck").join(CONFIG_FILE));
    }
    paths
}

/// Blank values are ignored.
pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = get("SNIPCHECK_HOST") {
        cfg.http_server.host = v;
    }
    if let Some(v) = get("SNIPCHECK_PORT") {
        cfg.http_server.port = v.trim().parse().map_err(|_| ConfigError::EnvInvalid {
            key: "SNIPCHECK_PORT".to_string(),
            value: v.clone(),
        })?;
    }
    if let Some(v) = get("SNIPCHECK_LOG_LEVEL") {
        cfg.logging.level = v;
    }
    if let Some(v) = get("SNIPCHECK_STORAGE_URL") {
        cfg.storage.base_url = v;
    }
    if let Some(v) = get("SNIPCHECK_STORAGE_API_KEY") {
        cfg.storage.api_key = v;
    }
    if let Some(v) = get("SNIPCHECK_RUFF_PROGRAM") {
        cfg.tools.ruff.program = v;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::PersistMode;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            f,
            r#"
[http_server]
port = 9090

[storage]
enabled = false
persist = "inline"

[tools.ruff]
format_flag = "--output-format"
"#
        )
        .unwrap();

        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.http_server.port, 9090);
        assert_eq!(cfg.http_server.host, "127.0.0.1");
        assert!(!cfg.storage.enabled);
        assert_eq!(cfg.storage.persist, PersistMode::Inline);
        assert_eq!(cfg.storage.base_url, "http://localhost:8081/api/v1");
        assert_eq!(cfg.tools.ruff.format_flag, "--output-format");
        assert_eq!(cfg.tools.ruff.program, "ruff");
        assert_eq!(cfg.tools.ruff.error_prefixes, vec!["E", "F"]);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[http_server\nport = ").unwrap();
        assert!(matches!(
            load_from(f.path()).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }

    #[test]
    fn env_overrides_apply_and_blank_values_are_ignored() {
        let env: HashMap<&str, &str> = [
            ("SNIPCHECK_PORT", "7000"),
            ("SNIPCHECK_STORAGE_URL", "http://storage:9000/api/v1"),
            ("SNIPCHECK_RUFF_PROGRAM", "  "),
        ]
        .into_iter()
        .collect();

        let mut cfg = AppConfig::default();
        apply_env_overrides(&mut cfg, |k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.http_server.port, 7000);
        assert_eq!(cfg.storage.base_url, "http://storage:9000/api/v1");
        assert_eq!(cfg.tools.ruff.program, "ruff");
    }

    #[test]
    fn bad_port_is_rejected() {
        let mut cfg = AppConfig::default();
        let err = apply_env_overrides(&mut cfg, |k| {
            (k == "SNIPCHECK_PORT").then(|| "eighty".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::EnvInvalid { .. }));
    }
}
