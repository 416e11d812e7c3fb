use serde::{Deserialize, Serialize};

use crate::sink::PersistMode;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub http_server: HttpServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub tools: ToolsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout_ms() -> u64 {
    60_000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// When set, logs are also written to a daily-rotated file in this directory.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_enabled")]
    pub enabled: bool,

    #[serde(default = "default_storage_url")]
    pub base_url: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_storage_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default)]
    pub persist: PersistMode,
}

fn default_storage_enabled() -> bool {
    true
}

fn default_storage_url() -> String {
    "http://localhost:8081/api/v1".to_string()
}

fn default_storage_timeout_ms() -> u64 {
    10_000
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: default_storage_enabled(),
            base_url: default_storage_url(),
            api_key: String::new(),
            timeout_ms: default_storage_timeout_ms(),
            persist: PersistMode::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub ruff: RuffConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuffConfig {
    #[serde(default = "default_ruff_program")]
    pub program: String,

    /// `--format` for older ruff releases, `--output-format` for current ones.
    #[serde(default = "default_ruff_format_flag")]
    pub format_flag: String,

    #[serde(default = "default_tool_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_issues_found_exit_code")]
    pub issues_found_exit_code: i32,

    /// Rule id prefixes reported as `error`; everything else is a `warning`.
    #[serde(default = "default_error_prefixes")]
    pub error_prefixes: Vec<String>,

    /// Where snippet artifacts are created. System temp dir when unset.
    #[serde(default)]
    pub artifact_dir: Option<String>,
}

fn default_ruff_program() -> String {
    "ruff".to_string()
}

fn default_ruff_format_flag() -> String {
    "--format".to_string()
}

fn default_tool_timeout_ms() -> u64 {
    30_000
}

fn default_issues_found_exit_code() -> i32 {
    1
}

fn default_error_prefixes() -> Vec<String> {
    vec!["E".to_string(), "F".to_string()]
}

impl Default for RuffConfig {
    fn default() -> Self {
        Self {
            program: default_ruff_program(),
            format_flag: default_ruff_format_flag(),
            timeout_ms: default_tool_timeout_ms(),
            issues_found_exit_code: default_issues_found_exit_code(),
            error_prefixes: default_error_prefixes(),
            artifact_dir: None,
        }
    }
}
