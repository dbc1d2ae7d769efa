//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.coursesmith/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::export::DEFAULT_FILE_NAME;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CourseConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    /// Schema document used when no course id is given.
    pub schema_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExportConfig {
    pub directory: Option<String>,
    pub file_name: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WebhookConfig {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "coursesmith.log";
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_file: PathBuf,
    pub schema_file: Option<PathBuf>,
    pub export_path: PathBuf,
    pub webhook_url: Option<String>,
    pub webhook_timeout: Duration,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub output: Option<PathBuf>,
    pub webhook: Option<String>,
    pub schema: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.coursesmith/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".coursesmith").join("config.toml"))
}

/// Where the settings came from. Reported by the caller once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from an existing file.
    File(PathBuf),
    /// No file existed; a commented default was written there (`error` if that failed).
    Generated { path: PathBuf, error: Option<String> },
    /// No home directory; built-in defaults only.
    Defaults,
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Generated { path, error: None } => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigSource::Generated {
                path,
                error: Some(e),
            } => warn!("Failed to write default config to {}: {}", path.display(), e),
            ConfigSource::Defaults => {
                warn!("Could not determine home directory, using default config")
            }
        }
    }
}

/// Load config from `~/.coursesmith/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CourseConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`. Nothing is logged here; call
/// [`ConfigSource::log`] after the logger is initialized.
pub fn load_config() -> Result<(CourseConfig, ConfigSource), ConfigError> {
    let Some(path) = config_path() else {
        return Ok((CourseConfig::default(), ConfigSource::Defaults));
    };
    load_or_generate(&path)
}

/// Same as [`load_config`] for an explicit path.
pub fn load_or_generate(path: &Path) -> Result<(CourseConfig, ConfigSource), ConfigError> {
    if !path.exists() {
        let error = generate_default_config(path).err().map(|e| e.to_string());
        let source = ConfigSource::Generated {
            path: path.to_path_buf(),
            error,
        };
        return Ok((CourseConfig::default(), source));
    }

    let config = load_config_from(path)?;
    Ok((config, ConfigSource::File(path.to_path_buf())))
}

/// Load config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<CourseConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# coursesmith Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "coursesmith.log"
# schema_file = "course-schema.json"   # Used when no --course-id is given

# [export]
# directory = "."                      # Or set COURSESMITH_OUTPUT env var (full path)
# file_name = "course-data.json"

# [webhook]
# url = "https://example.com/hooks/course"   # Or set COURSESMITH_WEBHOOK_URL env var
# timeout_secs = 30
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CourseConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env<F>(config: &CourseConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Export path: CLI → env → config dir/name → default
    let export_path = cli
        .output
        .clone()
        .or_else(|| env("COURSESMITH_OUTPUT").map(PathBuf::from))
        .unwrap_or_else(|| {
            let dir = config.export.directory.as_deref().unwrap_or(".");
            let name = config.export.file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME);
            Path::new(dir).join(name)
        });

    // Webhook URL: CLI → env → config. Blank values disable it.
    let webhook_url = cli
        .webhook
        .clone()
        .or_else(|| env("COURSESMITH_WEBHOOK_URL"))
        .or_else(|| config.webhook.url.clone())
        .filter(|url| !url.trim().is_empty());

    // Schema file: CLI → config
    let schema_file = cli
        .schema
        .clone()
        .or_else(|| config.general.schema_file.as_ref().map(PathBuf::from));

    ResolvedConfig {
        log_file: PathBuf::from(
            config
                .general
                .log_file
                .as_deref()
                .unwrap_or(DEFAULT_LOG_FILE),
        ),
        schema_file,
        export_path,
        webhook_url,
        webhook_timeout: Duration::from_secs(
            config
                .webhook
                .timeout_secs
                .unwrap_or(DEFAULT_WEBHOOK_TIMEOUT_SECS),
        ),
    }
}
