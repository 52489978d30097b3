//! Configuration system for the `CorpSync` auth server.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/corpsync/config.toml`)
//! 4. Compiled defaults
//!
//! The token-signing secret is the exception: it has no default and no
//! config-file fallback. A missing `CORPSYNC_JWT_SECRET` is a fatal
//! startup error, never a silently generated value.

use std::path::PathBuf;

/// Default bind address, matching the original deployment port.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Default credential file path, relative to the working directory.
const DEFAULT_CREDENTIALS_PATH: &str = "db.json";

/// Errors that can occur when loading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// No token-signing secret was provided.
    #[error("no token-signing secret: set CORPSYNC_JWT_SECRET or pass --jwt-secret")]
    MissingJwtSecret,
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure for the server.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ServerConfigFile {
    server: ServerFileSection,
}

/// `[server]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ServerFileSection {
    bind_addr: Option<String>,
    credentials_path: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// CLI arguments
// ---------------------------------------------------------------------------

/// CLI arguments for the auth server.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "CorpSync authentication server")]
pub struct CliArgs {
    /// Address to bind the server to.
    #[arg(short, long, env = "CORPSYNC_ADDR")]
    pub bind: Option<String>,

    /// Path to config file (default: `~/.config/corpsync/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the JSON credential file.
    #[arg(long, env = "CORPSYNC_DB")]
    pub credentials: Option<PathBuf>,

    /// Secret used to sign and verify session tokens. Required.
    #[arg(long, env = "CORPSYNC_JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: Option<String>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "CORPSYNC_LOG")]
    pub log_level: String,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Fully resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to (e.g., `0.0.0.0:5000`).
    pub bind_addr: String,
    /// Path to the JSON credential file.
    pub credentials_path: PathBuf,
    /// Token-signing secret.
    pub jwt_secret: String,
    /// Log level filter string.
    pub log_level: String,
}

impl ServerConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// If no `--config` is given, the default path is tried and a missing
    /// file is treated as empty config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the explicit config file cannot be read
    /// or parsed, or if no token-signing secret was provided.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Self::resolve(cli, &file)
    }

    /// Resolve a `ServerConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default. The secret comes from the CLI/env
    /// only and has no default.
    fn resolve(cli: &CliArgs, file: &ServerConfigFile) -> Result<Self, ConfigError> {
        let jwt_secret = cli
            .jwt_secret
            .clone()
            .ok_or(ConfigError::MissingJwtSecret)?;

        Ok(Self {
            bind_addr: cli
                .bind
                .clone()
                .or_else(|| file.server.bind_addr.clone())
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            credentials_path: cli
                .credentials
                .clone()
                .or_else(|| file.server.credentials_path.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CREDENTIALS_PATH)),
            jwt_secret,
            log_level: cli.log_level.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Load and parse a TOML config file for the server.
fn load_config_file(
    explicit_path: Option<&std::path::Path>,
) -> Result<ServerConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(ServerConfigFile::default());
        };
        config_dir.join("corpsync").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ServerConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
