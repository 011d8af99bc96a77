//! Configuration loading and proof configuration resolution
//!
//! Every field is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback, where one exists)
//!
//! `dlp_id` has no compiled default; a run without one is a configuration error.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Default directory scanned for uploaded data files
pub const DEFAULT_INPUT_DIR: &str = "/input";

/// Default directory receiving `results.json`
pub const DEFAULT_OUTPUT_DIR: &str = "/output";

/// Environment variable names consulted during resolution
pub const ENV_DLP_ID: &str = "DLP_ID";
pub const ENV_INPUT_DIR: &str = "INPUT_DIR";
pub const ENV_OUTPUT_DIR: &str = "OUTPUT_DIR";
pub const ENV_USER_EMAIL: &str = "USER_EMAIL";
pub const ENV_VALIDATION_POLICY: &str = "VALIDATION_POLICY";

const CONFIG_DIR_NAME: &str = "poc-proof";
const CONFIG_FILE_NAME: &str = "config.toml";

/// How each entry of the input directory is judged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Parse each file as JSON and check the record schema
    #[default]
    Content,
    /// Accept any entry with a `.json` extension, ignoring content
    Extension,
}

impl ValidationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationPolicy::Content => "content",
            ValidationPolicy::Extension => "extension",
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "content" => Ok(ValidationPolicy::Content),
            "extension" => Ok(ValidationPolicy::Extension),
            other => Err(Error::Config(format!(
                "Unknown validation policy '{}' (expected 'content' or 'extension')",
                other
            ))),
        }
    }
}

/// Logging section of the TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// On-disk TOML configuration; every field is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub dlp_id: Option<u64>,
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub user_email: Option<String>,
    pub policy: Option<ValidationPolicy>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TomlConfig {
    /// Load and parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read TOML failed ({}): {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Parse TOML failed ({}): {}", path.display(), e)))
    }
}

/// Validated configuration for one proof run
///
/// Construction goes through [`ProofConfig::new`], so a value of this type
/// always satisfies the policy requirements (e.g. the extension policy
/// always carries a user email).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofConfig {
    dlp_id: u64,
    input_dir: PathBuf,
    output_dir: PathBuf,
    user_email: Option<String>,
    policy: ValidationPolicy,
}

impl ProofConfig {
    pub fn new(
        dlp_id: u64,
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        user_email: Option<String>,
        policy: ValidationPolicy,
    ) -> Result<Self> {
        let input_dir = input_dir.into();
        let output_dir = output_dir.into();

        if input_dir.as_os_str().is_empty() {
            return Err(Error::Config("input_dir must not be empty".to_string()));
        }
        if output_dir.as_os_str().is_empty() {
            return Err(Error::Config("output_dir must not be empty".to_string()));
        }

        let user_email = user_email.filter(|e| !e.trim().is_empty());
        if policy == ValidationPolicy::Extension && user_email.is_none() {
            return Err(Error::Config(
                "user_email is required when the extension validation policy is selected"
                    .to_string(),
            ));
        }

        Ok(Self {
            dlp_id,
            input_dir,
            output_dir,
            user_email,
            policy,
        })
    }

    pub fn dlp_id(&self) -> u64 {
        self.dlp_id
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn user_email(&self) -> Option<&str> {
        self.user_email.as_deref()
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }
}

/// Values supplied on the command line (highest priority tier)
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub dlp_id: Option<u64>,
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub user_email: Option<String>,
    pub policy: Option<ValidationPolicy>,
}

/// Resolves a [`ProofConfig`] from CLI, environment, TOML and defaults
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    config_file: Option<PathBuf>,
}

impl ConfigResolver {
    /// Resolver that looks for the TOML file in the platform config directory
    pub fn new() -> Self {
        Self { config_file: None }
    }

    /// Resolver bound to an explicit TOML file (must exist)
    pub fn with_config_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_file: Some(path.into()),
        }
    }

    /// Load the TOML tier
    ///
    /// An explicitly requested file must exist and parse. The platform default
    /// file is optional: when absent, empty defaults are used.
    pub fn load_toml(&self) -> Result<TomlConfig> {
        if let Some(path) = &self.config_file {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
        }

        match self.config_path() {
            Some(path) => TomlConfig::load(&path),
            None => Ok(TomlConfig::default()),
        }
    }

    /// TOML file that [`load_toml`](Self::load_toml) reads, if any
    ///
    /// An explicit file is returned as given. The platform default is
    /// returned only when it exists. Callers log this once tracing is set up,
    /// since the TOML file itself chooses the log level.
    pub fn config_path(&self) -> Option<PathBuf> {
        match &self.config_file {
            Some(path) => Some(path.clone()),
            None => default_config_path().filter(|p| p.exists()),
        }
    }

    /// Merge all tiers into a validated [`ProofConfig`]
    pub fn resolve(&self, cli: &ConfigOverrides, toml: &TomlConfig) -> Result<ProofConfig> {
        let env_dlp_id = env_value(ENV_DLP_ID)
            .map(|v| {
                v.trim().parse::<u64>().map_err(|_| {
                    Error::Config(format!("{} must be an unsigned integer, got '{}'", ENV_DLP_ID, v))
                })
            })
            .transpose()?;
        let env_policy = env_value(ENV_VALIDATION_POLICY)
            .map(|v| v.parse::<ValidationPolicy>())
            .transpose()?;

        let dlp_id = pick("dlp_id", cli.dlp_id, env_dlp_id, toml.dlp_id).ok_or_else(|| {
            Error::Config(format!(
                "dlp_id not configured. Provide one of:\n\
                 1. Command line: --dlp-id <ID>\n\
                 2. Environment: {}=<ID>\n\
                 3. TOML config: dlp_id = <ID>",
                ENV_DLP_ID
            ))
        })?;

        let input_dir = pick(
            "input_dir",
            cli.input_dir.clone(),
            env_value(ENV_INPUT_DIR).map(PathBuf::from),
            toml.input_dir.clone(),
        )
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));

        let output_dir = pick(
            "output_dir",
            cli.output_dir.clone(),
            env_value(ENV_OUTPUT_DIR).map(PathBuf::from),
            toml.output_dir.clone(),
        )
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let user_email = pick(
            "user_email",
            cli.user_email.clone(),
            env_value(ENV_USER_EMAIL),
            toml.user_email.clone(),
        );

        let policy = pick("policy", cli.policy, env_policy, toml.policy).unwrap_or_default();

        ProofConfig::new(dlp_id, input_dir, output_dir, user_email, policy)
    }
}

/// Platform config file location (`<config_dir>/poc-proof/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Read a non-blank environment variable
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// First present value by tier priority
fn pick<T>(field: &str, cli: Option<T>, env: Option<T>, toml: Option<T>) -> Option<T> {
    let (value, source) = if let Some(v) = cli {
        (v, "command line")
    } else if let Some(v) = env {
        (v, "environment")
    } else if let Some(v) = toml {
        (v, "TOML config")
    } else {
        return None;
    };
    debug!("{} resolved from {}", field, source);
    Some(value)
}
