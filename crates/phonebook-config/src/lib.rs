use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "phonebook";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_INPUT: &str = "phonebook_raw.csv";
pub const DEFAULT_OUTPUT: &str = "phonebook.csv";
pub const DEFAULT_DELIMITER: u8 = b',';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub delimiter: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid delimiter {0:?}: expected a single ASCII character")]
    InvalidDelimiter(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    delimiter: Option<String>,
}

/// Loads the config. An explicit path must exist; the default location is
/// optional and falls back to built-in values.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let (path, required) = match config_path {
        Some(path) if path.as_os_str().is_empty() => {
            return Err(ConfigError::InvalidConfigPath(path))
        }
        Some(path) => (path, true),
        None => match default_config_path() {
            Ok(path) => (path, false),
            Err(ConfigError::MissingHomeDir | ConfigError::InvalidConfigPath(_)) => {
                return Ok(AppConfig::default())
            }
            Err(err) => return Err(err),
        },
    };
    Ok(load_at_path(&path, required)?.unwrap_or_default())
}

/// `$XDG_CONFIG_HOME/phonebook/config.toml`, else `~/.config/phonebook/config.toml`.
pub fn default_config_path() -> Result<PathBuf> {
    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if dir.is_empty() => return Err(ConfigError::InvalidConfigPath(dir.into())),
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .ok_or(ConfigError::MissingHomeDir)?
            .join(".config"),
    };
    Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Parses a delimiter given as text (config file or command line).
pub fn parse_delimiter(raw: &str) -> Result<u8> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii() => Ok(ch as u8),
        _ => Err(ConfigError::InvalidDelimiter(raw.to_string())),
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(input) = parsed.input {
        config.input = input;
    }
    if let Some(output) = parsed.output {
        config.output = output;
    }
    if let Some(delimiter) = parsed.delimiter {
        config.delimiter = parse_delimiter(&delimiter)?;
    }

    Ok(config)
}
