use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info, warn};

use super::DaemonConfig;

/// Config path used when none is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "sign.toml";

/// Default configuration compiled into the binary
pub const EMBEDDED_CONFIG: &str = include_str!("../../sign.toml");

/// Configuration loading errors
#[derive(Debug)]
pub enum ConfigError {
    /// Reading the file failed
    Io(io::Error),
    /// Not valid TOML, or a key has the wrong type
    Parse(toml::de::Error),
    /// Parsed, but the values are unusable
    Invalid(ledsign_core::config::ConfigError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config: {}", e),
            ConfigError::Parse(e) => write!(f, "invalid config: {}", e),
            ConfigError::Invalid(e) => write!(f, "invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Parse and validate a configuration file's contents
pub fn parse_config(text: &str) -> Result<DaemonConfig, ConfigError> {
    let config: DaemonConfig = toml::from_str(text)?;
    config.sign.validate().map_err(ConfigError::Invalid)?;
    Ok(config)
}

/// Load the configuration at `path`
///
/// A missing file is not an error: the embedded defaults are used.
pub fn load(path: &Path) -> Result<DaemonConfig, ConfigError> {
    let config = match fs::read_to_string(path) {
        Ok(text) => {
            debug!("read {} bytes from {}", text.len(), path.display());
            parse_config(&text)?
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("{} not found, using built-in defaults", path.display());
            parse_config(EMBEDDED_CONFIG)?
        }
        Err(e) => return Err(e.into()),
    };

    log_config_summary(&config);
    Ok(config)
}

fn log_config_summary(config: &DaemonConfig) {
    let sign = &config.sign;
    info!("sign is {}x{} dots", sign.width, sign.height);
    debug!("  frame interval {} us", sign.frame_interval_us);
    debug!("  {} frames per scroll step", sign.scroll_frames_per_step);
    debug!("  default color {}", sign.default_color);
}
