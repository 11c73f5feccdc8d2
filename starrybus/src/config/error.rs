//! Configuration error types.

use std::path::PathBuf;

use crate::domain::{BusStopCode, InvalidStopCode};

/// Errors that can occur while loading the board configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Neither `XDG_CONFIG_HOME` nor a home directory is available
    #[error("could not find a config directory; set STARRYBUS_CONFIG")]
    NoConfigDir,

    /// The config file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has the wrong shape
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `rows` or `columns` is zero
    #[error("{field} must be at least 1")]
    InvalidDimension { field: &'static str },

    /// A stop code is malformed
    #[error(transparent)]
    InvalidStopCode(#[from] InvalidStopCode),

    /// The same stop is listed twice
    #[error("stop {0} is listed more than once")]
    DuplicateStop(BusStopCode),

    /// The same bus is listed twice
    #[error("bus {0:?} is listed more than once")]
    DuplicateBus(String),

    /// A bus entry has an empty name
    #[error("each bus should have a name")]
    EmptyBusName,

    /// A stop color is neither a color name nor a hex color
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}
