//! Loading and validating `starrybus.toml`.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::board::BoardLayout;
use crate::domain::{Bus, BusDirectory, BusStopCode, Stop, StopStyle};

use super::color::parse_color;
use super::error::ConfigError;

/// Name of the config file inside the config directory.
const FILE_NAME: &str = "starrybus.toml";

/// Raw file contents, before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    rows: usize,
    columns: usize,
    stops: Vec<StopEntry>,
    #[serde(default)]
    buses: Vec<BusEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StopEntry {
    code: StopCodeEntry,
    /// Color name or `#hex`; rows are undecorated when absent.
    color: Option<String>,
}

/// Stop codes may be written as integers or, to keep leading zeros, strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StopCodeEntry {
    Number(u32),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BusEntry {
    name: String,
    #[serde(rename = "minLines", alias = "min_lines")]
    min_lines: usize,
}

/// Validated board configuration.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub layout: BoardLayout,
    /// Stops in file order.
    pub stops: Vec<Stop>,
    pub buses: BusDirectory,
}

impl BoardConfig {
    /// `starrybus.toml` in the XDG config directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        xdg_config_dir(std::env::var_os("XDG_CONFIG_HOME"), dirs::home_dir())
            .map(|dir| dir.join(FILE_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.validate()
    }
}

/// `$XDG_CONFIG_HOME` if it is an absolute path, else `~/.config`.
fn xdg_config_dir(config_home: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    config_home
        .map(PathBuf::from)
        .filter(|dir| dir.is_absolute())
        .or_else(|| home.map(|home| home.join(".config")))
}

impl ConfigFile {
    fn validate(self) -> Result<BoardConfig, ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::InvalidDimension { field: "rows" });
        }
        if self.columns == 0 {
            return Err(ConfigError::InvalidDimension { field: "columns" });
        }

        let mut seen_stops = HashSet::new();
        let mut stops = Vec::with_capacity(self.stops.len());
        for entry in self.stops {
            let code = match entry.code {
                StopCodeEntry::Number(n) => BusStopCode::new(n),
                StopCodeEntry::Text(s) => s.parse()?,
            };
            if !seen_stops.insert(code) {
                return Err(ConfigError::DuplicateStop(code));
            }
            let style = match entry.color {
                Some(spec) => parse_color(&spec)?,
                None => StopStyle::Plain,
            };
            stops.push(Stop::new(code, style));
        }

        let mut buses = BusDirectory::new();
        for entry in self.buses {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::EmptyBusName);
            }
            let name = entry.name.clone();
            if buses.insert(Bus::new(entry.name, entry.min_lines)).is_some() {
                return Err(ConfigError::DuplicateBus(name));
            }
        }

        Ok(BoardConfig {
            layout: BoardLayout::new(self.rows, self.columns),
            stops,
            buses,
        })
    }
}
