//! Board configuration.
//!
//! Configuration lives in `starrybus.toml` under `$XDG_CONFIG_HOME`, or
//! `~/.config` when that is unset, on every platform:
//!
//! ```toml
//! rows = 8
//! columns = 16
//!
//! [[stops]]
//! code = 83139
//! color = "cyan"
//!
//! [[stops]]
//! code = "01012"
//! color = "#ff8800"
//!
//! [[buses]]
//! name = "15"
//! minLines = 2
//! ```
//!
//! Everything is validated up front; an invalid file stops the program
//! before any polling starts.

mod color;
mod error;
mod file;

pub use color::parse_color;
pub use error::ConfigError;
pub use file::BoardConfig;
