//! Bus stop identifiers and per-stop display styling.

use std::fmt;
use std::str::FromStr;

use colored::{Color, Colorize};

/// Error returned when parsing an invalid bus stop code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bus stop code {input:?}: {reason}")]
pub struct InvalidStopCode {
    input: String,
    reason: &'static str,
}

/// A DataMall bus stop code.
///
/// Stop codes are five decimal digits on the wire and may carry leading
/// zeros (`01012`). They are stored numerically so that `"01012"` and
/// `1012` refer to the same stop.
///
/// # Examples
///
/// ```
/// use starrybus::domain::BusStopCode;
///
/// let code: BusStopCode = "01012".parse().unwrap();
/// assert_eq!(code, BusStopCode::new(1012));
/// assert_eq!(code.to_string(), "01012");
///
/// assert!("".parse::<BusStopCode>().is_err());
/// assert!("12a".parse::<BusStopCode>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusStopCode(u32);

impl BusStopCode {
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for BusStopCode {
    type Err = InvalidStopCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InvalidStopCode {
                input: s.to_string(),
                reason: "must not be empty",
            });
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidStopCode {
                input: s.to_string(),
                reason: "must contain only digits",
            });
        }
        s.parse::<u32>().map(Self).map_err(|_| InvalidStopCode {
            input: s.to_string(),
            reason: "out of range",
        })
    }
}

impl fmt::Debug for BusStopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BusStopCode({self})")
    }
}

impl fmt::Display for BusStopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}", self.0)
    }
}

/// Text decoration applied to every row that belongs to a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopStyle {
    /// Rows are printed undecorated.
    #[default]
    Plain,
    /// Rows are printed in the given foreground color.
    Foreground(Color),
}

impl StopStyle {
    /// Decorate a rendered row.
    pub fn paint(&self, text: &str) -> String {
        match self {
            StopStyle::Plain => text.to_string(),
            StopStyle::Foreground(color) => text.color(*color).to_string(),
        }
    }
}

/// A configured stop to poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    pub code: BusStopCode,
    pub style: StopStyle,
}

impl Stop {
    pub fn new(code: BusStopCode, style: StopStyle) -> Self {
        Self { code, style }
    }
}
