//! Stop color specifications.

use colored::Color;

use crate::domain::StopStyle;

use super::error::ConfigError;

/// Named foreground colors accepted in `color = "..."`.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("white", Color::White),
    ("blackBright", Color::BrightBlack),
    ("gray", Color::BrightBlack),
    ("grey", Color::BrightBlack),
    ("redBright", Color::BrightRed),
    ("greenBright", Color::BrightGreen),
    ("yellowBright", Color::BrightYellow),
    ("blueBright", Color::BrightBlue),
    ("magentaBright", Color::BrightMagenta),
    ("cyanBright", Color::BrightCyan),
    ("whiteBright", Color::BrightWhite),
];

/// Parse a color name (`"cyan"`, `"redBright"`) or hex color (`"#f80"`,
/// `"#ff8800"`) into a stop style.
pub fn parse_color(spec: &str) -> Result<StopStyle, ConfigError> {
    let color = match spec.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == spec)
            .map(|(_, color)| *color),
    };

    color
        .map(StopStyle::Foreground)
        .ok_or_else(|| ConfigError::InvalidColor(spec.to_string()))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    let (r, g, b) = match hex.len() {
        3 => {
            let expand = |i: usize| channel(&hex[i..=i].repeat(2));
            (expand(0)?, expand(1)?, expand(2)?)
        }
        6 => (channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?),
        _ => return None,
    };

    Some(Color::TrueColor { r, g, b })
}
