//! Fixed-width row rendering and the output sink.

use std::io::{self, IsTerminal, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::domain::{Arrival, format_time_to_arrival};

/// Line-oriented output the board is drawn on.
pub trait Screen {
    /// Whether the sink is an interactive terminal.
    fn is_terminal(&self) -> bool;

    /// Clear the display and home the cursor.
    fn clear(&mut self) -> io::Result<()>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A [`Screen`] over any writer, normally stdout.
pub struct TerminalScreen<W: Write> {
    out: W,
    is_terminal: bool,
}

impl TerminalScreen<io::Stdout> {
    pub fn stdout() -> Self {
        let out = io::stdout();
        let is_terminal = out.is_terminal();
        Self { out, is_terminal }
    }
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W, is_terminal: bool) -> Self {
        Self { out, is_terminal }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Render `service + padding + countdown` exactly `columns` wide.
///
/// When the content is wider than `columns` no padding is added and the
/// row overflows.
pub fn format_row(arrival: &Arrival, columns: usize) -> String {
    let time = format_time_to_arrival(arrival.time_to_arrival_secs);
    let used = arrival.service_number.chars().count() + time.chars().count();
    let padding = columns.saturating_sub(used);
    format!("{}{}{time}", arrival.service_number, " ".repeat(padding))
}

/// Render and style every selected arrival.
pub fn render_rows(selected: &[Arrival], columns: usize) -> Vec<String> {
    selected
        .iter()
        .map(|arrival| arrival.style.paint(&format_row(arrival, columns)))
        .collect()
}

/// Replace what is on `screen` with `rows`.
///
/// Terminals are cleared; other sinks get a blank separator line so
/// successive boards stay readable in a log.
pub fn draw(screen: &mut impl Screen, rows: &[String]) -> io::Result<()> {
    if screen.is_terminal() {
        screen.clear()?;
    } else {
        screen.write_line("")?;
    }
    for row in rows {
        screen.write_line(row)?;
    }
    screen.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BusStopCode, StopStyle};

    fn arrival(service: &str, secs: i64) -> Arrival {
        Arrival::new(BusStopCode::new(83139), service, secs, StopStyle::Plain)
    }

    #[test]
    fn row_is_padded_to_width() {
        assert_eq!(format_row(&arrival("15", 125), 12), "15     2m 5s");
        assert_eq!(format_row(&arrival("7", 10), 10), "7      10s");
        assert_eq!(format_row(&arrival("7", 10), 10).len(), 10);
    }

    #[test]
    fn exact_fit_has_no_padding() {
        assert_eq!(format_row(&arrival("155", 59), 6), "15559s");
    }

    #[test]
    fn overflowing_row_is_not_truncated() {
        assert_eq!(format_row(&arrival("NR1", 3599), 4), "NR159m 59s");
    }

    #[test]
    fn width_counts_characters() {
        assert_eq!(format_row(&arrival("ü", 5), 6).chars().count(), 6);
    }

    #[test]
    fn render_applies_style() {
        let rows = render_rows(&[arrival("15", 60), arrival("7", -5)], 12);
        assert_eq!(rows, vec!["15     1m 0s", "7    -1m 55s"]);
    }

    #[test]
    fn foreground_style_wraps_padded_row() {
        use colored::Color;

        colored::control::set_override(true);
        let cyan = Arrival::new(
            BusStopCode::new(83139),
            "15",
            60,
            StopStyle::Foreground(Color::Cyan),
        );
        let rows = render_rows(&[cyan], 12);
        colored::control::unset_override();

        assert_eq!(rows, vec!["\u{1b}[36m15     1m 0s\u{1b}[0m"]);
    }

    #[test]
    fn draw_to_pipe_separates_with_blank_line() {
        let mut screen = TerminalScreen::new(Vec::new(), false);
        draw(&mut screen, &["a".to_string(), "b".to_string()]).unwrap();
        draw(&mut screen, &["c".to_string()]).unwrap();

        let out = String::from_utf8(screen.into_inner()).unwrap();
        assert_eq!(out, "\na\nb\n\nc\n");
    }

    #[test]
    fn draw_to_terminal_clears_first() {
        let mut screen = TerminalScreen::new(Vec::new(), true);
        draw(&mut screen, &["a".to_string()]).unwrap();

        let out = String::from_utf8(screen.into_inner()).unwrap();
        assert!(out.starts_with('\u{1b}'));
        assert!(out.ends_with("a\n"));
        assert!(!out.starts_with('\n'));
    }
}
