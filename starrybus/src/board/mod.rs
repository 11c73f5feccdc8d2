//! The arrival board engine.
//!
//! Holds the working set of arrivals, decides which rows are shown, and
//! drives the per-stop polling loop that keeps the display current.

mod display;
mod poller;
mod render;
mod scheduler;
mod store;

#[cfg(test)]
mod scheduler_tests;

pub use display::{Board, StopUpdate};
pub use poller::{ArrivalSource, POLL_INTERVAL, Poller};
pub use render::{Screen, TerminalScreen, draw, format_row, render_rows};
pub use scheduler::{BoardLayout, select_visible, visible_window};
pub use store::ArrivalSet;
