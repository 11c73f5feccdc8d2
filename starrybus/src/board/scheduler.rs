//! Selection of the rows to display.
//!
//! Arrivals are shown soonest-first, except that a bus configured with
//! `min_lines = k` is promoted into the window ahead of unconfigured
//! arrivals until it holds `k` rows, provided it has that many arrivals
//! anywhere in the set.
//!
//! The fairness tally counts the first `rows` entries but only `rows - 1`
//! are displayed. This asymmetry is long-standing board behaviour and is
//! kept as is.

use std::collections::HashMap;

use crate::domain::{Arrival, BusDirectory};

/// Display dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Capacity used for the fairness tally; `rows - 1` rows are drawn.
    pub rows: usize,
    /// Width of each drawn row in characters.
    pub columns: usize,
}

impl BoardLayout {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Number of rows actually drawn.
    pub fn visible_rows(&self) -> usize {
        self.rows.saturating_sub(1)
    }
}

/// Choose and order the arrivals to draw from a throwaway copy.
///
/// [`Board`](super::Board) instead keeps the arranged order between
/// redraws, which changes how later ties break.
pub fn select_visible(
    arrivals: &[Arrival],
    buses: &BusDirectory,
    layout: BoardLayout,
) -> Vec<Arrival> {
    let mut ordered = arrivals.to_vec();
    arrange(&mut ordered, buses, layout.rows);
    visible_window(&ordered, layout)
}

/// Sort by countdown, then promote configured buses once the set fills
/// the tally window. Works in place so the result seeds the next sort.
pub(crate) fn arrange(arrivals: &mut Vec<Arrival>, buses: &BusDirectory, rows: usize) {
    sort_by_time(arrivals);
    if arrivals.len() >= rows {
        promote_min_lines(arrivals, buses, rows);
    }
}

/// The first `rows - 1` arranged entries, soonest first.
pub fn visible_window(arranged: &[Arrival], layout: BoardLayout) -> Vec<Arrival> {
    let mut shown: Vec<Arrival> = arranged
        .iter()
        .take(layout.visible_rows())
        .cloned()
        .collect();
    sort_by_time(&mut shown);
    shown
}

/// Stable ascending sort by countdown.
fn sort_by_time(arrivals: &mut [Arrival]) {
    arrivals.sort_by_key(|a| a.time_to_arrival_secs);
}

/// Move under-represented configured buses to the front.
///
/// `arrivals` must already be sorted. Entries past the first `rows` are
/// scanned in order; each one whose bus is below its `min_lines` is moved
/// to index 0 and the scan re-examines the entry that slid into its slot.
/// Entries displaced out of the window keep their tally.
pub(crate) fn promote_min_lines(arrivals: &mut Vec<Arrival>, buses: &BusDirectory, rows: usize) {
    let mut lines_per_bus: HashMap<String, usize> = HashMap::new();
    for arrival in arrivals.iter().take(rows) {
        *lines_per_bus
            .entry(arrival.service_number.clone())
            .or_default() += 1;
    }

    let mut i = rows;
    while i < arrivals.len() {
        if let Some(bus) = buses.get(&arrivals[i].service_number) {
            let shown = lines_per_bus.entry(bus.name.clone()).or_default();
            if *shown < bus.min_lines {
                *shown += 1;
                let promoted = arrivals.remove(i);
                arrivals.insert(0, promoted);
                continue;
            }
        }
        i += 1;
    }
}
