//! Board state: arrivals, bus guarantees, and layout.

use crate::domain::{Arrival, BusDirectory, BusStopCode};

use super::render::render_rows;
use super::scheduler::{BoardLayout, visible_window};
use super::store::ArrivalSet;

/// Fresh arrivals for one stop, produced by that stop's poller.
#[derive(Debug, Clone)]
pub struct StopUpdate {
    pub stop_code: BusStopCode,
    pub arrivals: Vec<Arrival>,
}

/// The arrival board. Owns the only copy of the arrival set.
#[derive(Debug, Clone)]
pub struct Board {
    layout: BoardLayout,
    buses: BusDirectory,
    arrivals: ArrivalSet,
}

impl Board {
    pub fn new(layout: BoardLayout, buses: BusDirectory) -> Self {
        Self {
            layout,
            buses,
            arrivals: ArrivalSet::new(),
        }
    }

    /// Fold one stop's update in and return the rows to draw.
    ///
    /// The set is sorted and promoted in place, so the order it is left in
    /// breaks ties on the next update.
    pub fn apply(&mut self, update: StopUpdate) -> Vec<String> {
        self.arrivals
            .replace_stop_arrivals(update.stop_code, update.arrivals);
        self.arrivals.sort_and_promote(&self.buses, self.layout.rows);
        render_rows(&self.visible(), self.layout.columns)
    }

    /// Arrivals shown after the last [`apply`](Self::apply).
    pub fn visible(&self) -> Vec<Arrival> {
        visible_window(self.arrivals.as_slice(), self.layout)
    }

    pub fn arrivals(&self) -> &ArrivalSet {
        &self.arrivals
    }
}
