//! Core domain types for the arrival board.
//!
//! These types are independent of the DataMall wire format. Values that
//! come from configuration (`Stop`, `Bus`) are immutable for the life of
//! the process; `Arrival`s are replaced wholesale every time a stop is
//! polled.

mod arrival;
mod bus;
mod stop;
mod time;

pub use arrival::Arrival;
pub use bus::{Bus, BusDirectory};
pub use stop::{BusStopCode, InvalidStopCode, Stop, StopStyle};
pub use time::{format_time_to_arrival, seconds_until};
