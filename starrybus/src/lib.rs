//! Live bus arrival board.
//!
//! Polls LTA DataMall for a configured set of bus stops and keeps a
//! fixed-width terminal board of upcoming arrivals, guaranteeing
//! configured buses a minimum number of rows.

pub mod board;
pub mod config;
pub mod datamall;
pub mod domain;
