//! LTA DataMall bus arrival client.
//!
//! This module provides an HTTP client for the DataMall `BusArrivalv2`
//! endpoint, which reports the next three estimated arrivals for every
//! service calling at a stop.
//!
//! Key characteristics of DataMall:
//! - Authentication is a single `AccountKey` header
//! - Estimates are ISO 8601 timestamps with a `+08:00` offset
//! - A missing estimate is sent as an empty string, not omitted

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{DataMallClient, DataMallConfig};
pub use convert::{ConversionError, arrivals_from_response};
pub use error::DataMallError;
pub use mock::MockDataMallClient;
pub use types::{BusArrivalResponse, NextBus, ServiceArrivals};
