//! Conversion from DataMall DTOs to domain arrivals.

use chrono::{DateTime, Utc};

use crate::domain::{Arrival, BusStopCode, InvalidStopCode, Stop, seconds_until};

use super::types::BusArrivalResponse;

/// Error during DTO to domain conversion.
///
/// Any error rejects the whole response so that the stop keeps its
/// previous arrivals.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// The response's stop code is not a valid code
    #[error("invalid stop code in response: {0}")]
    InvalidStopCode(#[from] InvalidStopCode),

    /// The response describes a different stop than the one polled
    #[error("response is for stop {actual}, expected {expected}")]
    StopMismatch {
        expected: BusStopCode,
        actual: BusStopCode,
    },

    /// An estimate was present but not an ISO 8601 timestamp
    #[error("invalid estimated arrival {value:?} for service {service}")]
    InvalidTime { service: String, value: String },
}

/// Build the arrivals for `stop` from one `BusArrivalv2` response.
///
/// Up to three estimates are taken per service, in response order; empty
/// estimates are skipped. No sorting happens here.
pub fn arrivals_from_response(
    stop: &Stop,
    response: &BusArrivalResponse,
    now: DateTime<Utc>,
) -> Result<Vec<Arrival>, ConversionError> {
    let actual: BusStopCode = response.bus_stop_code.parse()?;
    if actual != stop.code {
        return Err(ConversionError::StopMismatch {
            expected: stop.code,
            actual,
        });
    }

    let mut arrivals = Vec::with_capacity(response.services.len() * 3);

    for service in &response.services {
        for estimate in service.next_buses().into_iter().flatten() {
            let Some(value) = estimate.estimate() else {
                continue;
            };

            let eta = DateTime::parse_from_rfc3339(value).map_err(|_| {
                ConversionError::InvalidTime {
                    service: service.service_no.clone(),
                    value: value.to_string(),
                }
            })?;

            arrivals.push(Arrival::new(
                stop.code,
                service.service_no.clone(),
                seconds_until(&eta, now),
                stop.style,
            ));
        }
    }

    Ok(arrivals)
}
