//! DataMall API response DTOs.
//!
//! These types map directly to the `BusArrivalv2` JSON response. DataMall
//! sends empty strings for unknown values, and occasionally omits whole
//! `NextBus` objects, so nearly everything is optional.

use serde::Deserialize;

/// Response from `BusArrivalv2`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusArrivalResponse {
    /// OData metadata URL.
    #[serde(rename = "odata.metadata", default)]
    pub odata_metadata: Option<String>,

    /// Stop code this response describes, as sent ("01012").
    pub bus_stop_code: String,

    /// Services calling at the stop.
    pub services: Vec<ServiceArrivals>,
}

/// Upcoming arrivals of one service at the stop.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceArrivals {
    /// Service number (e.g. "15", "NR1").
    pub service_no: String,

    /// Operator code (SBST, SMRT, TTS, GAS).
    #[serde(default)]
    pub operator: Option<String>,

    #[serde(default)]
    pub next_bus: Option<NextBus>,

    #[serde(default)]
    pub next_bus2: Option<NextBus>,

    #[serde(default)]
    pub next_bus3: Option<NextBus>,
}

impl ServiceArrivals {
    /// The three next-bus slots in order, absent slots included.
    pub fn next_buses(&self) -> [Option<&NextBus>; 3] {
        [
            self.next_bus.as_ref(),
            self.next_bus2.as_ref(),
            self.next_bus3.as_ref(),
        ]
    }
}

/// One estimated arrival.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NextBus {
    pub origin_code: Option<String>,
    pub destination_code: Option<String>,

    /// Estimated arrival (ISO 8601), or empty when there is no estimate.
    pub estimated_arrival: Option<String>,

    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub visit_number: Option<String>,

    /// Crowding: "SEA" (seats available), "SDA" (standing), "LSD" (limited standing).
    pub load: Option<String>,

    /// "WAB" when wheelchair accessible.
    pub feature: Option<String>,

    /// "SD" single deck, "DD" double deck, "BD" bendy.
    #[serde(rename = "Type")]
    pub bus_type: Option<String>,
}

impl NextBus {
    /// The estimated arrival string, if DataMall provided a non-empty one.
    pub fn estimate(&self) -> Option<&str> {
        self.estimated_arrival
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
