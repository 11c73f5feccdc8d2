//! Bus services and their visibility guarantees.

use std::collections::HashMap;

/// A transit line with a minimum number of board rows it is entitled to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    /// Service number as reported by DataMall (e.g. "15", "NR1").
    pub name: String,

    /// Rows this bus must occupy in the window whenever it has arrivals.
    pub min_lines: usize,
}

impl Bus {
    pub fn new(name: impl Into<String>, min_lines: usize) -> Self {
        Self {
            name: name.into(),
            min_lines,
        }
    }
}

/// Lookup of configured buses by service number.
///
/// Service numbers with no entry are legal; they simply carry no
/// visibility guarantee.
#[derive(Debug, Clone, Default)]
pub struct BusDirectory {
    buses: HashMap<String, Bus>,
}

impl BusDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a bus, returning the entry it replaced (if any).
    pub fn insert(&mut self, bus: Bus) -> Option<Bus> {
        self.buses.insert(bus.name.clone(), bus)
    }

    pub fn get(&self, service_number: &str) -> Option<&Bus> {
        self.buses.get(service_number)
    }

    pub fn len(&self) -> usize {
        self.buses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buses.is_empty()
    }
}

impl FromIterator<Bus> for BusDirectory {
    fn from_iter<I: IntoIterator<Item = Bus>>(iter: I) -> Self {
        let mut directory = Self::new();
        for bus in iter {
            directory.insert(bus);
        }
        directory
    }
}
