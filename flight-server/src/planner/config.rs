//! Search configuration for the itinerary planner.
//!
//! Region destination lists, per-airport connection buffers, and the
//! fixed travel-time padding are injected here rather than hardcoded at
//! the call sites, so tests can run against small fixtures.

use std::collections::HashMap;

use chrono::Duration;

use crate::domain::Iata;

/// A geographic region with its candidate destinations, in preference
/// order.
#[derive(Debug, Clone)]
pub struct Region {
    /// Display name (e.g. "Europe").
    pub name: String,

    /// Candidate destination airports for this region.
    pub destinations: Vec<Iata>,
}

impl Region {
    /// Create a region from a name and destination list.
    pub fn new(name: impl Into<String>, destinations: Vec<Iata>) -> Self {
        Self {
            name: name.into(),
            destinations,
        }
    }
}

/// Minimum connection times per airport.
///
/// Airports absent from the table get the explicit default rather than
/// failing the lookup; an unknown layover airport must never make
/// arithmetic silently undefined.
#[derive(Debug, Clone)]
pub struct ConnectionBuffers {
    buffers: HashMap<Iata, Duration>,
    default: Duration,
}

impl ConnectionBuffers {
    /// Create an empty table with the given default.
    pub fn new(default: Duration) -> Self {
        Self {
            buffers: HashMap::new(),
            default,
        }
    }

    /// Set the buffer for an airport.
    pub fn insert(&mut self, code: Iata, buffer: Duration) {
        self.buffers.insert(code, buffer);
    }

    /// Returns the connection buffer for an airport, or the default if
    /// the airport has no entry.
    pub fn buffer_for(&self, code: &Iata) -> Duration {
        self.buffers.get(code).copied().unwrap_or(self.default)
    }

    /// Returns the fallback buffer for unlisted airports.
    pub fn default_buffer(&self) -> Duration {
        self.default
    }

    /// Number of airports with explicit entries.
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    /// True if no airport has an explicit entry.
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}

/// Builder for connection-buffer tables from literal airport codes.
pub struct ConnectionBuffersBuilder {
    buffers: ConnectionBuffers,
}

impl ConnectionBuffersBuilder {
    /// Start a table with the given default buffer.
    pub fn new(default: Duration) -> Self {
        Self {
            buffers: ConnectionBuffers::new(default),
        }
    }

    /// Add an airport with a buffer in fractional hours.
    ///
    /// # Panics
    ///
    /// Panics on an invalid IATA code; intended for compile-time
    /// constant tables.
    pub fn add(mut self, code: &str, hours: f64) -> Self {
        let code = Iata::parse(code).expect("valid IATA code");
        self.buffers.insert(code, hours_to_duration(hours));
        self
    }

    /// Finish building.
    pub fn build(self) -> ConnectionBuffers {
        self.buffers
    }
}

/// Convert fractional hours to a minute-resolution duration.
fn hours_to_duration(hours: f64) -> Duration {
    Duration::minutes((hours * 60.0).round() as i64)
}

/// Configuration parameters for the itinerary search.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Regions in visit-evaluation order; one destination per region
    /// appears in each candidate sequence.
    pub regions: Vec<Region>,

    /// Minimum connection times per airport.
    pub buffers: ConnectionBuffers,

    /// Fixed padding added to each itinerary's total travel time for
    /// airport processing overhead not captured by flight data.
    pub extra_travel_time: Duration,
}

impl PlannerConfig {
    /// Create a config from its parts.
    pub fn new(regions: Vec<Region>, buffers: ConnectionBuffers, extra_travel_time: Duration) -> Self {
        Self {
            regions,
            buffers,
            extra_travel_time,
        }
    }
}

impl Default for PlannerConfig {
    /// The production table: six regions spanning an around-the-world
    /// routing, buffer times per airport in fractional hours, and 2.5
    /// hours of padding.
    fn default() -> Self {
        let regions = vec![
            region("South America", &["SCL"]),
            region("North America", &["MIA", "PTY", "LAX", "SFO", "SAN", "TIJ"]),
            region("Europe", &["MAD", "LIS", "BCN", "ORY", "CMN"]),
            region("Africa", &["CMN", "CAI"]),
            region("Asia", &["DOH", "DXB", "KUL"]),
            region("Australia", &["PER"]),
        ];

        let buffers = ConnectionBuffersBuilder::new(hours_to_duration(2.0))
            .add("SAN", 2.0)
            .add("TIJ", 2.0)
            .add("BCN", 2.0)
            .add("ORY", 2.0)
            .add("KUL", 2.0)
            .add("SCL", 0.5)
            .add("PUQ", 1.5)
            .add("PTY", 2.0)
            .add("LIS", 2.0)
            .add("SFO", 2.0)
            .add("MIA", 2.0)
            .add("JFK", 2.0)
            .add("LAX", 2.0)
            .add("YYZ", 2.8)
            .add("DFW", 1.7)
            .add("MAD", 2.0)
            .add("LHR", 2.1)
            .add("CDG", 1.8)
            .add("FRA", 2.5)
            .add("AMS", 2.0)
            .add("CMN", 2.0)
            .add("JNB", 2.7)
            .add("LOS", 1.9)
            .add("CAI", 2.0)
            .add("ADD", 1.5)
            .add("DOH", 1.5)
            .add("DXB", 2.0)
            .add("DEL", 1.6)
            .add("SIN", 2.3)
            .add("HND", 2.0)
            .add("PER", 2.0)
            .add("SYD", 2.8)
            .add("MEL", 1.9)
            .add("BNE", 2.5)
            .add("ADL", 1.7)
            .build();

        Self {
            regions,
            buffers,
            extra_travel_time: hours_to_duration(2.5),
        }
    }
}

/// Build a region from literal airport codes.
///
/// # Panics
///
/// Panics on an invalid IATA code; intended for constant tables.
fn region(name: &str, codes: &[&str]) -> Region {
    let destinations = codes
        .iter()
        .map(|c| Iata::parse(c).expect("valid IATA code"))
        .collect();
    Region::new(name, destinations)
}
