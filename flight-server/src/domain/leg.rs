//! Flight leg type.
//!
//! A `Leg` represents a single non-stop flight between two airports,
//! built from one provider offer. Fields are validated at construction
//! so downstream code can trust timing and cost arithmetic.

use chrono::{DateTime, Duration, Utc};

use super::{DomainError, Iata};

/// One non-stop flight segment.
///
/// # Invariants
///
/// - `arrival >= departure`
/// - `cost` is finite and non-negative
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    origin: Iata,
    destination: Iata,
    airline: String,
    flight_number: String,
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
    duration: Duration,
    cost: f64,
}

impl Leg {
    /// Construct a leg, validating times and cost.
    ///
    /// # Errors
    ///
    /// Returns `Err` if arrival precedes departure, or the cost is
    /// negative or not finite.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        origin: Iata,
        destination: Iata,
        airline: impl Into<String>,
        flight_number: impl Into<String>,
        departure: DateTime<Utc>,
        arrival: DateTime<Utc>,
        duration: Duration,
        cost: f64,
    ) -> Result<Self, DomainError> {
        if arrival < departure {
            return Err(DomainError::InvalidLeg(
                "arrival must not precede departure",
            ));
        }
        if !cost.is_finite() {
            return Err(DomainError::InvalidCost("must be finite"));
        }
        if cost < 0.0 {
            return Err(DomainError::InvalidCost("must be non-negative"));
        }

        Ok(Leg {
            origin,
            destination,
            airline: airline.into(),
            flight_number: flight_number.into(),
            departure,
            arrival,
            duration,
            cost,
        })
    }

    /// Returns the origin airport.
    pub fn origin(&self) -> &Iata {
        &self.origin
    }

    /// Returns the destination airport.
    pub fn destination(&self) -> &Iata {
        &self.destination
    }

    /// Returns the validating airline code.
    pub fn airline(&self) -> &str {
        &self.airline
    }

    /// Returns the flight number (carrier code + number, e.g. "LA896").
    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    /// Returns the departure instant (UTC).
    pub fn departure(&self) -> DateTime<Utc> {
        self.departure
    }

    /// Returns the arrival instant (UTC).
    pub fn arrival(&self) -> DateTime<Utc> {
        self.arrival
    }

    /// Returns the elapsed flight duration as reported by the provider.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the offer price.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}
