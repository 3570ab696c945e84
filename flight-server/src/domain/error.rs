//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from API/IO errors.

use super::Iata;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Invalid leg construction (e.g., arrival before departure)
    #[error("invalid leg: {0}")]
    InvalidLeg(&'static str),

    /// Leg cost is negative or not finite
    #[error("invalid cost: {0}")]
    InvalidCost(&'static str),

    /// Consecutive itinerary legs don't chain (destination != next origin)
    #[error("legs do not chain: arrived at {0} but next leg departs {1}")]
    LegsNotChained(Iata, Iata),

    /// A leg's recorded layover is negative
    #[error("negative layover before departing {0}")]
    NegativeLayover(Iata),
}
