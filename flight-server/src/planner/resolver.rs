//! Single-leg flight resolution.
//!
//! Given an origin, a destination, and the earliest acceptable
//! departure, pick the earliest qualifying non-stop flight from the
//! provider's offers for that date.

use chrono::{DateTime, Utc};

use crate::domain::{Iata, Leg, Offer};

/// A failure reported by the flight-search provider (network, auth,
/// malformed data). Distinct from "the provider answered and had no
/// flights".
#[derive(Debug, Clone, thiserror::Error)]
#[error("flight search provider failure: {message}")]
pub struct ProviderError {
    message: String,
}

impl ProviderError {
    /// Create a provider error with the given detail message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Trait for searching flight offers.
///
/// This abstraction allows the planner to be tested with mock data.
pub trait OfferSource {
    /// Search offers for a one-way trip on the given calendar date.
    fn search_offers(
        &self,
        origin: &Iata,
        destination: &Iata,
        date: chrono::NaiveDate,
    ) -> impl Future<Output = Result<Vec<Offer>, ProviderError>> + Send;
}

/// Error from resolving a single leg.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    /// The provider answered, but no offer qualified
    #[error("no qualifying non-stop flight from {origin} to {destination}")]
    NotFound { origin: Iata, destination: Iata },

    /// The provider call itself failed
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Find the earliest qualifying non-stop flight.
///
/// Offers are searched on the calendar date of `not_before` and
/// filtered to single-segment, zero-stop flights on the requested route
/// departing at or after `not_before`. Among those, the strictly
/// earliest departure wins; ties keep the first offer in the provider's
/// ordering.
///
/// # Errors
///
/// - `ResolveError::NotFound` when the provider returns no offers or
///   every offer is filtered out
/// - `ResolveError::Provider` when the provider call fails or the
///   winning offer fails domain validation
pub async fn find_earliest_direct<S: OfferSource>(
    source: &S,
    origin: &Iata,
    destination: &Iata,
    not_before: DateTime<Utc>,
) -> Result<Leg, ResolveError> {
    let offers = source
        .search_offers(origin, destination, not_before.date_naive())
        .await?;

    let mut best: Option<&Offer> = None;

    for offer in &offers {
        if !offer.is_direct() {
            continue;
        }

        let segment = &offer.segments[0];
        if segment.origin != *origin || segment.destination != *destination {
            continue;
        }
        if segment.departure < not_before {
            continue;
        }

        match best {
            Some(current) if current.segments[0].departure <= segment.departure => {}
            _ => best = Some(offer),
        }
    }

    let offer = best.ok_or(ResolveError::NotFound {
        origin: *origin,
        destination: *destination,
    })?;

    let segment = &offer.segments[0];
    let airline = offer
        .validating_airline
        .clone()
        .unwrap_or_else(|| segment.carrier_code.clone());
    let flight_number = format!("{}{}", segment.carrier_code, segment.number);

    Leg::new(
        segment.origin,
        segment.destination,
        airline,
        flight_number,
        segment.departure,
        segment.arrival,
        segment.duration,
        offer.price,
    )
    .map_err(|e| ProviderError::new(format!("offer failed validation: {e}")).into())
}
