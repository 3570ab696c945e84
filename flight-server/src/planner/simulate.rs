//! Per-sequence itinerary simulation.
//!
//! Chains single-leg resolutions through a candidate destination
//! sequence. Each leg's earliest acceptable departure is the previous
//! arrival plus the connection buffer at the current airport, so the
//! legs must resolve strictly in order; the whole sequence is abandoned
//! the moment any leg has no qualifying flight.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{DomainError, Iata, Itinerary, ItineraryLeg};

use super::config::PlannerConfig;
use super::resolver::{OfferSource, ProviderError, ResolveError, find_earliest_direct};

/// Error from simulating one candidate sequence.
///
/// All variants are non-fatal to the overall search; the selector drops
/// the sequence and keeps evaluating the rest.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SimulateError {
    /// A leg had no qualifying flight
    #[error("leg {leg_index} ({origin} -> {destination}): no qualifying flight")]
    LegNotFound {
        leg_index: usize,
        origin: Iata,
        destination: Iata,
    },

    /// The provider failed while resolving a leg
    #[error("leg {leg_index} ({origin} -> {destination}): {source}")]
    Provider {
        leg_index: usize,
        origin: Iata,
        destination: Iata,
        source: ProviderError,
    },

    /// Resolved legs failed itinerary validation
    #[error("invalid itinerary: {0}")]
    Domain(#[from] DomainError),
}

/// Simulate one candidate sequence.
///
/// Resolves a non-stop flight for each destination in order, starting
/// from `start_origin` at `start_time`. Aborts on the first leg that
/// cannot be resolved, performing no further lookups.
pub async fn simulate<S: OfferSource>(
    source: &S,
    config: &PlannerConfig,
    start_origin: &Iata,
    sequence: &[Iata],
    start_time: DateTime<Utc>,
) -> Result<Itinerary, SimulateError> {
    let mut origin = *start_origin;
    let mut previous_arrival = start_time;
    let mut legs = Vec::with_capacity(sequence.len());

    for (leg_index, destination) in sequence.iter().enumerate() {
        let floor = previous_arrival + config.buffers.buffer_for(&origin);

        let leg = match find_earliest_direct(source, &origin, destination, floor).await {
            Ok(leg) => leg,
            Err(ResolveError::NotFound { .. }) => {
                debug!(
                    leg_index,
                    origin = %origin,
                    destination = %destination,
                    "no qualifying flight, abandoning sequence"
                );
                return Err(SimulateError::LegNotFound {
                    leg_index,
                    origin,
                    destination: *destination,
                });
            }
            Err(ResolveError::Provider(source)) => {
                return Err(SimulateError::Provider {
                    leg_index,
                    origin,
                    destination: *destination,
                    source,
                });
            }
        };

        let layover = leg.departure() - previous_arrival;
        previous_arrival = leg.arrival();

        legs.push(ItineraryLeg {
            leg,
            layover,
            layover_at: origin,
        });

        origin = *destination;
    }

    Ok(Itinerary::from_legs(legs, config.extra_travel_time)?)
}
