//! Best-itinerary selection across all candidate sequences.
//!
//! Fans out one simulation per enumerated sequence, collects the
//! feasible results, and keeps the itinerary with the minimum total
//! travel time. Failed sequences are dropped, never fatal; ties keep
//! the earliest-enumerated sequence so repeated searches over identical
//! provider data pick the same winner.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::{Iata, Itinerary};

use super::config::PlannerConfig;
use super::enumerate::enumerate_sequences;
use super::resolver::OfferSource;
use super::simulate::{SimulateError, simulate};

/// The winning candidate: its destination sequence and the simulated
/// itinerary.
#[derive(Debug, Clone)]
pub struct BestItinerary {
    /// Destinations in visit order, one per region.
    pub sequence: Vec<Iata>,

    /// The simulated itinerary for that sequence.
    pub itinerary: Itinerary,
}

/// Result of a full search.
#[derive(Debug, Clone)]
pub struct SelectionResult {
    /// The minimum-total-travel-time itinerary, or `None` when every
    /// candidate sequence was infeasible or failed.
    pub best: Option<BestItinerary>,

    /// Number of candidate sequences evaluated.
    pub sequences_evaluated: usize,

    /// Number of sequences that simulated to a feasible itinerary.
    pub feasible_count: usize,
}

/// Itinerary selector over a flight-offer source.
pub struct Selector<'a, S: OfferSource> {
    source: &'a S,
    config: &'a PlannerConfig,
}

impl<'a, S: OfferSource> Selector<'a, S> {
    /// Create a new selector.
    pub fn new(source: &'a S, config: &'a PlannerConfig) -> Self {
        Self { source, config }
    }

    /// Evaluate every candidate sequence and pick the best itinerary.
    ///
    /// Simulations run concurrently (the provider client bounds actual
    /// outbound parallelism); each is internally sequential because a
    /// leg's floor time depends on the previous leg's arrival. No
    /// result is discarded early: the reduction happens after all
    /// simulations settle, in enumeration order.
    pub async fn select_best(
        &self,
        start_origin: &Iata,
        start_time: DateTime<Utc>,
    ) -> SelectionResult {
        let sequences = enumerate_sequences(&self.config.regions);
        let sequences_evaluated = sequences.len();

        debug!(
            candidates = sequences_evaluated,
            start_origin = %start_origin,
            "evaluating candidate sequences"
        );

        let simulations = sequences
            .iter()
            .map(|sequence| simulate(self.source, self.config, start_origin, sequence, start_time));
        let results = join_all(simulations).await;

        let mut best: Option<BestItinerary> = None;
        let mut feasible_count = 0;

        for (sequence, result) in sequences.iter().zip(results) {
            match result {
                Ok(itinerary) => {
                    feasible_count += 1;

                    let improves = match &best {
                        Some(current) => {
                            itinerary.total_travel_time()
                                < current.itinerary.total_travel_time()
                        }
                        None => true,
                    };
                    if improves {
                        best = Some(BestItinerary {
                            sequence: sequence.clone(),
                            itinerary,
                        });
                    }
                }
                Err(e @ SimulateError::Provider { .. }) => {
                    warn!(
                        sequence = %format_sequence(sequence),
                        error = %e,
                        "sequence dropped on provider failure"
                    );
                }
                Err(e) => {
                    debug!(
                        sequence = %format_sequence(sequence),
                        error = %e,
                        "sequence infeasible"
                    );
                }
            }
        }

        if let Some(winner) = &best {
            debug!(
                sequence = %format_sequence(&winner.sequence),
                total_travel_mins = winner.itinerary.total_travel_time().num_minutes(),
                feasible = feasible_count,
                "selected best itinerary"
            );
        }

        SelectionResult {
            best,
            sequences_evaluated,
            feasible_count,
        }
    }
}

/// Render a sequence as "SCL-MIA-MAD" for log lines.
fn format_sequence(sequence: &[Iata]) -> String {
    sequence
        .iter()
        .map(|i| i.as_str())
        .collect::<Vec<_>>()
        .join("-")
}
