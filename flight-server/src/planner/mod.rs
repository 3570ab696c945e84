//! Itinerary search engine.
//!
//! This module implements the core search that answers: "in which order
//! should the regions be visited to minimise total travel time?"
//!
//! Every ordering of one-destination-per-region is enumerated; each
//! candidate sequence is simulated leg by leg against the flight-offer
//! source under per-airport connection buffers; the feasible results
//! are reduced to the minimum-total-travel-time itinerary.

mod config;
mod enumerate;
mod resolver;
mod select;
mod simulate;

pub use config::{ConnectionBuffers, ConnectionBuffersBuilder, PlannerConfig, Region};
pub use enumerate::{enumerate_sequences, sequence_count};
pub use resolver::{OfferSource, ProviderError, ResolveError, find_earliest_direct};
pub use select::{BestItinerary, SelectionResult, Selector};
pub use simulate::{SimulateError, simulate};
