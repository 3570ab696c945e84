//! Mock flight-offer source for testing without API access.
//!
//! Serves pre-registered offers keyed by route, and records every
//! lookup so tests can assert on call counts (e.g. that a simulation
//! stops resolving after its first infeasible leg).

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;

use crate::domain::{Iata, Offer};
use crate::planner::{OfferSource, ProviderError};

/// In-memory offer source.
///
/// Routes with no registered offers return an empty list, which the
/// resolver reports as "no flight found". Routes registered as failing
/// return a provider error instead.
#[derive(Default)]
pub struct MockFlightSearch {
    offers: HashMap<(Iata, Iata), Vec<Offer>>,
    failures: HashMap<(Iata, Iata), String>,
    calls: Mutex<Vec<(Iata, Iata, NaiveDate)>>,
}

impl MockFlightSearch {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register offers for a route.
    pub fn add_offers(&mut self, origin: Iata, destination: Iata, offers: Vec<Offer>) {
        self.offers.insert((origin, destination), offers);
    }

    /// Register a provider failure for a route.
    pub fn add_failure(&mut self, origin: Iata, destination: Iata, message: impl Into<String>) {
        self.failures.insert((origin, destination), message.into());
    }

    /// Number of searches performed so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All searches performed so far, in order.
    pub fn calls(&self) -> Vec<(Iata, Iata, NaiveDate)> {
        self.calls.lock().unwrap().clone()
    }
}

impl OfferSource for MockFlightSearch {
    async fn search_offers(
        &self,
        origin: &Iata,
        destination: &Iata,
        date: NaiveDate,
    ) -> Result<Vec<Offer>, ProviderError> {
        self.calls.lock().unwrap().push((*origin, *destination, date));

        if let Some(message) = self.failures.get(&(*origin, *destination)) {
            return Err(ProviderError::new(message.clone()));
        }

        Ok(self
            .offers
            .get(&(*origin, *destination))
            .cloned()
            .unwrap_or_default())
    }
}
