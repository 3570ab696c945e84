//! Domain types for the flight itinerary planner.
//!
//! This module contains the core domain model types that represent
//! validated flight data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod airport;
mod duration;
mod error;
mod itinerary;
mod leg;
mod offer;

pub use airport::{Iata, InvalidIata};
pub use duration::{DurationError, format_duration, parse_duration};
pub use error::DomainError;
pub use itinerary::{Itinerary, ItineraryLeg};
pub use leg::Leg;
pub use offer::{Offer, OfferSegment};
