//! Around-the-world flight itinerary planner server.
//!
//! A web service that answers: "starting from this airport, in which
//! order should I visit one destination per region to minimise total
//! travel time?"

pub mod amadeus;
pub mod domain;
pub mod notify;
pub mod planner;
pub mod web;
