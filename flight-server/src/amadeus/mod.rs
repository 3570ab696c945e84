//! Amadeus flight-offers client.
//!
//! This module provides an HTTP client for the Amadeus flight-offers
//! search API, which returns priced flight options for an
//! origin/destination/date query.
//!
//! Key characteristics:
//! - OAuth2 client-credentials auth; tokens are short-lived and cached
//!   with an expiry slack
//! - Segment timestamps arrive as offset-free local strings and are
//!   interpreted as UTC
//! - Prices are decimal strings in the requested currency

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{AmadeusClient, AmadeusConfig};
pub use convert::{ConversionError, convert_offer, convert_offers};
pub use error::AmadeusError;
pub use mock::MockFlightSearch;
pub use types::{
    EndpointDto, FlightOfferDto, FlightOffersResponse, OfferItineraryDto, PriceDto, SegmentDto,
    TokenResponse,
};
