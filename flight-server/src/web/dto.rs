//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Itinerary;
use crate::planner::BestItinerary;

/// Query parameters for the flight search endpoint.
#[derive(Debug, Deserialize)]
pub struct FlightsRequest {
    /// Starting airport IATA code
    pub start_origin: String,

    /// Departure date, "YYYY-MM-DD"
    pub departure_date: String,

    /// Departure time, "HH:mm" (UTC)
    pub departure_time: String,

    /// Leg-resolution strategy ("direct"; defaults to direct)
    pub flight_type: Option<String>,

    /// Recipient for the best-effort itinerary email
    pub email: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Successful flight search response.
#[derive(Debug, Serialize)]
pub struct FlightsResponse {
    pub status: &'static str,
    pub data: BestResult,
}

/// The winning sequence and itinerary.
#[derive(Debug, Serialize)]
pub struct BestResult {
    /// Destinations in visit order
    pub best_sequence: Vec<String>,

    /// The simulated itinerary
    pub best_itinerary: ItineraryDto,
}

impl BestResult {
    /// Build from the selector's winner.
    pub fn from_best(best: &BestItinerary) -> Self {
        Self {
            best_sequence: best.sequence.iter().map(|i| i.as_str().to_string()).collect(),
            best_itinerary: ItineraryDto::from_itinerary(&best.itinerary),
        }
    }
}

/// An itinerary in a response. Durations are whole minutes; instants
/// are RFC 3339.
#[derive(Debug, Serialize)]
pub struct ItineraryDto {
    /// Flights in travel order
    pub flights: Vec<FlightLegDto>,

    /// Sum of flight durations, minutes
    pub total_flight_duration: i64,

    /// Sum of layover durations, minutes
    pub total_layover_duration: i64,

    /// Flight + layover + fixed buffer, minutes
    pub total_travel_time: i64,

    /// Sum of leg costs
    pub total_cost: f64,
}

impl ItineraryDto {
    /// Build from a domain itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            flights: itinerary.legs().iter().map(FlightLegDto::from_leg).collect(),
            total_flight_duration: itinerary.total_flight_duration().num_minutes(),
            total_layover_duration: itinerary.total_layover_duration().num_minutes(),
            total_travel_time: itinerary.total_travel_time().num_minutes(),
            total_cost: itinerary.total_cost(),
        }
    }
}

/// One flight within an itinerary response.
#[derive(Debug, Serialize)]
pub struct FlightLegDto {
    /// Validating airline code
    pub airline: String,

    /// Carrier code + number, e.g. "LA896"
    pub flight_number: String,

    /// Departure instant, RFC 3339
    pub departure_time: String,

    /// Arrival instant, RFC 3339
    pub arrival_time: String,

    /// Origin IATA code
    pub origin: String,

    /// Destination IATA code
    pub destination: String,

    /// Flight duration, minutes
    pub duration: i64,

    /// Offer price
    pub cost: f64,

    /// Layover preceding this flight, minutes
    pub layover: i64,

    /// Airport where the layover occurred
    pub layover_iata: String,
}

impl FlightLegDto {
    fn from_leg(leg: &crate::domain::ItineraryLeg) -> Self {
        Self {
            airline: leg.leg.airline().to_string(),
            flight_number: leg.leg.flight_number().to_string(),
            departure_time: leg.leg.departure().to_rfc3339(),
            arrival_time: leg.leg.arrival().to_rfc3339(),
            origin: leg.leg.origin().as_str().to_string(),
            destination: leg.leg.destination().as_str().to_string(),
            duration: leg.leg.duration().num_minutes(),
            cost: leg.leg.cost(),
            layover: leg.layover.num_minutes(),
            layover_iata: leg.layover_at.as_str().to_string(),
        }
    }
}

/// Error response envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}
