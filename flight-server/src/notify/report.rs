//! Itinerary report rendering.
//!
//! Renders the winning itinerary into the HTML body of the
//! notification email. View models carry preformatted strings so the
//! template stays dumb.

use askama::Template;

use crate::domain::{Iata, Itinerary, ItineraryLeg, format_duration};

/// Timestamp format used in the report.
const REPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// The itinerary email body.
#[derive(Template)]
#[template(path = "itinerary_email.html")]
pub struct ItineraryEmail {
    /// "PUQ → SCL → MIA" style sequence line.
    pub sequence: String,

    /// One entry per flight, in travel order.
    pub flights: Vec<FlightView>,

    pub total_flight_duration: String,
    pub total_layover_duration: String,
    pub total_travel_time: String,
    pub total_cost: String,
}

/// One flight in the report, preformatted for display.
pub struct FlightView {
    pub airline: String,
    pub flight_number: String,
    pub departure: String,
    pub arrival: String,
    pub origin: String,
    pub destination: String,
    pub duration: String,
    pub cost: String,
    pub layover: String,
    pub layover_at: String,
}

impl FlightView {
    fn from_leg(leg: &ItineraryLeg) -> Self {
        Self {
            airline: leg.leg.airline().to_string(),
            flight_number: leg.leg.flight_number().to_string(),
            departure: leg.leg.departure().format(REPORT_TIME_FORMAT).to_string(),
            arrival: leg.leg.arrival().format(REPORT_TIME_FORMAT).to_string(),
            origin: leg.leg.origin().to_string(),
            destination: leg.leg.destination().to_string(),
            duration: format_duration(leg.leg.duration()),
            cost: format!("{:.2}", leg.leg.cost()),
            layover: format_duration(leg.layover),
            layover_at: leg.layover_at.to_string(),
        }
    }
}

/// Render the notification email body for a winning itinerary.
pub fn render_report(sequence: &[Iata], itinerary: &Itinerary) -> Result<String, askama::Error> {
    let email = ItineraryEmail {
        sequence: sequence
            .iter()
            .map(|i| i.as_str())
            .collect::<Vec<_>>()
            .join(" → "),
        flights: itinerary.legs().iter().map(FlightView::from_leg).collect(),
        total_flight_duration: format_duration(itinerary.total_flight_duration()),
        total_layover_duration: format_duration(itinerary.total_layover_duration()),
        total_travel_time: format_duration(itinerary.total_travel_time()),
        total_cost: format!("{:.2}", itinerary.total_cost()),
    };

    email.render()
}
