//! Wire types for the Amadeus flight-offers API.
//!
//! These mirror the JSON shapes returned by the API and are converted
//! to domain types by `convert`. Field names follow the API's
//! camelCase convention.

use serde::Deserialize;

/// Response from the OAuth2 token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for subsequent requests
    pub access_token: String,

    /// Token lifetime in seconds
    pub expires_in: u64,
}

/// Top-level flight-offers search response.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightOffersResponse {
    /// The offers; absent on empty results
    #[serde(default)]
    pub data: Vec<FlightOfferDto>,
}

/// One priced flight offer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOfferDto {
    /// Itinerary options within the offer (one per direction; we search
    /// one-way, so exactly one is expected)
    pub itineraries: Vec<OfferItineraryDto>,

    /// Total price
    pub price: PriceDto,

    /// Airline codes validating the ticket
    #[serde(default)]
    pub validating_airline_codes: Vec<String>,
}

/// One itinerary within an offer: an ordered list of segments.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferItineraryDto {
    /// Segments in travel order
    pub segments: Vec<SegmentDto>,
}

/// One flight segment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDto {
    /// Departure endpoint
    pub departure: EndpointDto,

    /// Arrival endpoint
    pub arrival: EndpointDto,

    /// Operating carrier code (e.g. "LA")
    pub carrier_code: String,

    /// Flight number without the carrier prefix
    pub number: String,

    /// ISO-8601 elapsed duration (e.g. "PT3H25M")
    pub duration: String,

    /// Intermediate stops within the segment
    #[serde(default)]
    pub number_of_stops: u32,
}

/// A segment endpoint: airport plus local timestamp.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDto {
    /// IATA airport code
    pub iata_code: String,

    /// Timestamp, "YYYY-MM-DDTHH:MM:SS" with no offset
    pub at: String,
}

/// Offer price.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceDto {
    /// Decimal total as a string (e.g. "79.10")
    pub total: String,

    /// ISO currency code
    #[serde(default)]
    pub currency: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_offer_response() {
        let json = r#"{
            "data": [{
                "itineraries": [{
                    "segments": [{
                        "departure": {"iataCode": "PUQ", "at": "2025-03-15T20:20:00"},
                        "arrival": {"iataCode": "SCL", "at": "2025-03-15T23:45:00"},
                        "carrierCode": "LA",
                        "number": "896",
                        "duration": "PT3H25M",
                        "numberOfStops": 0
                    }]
                }],
                "price": {"total": "79.10", "currency": "USD"},
                "validatingAirlineCodes": ["LA"]
            }]
        }"#;

        let response: FlightOffersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 1);

        let offer = &response.data[0];
        assert_eq!(offer.itineraries.len(), 1);
        assert_eq!(offer.price.total, "79.10");
        assert_eq!(offer.validating_airline_codes, vec!["LA"]);

        let segment = &offer.itineraries[0].segments[0];
        assert_eq!(segment.departure.iata_code, "PUQ");
        assert_eq!(segment.arrival.at, "2025-03-15T23:45:00");
        assert_eq!(segment.carrier_code, "LA");
        assert_eq!(segment.number_of_stops, 0);
    }

    #[test]
    fn deserialize_empty_response() {
        let response: FlightOffersResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn deserialize_missing_optional_fields() {
        let json = r#"{
            "data": [{
                "itineraries": [{
                    "segments": [{
                        "departure": {"iataCode": "PUQ", "at": "2025-03-15T20:20:00"},
                        "arrival": {"iataCode": "SCL", "at": "2025-03-15T23:45:00"},
                        "carrierCode": "LA",
                        "number": "896",
                        "duration": "PT3H25M"
                    }]
                }],
                "price": {"total": "79.10"}
            }]
        }"#;

        let response: FlightOffersResponse = serde_json::from_str(json).unwrap();
        let offer = &response.data[0];
        assert!(offer.validating_airline_codes.is_empty());
        assert_eq!(offer.price.currency, None);
        assert_eq!(offer.itineraries[0].segments[0].number_of_stops, 0);
    }

    #[test]
    fn deserialize_token_response() {
        let json = r#"{"access_token": "abc123", "expires_in": 1799, "token_type": "Bearer"}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "abc123");
        assert_eq!(token.expires_in, 1799);
    }
}
