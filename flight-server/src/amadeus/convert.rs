//! Conversion from Amadeus DTOs to domain types.
//!
//! This module handles the transformation of raw flight-offer responses
//! into validated domain `Offer`s: IATA codes, timestamps, durations,
//! and prices are all parsed here so the planner never sees raw strings.

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::warn;

use crate::domain::{Iata, Offer, OfferSegment, parse_duration};

use super::types::{FlightOfferDto, FlightOffersResponse, SegmentDto};

/// Timestamp format used by segment endpoints. The API reports local
/// times with no offset; they are interpreted as UTC, matching how the
/// simulator compares them against the search floor.
const ENDPOINT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse an IATA code
    #[error("invalid IATA code: {0}")]
    InvalidIata(String),

    /// Failed to parse a timestamp string
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Failed to parse a segment duration
    #[error("invalid duration {value}: {source}")]
    InvalidDuration {
        value: String,
        source: crate::domain::DurationError,
    },

    /// Failed to parse the price total
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Offer carried no itineraries or no segments
    #[error("offer has no segments")]
    MissingSegments,
}

/// Convert a flight-offers response to domain offers.
///
/// Individually malformed offers are skipped with a warning rather than
/// failing the batch; an unusable response body should be rejected
/// before reaching this point.
pub fn convert_offers(response: &FlightOffersResponse) -> Vec<Offer> {
    let mut offers = Vec::with_capacity(response.data.len());

    for (index, dto) in response.data.iter().enumerate() {
        match convert_offer(dto) {
            Ok(offer) => offers.push(offer),
            Err(e) => {
                warn!(offer_index = index, error = %e, "skipping malformed offer");
            }
        }
    }

    offers
}

/// Convert a single offer DTO to a domain offer.
pub fn convert_offer(dto: &FlightOfferDto) -> Result<Offer, ConversionError> {
    let itinerary = dto
        .itineraries
        .first()
        .ok_or(ConversionError::MissingSegments)?;
    if itinerary.segments.is_empty() {
        return Err(ConversionError::MissingSegments);
    }

    let segments = itinerary
        .segments
        .iter()
        .map(convert_segment)
        .collect::<Result<Vec<_>, _>>()?;

    let price = dto
        .price
        .total
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .ok_or_else(|| ConversionError::InvalidPrice(dto.price.total.clone()))?;

    let validating_airline = dto.validating_airline_codes.first().cloned();

    Ok(Offer {
        segments,
        price,
        validating_airline,
    })
}

fn convert_segment(dto: &SegmentDto) -> Result<OfferSegment, ConversionError> {
    let origin = Iata::parse(&dto.departure.iata_code)
        .map_err(|_| ConversionError::InvalidIata(dto.departure.iata_code.clone()))?;
    let destination = Iata::parse(&dto.arrival.iata_code)
        .map_err(|_| ConversionError::InvalidIata(dto.arrival.iata_code.clone()))?;

    let departure = parse_endpoint_time(&dto.departure.at)?;
    let arrival = parse_endpoint_time(&dto.arrival.at)?;

    let duration = parse_duration(&dto.duration).map_err(|source| {
        ConversionError::InvalidDuration {
            value: dto.duration.clone(),
            source,
        }
    })?;

    Ok(OfferSegment {
        origin,
        destination,
        carrier_code: dto.carrier_code.clone(),
        number: dto.number.clone(),
        departure,
        arrival,
        duration,
        stops: dto.number_of_stops,
    })
}

fn parse_endpoint_time(s: &str) -> Result<DateTime<Utc>, ConversionError> {
    NaiveDateTime::parse_from_str(s, ENDPOINT_TIME_FORMAT)
        .map(|dt| dt.and_utc())
        .map_err(|_| ConversionError::InvalidTimestamp(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amadeus::{EndpointDto, OfferItineraryDto, PriceDto};
    use chrono::TimeZone;

    fn segment_dto(from: &str, to: &str, dep_at: &str, arr_at: &str) -> SegmentDto {
        SegmentDto {
            departure: EndpointDto {
                iata_code: from.into(),
                at: dep_at.into(),
            },
            arrival: EndpointDto {
                iata_code: to.into(),
                at: arr_at.into(),
            },
            carrier_code: "LA".into(),
            number: "896".into(),
            duration: "PT3H25M".into(),
            number_of_stops: 0,
        }
    }

    fn offer_dto(segments: Vec<SegmentDto>, total: &str) -> FlightOfferDto {
        FlightOfferDto {
            itineraries: vec![OfferItineraryDto { segments }],
            price: PriceDto {
                total: total.into(),
                currency: Some("USD".into()),
            },
            validating_airline_codes: vec!["LA".into()],
        }
    }

    fn valid_dto() -> FlightOfferDto {
        offer_dto(
            vec![segment_dto(
                "PUQ",
                "SCL",
                "2025-03-15T20:20:00",
                "2025-03-15T23:45:00",
            )],
            "79.10",
        )
    }

    #[test]
    fn convert_valid_offer() {
        let offer = convert_offer(&valid_dto()).unwrap();

        assert_eq!(offer.segments.len(), 1);
        assert_eq!(offer.price, 79.10);
        assert_eq!(offer.validating_airline.as_deref(), Some("LA"));

        let segment = &offer.segments[0];
        assert_eq!(segment.origin.as_str(), "PUQ");
        assert_eq!(segment.destination.as_str(), "SCL");
        assert_eq!(
            segment.departure,
            Utc.with_ymd_and_hms(2025, 3, 15, 20, 20, 0).unwrap()
        );
        assert_eq!(segment.duration, chrono::Duration::minutes(205));
        assert_eq!(segment.stops, 0);
    }

    #[test]
    fn missing_airline_yields_none() {
        let mut dto = valid_dto();
        dto.validating_airline_codes.clear();
        let offer = convert_offer(&dto).unwrap();
        assert_eq!(offer.validating_airline, None);
    }

    #[test]
    fn reject_empty_itineraries() {
        let mut dto = valid_dto();
        dto.itineraries.clear();
        assert!(matches!(
            convert_offer(&dto),
            Err(ConversionError::MissingSegments)
        ));
    }

    #[test]
    fn reject_empty_segments() {
        let mut dto = valid_dto();
        dto.itineraries[0].segments.clear();
        assert!(matches!(
            convert_offer(&dto),
            Err(ConversionError::MissingSegments)
        ));
    }

    #[test]
    fn reject_bad_iata() {
        let mut dto = valid_dto();
        dto.itineraries[0].segments[0].departure.iata_code = "puq!".into();
        assert!(matches!(
            convert_offer(&dto),
            Err(ConversionError::InvalidIata(_))
        ));
    }

    #[test]
    fn reject_bad_timestamp() {
        let mut dto = valid_dto();
        dto.itineraries[0].segments[0].arrival.at = "2025-03-15 23:45".into();
        assert!(matches!(
            convert_offer(&dto),
            Err(ConversionError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn reject_bad_duration() {
        let mut dto = valid_dto();
        dto.itineraries[0].segments[0].duration = "3h25m".into();
        assert!(matches!(
            convert_offer(&dto),
            Err(ConversionError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn reject_bad_price() {
        for bad in ["", "abc", "-5.00", "NaN", "inf"] {
            let mut dto = valid_dto();
            dto.price.total = bad.into();
            assert!(
                matches!(convert_offer(&dto), Err(ConversionError::InvalidPrice(_))),
                "price {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn batch_conversion_skips_malformed() {
        let mut bad = valid_dto();
        bad.price.total = "oops".into();

        let response = FlightOffersResponse {
            data: vec![valid_dto(), bad, valid_dto()],
        };

        let offers = convert_offers(&response);
        assert_eq!(offers.len(), 2);
    }
}
