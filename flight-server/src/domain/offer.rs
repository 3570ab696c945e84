//! Provider offer types, domain side.
//!
//! An `Offer` is one priced flight option from the flight-search
//! provider, already validated by `amadeus::convert`. The resolver
//! filters offers down to qualifying non-stop flights; keeping the full
//! segment structure here is what lets it see multi-segment offers to
//! reject them.

use chrono::{DateTime, Duration, Utc};

use super::Iata;

/// One segment of a provider offer (a single aircraft movement).
#[derive(Debug, Clone, PartialEq)]
pub struct OfferSegment {
    /// Departure airport.
    pub origin: Iata,

    /// Arrival airport.
    pub destination: Iata,

    /// Operating carrier code (e.g. "LA").
    pub carrier_code: String,

    /// Flight number without the carrier prefix (e.g. "896").
    pub number: String,

    /// Departure instant (UTC).
    pub departure: DateTime<Utc>,

    /// Arrival instant (UTC).
    pub arrival: DateTime<Utc>,

    /// Elapsed segment duration as reported by the provider.
    pub duration: Duration,

    /// Intermediate stops within this segment (0 for non-stop).
    pub stops: u32,
}

/// One priced offer: a sequence of segments plus the total price.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    /// Segments in travel order. Never empty after conversion.
    pub segments: Vec<OfferSegment>,

    /// Total price in the configured currency.
    pub price: f64,

    /// Validating airline code, when the provider reports one.
    pub validating_airline: Option<String>,
}

impl Offer {
    /// True when the offer is a single segment with no intermediate stops.
    pub fn is_direct(&self) -> bool {
        self.segments.len() == 1 && self.segments[0].stops == 0
    }

    /// The departure instant of the first segment.
    pub fn departure(&self) -> Option<DateTime<Utc>> {
        self.segments.first().map(|s| s.departure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    fn segment(from: &str, to: &str, stops: u32) -> OfferSegment {
        OfferSegment {
            origin: iata(from),
            destination: iata(to),
            carrier_code: "LA".into(),
            number: "896".into(),
            departure: Utc.with_ymd_and_hms(2025, 3, 15, 20, 20, 0).unwrap(),
            arrival: Utc.with_ymd_and_hms(2025, 3, 15, 23, 45, 0).unwrap(),
            duration: Duration::minutes(205),
            stops,
        }
    }

    fn offer(segments: Vec<OfferSegment>) -> Offer {
        Offer {
            segments,
            price: 79.1,
            validating_airline: Some("LA".into()),
        }
    }

    #[test]
    fn single_segment_no_stops_is_direct() {
        assert!(offer(vec![segment("PUQ", "SCL", 0)]).is_direct());
    }

    #[test]
    fn segment_with_stops_is_not_direct() {
        assert!(!offer(vec![segment("PUQ", "SCL", 1)]).is_direct());
    }

    #[test]
    fn multi_segment_is_not_direct() {
        let o = offer(vec![segment("PUQ", "SCL", 0), segment("SCL", "MIA", 0)]);
        assert!(!o.is_direct());
    }

    #[test]
    fn departure_comes_from_first_segment() {
        let o = offer(vec![segment("PUQ", "SCL", 0)]);
        assert_eq!(o.departure(), Some(o.segments[0].departure));
    }
}
