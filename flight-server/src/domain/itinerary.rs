//! Itinerary types.
//!
//! An `Itinerary` is the outcome of simulating one candidate destination
//! sequence: the chained legs plus the aggregates the selector ranks by.
//! Aggregates are computed at construction so they cannot drift from the
//! legs they summarise.

use chrono::Duration;

use super::{DomainError, Iata, Leg};

/// A leg within an itinerary, annotated with the layover that preceded it.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryLeg {
    /// The flight itself.
    pub leg: Leg,

    /// Idle time between the previous arrival (or the journey start) and
    /// this leg's departure.
    pub layover: Duration,

    /// Where the layover was spent: the previous destination, or the
    /// start origin for the first leg.
    pub layover_at: Iata,
}

/// A complete multi-leg itinerary with precomputed aggregates.
///
/// # Invariants
///
/// - Consecutive legs chain: `legs[i].leg.origin == legs[i-1].leg.destination`
/// - Every layover is non-negative
/// - `total_travel_time == total_flight_duration + total_layover_duration + extra_buffer`
///
/// An itinerary may be empty (an empty destination sequence simulates to
/// zero legs); its travel time is then just the extra buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    legs: Vec<ItineraryLeg>,
    total_flight_duration: Duration,
    total_layover_duration: Duration,
    total_travel_time: Duration,
    total_cost: f64,
}

impl Itinerary {
    /// Construct an itinerary from chained legs.
    ///
    /// `extra_buffer` is the fixed padding added to the travel-time total
    /// for airport processing overhead not captured by flight data.
    ///
    /// # Errors
    ///
    /// Returns `Err` if consecutive legs don't chain or any layover is
    /// negative.
    pub fn from_legs(legs: Vec<ItineraryLeg>, extra_buffer: Duration) -> Result<Self, DomainError> {
        for window in legs.windows(2) {
            let prev_dest = window[0].leg.destination();
            let next_origin = window[1].leg.origin();
            if prev_dest != next_origin {
                return Err(DomainError::LegsNotChained(*prev_dest, *next_origin));
            }
        }
        for leg in &legs {
            if leg.layover < Duration::zero() {
                return Err(DomainError::NegativeLayover(*leg.leg.origin()));
            }
        }

        let total_flight_duration = legs.iter().map(|l| l.leg.duration()).sum();
        let total_layover_duration = legs.iter().map(|l| l.layover).sum();
        let total_cost = legs.iter().map(|l| l.leg.cost()).sum();

        Ok(Itinerary {
            total_travel_time: total_flight_duration + total_layover_duration + extra_buffer,
            legs,
            total_flight_duration,
            total_layover_duration,
            total_cost,
        })
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[ItineraryLeg] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns the sum of all flight durations.
    pub fn total_flight_duration(&self) -> Duration {
        self.total_flight_duration
    }

    /// Returns the sum of all layover durations.
    pub fn total_layover_duration(&self) -> Duration {
        self.total_layover_duration
    }

    /// Returns the ranking objective: flight time + layover time + the
    /// fixed extra buffer.
    pub fn total_travel_time(&self) -> Duration {
        self.total_travel_time
    }

    /// Returns the sum of all leg costs.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Returns the final destination, if the itinerary has any legs.
    pub fn final_destination(&self) -> Option<&Iata> {
        self.legs.last().map(|l| l.leg.destination())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    fn instant(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, h, m, 0).unwrap()
    }

    fn leg(from: &str, to: &str, dep: DateTime<Utc>, arr: DateTime<Utc>, cost: f64) -> Leg {
        Leg::new(
            iata(from),
            iata(to),
            "LA",
            "LA100",
            dep,
            arr,
            arr.signed_duration_since(dep),
            cost,
        )
        .unwrap()
    }

    fn itinerary_leg(leg: Leg, layover_mins: i64, at: &str) -> ItineraryLeg {
        ItineraryLeg {
            leg,
            layover: Duration::minutes(layover_mins),
            layover_at: iata(at),
        }
    }

    #[test]
    fn empty_itinerary() {
        let extra = Duration::minutes(150);
        let itinerary = Itinerary::from_legs(vec![], extra).unwrap();

        assert_eq!(itinerary.leg_count(), 0);
        assert_eq!(itinerary.total_flight_duration(), Duration::zero());
        assert_eq!(itinerary.total_layover_duration(), Duration::zero());
        assert_eq!(itinerary.total_travel_time(), extra);
        assert_eq!(itinerary.total_cost(), 0.0);
        assert_eq!(itinerary.final_destination(), None);
    }

    #[test]
    fn single_leg_totals() {
        let extra = Duration::minutes(150);
        let legs = vec![itinerary_leg(
            leg("PUQ", "SCL", instant(20, 20), instant(23, 45), 79.1),
            90,
            "PUQ",
        )];

        let itinerary = Itinerary::from_legs(legs, extra).unwrap();

        assert_eq!(itinerary.leg_count(), 1);
        assert_eq!(itinerary.total_flight_duration(), Duration::minutes(205));
        assert_eq!(itinerary.total_layover_duration(), Duration::minutes(90));
        assert_eq!(
            itinerary.total_travel_time(),
            Duration::minutes(205 + 90 + 150)
        );
        assert_eq!(itinerary.total_cost(), 79.1);
        assert_eq!(itinerary.final_destination(), Some(&iata("SCL")));
    }

    #[test]
    fn chained_legs_accumulate() {
        let extra = Duration::minutes(150);
        let legs = vec![
            itinerary_leg(
                leg("PUQ", "SCL", instant(8, 0), instant(11, 0), 100.0),
                60,
                "PUQ",
            ),
            itinerary_leg(
                leg("SCL", "MIA", instant(12, 0), instant(20, 30), 450.5),
                60,
                "SCL",
            ),
        ];

        let itinerary = Itinerary::from_legs(legs, extra).unwrap();

        assert_eq!(itinerary.leg_count(), 2);
        assert_eq!(
            itinerary.total_flight_duration(),
            Duration::minutes(180 + 510)
        );
        assert_eq!(itinerary.total_layover_duration(), Duration::minutes(120));
        assert_eq!(
            itinerary.total_travel_time(),
            itinerary.total_flight_duration() + itinerary.total_layover_duration() + extra
        );
        assert_eq!(itinerary.total_cost(), 550.5);
        assert_eq!(itinerary.final_destination(), Some(&iata("MIA")));
    }

    #[test]
    fn unchained_legs_rejected() {
        let legs = vec![
            itinerary_leg(
                leg("PUQ", "SCL", instant(8, 0), instant(11, 0), 100.0),
                60,
                "PUQ",
            ),
            // Departs MAD, but the previous leg arrived at SCL
            itinerary_leg(
                leg("MAD", "MIA", instant(12, 0), instant(20, 30), 450.5),
                60,
                "SCL",
            ),
        ];

        let result = Itinerary::from_legs(legs, Duration::zero());
        assert!(matches!(result, Err(DomainError::LegsNotChained(_, _))));
    }

    #[test]
    fn negative_layover_rejected() {
        let legs = vec![itinerary_leg(
            leg("PUQ", "SCL", instant(8, 0), instant(11, 0), 100.0),
            -5,
            "PUQ",
        )];

        let result = Itinerary::from_legs(legs, Duration::zero());
        assert!(matches!(result, Err(DomainError::NegativeLayover(_))));
    }

    #[test]
    fn zero_layover_allowed() {
        let legs = vec![itinerary_leg(
            leg("PUQ", "SCL", instant(8, 0), instant(11, 0), 100.0),
            0,
            "PUQ",
        )];

        assert!(Itinerary::from_legs(legs, Duration::zero()).is_ok());
    }
}
