//! Elapsed-time parsing for provider duration strings.
//!
//! The flight-offers API reports segment durations in ISO-8601 form,
//! e.g. "PT2H30M", "PT45M", "PT11H". This module parses those into
//! `chrono::Duration` with a typed error on malformed input, never a
//! silent zero.

use chrono::Duration;

/// Error returned when parsing an invalid duration string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid duration: {reason}")]
pub struct DurationError {
    reason: &'static str,
}

impl DurationError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse an ISO-8601 elapsed time of the form `PT#H#M`.
///
/// Both components are optional, but at least one must be present and
/// nothing may trail the last component. Hours are not capped at 24;
/// long-haul segments legitimately exceed a day.
///
/// # Examples
///
/// ```
/// use flight_server::domain::parse_duration;
/// use chrono::Duration;
///
/// assert_eq!(parse_duration("PT2H30M").unwrap(), Duration::minutes(150));
/// assert_eq!(parse_duration("PT45M").unwrap(), Duration::minutes(45));
/// assert_eq!(parse_duration("PT11H").unwrap(), Duration::hours(11));
///
/// assert!(parse_duration("PT").is_err());
/// assert!(parse_duration("2H30M").is_err());
/// assert!(parse_duration("PT30M7S").is_err());
/// ```
pub fn parse_duration(s: &str) -> Result<Duration, DurationError> {
    let rest = s
        .strip_prefix("PT")
        .ok_or_else(|| DurationError::new("expected PT prefix"))?;

    let (hours, rest) = take_component(rest, b'H')?;
    let (minutes, rest) = take_component(rest, b'M')?;

    if !rest.is_empty() {
        return Err(DurationError::new("unexpected trailing characters"));
    }
    if hours.is_none() && minutes.is_none() {
        return Err(DurationError::new("expected at least one of H or M"));
    }

    let total = hours.unwrap_or(0) * 60 + minutes.unwrap_or(0);
    Ok(Duration::minutes(total))
}

/// Consume a leading `<digits><marker>` component, if present.
fn take_component(s: &str, marker: u8) -> Result<(Option<i64>, &str), DurationError> {
    let digits_len = s.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return Ok((None, s));
    }
    if s.as_bytes().get(digits_len) != Some(&marker) {
        // Digits belong to a later component (or the string is malformed;
        // the trailing-characters check catches that).
        return Ok((None, s));
    }
    if digits_len > 6 {
        return Err(DurationError::new("component value too large"));
    }

    let value: i64 = s[..digits_len]
        .parse()
        .map_err(|_| DurationError::new("invalid digits"))?;

    Ok((Some(value), &s[digits_len + 1..]))
}

/// Format a duration as a compact human-readable string.
///
/// Produces "2d 7h 10m" when the duration reaches a day, "7h 10m"
/// otherwise. Used for the email report.
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes % (24 * 60)) / 60;
    let minutes = total_minutes % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else {
        format!("{hours}h {minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hours_and_minutes() {
        assert_eq!(parse_duration("PT2H30M").unwrap(), Duration::minutes(150));
        assert_eq!(parse_duration("PT0H0M").unwrap(), Duration::zero());
        assert_eq!(parse_duration("PT14H5M").unwrap(), Duration::minutes(845));
    }

    #[test]
    fn parse_hours_only() {
        assert_eq!(parse_duration("PT11H").unwrap(), Duration::hours(11));
        // Long-haul durations exceed 24 hours
        assert_eq!(parse_duration("PT29H").unwrap(), Duration::hours(29));
    }

    #[test]
    fn parse_minutes_only() {
        assert_eq!(parse_duration("PT45M").unwrap(), Duration::minutes(45));
        assert_eq!(parse_duration("PT5M").unwrap(), Duration::minutes(5));
    }

    #[test]
    fn reject_missing_prefix() {
        assert!(parse_duration("2H30M").is_err());
        assert!(parse_duration("T2H30M").is_err());
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn reject_empty_body() {
        assert!(parse_duration("PT").is_err());
    }

    #[test]
    fn reject_trailing_garbage() {
        assert!(parse_duration("PT2H30M7S").is_err());
        assert!(parse_duration("PT2H30Mx").is_err());
        assert!(parse_duration("PT2H30").is_err());
    }

    #[test]
    fn reject_components_out_of_order() {
        assert!(parse_duration("PT30M2H").is_err());
    }

    #[test]
    fn reject_oversized_component() {
        assert!(parse_duration("PT99999999H").is_err());
    }

    #[test]
    fn format_short() {
        assert_eq!(format_duration(Duration::minutes(150)), "2h 30m");
        assert_eq!(format_duration(Duration::minutes(5)), "0h 5m");
        assert_eq!(format_duration(Duration::zero()), "0h 0m");
    }

    #[test]
    fn format_with_days() {
        assert_eq!(format_duration(Duration::minutes(24 * 60)), "1d 0h 0m");
        assert_eq!(
            format_duration(Duration::minutes(2 * 24 * 60 + 70)),
            "2d 1h 10m"
        );
    }
}
