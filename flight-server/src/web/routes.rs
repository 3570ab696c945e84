//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::Iata;
use crate::notify::render_report;
use crate::planner::Selector;

use super::dto::*;
use super::state::AppState;

/// Subject line for itinerary notification emails.
const EMAIL_SUBJECT: &str = "Flight Itinerary";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/flights", get(search_flights))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "UP" })
}

/// Search for the best around-the-world itinerary.
async fn search_flights(
    State(state): State<AppState>,
    Query(req): Query<FlightsRequest>,
) -> Result<Response, AppError> {
    let start_origin =
        Iata::parse_normalized(&req.start_origin).map_err(|_| AppError::BadRequest {
            message: format!("Invalid start origin: {}", req.start_origin),
        })?;

    // An unparseable departure instant is a configuration error, not a
    // search miss, so it surfaces as a 500-class failure.
    let start_time = parse_departure_instant(&req.departure_date, &req.departure_time).ok_or_else(
        || AppError::Internal {
            message: format!(
                "Unparseable departure instant: {} {}",
                req.departure_date, req.departure_time
            ),
        },
    )?;

    // Only the non-stop strategy is implemented; itineraries allowing
    // intra-leg connections come from a separate provider integration.
    match req.flight_type.as_deref() {
        None | Some("direct") => {}
        Some(other) => {
            return Err(AppError::BadRequest {
                message: format!("Unsupported flight type: {other}"),
            });
        }
    }

    let selector = Selector::new(state.amadeus.as_ref(), state.config.as_ref());
    let result = selector.select_best(&start_origin, start_time).await;

    let Some(best) = result.best else {
        return Err(AppError::NoItineraries);
    };

    if let Some(email) = req.email.as_deref() {
        send_report(&state, email, &best).await;
    }

    Ok(Json(FlightsResponse {
        status: "SUCCESS",
        data: BestResult::from_best(&best),
    })
    .into_response())
}

/// Combine the date and time query parameters into a UTC instant.
fn parse_departure_instant(date: &str, time: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M")
        .ok()
        .map(|dt| dt.and_utc())
}

/// Render and send the itinerary email. Best-effort: failures are
/// logged and never affect the HTTP response.
async fn send_report(state: &AppState, email: &str, best: &crate::planner::BestItinerary) {
    let Some(mailer) = &state.mailer else {
        warn!(recipient = email, "email requested but mailer is not configured");
        return;
    };

    let html = match render_report(&best.sequence, &best.itinerary) {
        Ok(html) => html,
        Err(e) => {
            warn!(error = %e, "failed to render itinerary email");
            return;
        }
    };

    if let Err(e) = mailer.send(email, EMAIL_SUBJECT, &html).await {
        warn!(error = %e, recipient = email, "failed to send itinerary email");
    }
}

/// Application-level errors with HTTP status mapping.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NoItineraries,
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NoItineraries => (
                StatusCode::BAD_REQUEST,
                "No valid itineraries were found across all sequences.".to_string(),
            ),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse {
            status: "FAILED",
            message,
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_departure_instant_valid() {
        let instant = parse_departure_instant("2025-03-15", "08:00").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2025, 3, 15, 8, 0, 0).unwrap());
    }

    #[test]
    fn parse_departure_instant_midnight() {
        let instant = parse_departure_instant("2025-12-31", "23:59").unwrap();
        assert_eq!(
            instant,
            Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 0).unwrap()
        );
    }

    #[test]
    fn parse_departure_instant_invalid() {
        assert!(parse_departure_instant("2025-03-15", "8am").is_none());
        assert!(parse_departure_instant("15/03/2025", "08:00").is_none());
        assert!(parse_departure_instant("2025-03-15", "25:00").is_none());
        assert!(parse_departure_instant("", "").is_none());
        assert!(parse_departure_instant("2025-02-30", "08:00").is_none());
    }

    #[test]
    fn no_itineraries_maps_to_bad_request() {
        let response = AppError::NoItineraries.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_500() {
        let response = AppError::Internal {
            message: "boom".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest {
            message: "bad".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
