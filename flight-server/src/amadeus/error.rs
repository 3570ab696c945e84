//! Amadeus client error types.

use std::fmt;

use crate::planner::ProviderError;

/// Errors from the Amadeus HTTP client.
#[derive(Debug)]
pub enum AmadeusError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Invalid credentials or expired token
    Unauthorized,

    /// Rate limited by the API
    RateLimited,
}

impl fmt::Display for AmadeusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmadeusError::Http(e) => write!(f, "HTTP error: {e}"),
            AmadeusError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            AmadeusError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            AmadeusError::Unauthorized => write!(f, "unauthorized (invalid credentials)"),
            AmadeusError::RateLimited => write!(f, "rate limited by Amadeus API"),
        }
    }
}

impl std::error::Error for AmadeusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AmadeusError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AmadeusError {
    fn from(err: reqwest::Error) -> Self {
        AmadeusError::Http(err)
    }
}

impl From<AmadeusError> for ProviderError {
    fn from(err: AmadeusError) -> Self {
        ProviderError::new(err.to_string())
    }
}
