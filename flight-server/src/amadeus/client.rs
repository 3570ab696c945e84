//! Amadeus flight-offers HTTP client.
//!
//! Provides async access to the flight-offers search API. Handles
//! OAuth2 client-credentials authentication (token cached until close
//! to expiry), rate limiting via a semaphore, and conversion of
//! responses to domain offers.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tokio::sync::{RwLock, Semaphore};

use crate::domain::{Iata, Offer};
use crate::planner::{OfferSource, ProviderError};

use super::convert::convert_offers;
use super::error::AmadeusError;
use super::types::{FlightOffersResponse, TokenResponse};

/// Default base URL (Amadeus self-service test environment).
const DEFAULT_BASE_URL: &str = "https://test.api.amadeus.com";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Refresh the cached token this long before its reported expiry.
const TOKEN_EXPIRY_SLACK_SECS: u64 = 60;

/// Configuration for the Amadeus client.
#[derive(Debug, Clone)]
pub struct AmadeusConfig {
    /// API key (OAuth2 client id)
    pub api_key: String,
    /// API secret (OAuth2 client secret)
    pub api_secret: String,
    /// Base URL for the API (defaults to the test environment)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Currency code for offer pricing
    pub currency: String,
    /// Maximum offers to request per search
    pub max_offers: u32,
}

impl AmadeusConfig {
    /// Create a new config with the given credentials.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
            currency: "USD".to_string(),
            max_offers: 100,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the pricing currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

/// A bearer token with its refresh deadline.
#[derive(Debug, Clone)]
struct CachedToken {
    bearer: String,
    refresh_after: Instant,
}

/// Amadeus flight-offers API client.
///
/// Uses a semaphore to limit concurrent requests and avoid tripping the
/// API's rate limits during the selector's fan-out.
#[derive(Debug, Clone)]
pub struct AmadeusClient {
    http: reqwest::Client,
    config: AmadeusConfig,
    token: Arc<RwLock<Option<CachedToken>>>,
    semaphore: Arc<Semaphore>,
}

impl AmadeusClient {
    /// Create a new client with the given configuration.
    pub fn new(config: AmadeusConfig) -> Result<Self, AmadeusError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let semaphore = Arc::new(Semaphore::new(config.max_concurrent));

        Ok(Self {
            http,
            config,
            token: Arc::new(RwLock::new(None)),
            semaphore,
        })
    }

    /// Search flight offers for a one-way trip on the given date.
    ///
    /// Returns converted domain offers; individually malformed offers
    /// are dropped during conversion.
    pub async fn fetch_offers(
        &self,
        origin: &Iata,
        destination: &Iata,
        date: NaiveDate,
    ) -> Result<Vec<Offer>, AmadeusError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| AmadeusError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let bearer = self.bearer_token().await?;

        let url = format!("{}/v2/shopping/flight-offers", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&bearer)
            .query(&[
                ("originLocationCode", origin.as_str().to_string()),
                ("destinationLocationCode", destination.as_str().to_string()),
                ("departureDate", date.format("%Y-%m-%d").to_string()),
                ("adults", "1".to_string()),
                ("currencyCode", self.config.currency.clone()),
                ("max", self.config.max_offers.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            // Token may have been revoked early; force a re-auth next call
            *self.token.write().await = None;
            return Err(AmadeusError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AmadeusError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AmadeusError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: FlightOffersResponse =
            serde_json::from_str(&body).map_err(|e| AmadeusError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(convert_offers(&parsed))
    }

    /// Return a valid bearer token, fetching or refreshing as needed.
    async fn bearer_token(&self) -> Result<String, AmadeusError> {
        {
            let guard = self.token.read().await;
            if let Some(token) = guard.as_ref() {
                if token.refresh_after > Instant::now() {
                    return Ok(token.bearer.clone());
                }
            }
        }

        let mut guard = self.token.write().await;

        // Another task may have refreshed while we waited for the lock
        if let Some(token) = guard.as_ref() {
            if token.refresh_after > Instant::now() {
                return Ok(token.bearer.clone());
            }
        }

        let url = format!("{}/v1/security/oauth2/token", self.config.base_url);

        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.api_key.as_str()),
                ("client_secret", self.config.api_secret.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AmadeusError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AmadeusError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let token: TokenResponse = serde_json::from_str(&body).map_err(|e| AmadeusError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        let lifetime = token.expires_in.saturating_sub(TOKEN_EXPIRY_SLACK_SECS);
        *guard = Some(CachedToken {
            bearer: token.access_token.clone(),
            refresh_after: Instant::now() + Duration::from_secs(lifetime),
        });

        Ok(token.access_token)
    }
}

impl OfferSource for AmadeusClient {
    async fn search_offers(
        &self,
        origin: &Iata,
        destination: &Iata,
        date: NaiveDate,
    ) -> Result<Vec<Offer>, ProviderError> {
        self.fetch_offers(origin, destination, date)
            .await
            .map_err(ProviderError::from)
    }
}
