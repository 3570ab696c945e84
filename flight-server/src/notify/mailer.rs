//! HTTP mail-relay client.
//!
//! Sends the itinerary report through a JSON mail-relay API. Delivery
//! is best-effort: callers log failures and never propagate them to
//! the HTTP response.

use std::time::Duration;

use serde::Serialize;

/// Errors from the mail-relay client.
#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Relay rejected the credentials
    #[error("unauthorized (invalid mail API key)")]
    Unauthorized,

    /// Relay returned an error status code
    #[error("mail API error {status}: {message}")]
    ApiError { status: u16, message: String },
}

/// Configuration for the mail-relay client.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Base URL of the relay API
    pub api_url: String,
    /// Bearer token for the relay
    pub api_key: String,
    /// Sender address for outgoing mail
    pub from: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MailerConfig {
    /// Create a new config.
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            from: from.into(),
            timeout_secs: 30,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Outgoing message payload.
#[derive(Debug, Serialize)]
struct OutgoingMail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Mail-relay API client.
#[derive(Debug, Clone)]
pub struct HttpMailer {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl HttpMailer {
    /// Create a new mailer with the given configuration.
    pub fn new(config: MailerConfig) -> Result<Self, MailerError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url,
            api_key: config.api_key,
            from: config.from,
        })
    }

    /// Send an HTML email to the recipient.
    pub async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), MailerError> {
        let url = format!("{}/messages", self.api_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&OutgoingMail {
                from: &self.from,
                to,
                subject,
                html,
            })
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(MailerError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(())
    }
}
