use crate::models::{ClientRecord, ScoringResponse};
use std::fmt;
use std::time::{Duration, Instant};

/// Failure of a scoring call. Each variant maps to its own operator message.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// The endpoint could not be reached.
    Connection(String),
    /// No response within the configured timeout.
    Timeout,
    /// The API answered with a non-2xx status.
    Status { status: u16, body: String },
    /// The response body is not JSON.
    MalformedJson(String),
    /// Anything else, with full diagnostic detail.
    Unexpected(String),
}

impl fmt::Display for ScoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringError::Connection(_) => write!(
                f,
                "Unable to connect to the scoring API. Check the URL and that the API is running."
            ),
            ScoringError::Timeout => write!(
                f,
                "The scoring request timed out. The API may be slow or overloaded."
            ),
            ScoringError::Status { status, body } => {
                write!(f, "Scoring API HTTP error: {} - {}", status, body)
            }
            ScoringError::MalformedJson(_) => write!(
                f,
                "Could not decode the scoring API response as JSON. Check the response format."
            ),
            ScoringError::Unexpected(detail) => {
                write!(f, "An unexpected error occurred: {}", detail)
            }
        }
    }
}

impl std::error::Error for ScoringError {}

impl From<reqwest::Error> for ScoringError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ScoringError::Timeout
        } else if err.is_connect() {
            ScoringError::Connection(err.to_string())
        } else {
            ScoringError::Unexpected(format!("{:?}", err))
        }
    }
}

/// Client for the remote scoring API.
///
/// One POST per submission; no retry and no caching of results.
#[derive(Clone)]
pub struct ScoringClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ScoringClient {
    /// Creates a new `ScoringClient`.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Full URL of the prediction endpoint.
    /// * `timeout` - Upper bound on one scoring call.
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, ScoringError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                ScoringError::Unexpected(format!("Failed to create scoring client: {}", e))
            })?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Scores one client record.
    ///
    /// # Arguments
    ///
    /// * `record` - The record, sent as a flat JSON object.
    ///
    /// # Returns
    ///
    /// * `Result<ScoringResponse, ScoringError>` - Probability, class, threshold and explanation.
    pub async fn score(&self, record: &ClientRecord) -> Result<ScoringResponse, ScoringError> {
        tracing::info!(
            "Scoring record with {} fields at {}",
            record.len(),
            self.endpoint
        );
        let started = Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .json(record)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Scoring request failed: {}", e);
                ScoringError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("Scoring API returned {}: {}", status, body);
            return Err(ScoringError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(ScoringError::from)?;
        let payload: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
            tracing::error!("Scoring API returned malformed JSON: {}", e);
            ScoringError::MalformedJson(e.to_string())
        })?;
        let parsed: ScoringResponse = serde_json::from_value(payload).map_err(|e| {
            ScoringError::Unexpected(format!("scoring response does not match schema: {}", e))
        })?;

        tracing::info!(
            "Scored in {} ms: probability {:.4}, class {}, threshold {:.4}",
            started.elapsed().as_millis(),
            parsed.probability_default,
            parsed.prediction_class,
            parsed.optimal_threshold_used
        );
        Ok(parsed)
    }
}
