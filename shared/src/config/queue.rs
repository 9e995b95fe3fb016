//! Queue transport configuration module

use serde::{Deserialize, Serialize};

/// Configuration for the queue transport carrying verification traffic
///
/// The inbound queue delivers verification requests; the outbound queue is
/// consumed by the mail-dispatch collaborator.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueueConfig {
    /// Broker connection URL
    pub url: String,

    /// Name of the inbound verification-request queue
    pub requests_queue: String,

    /// Name of the outbound email queue
    pub email_queue: String,

    /// Blocking-pop timeout in seconds when polling the inbound queue
    pub pop_timeout_secs: u64,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            requests_queue: String::from("verification_requests"),
            email_queue: String::from("email_requests"),
            pop_timeout_secs: 5,
        }
    }
}

impl QueueConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: std::env::var("QUEUE_URL").unwrap_or(defaults.url),
            requests_queue: std::env::var("VERIFICATION_REQUESTS_QUEUE")
                .unwrap_or(defaults.requests_queue),
            email_queue: std::env::var("EMAIL_QUEUE").unwrap_or(defaults.email_queue),
            pop_timeout_secs: std::env::var("QUEUE_POP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.pop_timeout_secs),
        }
    }
}
