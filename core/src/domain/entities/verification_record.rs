//! Verification record entity for email-based account confirmation.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::EmailAddress;

/// Length of a verification code
pub const CODE_LENGTH: usize = 6;

/// The single outstanding verification code for one email address
///
/// At most one record exists per email at any time. A new request for the
/// same address overwrites the code and expiry in place; there is no history
/// of superseded codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Normalized recipient email address (unique key in the store)
    pub email: String,

    /// The 6-digit verification code
    pub code: String,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl VerificationRecord {
    /// Creates a record for a freshly issued code
    ///
    /// # Arguments
    ///
    /// * `email` - The normalized recipient address
    /// * `code` - The 6-digit code just generated
    /// * `ttl_minutes` - Minutes until the code expires
    ///
    /// # Returns
    ///
    /// A new `VerificationRecord` expiring `ttl_minutes` from now
    pub fn new(email: &EmailAddress, code: String, ttl_minutes: i64) -> Self {
        Self {
            email: email.as_str().to_string(),
            code,
            expires_at: Utc::now() + Duration::minutes(ttl_minutes),
        }
    }

    /// Checks if the verification code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Gets the time remaining until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}
