//! Verification code policy configuration

use serde::{Deserialize, Serialize};

/// Default number of minutes before an issued code expires
pub const DEFAULT_CODE_TTL_MINUTES: i64 = 30;

/// Policy configuration for issued verification codes
///
/// The TTL is a deployment-level setting, not a per-request parameter. The
/// notification composer and the store both read it from here so the wording
/// in the email can never drift from the stored expiry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Number of minutes before a verification code expires
    pub code_ttl_minutes: i64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: DEFAULT_CODE_TTL_MINUTES,
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let code_ttl_minutes = std::env::var("CODE_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&m: &i64| m > 0)
            .unwrap_or(DEFAULT_CODE_TTL_MINUTES);

        Self { code_ttl_minutes }
    }
}
