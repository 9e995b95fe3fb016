//! Email address value object with normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ProcessingError, ProcessingResult};

/// Normalized email address used as the identity key in the store
///
/// Normalization is trim + ASCII lowercase, applied once at the boundary so
/// every lookup and write uses the same key for the same mailbox. An empty
/// or whitespace-only input is rejected as a missing identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse and normalize a raw email string
    ///
    /// # Returns
    ///
    /// * `Ok(EmailAddress)` - Normalized address
    /// * `Err(ProcessingError::MissingIdentity)` - Input was empty or blank
    pub fn parse(raw: &str) -> ProcessingResult<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(ProcessingError::MissingIdentity);
        }
        Ok(Self(normalized))
    }

    /// The normalized address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value object, yielding the normalized string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
