//! Outbound email notification payload.

use serde::{Deserialize, Serialize};

/// Email payload handed to the mail-dispatch collaborator
///
/// Derived deterministically from `(email, code)` by the notification
/// composer; carries no persisted identity of its own. Field names follow
/// the wire contract of the downstream mail queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotification {
    /// Recipient email address
    pub to: String,

    /// Subject line embedding the verification code
    pub subject: String,

    /// HTML body with recipient, code, and expiry statement
    pub html_body: String,

    /// Plain-text body carrying the same information without markup
    pub plain_text_body: String,
}
