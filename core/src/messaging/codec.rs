//! JSON codec for inbound verification requests and outbound notifications.
//!
//! Decoding is defensive: a payload that is not well-formed JSON, or that
//! parses without a usable email, is a poison message reported to the caller
//! rather than a crash. Encoding a well-formed notification is expected to
//! always succeed; an encode failure is a defect class of its own.

use serde::Deserialize;

use crate::domain::entities::EmailNotification;
use crate::domain::value_objects::EmailAddress;
use crate::errors::{ProcessingError, ProcessingResult};

/// A decoded inbound verification request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    /// Normalized recipient address
    pub email: EmailAddress,
}

/// Raw shape of the inbound queue payload before validation
#[derive(Debug, Deserialize)]
struct RawVerificationRequest {
    #[serde(default)]
    email: Option<String>,
}

/// Decode an inbound queue message body into a verification request
///
/// # Returns
///
/// * `Ok(VerificationRequest)` - Parsed request with normalized email
/// * `Err(ProcessingError::MalformedPayload)` - Body is not well-formed JSON
/// * `Err(ProcessingError::MissingIdentity)` - No usable email field
pub fn decode_request(body: &[u8]) -> ProcessingResult<VerificationRequest> {
    let raw: RawVerificationRequest =
        serde_json::from_slice(body).map_err(|e| ProcessingError::MalformedPayload {
            detail: e.to_string(),
        })?;

    let email = EmailAddress::parse(raw.email.as_deref().unwrap_or(""))?;
    Ok(VerificationRequest { email })
}

/// Encode an outbound notification for the mail-dispatch queue
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - JSON payload in the downstream wire format
/// * `Err(ProcessingError::Encode)` - Serialization failed (defect)
pub fn encode_notification(notification: &EmailNotification) -> ProcessingResult<Vec<u8>> {
    serde_json::to_vec(notification).map_err(|e| ProcessingError::Encode {
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_well_formed_request() {
        let request = decode_request(br#"{"email":"user@example.com"}"#).unwrap();
        assert_eq!(request.email.as_str(), "user@example.com");
    }

    #[test]
    fn test_decode_normalizes_email() {
        let request = decode_request(br#"{"email":" User@EXAMPLE.com "}"#).unwrap();
        assert_eq!(request.email.as_str(), "user@example.com");
    }

    #[test]
    fn test_decode_truncated_payload_is_malformed() {
        let result = decode_request(br#"{"email":"user@exa"#);
        assert!(matches!(
            result,
            Err(ProcessingError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn test_decode_non_json_payload_is_malformed() {
        let result = decode_request(b"not json at all");
        assert!(matches!(
            result,
            Err(ProcessingError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn test_decode_missing_email_field() {
        let result = decode_request(br#"{"other":"value"}"#);
        assert!(matches!(result, Err(ProcessingError::MissingIdentity)));
    }

    #[test]
    fn test_decode_empty_email_field() {
        let result = decode_request(br#"{"email":""}"#);
        assert!(matches!(result, Err(ProcessingError::MissingIdentity)));
    }

    #[test]
    fn test_encode_then_decode_recovers_recipient() {
        let notification = EmailNotification {
            to: "user@example.com".to_string(),
            subject: "Verification Code 482913".to_string(),
            html_body: "<p>482913</p>".to_string(),
            plain_text_body: "482913".to_string(),
        };

        let bytes = encode_notification(&notification).unwrap();
        let round_tripped: EmailNotification = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(round_tripped, notification);
    }
}
