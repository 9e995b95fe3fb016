//! Builds the outbound verification email from a recipient and a code.
//!
//! Composition is pure and deterministic: identical inputs produce
//! byte-identical output. The expiry statement in both bodies is rendered
//! from the same TTL the store uses, so the email can never promise a
//! different lifetime than the persisted record has.

use crate::domain::entities::EmailNotification;
use crate::errors::{ProcessingError, ProcessingResult};

/// Compose the verification email for `email` carrying `code`
///
/// # Arguments
///
/// * `email` - Recipient address (must be non-empty)
/// * `code` - The verification code just persisted (must be non-empty)
/// * `ttl_minutes` - Code lifetime, rendered into the expiry statement
///
/// # Returns
///
/// * `Ok(EmailNotification)` - Subject, HTML body, and plain-text body
/// * `Err(ProcessingError::InvalidComposition)` - Empty email or code; this
///   is a caller contract violation and no notification is produced
pub fn compose(email: &str, code: &str, ttl_minutes: i64) -> ProcessingResult<EmailNotification> {
    if email.is_empty() {
        return Err(ProcessingError::InvalidComposition {
            field: "email".to_string(),
        });
    }
    if code.is_empty() {
        return Err(ProcessingError::InvalidComposition {
            field: "code".to_string(),
        });
    }

    let subject = format!("Verification Code {}", code);

    let html_body = format!(
        "<html lang='en'>\n\
         <head>\n\
             <meta charset='UTF-8'>\n\
             <meta name='viewport' content='width=device-width, initial-scale=1.0'>\n\
             <title>Verification Email</title>\n\
         </head>\n\
         <body style='font-family: Arial, sans-serif; background-color: #f4f4f4; margin: 0; padding: 0;'>\n\
             <div style='background-color: #ffffff; width: 80%; max-width: 600px; margin: 20px auto; padding: 20px;'>\n\
                 <div style='background-color: #6366F1; color: #ffffff; padding: 10px; text-align: center;'>\n\
                     <h1>Confirm your email address</h1>\n\
                 </div>\n\
                 <div style='padding: 20px; text-align: center;'>\n\
                     <p>Thank you for signing up with {email}. Please enter the following verification code to activate your account:</p>\n\
                     <p style='font-size: 18px; font-weight: bold;'>{code}</p>\n\
                     <p>This code will expire in {ttl} minutes.</p>\n\
                 </div>\n\
                 <div style='font-size: 12px; text-align: center; color: #777777; padding: 10px;'>\n\
                     <p>If you did not request this email, please ignore it.</p>\n\
                 </div>\n\
             </div>\n\
         </body>\n\
         </html>",
        email = email,
        code = code,
        ttl = ttl_minutes,
    );

    let plain_text_body = format!(
        "Please enter the following verification code to activate your account: {}. \
         This code will expire in {} minutes. \
         If you did not request this email, please ignore it.",
        code, ttl_minutes,
    );

    Ok(EmailNotification {
        to: email.to_string(),
        subject,
        html_body,
        plain_text_body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_embeds_code_and_recipient() {
        let notification = compose("user@example.com", "482913", 30).unwrap();

        assert_eq!(notification.to, "user@example.com");
        assert!(notification.subject.contains("482913"));
        assert!(notification.html_body.contains("482913"));
        assert!(notification.html_body.contains("user@example.com"));
        assert!(notification.plain_text_body.contains("482913"));
    }

    #[test]
    fn test_expiry_statement_follows_ttl() {
        let notification = compose("user@example.com", "482913", 30).unwrap();
        assert!(notification.html_body.contains("expire in 30 minutes"));
        assert!(notification.plain_text_body.contains("expire in 30 minutes"));

        let shorter = compose("user@example.com", "482913", 10).unwrap();
        assert!(shorter.plain_text_body.contains("expire in 10 minutes"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let first = compose("user@example.com", "482913", 30).unwrap();
        let second = compose("user@example.com", "482913", 30).unwrap();

        assert_eq!(first.subject, second.subject);
        assert_eq!(first.plain_text_body, second.plain_text_body);
        assert_eq!(first.html_body, second.html_body);
    }

    #[test]
    fn test_empty_email_is_rejected() {
        let result = compose("", "482913", 30);
        assert!(matches!(
            result,
            Err(ProcessingError::InvalidComposition { ref field }) if field == "email"
        ));
    }

    #[test]
    fn test_empty_code_is_rejected() {
        let result = compose("user@example.com", "", 30);
        assert!(matches!(
            result,
            Err(ProcessingError::InvalidComposition { ref field }) if field == "code"
        ));
    }

    #[test]
    fn test_plain_text_has_no_markup() {
        let notification = compose("user@example.com", "482913", 30).unwrap();
        assert!(!notification.plain_text_body.contains('<'));
    }
}
