//! Domain entities representing core business objects.

pub mod email_notification;
pub mod verification_record;

// Re-export commonly used types
pub use email_notification::EmailNotification;
pub use verification_record::{VerificationRecord, CODE_LENGTH};
