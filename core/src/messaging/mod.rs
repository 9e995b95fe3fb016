//! Wire-format handling for queue messages.

pub mod codec;

pub use codec::{decode_request, encode_notification, VerificationRequest};
