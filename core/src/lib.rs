//! # VerifyProvider Core
//!
//! Core business logic and domain layer for the email verification provider.
//! This crate contains domain entities, the message codec, the code
//! generator, repository interfaces, and the request-handling service that
//! ties them together per inbound queue message.

pub mod domain;
pub mod errors;
pub mod messaging;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{EmailNotification, VerificationRecord, CODE_LENGTH};
pub use domain::value_objects::EmailAddress;
pub use errors::{ProcessingError, ProcessingResult};
pub use repositories::VerificationRepository;
pub use services::{CodeGenerator, MockCodeGenerator, SecureCodeGenerator, VerificationService};
