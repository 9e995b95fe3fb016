//! Business services containing domain logic and use cases.

pub mod generator;
pub mod notification;
pub mod verification;

// Re-export commonly used types
pub use generator::{CodeGenerator, MockCodeGenerator, SecureCodeGenerator};
pub use notification::compose;
pub use verification::VerificationService;
