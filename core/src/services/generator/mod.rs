//! Verification code generation.
//!
//! The generator is injected into the request-handling service as a
//! capability so tests can substitute a deterministic stub.

pub mod mock;

pub use mock::MockCodeGenerator;

use rand::{rngs::OsRng, RngCore};

use crate::domain::entities::CODE_LENGTH;
use crate::errors::{ProcessingError, ProcessingResult};

/// Lowest value a generated code can take (always 6 digits)
pub const CODE_MIN: u32 = 100_000;

/// Highest value a generated code can take
pub const CODE_MAX: u32 = 999_999;

/// Capability for producing one-time verification codes
pub trait CodeGenerator: Send + Sync {
    /// Produce a fresh 6-digit code in `[100000, 999999]`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A 6-digit numeric code
    /// * `Err(ProcessingError::Generation)` - The random source failed;
    ///   never returns an empty or short code
    fn generate(&self) -> ProcessingResult<String>;
}

/// Production code generator backed by the OS CSPRNG
///
/// Numeric codes from a non-cryptographic generator are predictable, so the
/// entropy source here is `OsRng`.
#[derive(Debug, Clone, Default)]
pub struct SecureCodeGenerator;

impl SecureCodeGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for SecureCodeGenerator {
    fn generate(&self) -> ProcessingResult<String> {
        let mut bytes = [0u8; 4];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| ProcessingError::Generation {
                message: format!("entropy source unavailable: {}", e),
            })?;

        let num = u32::from_le_bytes(bytes);
        // Modulo over 900000 buckets has a slight bias, negligible for
        // 6-digit codes.
        let code = CODE_MIN + (num % (CODE_MAX - CODE_MIN + 1));
        debug_assert_eq!(code.to_string().len(), CODE_LENGTH);
        Ok(code.to_string())
    }
}
