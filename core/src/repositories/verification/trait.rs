//! Verification repository trait defining the interface for code persistence.
//!
//! This module defines the repository pattern interface for the verification
//! store. The trait is async-first and uses Result types for proper error
//! handling; implementations live in the infrastructure layer.

use async_trait::async_trait;

use crate::domain::entities::VerificationRecord;
use crate::errors::ProcessingError;

/// Repository trait for the verification store
///
/// The store holds at most one record per email. `upsert` must be atomic per
/// key: two concurrent upserts for the same email serialize so the stored
/// row is exactly one writer's complete `(code, expires_at)` pair, never a
/// mixture. Upserts for different emails must not interfere.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use vp_core::repositories::VerificationRepository;
/// use vp_core::domain::entities::VerificationRecord;
/// use vp_core::errors::ProcessingError;
///
/// struct MySqlVerificationRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl VerificationRepository for MySqlVerificationRepository {
///     async fn find_by_email(
///         &self,
///         email: &str,
///     ) -> Result<Option<VerificationRecord>, ProcessingError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     async fn upsert(&self, record: &VerificationRecord) -> Result<(), ProcessingError> {
///         // Implementation here
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait VerificationRepository: Send + Sync {
    /// Find the outstanding verification record for an email address
    ///
    /// # Arguments
    /// * `email` - Normalized email address (the store key)
    ///
    /// # Returns
    /// * `Ok(Some(VerificationRecord))` - A record exists for this email
    /// * `Ok(None)` - No record for this email
    /// * `Err(ProcessingError::Persistence)` - Store unavailable or read failed
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<VerificationRecord>, ProcessingError>;

    /// Insert or overwrite the record for the email carried by `record`
    ///
    /// Last-writer-wins: if a record already exists for the email, its code
    /// and expiry are replaced in place and the prior code is immediately
    /// invalidated, even if unused and unexpired.
    ///
    /// # Arguments
    /// * `record` - The record to persist (email, code, expiry)
    ///
    /// # Returns
    /// * `Ok(())` - The record is durably stored
    /// * `Err(ProcessingError::Persistence)` - Write rejected or store down;
    ///   the caller must not assume partial success
    async fn upsert(&self, record: &VerificationRecord) -> Result<(), ProcessingError>;
}
