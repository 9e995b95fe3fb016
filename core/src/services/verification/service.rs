//! Main verification request handler implementation

use std::sync::Arc;

use uuid::Uuid;
use vp_shared::config::VerificationConfig;

use crate::domain::entities::VerificationRecord;
use crate::errors::ProcessingResult;
use crate::messaging::codec;
use crate::repositories::VerificationRepository;
use crate::services::generator::CodeGenerator;
use crate::services::notification;

/// Service handling one verification request per inbound queue message
///
/// Processing is all-or-nothing per message: any step's failure terminates
/// that message's handling and no outbound payload is produced. In
/// particular, a notification is never composed for a code that was not
/// durably recorded, so the emailed code and the stored code cannot diverge.
pub struct VerificationService<G: CodeGenerator, R: VerificationRepository> {
    /// Code generator capability
    generator: Arc<G>,
    /// Verification store
    repository: Arc<R>,
    /// Code TTL policy, shared with the composer's expiry wording
    config: VerificationConfig,
}

impl<G: CodeGenerator, R: VerificationRepository> VerificationService<G, R> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `generator` - Code generator implementation
    /// * `repository` - Verification store implementation
    /// * `config` - TTL policy
    pub fn new(generator: Arc<G>, repository: Arc<R>, config: VerificationConfig) -> Self {
        Self {
            generator,
            repository,
            config,
        }
    }

    /// Handle one inbound queue message body
    ///
    /// Sequences decode, code generation, upsert, composition, and encoding.
    /// The returned bytes are the outbound mail-queue payload; handing them
    /// to the transport is the caller's job.
    ///
    /// # Arguments
    ///
    /// * `body` - Raw inbound message body
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - Encoded outbound notification
    /// * `Err(ProcessingError)` - The step that failed; terminal for this
    ///   message, never fatal to the worker
    pub async fn handle_message(&self, body: &[u8]) -> ProcessingResult<Vec<u8>> {
        let message_id = Uuid::new_v4();

        let request = codec::decode_request(body).map_err(|e| {
            tracing::warn!(
                message_id = %message_id,
                error = %e,
                error_kind = e.kind(),
                event = "request_decode_failed",
                "Discarding poison verification request"
            );
            e
        })?;

        let email = request.email;
        tracing::info!(
            message_id = %message_id,
            email = email.as_str(),
            event = "request_decoded",
            "Handling verification request"
        );

        let code = self.generator.generate().map_err(|e| {
            tracing::error!(
                message_id = %message_id,
                email = email.as_str(),
                error = %e,
                error_kind = e.kind(),
                event = "code_generation_failed",
                "Failed to generate verification code"
            );
            e
        })?;

        let record = VerificationRecord::new(&email, code, self.config.code_ttl_minutes);
        self.repository.upsert(&record).await.map_err(|e| {
            tracing::error!(
                message_id = %message_id,
                email = email.as_str(),
                error = %e,
                error_kind = e.kind(),
                event = "record_upsert_failed",
                "Failed to persist verification code; no email will be sent"
            );
            e
        })?;

        tracing::info!(
            message_id = %message_id,
            email = email.as_str(),
            expires_at = %record.expires_at,
            event = "code_issued",
            "Verification code persisted"
        );

        let notification =
            notification::compose(email.as_str(), &record.code, self.config.code_ttl_minutes)
                .map_err(|e| {
                    tracing::error!(
                        message_id = %message_id,
                        email = email.as_str(),
                        error = %e,
                        error_kind = e.kind(),
                        event = "notification_compose_failed",
                        "Failed to compose verification email"
                    );
                    e
                })?;

        codec::encode_notification(&notification).map_err(|e| {
            // Encoding a well-formed notification failing is a defect, not a
            // business failure; keep its log signature distinct.
            tracing::error!(
                message_id = %message_id,
                email = email.as_str(),
                error = %e,
                error_kind = e.kind(),
                event = "notification_encode_defect",
                "Failed to encode outbound notification payload"
            );
            e
        })
    }

    /// The TTL applied to issued codes, in minutes
    pub fn code_ttl_minutes(&self) -> i64 {
        self.config.code_ttl_minutes
    }
}
