//! Worker loop: pull inbound requests, handle, publish outbound payloads.

use std::time::Duration;

use anyhow::Result;

use vp_core::repositories::VerificationRepository;
use vp_core::services::generator::CodeGenerator;
use vp_core::services::verification::VerificationService;
use vp_infra::messaging::RedisQueueTransport;

/// Seconds to back off after a transport failure before polling again
const TRANSPORT_BACKOFF_SECS: u64 = 1;

/// Run the worker loop until interrupted
///
/// Each message is handled independently; a failed message is logged by the
/// service with its correlation id and never brings the worker down. Retry
/// of failed messages is the broker's redelivery policy, not ours.
pub async fn run<G, R>(
    service: VerificationService<G, R>,
    transport: RedisQueueTransport,
) -> Result<()>
where
    G: CodeGenerator,
    R: VerificationRepository,
{
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!(event = "worker_shutdown", "Received interrupt, shutting down");
                return Ok(());
            }
            popped = transport.pop_request() => {
                match popped {
                    Ok(Some(body)) => {
                        // Processing errors are already logged with context
                        // by the service; the loop just moves on.
                        if let Ok(payload) = service.handle_message(&body).await {
                            if let Err(e) = transport.publish_email(&payload).await {
                                tracing::error!(
                                    error = %e,
                                    event = "email_publish_failed",
                                    "Failed to hand off outbound email payload"
                                );
                            }
                        }
                    }
                    Ok(None) => {
                        // Poll timeout with an empty queue
                        continue;
                    }
                    Err(e) => {
                        tracing::error!(
                            error = %e,
                            event = "queue_pop_failed",
                            "Failed to poll inbound queue"
                        );
                        tokio::time::sleep(Duration::from_secs(TRANSPORT_BACKOFF_SECS)).await;
                    }
                }
            }
        }
    }
}
