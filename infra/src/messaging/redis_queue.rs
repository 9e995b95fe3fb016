//! Redis-list queue transport.
//!
//! Queues are Redis lists: producers `LPUSH`, this worker `BRPOP`s the
//! inbound queue and `LPUSH`es outbound email payloads. The blocking pop
//! carries a timeout so the worker loop can observe shutdown signals.

use redis::aio::ConnectionManager;
use redis::Client;
use vp_shared::config::QueueConfig;

use crate::InfrastructureError;

/// Queue transport backed by Redis lists
#[derive(Clone)]
pub struct RedisQueueTransport {
    connection: ConnectionManager,
    config: QueueConfig,
}

impl RedisQueueTransport {
    /// Connect to the broker
    ///
    /// # Arguments
    /// * `config` - Broker URL and queue names
    ///
    /// # Returns
    /// * `Ok(RedisQueueTransport)` - Connected transport
    /// * `Err(InfrastructureError)` - Connection failed
    pub async fn connect(config: QueueConfig) -> Result<Self, InfrastructureError> {
        let client = Client::open(config.url.as_str())?;
        let connection = ConnectionManager::new(client).await?;

        tracing::info!(
            requests_queue = %config.requests_queue,
            email_queue = %config.email_queue,
            event = "queue_transport_connected",
            "Connected to queue broker"
        );

        Ok(Self { connection, config })
    }

    /// Block for up to the configured timeout waiting for an inbound message
    ///
    /// # Returns
    /// * `Ok(Some(Vec<u8>))` - Raw body of the next verification request
    /// * `Ok(None)` - Timed out with no message available
    /// * `Err(InfrastructureError)` - Transport failure
    pub async fn pop_request(&self) -> Result<Option<Vec<u8>>, InfrastructureError> {
        let mut connection = self.connection.clone();

        let popped: Option<(String, Vec<u8>)> = redis::cmd("BRPOP")
            .arg(&self.config.requests_queue)
            .arg(self.config.pop_timeout_secs)
            .query_async(&mut connection)
            .await?;

        Ok(popped.map(|(_queue, body)| body))
    }

    /// Hand an encoded email notification to the outbound queue
    ///
    /// # Arguments
    /// * `payload` - Encoded `EmailNotification` wire bytes
    pub async fn publish_email(&self, payload: &[u8]) -> Result<(), InfrastructureError> {
        let mut connection = self.connection.clone();

        redis::cmd("LPUSH")
            .arg(&self.config.email_queue)
            .arg(payload)
            .query_async::<_, ()>(&mut connection)
            .await?;

        tracing::debug!(
            email_queue = %self.config.email_queue,
            payload_bytes = payload.len(),
            event = "email_payload_published",
            "Queued outbound email payload"
        );

        Ok(())
    }
}
