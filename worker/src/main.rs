//! Verification provider worker binary.
//!
//! Wires the core service to its infrastructure implementations and runs
//! the consume/handle/publish loop until interrupted.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use vp_core::services::generator::SecureCodeGenerator;
use vp_core::services::verification::VerificationService;
use vp_infra::database::{create_pool, MySqlVerificationRepository};
use vp_infra::messaging::RedisQueueTransport;
use vp_shared::config::{DatabaseConfig, QueueConfig, VerificationConfig};

mod worker;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting verification provider worker");

    // Load configuration
    let database_config = DatabaseConfig::from_env();
    let queue_config = QueueConfig::from_env();
    let verification_config = VerificationConfig::from_env();

    // Wire infrastructure
    let pool = create_pool(&database_config).await?;
    let transport = RedisQueueTransport::connect(queue_config).await?;

    // Wire the core service
    let service = VerificationService::new(
        Arc::new(SecureCodeGenerator::new()),
        Arc::new(MySqlVerificationRepository::new(pool)),
        verification_config,
    );

    worker::run(service, transport).await
}
