//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `database` - Database connection and pool configuration
//! - `queue` - Queue transport (broker URL and queue names)
//! - `verification` - Verification code policy (TTL)

pub mod database;
pub mod queue;
pub mod verification;

pub use database::DatabaseConfig;
pub use queue::QueueConfig;
pub use verification::VerificationConfig;
