//! # VerifyProvider Shared
//!
//! Configuration types shared across the verification provider workspace.
//! Each member crate consumes these rather than reading the environment
//! directly, keeping env-var names in one place.

pub mod config;

pub use config::{DatabaseConfig, QueueConfig, VerificationConfig};
