//! # Infrastructure Layer
//!
//! Concrete implementations of the core crate's external seams:
//! - **Database**: MySQL verification store using SQLx
//! - **Messaging**: Redis-list queue transport for inbound requests and
//!   outbound email payloads
//!
//! The broker and database themselves remain external collaborators; this
//! crate only owns the client-side plumbing.

use thiserror::Error;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Messaging module - queue transport implementations
pub mod messaging;

/// Errors raised by infrastructure plumbing
///
/// Distinct from `vp_core::ProcessingError`: these cover connecting and
/// transport concerns outside the handling of any single message.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Queue transport error
    #[error("Queue error: {0}")]
    Queue(#[from] redis::RedisError),
}
