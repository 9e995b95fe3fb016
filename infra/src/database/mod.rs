//! Database module - MySQL implementations using SQLx
//!
//! Provides connection-pool construction and the MySQL implementation of
//! the verification repository.

pub mod connection;
pub mod mysql;

pub use connection::create_pool;
pub use mysql::MySqlVerificationRepository;
