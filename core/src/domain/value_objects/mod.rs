//! Value objects for the verification domain.

pub mod email;

pub use email::EmailAddress;
