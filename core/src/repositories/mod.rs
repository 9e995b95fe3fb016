//! Repository interfaces for persisted domain state.

pub mod verification;

pub use verification::VerificationRepository;

#[cfg(test)]
pub use verification::MockVerificationRepository;
