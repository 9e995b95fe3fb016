//! MySQL repository implementations.

pub mod verification_repository_impl;

pub use verification_repository_impl::MySqlVerificationRepository;
