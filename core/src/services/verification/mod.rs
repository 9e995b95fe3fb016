//! Verification request handling
//!
//! This module sequences the full lifecycle of one inbound queue message:
//! decode the request, generate a code, persist it with expiry semantics,
//! compose the outbound email, and encode it for the mail-dispatch queue.

mod service;


pub use service::VerificationService;
