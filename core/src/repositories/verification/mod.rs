pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

#[cfg(test)]
pub mod mock;


#[cfg(test)]
pub use mock::MockVerificationRepository;
pub use r#trait::VerificationRepository;
