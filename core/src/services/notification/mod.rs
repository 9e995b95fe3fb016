//! Outbound notification composition.

pub mod composer;

pub use composer::compose;
