//! Messaging module - queue transport implementations
//!
//! The verification worker consumes inbound requests and hands off outbound
//! email payloads through this transport. Delivery guarantees, redelivery,
//! and dead-lettering are the broker's concern, not this crate's.

pub mod redis_queue;

pub use redis_queue::RedisQueueTransport;
