//! Domains module containing business logic organized by bounded contexts.
//!
//! - **freepik**: the remote API client
//! - **tools**: tool descriptors, argument validation and dispatch

pub mod freepik;
pub mod tools;
