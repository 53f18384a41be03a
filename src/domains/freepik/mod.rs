//! Freepik domain module.
//!
//! A thin client over the Freepik REST API. Every operation issues exactly
//! one request; there is no retry, caching or batching.
//!
//! - `api.rs` - the `FreepikApi` trait used by the tool dispatcher
//! - `client.rs` - the reqwest implementation
//! - `models.rs` - request and response types
//! - `error.rs` - client error types

mod api;
mod client;
mod error;
pub mod models;

pub use api::FreepikApi;
pub use client::{API_KEY_HEADER, FreepikClient};
pub use error::{ApiError, ApiResult};
