//! Client for the 5 Calls representatives-by-location API.

pub mod client;
pub mod error;
pub mod types;

pub use client::FiveCallsClient;
pub use error::LookupError;
pub use types::{LookupOutcome, LookupWarning};
