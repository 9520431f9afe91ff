//! Clients for third-party job board APIs.
//!
//! - [`GreenhouseJobClient`] reads a company's public Greenhouse board and
//!   narrows it by title keyword and primary department. Failures are logged
//!   and yield an empty list.
//! - [`JoobleClient`] posts a search to Jooble and hands back the raw JSON.
//!   Failures are logged and returned to the caller.

pub mod error;
pub mod filter;
pub mod greenhouse;
pub mod jooble;

pub use error::{Error, Result};
pub use filter::filter_jobs;
pub use greenhouse::GreenhouseJobClient;
pub use jooble::JoobleClient;
