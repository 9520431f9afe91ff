//! Shared types for the job board clients.
//!
//! Holds the Greenhouse job model, the Jooble query payload, environment
//! driven settings and logging setup. The HTTP clients live in `boards`.

pub mod job;
pub mod jooble;
pub mod settings;
pub mod telemetry;

pub use job::{BoardMeta, BoardResponse, Department, Job};
pub use jooble::{JoobleQuery, JoobleRequest};
pub use settings::{ConfigError, Settings};
