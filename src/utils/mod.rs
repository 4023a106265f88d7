//! Utility modules for the homedeck application.
//!
//! - [`datetime`] - Timestamp parsing, formatting, and the serde adapter
//!   used by persisted notes

pub mod datetime;
