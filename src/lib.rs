//! Homedeck - a terminal personal dashboard
//!
//! Keeps a to-do list, a notebook of timestamped notes, and a light/dark
//! theme preference. Every change is written straight through to a small
//! key-value store so the dashboard comes back exactly as it was left.
//!
//! # Modules
//!
//! * [`store`] - The dashboard state and its write-through mutations
//! * [`managers`] - Pure list operations on tasks and notes
//! * [`storage`] - Key-value persistence backends
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Task and note records
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup and the in-memory log viewer buffer
pub mod logger;

/// Pure operations over the task and note collections
pub mod managers;

/// Key-value persistence for the dashboard slices
pub mod storage;

/// Dashboard state container
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;

pub use entities::{Note, Task};
pub use store::{Commit, DashboardStore};
