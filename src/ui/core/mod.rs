//! Core UI functionality for homedeck.
//!
//! - [`actions`] - Action definitions, tabs, and focus
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//!
//! Components translate key events into [`Action`]s; the app component
//! applies them to the state store and redraws.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType, Focus, Tab};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
