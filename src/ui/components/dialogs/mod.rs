//! Overlay dialogs: help, log viewer, storage warning

pub mod scroll_behavior;
pub mod system_dialogs;
