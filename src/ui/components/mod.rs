//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod header_component;
pub mod input_component;
pub mod note_list_component;
pub mod status_bar;
pub mod task_list_component;

pub use dialog_component::DialogComponent;
pub use header_component::HeaderComponent;
pub use input_component::InputComponent;
pub use note_list_component::NoteListComponent;
pub use status_bar::StatusBar;
pub use task_list_component::TaskListComponent;
