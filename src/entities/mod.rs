pub mod note;
pub mod task;

pub use note::Model as Note;
pub use task::Model as Task;
