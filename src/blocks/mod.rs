pub mod memory;
pub mod path_exists;

pub use memory::{render_memory, render_memory_snapshot, MEMORY_ERROR_TEXT};
pub use path_exists::render_path_exists;
