pub mod color;
pub mod fmt;
pub mod output;
pub mod placeholder;
