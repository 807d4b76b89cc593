//! Storage adapter implementations

mod json_file;
mod memory;

pub use json_file::JsonFileAdapter;
pub use memory::MemoryAdapter;
