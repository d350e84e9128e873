//! Ready-made sinks
//!
//! Any `std::io::Write + Send + 'static` works as a logger sink. These cover
//! the common cases that std doesn't: capturing output in memory and
//! appending to a file with error context.

pub mod file;
pub mod memory;

pub use file::FileSink;
pub use memory::MemorySink;
