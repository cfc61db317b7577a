// Board persistence: file format and storage backends

pub mod file;
pub mod format;
pub mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::error::BoardError;

/// Durable home of the serialized board
pub trait BoardStorage {
    /// Human-readable location, used in log and error messages
    fn location(&self) -> String;

    /// Read the stored board, or `None` when nothing has been stored yet
    fn read(&self) -> Result<Option<String>, BoardError>;

    /// Replace the stored board
    fn write(&mut self, contents: &str) -> Result<(), BoardError>;
}
