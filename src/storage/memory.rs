use std::cell::RefCell;
use std::rc::Rc;
use crate::error::BoardError;
use crate::storage::BoardStorage;

#[derive(Debug, Default)]
struct MemoryState {
    contents: Option<String>,
    fail_writes: bool,
    writes: usize,
}

/// In-memory board storage (for testing)
///
/// Clones share the same contents, so a test can keep a handle while the
/// store owns another and inspect what was persisted. Writes can be made to
/// fail to simulate a full disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds a board file
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.state.borrow_mut().contents = Some(contents.into());
        storage
    }

    /// Last successfully written contents
    pub fn contents(&self) -> Option<String> {
        self.state.borrow().contents.clone()
    }

    /// Number of successful writes
    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }
}

impl BoardStorage for MemoryStorage {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn read(&self) -> Result<Option<String>, BoardError> {
        Ok(self.state.borrow().contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), BoardError> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(BoardError::Io {
                path: "<memory>".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "simulated write failure"),
            });
        }
        state.contents = Some(contents.to_string());
        state.writes += 1;
        Ok(())
    }
}
