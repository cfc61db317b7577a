//! Board state store
//!
//! The single owner of board state. Every mutation follows the same order:
//! validate, mutate in memory, persist, notify. Validation failures return
//! an error before anything changes. Persistence failures are logged and
//! leave the store dirty, but never roll back the in-memory change and
//! never suppress the event.
//!
//! Stickers are addressed by `(column, index)`. Deleting a sticker shifts
//! the ones after it down; re-adding the same content creates a new sticker
//! at the tail with a new [`StickerId`].
//!
//! # Example
//!
//! ```no_run
//! use stickerboard::models::{Column, Direction};
//! use stickerboard::store::BoardStore;
//! use stickerboard::storage::JsonFileStorage;
//!
//! let mut store = BoardStore::open(JsonFileStorage::new("stickers.json"));
//! store.add_sticker(Column::Queue, "Write release notes", None);
//! store.move_sticker(Column::Queue, 0, Direction::Right).unwrap();
//! ```

use std::rc::Rc;
use log::{debug, error, warn};
use crate::error::BoardError;
use crate::models::{Board, Column, Direction, Sticker, StickerId, DEFAULT_BG_COLOR};
use crate::notify::{BoardEvent, BoardListener, Notifier};
use crate::storage::{format, BoardStorage, JsonFileStorage};

/// Where a sticker ended up after an add or move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub column: Column,
    pub index: usize,
}

pub struct BoardStore<S: BoardStorage = JsonFileStorage> {
    board: Board,
    storage: S,
    notifier: Notifier,
    next_id: u64,
    default_color: String,
    dirty: bool,
}

impl<S: BoardStorage> BoardStore<S> {
    /// Open a store over the given storage and load its board
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            board: Board::new(),
            storage,
            notifier: Notifier::new(),
            next_id: 1,
            default_color: DEFAULT_BG_COLOR.to_string(),
            dirty: false,
        };
        store.load();
        store
    }

    /// Set the color used when `add_sticker` is given none
    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = color.into();
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn column(&self, column: Column) -> &[Sticker] {
        self.board.column(column)
    }

    pub fn get(&self, column: Column, index: usize) -> Option<&Sticker> {
        self.board.get(column, index)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn default_color(&self) -> &str {
        &self.default_color
    }

    /// True when the last save failed, so the stored board is stale
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Register a listener (no-op if already attached)
    pub fn attach(&mut self, listener: Rc<dyn BoardListener>) -> bool {
        self.notifier.attach(listener)
    }

    /// Unregister a listener (no-op if not attached)
    pub fn detach<L: BoardListener + ?Sized>(&mut self, listener: &Rc<L>) -> bool {
        self.notifier.detach(listener)
    }

    /// Append a sticker to the tail of a column
    pub fn add_sticker(&mut self, column: Column, text: &str, bg_color: Option<&str>) -> Placement {
        let color = bg_color.unwrap_or(&self.default_color).to_string();
        let id = self.allocate_id();
        let sticker = Sticker::new(id, column, text, color);
        let index = self.board.push(sticker.clone());
        debug!("Added sticker {} to {} at index {}", id, column, index);

        self.persist();
        self.emit(BoardEvent::AddSticker { column, sticker });
        Placement { column, index }
    }

    /// Remove the sticker at a position; later stickers shift down
    pub fn delete_sticker(&mut self, column: Column, index: usize) -> Result<Sticker, BoardError> {
        self.check_index(column, index)?;
        let removed = match self.board.remove(column, index) {
            Some(sticker) => sticker,
            None => return Err(self.out_of_range(column, index)),
        };
        debug!("Deleted sticker {} from {} at index {}", removed.id, column, index);

        self.persist();
        self.emit(BoardEvent::DeleteSticker { column, index });
        Ok(removed)
    }

    /// Move a sticker to the adjacent column in `direction`.
    ///
    /// Lands at the tail of the target column. At either end of the pipeline
    /// the move saturates: nothing changes and no event is emitted.
    pub fn move_sticker(&mut self, column: Column, index: usize, direction: Direction) -> Result<Placement, BoardError> {
        self.check_index(column, index)?;
        let target = column.step(direction);
        if target == column {
            debug!("Sticker at {}[{}] cannot move {}; staying put", column, index, direction.as_str());
            return Ok(Placement { column, index });
        }
        self.relocate(column, target, index)
    }

    /// Move a sticker to any column, landing at its tail.
    ///
    /// Moving to the column it is already in is a no-op.
    pub fn transfer_sticker(&mut self, from: Column, to: Column, index: usize) -> Result<Placement, BoardError> {
        self.check_index(from, index)?;
        if from == to {
            return Ok(Placement { column: from, index });
        }
        self.relocate(from, to, index)
    }

    /// Replace a sticker's background color
    pub fn edit_sticker_bg(&mut self, column: Column, index: usize, new_color: &str) -> Result<(), BoardError> {
        self.check_index(column, index)?;
        match self.board.get_mut(column, index) {
            Some(sticker) => sticker.bg_color = new_color.to_string(),
            None => return Err(self.out_of_range(column, index)),
        }
        debug!("Recolored {}[{}] to {}", column, index, new_color);

        self.persist();
        self.emit(BoardEvent::EditStickerBg {
            column,
            index,
            new_color: new_color.to_string(),
        });
        Ok(())
    }

    /// (Re)load the board from storage.
    ///
    /// With nothing stored, starts empty and writes the empty board so the
    /// file exists. A stored board that cannot be read or parsed is logged
    /// and the current in-memory board is kept (empty when opening); the
    /// stored copy is left as is until the next mutation. `load_stickers` is
    /// emitted unless loading fell back.
    pub fn load(&mut self) {
        let contents = match self.storage.read() {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                debug!("No board at {}; creating an empty one", self.storage.location());
                self.board = Board::new();
                self.persist();
                self.emit(BoardEvent::LoadStickers);
                return;
            }
            Err(e) => {
                warn!("Failed to read board from {}: {}; keeping current board", self.storage.location(), describe(&e));
                return;
            }
        };

        let decoded = match format::decode(&contents) {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!("Board at {} is malformed: {}; keeping current board", self.storage.location(), describe(&e));
                return;
            }
        };

        for name in &decoded.repaired {
            warn!("Sticker recorded in unknown column '{}' moved to {}", name, Column::FIRST);
        }
        let mut board = Board::new();
        for (column, record) in decoded.stickers {
            let id = self.allocate_id();
            board.push(Sticker::new(id, column, record.text, record.bg_color));
        }
        self.board = board;
        debug!("Loaded {} stickers from {}", self.board.len(), self.storage.location());
        self.emit(BoardEvent::LoadStickers);
    }

    /// Write the whole board to storage
    pub fn save(&mut self) -> Result<(), BoardError> {
        let result = format::encode(&self.board).and_then(|contents| self.storage.write(&contents));
        self.dirty = result.is_err();
        result
    }

    fn relocate(&mut self, from: Column, to: Column, index: usize) -> Result<Placement, BoardError> {
        let mut sticker = match self.board.remove(from, index) {
            Some(sticker) => sticker,
            None => return Err(self.out_of_range(from, index)),
        };
        sticker.column = to;
        let new_index = self.board.push(sticker.clone());
        debug!("Moved sticker {} from {}[{}] to {}[{}]", sticker.id, from, index, to, new_index);

        self.persist();
        self.emit(BoardEvent::MoveSticker {
            from_column: from,
            to_column: to,
            sticker,
        });
        Ok(Placement { column: to, index: new_index })
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            error!("Failed to save board to {}: {}", self.storage.location(), describe(&e));
        }
    }

    fn emit(&self, event: BoardEvent) {
        self.notifier.notify(&event, &self.board);
    }

    fn allocate_id(&mut self) -> StickerId {
        let id = StickerId(self.next_id);
        self.next_id += 1;
        id
    }

    fn check_index(&self, column: Column, index: usize) -> Result<(), BoardError> {
        if index < self.board.column(column).len() {
            Ok(())
        } else {
            Err(self.out_of_range(column, index))
        }
    }

    fn out_of_range(&self, column: Column, index: usize) -> BoardError {
        BoardError::IndexOutOfRange {
            column,
            index,
            len: self.board.column(column).len(),
        }
    }
}

/// Error message with its source chain
fn describe(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
