// Board view: the presentation layer's copy of the board
//
// Attached to the store as a listener. Add, delete and recolor events patch
// only the affected column. Move and load events rebuild every column from
// the store's board, since their payloads do not say where each sticker now
// sits.

use std::cell::RefCell;
#[cfg(test)]
use std::cell::Cell;
use crate::models::{Board, Column};
use crate::notify::{BoardEvent, BoardListener};

/// One rendered sticker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickerCell {
    pub text: String,
    pub color: String,
}

#[derive(Default)]
pub struct BoardView {
    columns: RefCell<[Vec<StickerCell>; 4]>,
    messages: RefCell<Vec<String>>,
    #[cfg(test)]
    rebuilds: Cell<usize>,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every column and refill from the board
    pub fn rebuild(&self, board: &Board) {
        let mut columns = self.columns.borrow_mut();
        for (column, stickers) in board.iter() {
            columns[column.position()] = stickers
                .iter()
                .map(|s| StickerCell {
                    text: s.text.clone(),
                    color: s.bg_color.clone(),
                })
                .collect();
        }
        #[cfg(test)]
        self.rebuilds.set(self.rebuilds.get() + 1);
    }

    /// Cells of one column, in display order
    pub fn cells(&self, column: Column) -> Vec<StickerCell> {
        self.columns.borrow()[column.position()].clone()
    }

    /// All columns in pipeline order
    pub fn snapshot(&self) -> Vec<(Column, Vec<StickerCell>)> {
        let columns = self.columns.borrow();
        Column::ALL
            .into_iter()
            .map(|c| (c, columns[c.position()].clone()))
            .collect()
    }

    /// Change messages recorded since the last call
    pub fn take_messages(&self) -> Vec<String> {
        self.messages.borrow_mut().drain(..).collect()
    }

    /// Number of full rebuilds so far
    #[cfg(test)]
    pub fn rebuild_count(&self) -> usize {
        self.rebuilds.get()
    }

    fn record(&self, message: String) {
        self.messages.borrow_mut().push(message);
    }
}

impl BoardListener for BoardView {
    fn on_event(&self, event: &BoardEvent, board: &Board) {
        match event {
            BoardEvent::AddSticker { column, sticker } => {
                let index = {
                    let mut columns = self.columns.borrow_mut();
                    let cells = &mut columns[column.position()];
                    cells.push(StickerCell {
                        text: sticker.text.clone(),
                        color: sticker.bg_color.clone(),
                    });
                    cells.len() - 1
                };
                self.record(format!("Added sticker to {} [{}]: {}", column, index, sticker.text));
            }
            BoardEvent::DeleteSticker { column, index } => {
                let removed = {
                    let mut columns = self.columns.borrow_mut();
                    let cells = &mut columns[column.position()];
                    if *index < cells.len() {
                        Some(cells.remove(*index))
                    } else {
                        None
                    }
                };
                match removed {
                    Some(cell) => self.record(format!("Deleted sticker {} [{}]: {}", column, index, cell.text)),
                    None => {
                        // View had drifted from the store; resync
                        log::warn!("View has no sticker {}[{}]; rebuilding", column, index);
                        self.rebuild(board);
                        self.record(format!("Deleted sticker {} [{}]", column, index));
                    }
                }
            }
            BoardEvent::EditStickerBg { column, index, new_color } => {
                let updated = {
                    let mut columns = self.columns.borrow_mut();
                    match columns[column.position()].get_mut(*index) {
                        Some(cell) => {
                            cell.color = new_color.clone();
                            true
                        }
                        None => false,
                    }
                };
                if !updated {
                    log::warn!("View has no sticker {}[{}]; rebuilding", column, index);
                    self.rebuild(board);
                }
                self.record(format!("Recolored {} [{}] to {}", column, index, new_color));
            }
            BoardEvent::MoveSticker { from_column, to_column, sticker } => {
                self.rebuild(board);
                self.record(format!("Moved '{}' from {} to {}", sticker.text, from_column, to_column));
            }
            BoardEvent::LoadStickers => {
                self.rebuild(board);
                self.record(format!("Loaded {} stickers", board.len()));
            }
        }
    }
}
