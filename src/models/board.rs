use serde::ser::{Serialize, SerializeMap, Serializer};
use crate::models::{Column, Sticker};

/// Board model
///
/// One ordered sticker list per column. The column set is fixed, indices are
/// dense, and every sticker's `column` matches the list holding it. Mutators
/// are crate-private so that only the store changes a live board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    columns: [Vec<Sticker>; 4],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Stickers in a column, in display order
    pub fn column(&self, column: Column) -> &[Sticker] {
        &self.columns[column.position()]
    }

    /// Sticker at a position, if the index is in range
    pub fn get(&self, column: Column, index: usize) -> Option<&Sticker> {
        self.columns[column.position()].get(index)
    }

    /// Iterate columns in pipeline order
    pub fn iter(&self) -> impl Iterator<Item = (Column, &[Sticker])> {
        Column::ALL.into_iter().map(move |c| (c, self.column(c)))
    }

    /// Total number of stickers on the board
    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }

    /// Append a sticker to the tail of its column, returning its index
    pub(crate) fn push(&mut self, sticker: Sticker) -> usize {
        let list = &mut self.columns[sticker.column.position()];
        list.push(sticker);
        list.len() - 1
    }

    pub(crate) fn remove(&mut self, column: Column, index: usize) -> Option<Sticker> {
        let list = &mut self.columns[column.position()];
        if index < list.len() {
            Some(list.remove(index))
        } else {
            None
        }
    }

    pub(crate) fn get_mut(&mut self, column: Column, index: usize) -> Option<&mut Sticker> {
        self.columns[column.position()].get_mut(index)
    }
}

// Serialized as a map keyed by column display name, in pipeline order,
// with every column present even when empty.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Column::ALL.len()))?;
        for (column, stickers) in self.iter() {
            map.serialize_entry(column.as_str(), stickers)?;
        }
        map.end()
    }
}
