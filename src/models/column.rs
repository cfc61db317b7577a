use serde::{Deserialize, Serialize};

/// Board column (pipeline stage)
///
/// Columns form a fixed, ordered pipeline:
/// Queue -> In Progress -> Review -> Done
///
/// Movement between columns saturates at both ends: moving left from
/// Queue or right from Done leaves the sticker where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "Queue")]
    Queue,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Review")]
    Review,
    #[serde(rename = "Done")]
    Done,
}

/// Movement direction for a sticker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Column {
    /// All columns in pipeline order
    pub const ALL: [Column; 4] = [
        Column::Queue,
        Column::InProgress,
        Column::Review,
        Column::Done,
    ];

    /// The column new and repaired stickers land in
    pub const FIRST: Column = Column::Queue;

    /// Display name, also used as the key in the board file
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Queue => "Queue",
            Column::InProgress => "In Progress",
            Column::Review => "Review",
            Column::Done => "Done",
        }
    }

    /// Exact match on the display name
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }

    /// Position in the pipeline (0-based)
    pub fn position(&self) -> usize {
        match self {
            Column::Queue => 0,
            Column::InProgress => 1,
            Column::Review => 2,
            Column::Done => 3,
        }
    }

    /// Previous column, or self when already first
    pub fn left(&self) -> Column {
        match self.position() {
            0 => *self,
            p => Self::ALL[p - 1],
        }
    }

    /// Next column, or self when already last
    pub fn right(&self) -> Column {
        Self::ALL.get(self.position() + 1).copied().unwrap_or(*self)
    }

    /// Resolve the neighbour in the given direction
    pub fn step(&self, direction: Direction) -> Column {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" | "<" => Some(Direction::Left),
            "right" | "r" | ">" => Some(Direction::Right),
            _ => None,
        }
    }
}
