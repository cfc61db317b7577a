use serde::{Deserialize, Serialize};
use crate::models::Column;

/// Background color given to stickers when none is specified
pub const DEFAULT_BG_COLOR: &str = "gray75";

/// Internal sticker identifier
///
/// Assigned from a per-store counter when a sticker is created or loaded and
/// never persisted. Operations still address stickers by (column, index);
/// the id only distinguishes a re-created sticker from the one it replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StickerId(pub u64);

impl std::fmt::Display for StickerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Sticker model
///
/// Serializes to the board file shape `{"text", "bg_color", "state"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sticker {
    #[serde(skip)]
    pub id: StickerId,
    pub text: String,
    pub bg_color: String,
    #[serde(rename = "state")]
    pub column: Column,
}

impl Sticker {
    pub fn new(id: StickerId, column: Column, text: impl Into<String>, bg_color: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            bg_color: bg_color.into(),
            column,
        }
    }
}

/// Sticker as read from the board file, before placement
#[derive(Debug, Clone, Deserialize)]
pub struct StickerRecord {
    pub text: String,
    #[serde(default = "default_bg_color")]
    pub bg_color: String,
    /// Recorded column name; absent in older files
    #[serde(default)]
    pub state: Option<String>,
}

fn default_bg_color() -> String {
    DEFAULT_BG_COLOR.to_string()
}
