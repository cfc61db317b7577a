// CLI parsing utilities for sticker commands

use crate::cli::abbrev::find_unique_command;
use crate::error::BoardError;
use crate::models::{Column, Direction};
use crate::utils::{fuzzy, is_valid_color};

/// Normalized column keys, same order as `Column::ALL`
const COLUMN_KEYS: &[&str] = &["queue", "in progress", "review", "done"];

/// Extra spellings for columns that prefixes don't cover
const COLUMN_ALIASES: &[(&str, Column)] = &[
    ("progress", Column::InProgress),
    ("inprogress", Column::InProgress),
    ("wip", Column::InProgress),
];

/// Lowercase, treat '-' and '_' as spaces, collapse runs of whitespace
fn normalize_column_name(input: &str) -> String {
    input
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a column name as typed on the command line.
///
/// Accepts display names in any case, with hyphens or underscores for
/// spaces ("in-progress"), unique prefixes ("rev", "d"), and a few aliases
/// ("wip"). Anything else fails with a suggestion when one is close.
pub fn parse_column(input: &str) -> Result<Column, BoardError> {
    let normalized = normalize_column_name(input);

    if let Some((_, column)) = COLUMN_ALIASES.iter().find(|(alias, _)| *alias == normalized) {
        return Ok(*column);
    }

    if !normalized.is_empty() {
        if let Ok(key) = find_unique_command(&normalized, COLUMN_KEYS) {
            if let Some(pos) = COLUMN_KEYS.iter().position(|k| *k == key) {
                return Ok(Column::ALL[pos]);
            }
        }
    }

    let names: Vec<&str> = Column::ALL.iter().map(|c| c.as_str()).collect();
    let suggestion = fuzzy::find_closest(&normalized, &names, 3).and_then(Column::from_str);
    Err(BoardError::UnknownColumn {
        name: input.to_string(),
        suggestion,
    })
}

/// Parse a movement direction ("left"/"right", or "l"/"r", "<"/">")
pub fn parse_direction(input: &str) -> Result<Direction, BoardError> {
    Direction::from_str(input.trim()).ok_or_else(|| BoardError::InvalidDirection(input.to_string()))
}

/// Validate a color token, returning it trimmed
pub fn parse_color_arg(input: &str) -> Result<String, BoardError> {
    let token = input.trim();
    if is_valid_color(token) {
        Ok(token.to_string())
    } else {
        Err(BoardError::InvalidColor(input.to_string()))
    }
}

/// Join text words into a single sticker text
pub fn join_text(parts: &[String]) -> String {
    parts.join(" ")
}
