//! Board-level errors

use std::path::PathBuf;
use thiserror::Error;
use crate::models::Column;

/// Errors raised by the board store and its storage backends.
///
/// Validation variants (`UnknownColumn`, `IndexOutOfRange`,
/// `InvalidDirection`, `InvalidColor`) are always returned before any
/// mutation happens.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Unknown column '{name}'{}", suggestion_suffix(.suggestion))]
    UnknownColumn {
        name: String,
        suggestion: Option<Column>,
    },

    #[error("No sticker at index {index} in column '{column}' (column has {len})")]
    IndexOutOfRange {
        column: Column,
        index: usize,
        len: usize,
    },

    #[error("Invalid direction '{0}'. Use 'left' or 'right'.")]
    InvalidDirection(String),

    #[error("Invalid color '{0}'. Use #RGB, #RRGGBB, grayN (0-100), or a basic color name.")]
    InvalidColor(String),

    #[error("Failed to access board file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed board data: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// True for errors caused by the request rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownColumn { .. }
                | Self::IndexOutOfRange { .. }
                | Self::InvalidDirection(_)
                | Self::InvalidColor(_)
        )
    }
}

fn suggestion_suffix(suggestion: &Option<Column>) -> String {
    match suggestion {
        Some(column) => format!("\n  Did you mean '{}'?", column),
        None => String::new(),
    }
}
