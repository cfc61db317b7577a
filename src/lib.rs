//! Sticker Board - a four-column Kanban board kept in a local JSON file
//!
//! This library provides the core functionality for the board, including:
//! - Data models for columns, stickers and the board
//! - The board state store and its column transition rule
//! - Synchronous change notification for views
//! - JSON file persistence
//! - CLI command parsing and execution
//!
//! # Example
//!
//! ```no_run
//! use stickerboard::cli::run;
//!
//! fn main() {
//!     if let Err(e) = run() {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod storage;
pub mod store;
pub mod utils;
