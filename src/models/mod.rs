// Core data models for the sticker board
// These types represent the domain entities

pub mod column;
pub mod sticker;
pub mod board;

pub use column::*;
pub use sticker::*;
pub use board::*;
