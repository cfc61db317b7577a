pub mod color;
pub mod fuzzy;

pub use color::{parse_color, is_valid_color, Rgb};
