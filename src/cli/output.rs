// Output formatting for the board table

use std::io::IsTerminal;
use crate::cli::view::StickerCell;
use crate::models::Column;
use crate::utils::{parse_color, Rgb};

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";
const ANSI_FG_BLACK: &str = "\x1b[30m";
const ANSI_FG_WHITE: &str = "\x1b[97m";

/// Separator between board columns
const COLUMN_SEPARATOR: &str = " | ";

/// Narrowest a board column is rendered, regardless of terminal width
const MIN_COLUMN_WIDTH: usize = 12;

/// Options for board rendering
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Total width available for the table
    pub width: usize,
    /// Emit ANSI styling (sticker backgrounds, bold headers)
    pub color: bool,
}

impl RenderOptions {
    /// Options for the current stdout
    pub fn detect() -> Self {
        Self {
            width: get_terminal_width(),
            color: is_tty(),
        }
    }

    pub fn plain(width: usize) -> Self {
        Self { width, color: false }
    }
}

/// Calculate relative luminance using WCAG formula
/// Returns a value between 0.0 (black) and 1.0 (white)
fn calculate_relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    let linear = |c: u8| {
        let c = c as f64 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

/// Black text on light backgrounds, white on dark
fn get_contrasting_fg(rgb: Rgb) -> &'static str {
    if calculate_relative_luminance(rgb.0, rgb.1, rgb.2) > 0.5 {
        ANSI_FG_BLACK
    } else {
        ANSI_FG_WHITE
    }
}

/// Wrap text in a 24-bit background for the given color token.
/// Unknown tokens are returned unstyled.
pub fn paint_sticker(text: &str, color: &str) -> String {
    match parse_color(color) {
        Some(rgb) => format!(
            "\x1b[48;2;{};{};{}m{}{}{}",
            rgb.0, rgb.1, rgb.2,
            get_contrasting_fg(rgb),
            text,
            ANSI_RESET
        ),
        None => text.to_string(),
    }
}

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate for reliable detection, with fallback to
/// COLUMNS environment variable and a sensible default.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    120
}

fn bold_if(text: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", ANSI_BOLD, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

/// Truncate to `width` characters, marking the cut with an ellipsis
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// Width of each board column for a given total width
pub fn column_width(total_width: usize) -> usize {
    let separators = COLUMN_SEPARATOR.len() * (Column::ALL.len() - 1);
    (total_width.saturating_sub(separators) / Column::ALL.len()).max(MIN_COLUMN_WIDTH)
}

/// Render the board as side-by-side columns.
///
/// Each cell reads `<index>: <text>`; indices are the ones commands take.
pub fn format_board(columns: &[(Column, Vec<StickerCell>)], options: RenderOptions) -> String {
    let width = column_width(options.width);
    let mut lines = Vec::new();

    let header: Vec<String> = columns
        .iter()
        .map(|(column, cells)| {
            let title = truncate(&format!("{} ({})", column, cells.len()), width);
            bold_if(&pad(&title, width), options.color)
        })
        .collect();
    lines.push(header.join(COLUMN_SEPARATOR));

    let rule: Vec<String> = columns.iter().map(|_| "-".repeat(width)).collect();
    lines.push(rule.join(COLUMN_SEPARATOR));

    let rows = columns.iter().map(|(_, cells)| cells.len()).max().unwrap_or(0);
    for row in 0..rows {
        let mut cells: Vec<Option<String>> = columns
            .iter()
            .map(|(_, cells)| {
                cells.get(row).map(|cell| {
                    let text = pad(&truncate(&format!("{}: {}", row, cell.text), width), width);
                    if options.color {
                        paint_sticker(&text, &cell.color)
                    } else {
                        text
                    }
                })
            })
            .collect();
        // Plain rows stop at their last sticker
        if !options.color {
            while matches!(cells.last(), Some(None)) {
                cells.pop();
            }
        }
        let cells: Vec<String> = cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(|| " ".repeat(width)))
            .collect();
        lines.push(cells.join(COLUMN_SEPARATOR));
    }

    if rows == 0 {
        lines.push("(no stickers)".to_string());
    }

    lines
        .into_iter()
        .map(|line| if options.color { line } else { line.trim_end().to_string() })
        .collect::<Vec<_>>()
        .join("\n")
}
