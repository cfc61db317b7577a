// Error handling utilities for consistent error messages and exit codes

use std::process;

/// Exit with a user error (exit code 1)
/// User errors are for invalid input, unknown columns, bad indices, etc.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Validate that a string is not empty
pub fn validate_non_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate that a sticker index is a non-negative integer
pub fn validate_index(index_str: &str) -> Result<usize, String> {
    index_str.trim().parse::<usize>()
        .map_err(|_| format!("Invalid sticker index: '{}'. Index must be a non-negative number.", index_str))
}
