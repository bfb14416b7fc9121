//! Relative cursor movement sequences.

use crate::term::ANSI_PREFIX;

/// Move the cursor up by `amount` rows.
pub fn up(amount: usize) -> String {
    format!("{ANSI_PREFIX}{amount}A")
}

/// Move the cursor down by `amount` rows.
pub fn down(amount: usize) -> String {
    format!("{ANSI_PREFIX}{amount}B")
}

/// Move the cursor right by `amount` columns.
pub fn right(amount: usize) -> String {
    format!("{ANSI_PREFIX}{amount}C")
}

/// Move the cursor left by `amount` columns.
pub fn left(amount: usize) -> String {
    format!("{ANSI_PREFIX}{amount}D")
}
