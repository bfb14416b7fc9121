//! ANSI escape sequences for terminal colour and cursor control.
//!
//! Everything renders through `Display`, so the types drop straight into
//! `format!`/`println!`:
//!
//! ```
//! use satchel::term::{Fg, Style};
//!
//! println!("{}{}warning{}", Style::Bold, Fg::Yellow, Style::Reset);
//! ```
//!
//! See <https://en.wikipedia.org/wiki/ANSI_escape_code> for the full table.

mod colours;
pub mod cursor;

pub use colours::{Bg, Fg, Style};

pub(crate) const ANSI_PREFIX: &str = "\x1b[";
