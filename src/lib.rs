//! `satchel` is a small collection of command line and terminal utilities:
//! an argument/option command line parser, ANSI colour and cursor helpers,
//! a scoped timer with pluggable measurement sinks, a minimal blocking
//! single-producer/single-consumer channel, and a fixed-size worker pool.
//!
//! The centrepiece is [`argparse`]: declare positional and optional
//! arguments on an [`argparse::ArgumentParser`], parse the command line in a
//! single pass, then retrieve typed values by destination name.
//!
//! ```
//! use satchel::argparse::{ArgumentParser, Nargs};
//!
//! let mut parser = ArgumentParser::new("summer", "Sum the inputs.");
//! parser
//!     .add_argument(["item"])
//!     .unwrap()
//!     .nargs(Nargs::AtLeastOne)
//!     .help("The items to sum.");
//!
//! parser.parse_tokens(&["summer", "1", "2", "3"]).unwrap();
//! let items: Vec<u32> = parser.get_all("item").unwrap();
//! assert_eq!(items.iter().sum::<u32>(), 6);
//! ```
#![deny(missing_docs)]

pub mod argparse;
pub mod channel;
pub mod perf;
pub mod pool;
pub mod string;
pub mod term;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
