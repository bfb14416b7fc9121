//! An argument/option paradigm command line parser.
//!
//! Arguments are declared on an [`ArgumentParser`] in builder style and fall
//! into two classes: positional (matched by their position in the token
//! stream) and optional (matched by a `-`-prefixed flag name).  Each argument
//! carries an arity ([`Nargs`]) governing how many tokens it consumes.
//! After a successful parse, values are retrieved by destination name with
//! [`ArgumentParser::get`] and [`ArgumentParser::get_all`].

mod argument;
mod errors;
mod interface;
mod model;
mod parser;
mod printer;

pub use argument::Argument;
pub use errors::{ConfigError, RetrievalError, UsageError};
pub use model::Nargs;
pub use parser::ArgumentParser;
