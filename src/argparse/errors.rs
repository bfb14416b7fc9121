use thiserror::Error;

/// A declaration-time configuration mistake.
///
/// These are the caller's responsibility to handle; they never terminate the
/// process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An argument was declared with an empty name set.
    #[error("an argument requires at least one name.")]
    EmptyNames,

    /// A name set mixed `-`-prefixed and unprefixed names.
    #[error("invalid name set: all names must begin with '-', or none of them.")]
    MixedNames,

    /// An arity shorthand other than `?`, `*`, or `+`.
    #[error("invalid nargs specification '{0}'.")]
    InvalidNargs(String),

    /// An attempt to store values past an exact-arity capacity.
    #[error("cannot store more than {max} value(s) in argument '{name}'.")]
    TooManyValues {
        /// The argument's destination.
        name: String,
        /// The exact-arity capacity.
        max: usize,
    },
}

/// A parse-time usage mistake.
///
/// The default command line entry point ([`parse_args`]) prints the
/// diagnostic followed by the usage line and exits with status `1`;
/// [`parse_tokens`] surfaces the same condition as `Err(1)` instead.
///
/// [`parse_args`]: crate::argparse::ArgumentParser::parse_args
/// [`parse_tokens`]: crate::argparse::ArgumentParser::parse_tokens
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// A `-`-prefixed token matched no declared optional argument.
    #[error("unknown optional argument '{0}'.")]
    UnknownOptional(String),

    /// A positional token arrived after every declared positional argument
    /// had already been processed.
    #[error("too many positional arguments.")]
    TooManyPositionals,

    /// Input ran out (or hit a flag) before an exact arity was satisfied.
    #[error("insufficient arguments: '{name}' expected {missing} more input(s) ({expected} total).")]
    InsufficientValues {
        /// The argument's destination.
        name: String,
        /// How many values were still owed.
        missing: usize,
        /// The exact arity.
        expected: usize,
    },

    /// An at-least-one argument found no token to consume.
    #[error("'{name}' expected one or more inputs.")]
    ExpectedAtLeastOne {
        /// The argument's destination.
        name: String,
    },

    /// A repeated flag pushed an exact-arity argument past capacity.
    #[error("too many values provided for '{name}' (expected {expected}).")]
    TooManyValues {
        /// The argument's destination.
        name: String,
        /// The exact arity.
        expected: usize,
    },

    /// Positional arguments left unsatisfied after the full pass.
    #[error("the following arguments are required: {}.", .0.join(", "))]
    MissingArguments(Vec<String>),
}

/// A post-parse retrieval failure.
///
/// Distinct from both error classes above: retrieval happens after parsing
/// has already succeeded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RetrievalError {
    /// The destination matched no declared argument.
    #[error("attempt to access unknown argument '{0}'.")]
    UnknownArgument(String),

    /// No value was accumulated, no default configured, and the arity mode
    /// is mandatory.
    #[error("no value provided for argument '{0}'.")]
    NoValue(String),

    /// A stored raw value did not parse as the requested type.
    #[error("cannot parse value '{value}' for argument '{name}': {reason}.")]
    InvalidValue {
        /// The argument's destination.
        name: String,
        /// The raw token.
        value: String,
        /// The underlying `FromStr` failure.
        reason: String,
    },
}
