use std::path::Path;
use std::str::FromStr;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::argparse::argument::Argument;
use crate::argparse::errors::{ConfigError, RetrievalError, UsageError};
use crate::argparse::interface::{ConsoleInterface, UserInterface};
use crate::argparse::model::{is_flag, Nargs};
use crate::argparse::printer::Printer;

/// How a token pass ended, short of a usage error.
enum Outcome {
    /// Every token was routed and every arity satisfied.
    Complete,
    /// A help flag was encountered; parsing stopped there.
    Help,
}

/// An argument/option paradigm command line parser.
///
/// ```
/// use satchel::argparse::{ArgumentParser, Nargs};
///
/// let mut parser = ArgumentParser::new("summer", "Sum the inputs.");
/// parser
///     .add_argument(["item"])
///     .unwrap()
///     .nargs(Nargs::AtLeastOne)
///     .help("The items to sum.");
///
/// parser.parse_tokens(&["summer", "1", "2", "3"]).unwrap();
/// assert_eq!(parser.get_all::<u32>("item").unwrap(), vec![1, 2, 3]);
/// ```
pub struct ArgumentParser {
    program: String,
    description: String,
    positionals: Vec<Argument>,
    optionals: Vec<Argument>,
    interface: Box<dyn UserInterface>,
}

impl Default for ArgumentParser {
    /// A parser with no program name or description; the program name is
    /// inferred from the first token at parse time.
    fn default() -> Self {
        Self::new("", "")
    }
}

impl ArgumentParser {
    /// Set up a parser for `program`, described by `description` in the
    /// help text.  The `{-h, --help}` argument is always registered first.
    pub fn new(program: impl Into<String>, description: impl Into<String>) -> Self {
        Self::build(program, description, Box::new(ConsoleInterface::default()))
    }

    fn build(
        program: impl Into<String>,
        description: impl Into<String>,
        interface: Box<dyn UserInterface>,
    ) -> Self {
        let mut parser = Self {
            program: program.into(),
            description: description.into(),
            positionals: Vec::default(),
            optionals: Vec::default(),
            interface,
        };
        parser
            .add_argument(["-h", "--help"])
            .expect("internal error - help must be a valid argument")
            .nargs(Nargs::Exactly(0))
            .help("Show this help message and exit.");
        parser
    }

    #[cfg(test)]
    pub(crate) fn with_interface(
        program: impl Into<String>,
        description: impl Into<String>,
        interface: Box<dyn UserInterface>,
    ) -> Self {
        Self::build(program, description, interface)
    }

    /// Declare an argument.
    ///
    /// The name set routes it: `-`-prefixed names declare an optional
    /// argument, unprefixed names a positional one (mixing the two is a
    /// [`ConfigError`]).  The returned reference configures the declaration
    /// in builder style.
    pub fn add_argument<I, S>(&mut self, names: I) -> Result<&mut Argument, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let argument = Argument::new(names)?;

        let store = if argument.is_optional() {
            &mut self.optionals
        } else {
            &mut self.positionals
        };
        store.push(argument);
        Ok(store.last_mut().expect("internal error - argument was just stored"))
    }

    /// Parse an explicit token sequence, where the first token is the
    /// program path.
    ///
    /// On a usage error the diagnostic and usage line go to the output
    /// stream and `Err(1)` is returned; a help request prints the help text
    /// and returns `Err(0)`.  Callers wanting the process-exit behaviour use
    /// [`parse_args`](Self::parse_args).
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<(), i32> {
        if self.program.is_empty() {
            if let Some(path) = tokens.first() {
                self.program = infer_program(path);
            }
        }

        let printer = Printer::new();

        match self.run(tokens) {
            Ok(Outcome::Complete) => Ok(()),
            Ok(Outcome::Help) => {
                self.interface.print(printer.help_text(
                    &self.program,
                    &self.description,
                    &self.optionals,
                    &self.positionals,
                ));
                Err(0)
            }
            Err(error) => {
                self.interface.print_error(format!("Error: {error}"));
                self.interface.print_error(printer.usage_line(
                    &self.program,
                    &self.optionals,
                    &self.positionals,
                ));
                Err(1)
            }
        }
    }

    /// Parse the process command line, terminating on help or usage error.
    pub fn parse_args(&mut self) {
        let tokens: Vec<String> = std::env::args().collect();
        let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();

        if let Err(code) = self.parse_tokens(&tokens) {
            std::process::exit(code);
        }
    }

    fn run(&mut self, tokens: &[&str]) -> Result<Outcome, UsageError> {
        let mut cursor = 1;
        let mut positional_index = 0;

        while cursor < tokens.len() {
            let token = tokens[cursor];

            if is_flag(token) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Routing '{token}' as an optional argument.");
                }

                cursor += 1;

                if self.optionals[0].matches_name(token) {
                    return Ok(Outcome::Help);
                }

                let argument = self
                    .optionals
                    .iter_mut()
                    .find(|argument| argument.matches_name(token))
                    .ok_or_else(|| UsageError::UnknownOptional(token.to_string()))?;
                consume(argument, tokens, &mut cursor)?;
            } else {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Routing '{token}' as positional argument {positional_index}.");
                }

                if positional_index >= self.positionals.len() {
                    return Err(UsageError::TooManyPositionals);
                }

                consume(&mut self.positionals[positional_index], tokens, &mut cursor)?;
                positional_index += 1;
            }
        }

        self.check_missing()
    }

    /// All unsatisfied positional arguments are reported together.
    fn check_missing(&self) -> Result<Outcome, UsageError> {
        let missing: Vec<String> = self
            .positionals
            .iter()
            .filter(|argument| !argument.is_set())
            .map(|argument| argument.destination().to_string())
            .collect();

        if missing.is_empty() {
            Ok(Outcome::Complete)
        } else {
            Err(UsageError::MissingArguments(missing))
        }
    }

    /// Retrieve a scalar value by destination name.
    pub fn get<T>(&self, name: &str) -> Result<T, RetrievalError>
    where
        T: FromStr + Default,
        T::Err: std::fmt::Display,
    {
        self.find(name)?.get()
    }

    /// Retrieve a sequence of values by destination name.
    pub fn get_all<T>(&self, name: &str) -> Result<Vec<T>, RetrievalError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.find(name)?.get_all()
    }

    /// Retrieve a scalar value, collapsing every failure to `None`.
    pub fn try_get<T>(&self, name: &str) -> Option<T>
    where
        T: FromStr + Default,
        T::Err: std::fmt::Display,
    {
        self.get(name).ok()
    }

    fn find(&self, name: &str) -> Result<&Argument, RetrievalError> {
        self.positionals
            .iter()
            .chain(self.optionals.iter())
            .find(|argument| argument.destination() == name)
            .ok_or_else(|| RetrievalError::UnknownArgument(name.to_string()))
    }
}

/// Greedily consume values for `argument` starting at `cursor`.
///
/// Consumption always stops at the end of input or at a `-`-prefixed token;
/// whether stopping there is an error depends on the arity.
fn consume(argument: &mut Argument, tokens: &[&str], cursor: &mut usize) -> Result<(), UsageError> {
    match argument.nargs_mode() {
        Nargs::Exactly(expected) => {
            let mut taken = 0;

            while taken < expected {
                if *cursor >= tokens.len() || is_flag(tokens[*cursor]) {
                    return Err(UsageError::InsufficientValues {
                        name: argument.destination().to_string(),
                        missing: expected - taken,
                        expected,
                    });
                }

                push(argument, tokens[*cursor])?;
                *cursor += 1;
                taken += 1;
            }
        }
        Nargs::ZeroOrOne => {
            if *cursor < tokens.len() && !is_flag(tokens[*cursor]) {
                push(argument, tokens[*cursor])?;
                *cursor += 1;
            }
        }
        Nargs::Any => {
            while *cursor < tokens.len() && !is_flag(tokens[*cursor]) {
                push(argument, tokens[*cursor])?;
                *cursor += 1;
            }
        }
        Nargs::AtLeastOne => {
            if *cursor >= tokens.len() || is_flag(tokens[*cursor]) {
                return Err(UsageError::ExpectedAtLeastOne {
                    name: argument.destination().to_string(),
                });
            }

            while *cursor < tokens.len() && !is_flag(tokens[*cursor]) {
                push(argument, tokens[*cursor])?;
                *cursor += 1;
            }
        }
    }

    Ok(())
}

/// A store overflow at parse time is the user's doing (a repeated flag), so
/// it surfaces as a usage error rather than a configuration one.
fn push(argument: &mut Argument, raw: &str) -> Result<(), UsageError> {
    argument.push_value(raw).map_err(|_| UsageError::TooManyValues {
        name: argument.destination().to_string(),
        expected: match argument.nargs_mode() {
            Nargs::Exactly(expected) => expected,
            _ => 0,
        },
    })
}

fn infer_program(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
