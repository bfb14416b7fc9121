use std::str::FromStr;

use crate::argparse::errors::{ConfigError, RetrievalError};
use crate::argparse::model::{Nargs, PREFIX};
use crate::string;

/// A single declared command line parameter.
///
/// Created through [`ArgumentParser::add_argument`]; the returned mutable
/// reference allows chained configuration:
///
/// ```
/// use satchel::argparse::{ArgumentParser, Nargs};
///
/// let mut parser = ArgumentParser::default();
/// parser
///     .add_argument(["-v", "--verbosity"])
///     .unwrap()
///     .nargs(Nargs::ZeroOrOne)
///     .default_value("info")
///     .help("How chatty to be.");
/// ```
///
/// [`ArgumentParser::add_argument`]: crate::argparse::ArgumentParser::add_argument
#[derive(Debug)]
pub struct Argument {
    names: Vec<String>,
    destination: String,
    nargs: Nargs,
    values: Vec<String>,
    default: Option<String>,
    help: String,
}

impl Argument {
    /// Declare an argument over a homogeneous name set: either every name
    /// begins with `-` (optional) or none does (positional).
    pub(crate) fn new(names: Vec<String>) -> Result<Self, ConfigError> {
        if names.is_empty() {
            return Err(ConfigError::EmptyNames);
        }

        let prefixed = names.iter().filter(|name| name.starts_with(PREFIX)).count();
        if prefixed != 0 && prefixed != names.len() {
            return Err(ConfigError::MixedNames);
        }

        // The longest name, prefix-stripped, is the default destination.
        let longest = string::longest(&names)
            .expect("internal error - name set cannot be empty here")
            .to_string();
        let destination = longest.trim_start_matches(PREFIX).to_string();

        Ok(Self {
            names,
            destination,
            nargs: Nargs::Exactly(1),
            values: Vec::default(),
            default: None,
            help: String::default(),
        })
    }

    /// Configure the arity.  See [`Nargs`]; the shorthand forms are reached
    /// via `Nargs::try_from("?" | "*" | "+")`.
    pub fn nargs(&mut self, nargs: Nargs) -> &mut Self {
        self.nargs = nargs;
        self
    }

    /// Document this argument in the help text.
    pub fn help(&mut self, help: impl Into<String>) -> &mut Self {
        self.help = help.into();
        self
    }

    /// The value produced when nothing was consumed from the command line.
    ///
    /// Applies to any optional argument, and to positional arguments with
    /// `ZeroOrOne` or `Any` arity.
    pub fn default_value(&mut self, value: impl ToString) -> &mut Self {
        self.default = Some(value.to_string());
        self
    }

    /// Override the destination used for retrieval.
    pub fn dest(&mut self, destination: impl Into<String>) -> &mut Self {
        self.destination = destination.into();
        self
    }

    /// The retrieval key for this argument.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub(crate) fn nargs_mode(&self) -> Nargs {
        self.nargs
    }

    pub(crate) fn help_text(&self) -> &str {
        &self.help
    }

    /// Whether this argument is matched by flag name rather than position.
    pub fn is_optional(&self) -> bool {
        self.names[0].starts_with(PREFIX)
    }

    /// Exact string match against any declared name.
    pub fn matches_name(&self, token: &str) -> bool {
        self.names.iter().any(|name| name == token)
    }

    pub(crate) fn name_list(&self) -> String {
        self.names.join(", ")
    }

    pub(crate) fn longest_name(&self) -> &str {
        string::longest(&self.names).expect("internal error - name set cannot be empty")
    }

    /// Append a raw token to the accumulated values.
    ///
    /// `Exactly(n)` caps the store at `n`; the other modes accumulate
    /// without bound.
    pub(crate) fn push_value(&mut self, raw: impl Into<String>) -> Result<(), ConfigError> {
        if let Nargs::Exactly(max) = self.nargs {
            if self.values.len() >= max {
                return Err(ConfigError::TooManyValues {
                    name: self.destination.clone(),
                    max,
                });
            }
        }
        self.values.push(raw.into());
        Ok(())
    }

    /// Whether the arity contract is satisfied.
    ///
    /// `Any` and `ZeroOrOne` arguments, and any argument with a default, are
    /// always satisfied.  `Exactly(n)` requires precisely `n` accumulated
    /// values; `AtLeastOne` requires the parser to have consumed something.
    pub fn is_set(&self) -> bool {
        if self.default.is_some() {
            return true;
        }
        match self.nargs {
            Nargs::Any | Nargs::ZeroOrOne => true,
            Nargs::Exactly(n) => self.values.len() == n,
            Nargs::AtLeastOne => !self.values.is_empty(),
        }
    }

    /// Project the accumulated values as a scalar: the first value, parsed.
    ///
    /// Falls back to the configured default, then to `T::default()` for the
    /// `Any`/`ZeroOrOne` modes, and otherwise fails with
    /// [`RetrievalError::NoValue`].
    pub fn get<T>(&self) -> Result<T, RetrievalError>
    where
        T: FromStr + Default,
        T::Err: std::fmt::Display,
    {
        if let Some(first) = self.values.first() {
            return self.parse_one(first);
        }
        if let Some(default) = &self.default {
            return self.parse_one(default);
        }
        match self.nargs {
            Nargs::Any | Nargs::ZeroOrOne => Ok(T::default()),
            _ => Err(RetrievalError::NoValue(self.destination.clone())),
        }
    }

    /// Project the accumulated values as a sequence, in accumulation order.
    ///
    /// A configured default broadcasts as a single-element sequence; the
    /// `Any`/`ZeroOrOne` modes yield an empty sequence when nothing was
    /// consumed.
    pub fn get_all<T>(&self) -> Result<Vec<T>, RetrievalError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        if !self.values.is_empty() {
            return self.values.iter().map(|raw| self.parse_one(raw)).collect();
        }
        if let Some(default) = &self.default {
            return Ok(vec![self.parse_one(default)?]);
        }
        match self.nargs {
            Nargs::Any | Nargs::ZeroOrOne => Ok(Vec::default()),
            _ => Err(RetrievalError::NoValue(self.destination.clone())),
        }
    }

    fn parse_one<T>(&self, raw: &str) -> Result<T, RetrievalError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        raw.parse().map_err(|error: T::Err| RetrievalError::InvalidValue {
            name: self.destination.clone(),
            value: raw.to_string(),
            reason: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn declare(names: &[&str]) -> Argument {
        Argument::new(names.iter().map(|name| name.to_string()).collect()).unwrap()
    }

    #[test]
    fn destination_positional() {
        assert_eq!(declare(&["foo"]).destination(), "foo");
    }

    #[test]
    fn destination_optional() {
        assert_eq!(declare(&["--myarg", "-m"]).destination(), "myarg");
    }

    #[test]
    fn destination_optional_single_dashes() {
        assert_eq!(declare(&["-myarg", "-m"]).destination(), "myarg");
    }

    #[test]
    fn matches_all_names() {
        let argument = declare(&["--myarg", "-m"]);
        assert!(argument.matches_name("-m"));
        assert!(argument.matches_name("--myarg"));
        assert!(!argument.matches_name("myarg"));
    }

    #[test]
    fn empty_names() {
        assert_matches!(
            Argument::new(Vec::default()).unwrap_err(),
            ConfigError::EmptyNames
        );
    }

    #[rstest]
    #[case(vec!["foo", "-f"])]
    #[case(vec!["-f", "foo"])]
    #[case(vec!["--foo", "f", "-f"])]
    fn mixed_names(#[case] names: Vec<&str>) {
        let names: Vec<String> = names.into_iter().map(|name| name.to_string()).collect();
        assert_matches!(Argument::new(names).unwrap_err(), ConfigError::MixedNames);
    }

    #[test]
    fn push_caps_exact_arity() {
        let mut argument = declare(&["foo"]);
        argument.nargs(Nargs::Exactly(2));
        argument.push_value("a").unwrap();
        argument.push_value("b").unwrap();
        assert_matches!(
            argument.push_value("c").unwrap_err(),
            ConfigError::TooManyValues { name, max } => {
                assert_eq!(name, "foo".to_string());
                assert_eq!(max, 2);
            }
        );
        assert_eq!(argument.get_all::<String>().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn push_unbounded_for_any() {
        let mut argument = declare(&["foo"]);
        argument.nargs(Nargs::Any);

        for i in 0..100 {
            argument.push_value(i.to_string()).unwrap();
        }

        assert_eq!(argument.get_all::<usize>().unwrap().len(), 100);
    }

    #[rstest]
    #[case(Nargs::Any, 0, true)]
    #[case(Nargs::ZeroOrOne, 0, true)]
    #[case(Nargs::Exactly(1), 0, false)]
    #[case(Nargs::Exactly(1), 1, true)]
    #[case(Nargs::Exactly(3), 2, false)]
    #[case(Nargs::Exactly(0), 0, true)]
    #[case(Nargs::AtLeastOne, 0, false)]
    #[case(Nargs::AtLeastOne, 1, true)]
    #[case(Nargs::AtLeastOne, 5, true)]
    fn is_set(#[case] nargs: Nargs, #[case] feed: usize, #[case] expected: bool) {
        let mut argument = declare(&["foo"]);
        argument.nargs(nargs);

        for i in 0..feed {
            argument.push_value(i.to_string()).unwrap();
        }

        assert_eq!(argument.is_set(), expected);
    }

    #[test]
    fn is_set_with_default() {
        let mut argument = declare(&["foo"]);
        argument.default_value("fallback");
        assert!(argument.is_set());
    }

    #[test]
    fn get_scalar_takes_first() {
        let mut argument = declare(&["foo"]);
        argument.nargs(Nargs::Exactly(3));
        argument.push_value("1").unwrap();
        argument.push_value("2").unwrap();
        argument.push_value("3").unwrap();
        assert_eq!(argument.get::<u32>().unwrap(), 1);
        assert_eq!(argument.get_all::<u32>().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn get_falls_back_to_default() {
        let mut argument = declare(&["foo"]);
        argument.default_value("my FOO");
        assert_eq!(argument.get::<String>().unwrap(), "my FOO".to_string());
        // The default broadcasts as a single-element sequence.
        assert_eq!(
            argument.get_all::<String>().unwrap(),
            vec!["my FOO".to_string()]
        );
    }

    #[rstest]
    #[case(Nargs::Any)]
    #[case(Nargs::ZeroOrOne)]
    fn get_zero_value(#[case] nargs: Nargs) {
        let mut argument = declare(&["foo"]);
        argument.nargs(nargs);
        assert_eq!(argument.get::<String>().unwrap(), String::default());
        assert_eq!(argument.get_all::<String>().unwrap(), Vec::<String>::default());
    }

    #[rstest]
    #[case(Nargs::Exactly(1))]
    #[case(Nargs::AtLeastOne)]
    fn get_mandatory_without_value(#[case] nargs: Nargs) {
        let mut argument = declare(&["foo"]);
        argument.nargs(nargs);
        assert_matches!(
            argument.get::<String>().unwrap_err(),
            RetrievalError::NoValue(name) => {
                assert_eq!(name, "foo".to_string());
            }
        );
    }

    #[test]
    fn get_inconvertible() {
        let mut argument = declare(&["foo"]);
        argument.push_value("not-u32").unwrap();
        assert_matches!(
            argument.get::<u32>().unwrap_err(),
            RetrievalError::InvalidValue { name, value, .. } => {
                assert_eq!(name, "foo".to_string());
                assert_eq!(value, "not-u32".to_string());
            }
        );
    }

    #[test]
    fn dest_override() {
        let mut argument = declare(&["--verbose", "-v"]);
        argument.dest("verbosity");
        assert_eq!(argument.destination(), "verbosity");
    }
}
