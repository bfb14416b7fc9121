use crate::argparse::errors::ConfigError;

/// The prefix marker distinguishing optional-style names and tokens.
pub(crate) const PREFIX: char = '-';

/// The cardinality of command line tokens an argument consumes.
///
/// Inspired by argparse: <https://docs.python.org/3/library/argparse.html#nargs>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nargs {
    /// `N`: precisely `N` tokens.
    Exactly(usize),
    /// `?`: one token if available, otherwise none.
    ZeroOrOne,
    /// `*`: any number of tokens, including `0`.
    Any,
    /// `+`: like `*`, but at least one token must be present.
    AtLeastOne,
}

impl std::fmt::Display for Nargs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<&str> for Nargs {
    type Error = ConfigError;

    /// Map the shorthand specifications `"?"`, `"*"`, and `"+"`.
    fn try_from(shorthand: &str) -> Result<Self, Self::Error> {
        match shorthand {
            "?" => Ok(Nargs::ZeroOrOne),
            "*" => Ok(Nargs::Any),
            "+" => Ok(Nargs::AtLeastOne),
            _ => Err(ConfigError::InvalidNargs(shorthand.to_string())),
        }
    }
}

/// An optional-shaped token begins with the prefix marker.
pub(crate) fn is_flag(token: &str) -> bool {
    token.starts_with(PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("?", Nargs::ZeroOrOne)]
    #[case("*", Nargs::Any)]
    #[case("+", Nargs::AtLeastOne)]
    fn nargs_shorthand(#[case] shorthand: &str, #[case] expected: Nargs) {
        assert_eq!(Nargs::try_from(shorthand).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("n")]
    #[case("2")]
    #[case("**")]
    fn nargs_shorthand_invalid(#[case] shorthand: &str) {
        assert_matches!(
            Nargs::try_from(shorthand).unwrap_err(),
            ConfigError::InvalidNargs(s) => {
                assert_eq!(s, shorthand.to_string());
            }
        );
    }

    #[rstest]
    #[case("--foo", true)]
    #[case("-foo", true)]
    #[case("-f", true)]
    #[case("foo", false)]
    #[case("f-oo", false)]
    #[case("", false)]
    fn flag_shape(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(is_flag(token), expected);
    }
}
