use terminal_size::{terminal_size, Width};

use crate::argparse::argument::Argument;
use crate::argparse::model::{Nargs, PREFIX};
use crate::string;

const DEFAULT_WIDTH: usize = 80;
const DESCRIPTION_INDENT: usize = 4;

/// Renders the usage line and help text.
///
/// The terminal width is captured at construction.
pub(crate) struct Printer {
    width: usize,
}

impl Printer {
    pub(crate) fn new() -> Self {
        let width = match terminal_size() {
            Some((Width(columns), _)) => columns as usize,
            None => DEFAULT_WIDTH,
        };
        Self { width }
    }

    #[cfg(test)]
    pub(crate) fn with_width(width: usize) -> Self {
        Self { width }
    }

    /// The single-line invocation summary.
    ///
    /// Optional arguments render as their longest name in brackets, followed
    /// by an upper-cased value placeholder per consumed token.  Exact-arity
    /// positional arguments render their destination once per token;
    /// any-arity ones render as `[dest [DEST ...]]`.  The remaining arity
    /// modes contribute nothing to the line.
    pub(crate) fn usage_line(
        &self,
        program: &str,
        optionals: &[Argument],
        positionals: &[Argument],
    ) -> String {
        let mut parts = vec![format!("Usage: {program}")];

        for argument in optionals {
            let name = argument.longest_name();
            let placeholder = name.trim_start_matches(PREFIX).to_uppercase();
            let count = match argument.nargs_mode() {
                Nargs::Exactly(n) => n,
                Nargs::ZeroOrOne | Nargs::Any | Nargs::AtLeastOne => 1,
            };
            let mut part = format!("[{name}");

            for _ in 0..count {
                part.push(' ');
                part.push_str(&placeholder);
            }

            part.push(']');
            parts.push(part);
        }

        for argument in positionals {
            match argument.nargs_mode() {
                Nargs::Exactly(n) => {
                    for _ in 0..n {
                        parts.push(argument.destination().to_string());
                    }
                }
                Nargs::Any => {
                    parts.push(format!(
                        "[{dest} [{placeholder} ...]]",
                        dest = argument.destination(),
                        placeholder = argument.destination().to_uppercase(),
                    ));
                }
                Nargs::ZeroOrOne | Nargs::AtLeastOne => {}
            }
        }

        parts.join(" ")
    }

    /// The full help text: usage line, wrapped description, and one section
    /// each for the positional and optional arguments.
    pub(crate) fn help_text(
        &self,
        program: &str,
        description: &str,
        optionals: &[Argument],
        positionals: &[Argument],
    ) -> String {
        let mut lines = vec![self.usage_line(program, optionals, positionals)];
        lines.push(String::default());

        if !description.is_empty() {
            let wrap_width = self.width.saturating_sub(DESCRIPTION_INDENT);

            for wrapped in string::wrap(description, wrap_width) {
                lines.push(format!("{:DESCRIPTION_INDENT$}{wrapped}", ""));
            }

            lines.push(String::default());
        }

        if !positionals.is_empty() {
            lines.push("Positional Arguments:".to_string());

            for argument in positionals {
                lines.push(section_line(argument));
            }

            lines.push(String::default());
        }

        if !optionals.is_empty() {
            lines.push("Optional Arguments:".to_string());

            for argument in optionals {
                lines.push(section_line(argument));
            }

            lines.push(String::default());
        }

        lines.join("\n")
    }
}

fn section_line(argument: &Argument) -> String {
    format!(
        "  {names}: {help}",
        names = argument.name_list(),
        help = argument.help_text(),
    )
}
