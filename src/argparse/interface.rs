/// Indirection over the output streams, so that parse behaviour is
/// observable in tests without capturing the process stdout.
pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: String);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: String) {
        // Diagnostics go to stdout alongside the usage line.
        println!("{error}");
    }
}
