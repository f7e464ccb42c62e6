//! Styled diagnostics for the terminal.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Render an error line, styled unless colors are disabled.
#[must_use]
pub fn error_line(text: &str) -> String {
    if is_color_disabled() {
        format!("Error: {text}")
    } else {
        format!("{} {text}", style("Error:").for_stderr().red().bold())
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    eprintln!("{}", error_line(text));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_line_keeps_message() {
        let line = error_line("expected an integer");
        assert!(line.contains("Error:"));
        assert!(line.ends_with("expected an integer"));
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("Something went wrong");
        print_error("");
    }

    #[test]
    fn print_error_with_unicode() {
        print_error("entr\u{00e9}e invalide");
    }
}
