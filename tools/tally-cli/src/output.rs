//! Terminal output for the CLI.
//!
//! Human-readable messages are suppressed in `--json` mode so stdout carries
//! a single JSON document. Warnings and errors go to stderr.

use console::{style, StyledObject};
use tally_commerce::Discount;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn emit(&self, stream: Stream, text: impl std::fmt::Display) {
        if self.json {
            return;
        }
        match stream {
            Stream::Stdout => println!("{}", text),
            Stream::Stderr => eprintln!("{}", text),
        }
    }

    fn marked(&self, stream: Stream, marker: StyledObject<&str>, msg: &str) {
        self.emit(stream, format_args!("{} {}", marker, msg));
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        self.marked(Stream::Stdout, style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        self.marked(Stream::Stdout, style("✓").green(), msg);
    }

    /// Print a warning.
    pub fn warn(&self, msg: &str) {
        self.marked(Stream::Stderr, style("⚠").yellow(), msg);
    }

    /// Print an error. In JSON mode this is an `{"error": ...}` object on stderr.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Print a debug message (only with `--verbose`).
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.emit(
                Stream::Stderr,
                format_args!("{} {}", style("→").dim(), style(msg).dim()),
            );
        }
    }

    /// Print a section title.
    pub fn header(&self, msg: &str) {
        self.emit(
            Stream::Stdout,
            format_args!("\n{}", style(msg).bold().underlined()),
        );
    }

    /// Print a group title inside a section.
    pub fn group(&self, msg: &str) {
        self.emit(Stream::Stdout, format_args!("  {}", style(msg).bold()));
    }

    /// Print preformatted text, indented.
    pub fn block(&self, text: &str) {
        for line in text.lines() {
            self.emit(Stream::Stdout, format_args!("  {}", line));
        }
    }

    /// Print a value as pretty JSON on stdout.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("Failed to render JSON: {}", e)),
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        self.emit(
            Stream::Stdout,
            format_args!("  {}: {}", style(key).dim(), value),
        );
    }

    /// Print one row of left-aligned columns.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        let row: Vec<String> = cols
            .iter()
            .zip(widths)
            .map(|(col, width)| format!("{:width$}", col, width = *width))
            .collect();
        self.emit(
            Stream::Stdout,
            format_args!("  {}", row.join("  ").trim_end()),
        );
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Whether interactive prompts may be shown.
    pub fn can_prompt(&self) -> bool {
        !self.json && console::user_attended()
    }
}

/// Badge for the cart's discount flag.
pub fn discount_badge(enabled: bool) -> String {
    if enabled {
        style(format!("on ({})", Discount::standard().label()))
            .green()
            .to_string()
    } else {
        style("off").dim().to_string()
    }
}
