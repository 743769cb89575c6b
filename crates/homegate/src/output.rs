//! Output formatting: table, JSON, plain.
//!
//! Renders data in the format selected by `--output`. Table uses
//! `tabled`, JSON serializes the original data via serde, plain emits
//! one identifier per line for scripting.

use std::io::{self, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::OutputFormat;

/// Render a data set in the chosen format.
///
/// - `table`: rows from `to_rows`, rendered with the `Tabled` derive
/// - `json`: serializes `data` via serde
/// - `plain`: identifiers from `to_plain`, one per line
pub fn render<T, R>(
    format: &OutputFormat,
    data: &T,
    to_rows: impl FnOnce() -> Vec<R>,
    to_plain: impl FnOnce() -> Vec<String>,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => render_table(&to_rows()),
        OutputFormat::Json => render_json_pretty(data),
        OutputFormat::Plain => to_plain().join("\n"),
    }
}

/// Print rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json_pretty<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).expect("serialization should not fail")
}
