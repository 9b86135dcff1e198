//! Output formatting utilities for CLI commands.

use serde::Serialize;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

/// Format and print output based on the format type.
///
/// For JSON format, serializes the data as pretty-printed JSON.
/// For Text format, uses the provided text formatter function.
pub fn format_output<T, F>(format: OutputFormat, data: &T, text_formatter: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
        OutputFormat::Text => println!("{}", text_formatter()),
    }
    Ok(())
}
