//! Result rendering for stdout

use spanwise::{Breakdown, Humanized};

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Plain display string or `field: value` lines
    Plain,
    /// JSON document
    Json,
}

impl Format {
    pub fn from_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Plain }
    }
}

/// Render a humanize result
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(result: &Humanized, format: Format) -> Result<String, serde_json::Error> {
    match (format, result) {
        (Format::Json, _) => serde_json::to_string_pretty(result),
        (Format::Plain, Humanized::Text(text)) => Ok(text.clone()),
        (Format::Plain, Humanized::Object(breakdown)) => Ok(render_fields(breakdown)),
    }
}

/// One `name: value` line per component, milliseconds included
fn render_fields(breakdown: &Breakdown) -> String {
    [
        ("years", breakdown.years),
        ("months", u128::from(breakdown.months)),
        ("days", u128::from(breakdown.days)),
        ("hours", u128::from(breakdown.hours)),
        ("minutes", u128::from(breakdown.minutes)),
        ("seconds", u128::from(breakdown.seconds)),
        ("milliseconds", u128::from(breakdown.milliseconds)),
    ]
    .iter()
    .map(|(name, value)| format!("{}: {}", name, value))
    .collect::<Vec<_>>()
    .join("\n")
}
