use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Write a serializable response in the requested format.
pub fn output<T: Serialize>(
    out: &mut dyn Write,
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    writeln!(out, "{rendered}")?;
    Ok(())
}
