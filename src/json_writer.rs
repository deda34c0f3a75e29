use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Serialize with 2-space indentation and a trailing newline.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let content = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    Ok(format!("{}\n", content))
}

/// Write pretty JSON to an arbitrary writer (stdout in the CLI).
pub fn write_json<T: Serialize + ?Sized, W: Write>(writer: &mut W, value: &T) -> Result<()> {
    writer
        .write_all(to_pretty_json(value)?.as_bytes())
        .context("Failed to write JSON output")?;
    writer.flush().context("Failed to flush JSON output")
}

/// Write pretty JSON to a file, creating parent directories as needed.
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, to_pretty_json(value)?)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
