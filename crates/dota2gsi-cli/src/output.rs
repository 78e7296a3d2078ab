//! Printing of received updates.

use std::io::Write;

use dota2gsi_types::Snapshot;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Render one update as a single line (without the trailing newline).
///
/// # Errors
///
/// Returns [`CliError::Encode`] if JSON encoding fails.
pub fn render(snapshot: &Snapshot, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(snapshot.to_string()),
        OutputFormat::Json => Ok(snapshot.to_json()?),
    }
}

/// Write one update line to `out`.
///
/// # Errors
///
/// Returns [`CliError::Encode`] if rendering fails or [`CliError::Output`]
/// if the write fails (e.g. a closed pipe).
pub fn print_update(
    out: &mut impl Write,
    snapshot: &Snapshot,
    format: OutputFormat,
) -> Result<(), CliError> {
    let line = render(snapshot, format)?;
    writeln!(out, "{line}").map_err(|source| CliError::Output { source })?;
    out.flush().map_err(|source| CliError::Output { source })
}
