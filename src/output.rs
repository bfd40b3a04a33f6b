// Output formatting — the single-line JSON result contract.
//
// Everything the caller learns rides in one JSON object on stdout,
// including error information. No other output channel is part of the
// contract (diagnostics go to stderr via tracing, off by default).

use std::io::Write;

use anyhow::{Context, Result};

use crate::scoring::Classification;

/// Write the classification as a single JSON line.
pub fn write_result(out: &mut impl Write, result: &Classification) -> Result<()> {
    let json = serde_json::to_string(result).context("Failed to serialize classification")?;
    writeln!(out, "{json}").context("Failed to write classification")?;
    Ok(())
}
