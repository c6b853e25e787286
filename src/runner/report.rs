//! Plain-text reporting of scan results.
//!
//! Each diagnostic is written as a `using go<version>` header followed by
//! the command's failure output. Consecutive diagnostics are separated by exactly
//! one blank line.

use std::io::Write;

use crate::error::Result;

use super::scan::{Diagnostic, ScanReport};

/// Write one diagnostic block. `index` is its position among diagnostics.
pub fn write_diagnostic<W: Write + ?Sized>(
    w: &mut W,
    index: usize,
    diagnostic: &Diagnostic,
) -> Result<()> {
    if index > 0 {
        writeln!(w)?;
    }
    writeln!(w, "using {}", diagnostic.release)?;
    w.write_all(&diagnostic.message)?;
    writeln!(w)?;
    Ok(())
}

/// Write every diagnostic in the report, then return the error that ended
/// the scan, if any.
pub fn write_report<W: Write + ?Sized>(report: ScanReport, w: &mut W) -> Result<()> {
    for (index, diagnostic) in report.diagnostics.iter().enumerate() {
        write_diagnostic(w, index, diagnostic)?;
    }
    w.flush()?;

    match report.fatal {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
