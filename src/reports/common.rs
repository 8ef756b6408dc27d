//! Shared rendering helpers for the report generators.

use crate::Result;
use crate::roster::Summary;
use core::fmt::Write;

/// Timestamp rendering used by the console report.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Write the batch summary block, one indented `key=value` line per
/// statistic. Both report formats share this layout.
pub fn write_summary<W: Write>(summary: &Summary, writer: &mut W) -> Result<()> {
    writeln!(writer, "    Repositories={}", summary.repositories)?;
    writeln!(writer, "    Private={}", summary.private)?;
    writeln!(writer, "    Forked={}", summary.forked)?;
    writeln!(writer, "    Missing Descriptions={}", summary.missing_descriptions)?;
    writeln!(writer, "    Missing Readme's={}", summary.missing_readmes)?;
    writeln!(writer, "    Missing Licenses={}", summary.missing_licenses)?;
    writeln!(writer, "    Open Issues={}", summary.open_issues)?;
    writeln!(writer, "    Stars={}", summary.stars)?;
    writeln!(writer, "    Watchers={}", summary.watchers)?;
    Ok(())
}
