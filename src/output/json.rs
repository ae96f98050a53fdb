//! JSON rendering of the summary record.

use crate::models::NetworkSummary;
use std::error::Error;
use std::io::Write;

/// Write the summary as one pretty-printed JSON object, addresses as
/// dotted-quad strings, followed by a newline.
pub fn write_json<W: Write>(w: &mut W, summary: &NetworkSummary) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(&mut *w, summary)?;
    writeln!(w)?;
    Ok(())
}
