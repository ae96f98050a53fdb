//! Terminal output: labeled summary lines and full-range listings.

use crate::models::{AddrRange, NetworkSummary};
use colored::Colorize;
use std::io::{self, Write};

/// Width of the label column in the summary table.
const LABEL_WIDTH: usize = 12;

/// Write one `label value` row with the label colored and left-padded.
fn write_row<W: Write, T: ToString>(w: &mut W, label: &str, value: T) -> io::Result<()> {
    // Pad before coloring; the escape codes would throw the width off.
    let width = LABEL_WIDTH;
    let label = format!("{label:<width$}");
    writeln!(w, "{} {}", label.blue(), value.to_string())
}

/// Write the labeled summary table for one block.
///
/// Row order matches the classic subnet-calculator layout: identity first,
/// masks, block bounds, then the host range and counts.
pub fn write_summary<W: Write>(w: &mut W, summary: &NetworkSummary) -> io::Result<()> {
    write_row(w, "Base", summary.cidr)?;
    write_row(w, "Netmask", summary.netmask)?;
    write_row(w, "Wildcard", summary.wildcard)?;
    write_row(w, "Network", summary.network)?;
    write_row(w, "Broadcast", summary.broadcast)?;
    write_row(w, "Host min", summary.host_min)?;
    write_row(w, "Host max", summary.host_max)?;
    write_row(w, "Total", summary.total_addresses)?;
    write_row(w, "Usable", summary.usable_hosts)?;
    Ok(())
}

/// Write every address in the range, one dotted quad per line, ascending.
///
/// Streams straight from the iterator; a /0 range is four billion lines
/// but constant memory.
pub fn write_range<W: Write>(w: &mut W, range: AddrRange) -> io::Result<()> {
    log::debug!("writing {} addresses", range.remaining());
    for addr in range {
        writeln!(w, "{addr}")?;
    }
    Ok(())
}
