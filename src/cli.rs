//! Command-line surface: argument handling and the summarize pipeline.

use crate::models::{Cidr, NetworkSummary};
use crate::output;
use colored::Colorize;
use std::error::Error;
use std::io::{self, Write};

/// How the summary should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Labeled table, one row per statistic.
    #[default]
    Table,
    /// Single JSON object.
    Json,
}

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// CIDR given as a positional argument, if any.
    pub cidr: Option<String>,
    /// Emit the full address range after the summary.
    pub full_range: bool,
    /// Summary rendering.
    pub format: Format,
    /// Help was requested explicitly.
    pub help: bool,
}

/// Parse command-line arguments (program name already stripped).
///
/// Fails on unknown flags or more than one positional argument; the
/// CIDR itself is validated later by [`Cidr::new`].
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Options, Box<dyn Error>> {
    let mut opts = Options::default();
    for arg in args {
        match arg.as_str() {
            "-o" => opts.full_range = true,
            "--json" => opts.format = Format::Json,
            "-h" | "--help" => opts.help = true,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown flag: {arg}").into());
            }
            _ => {
                if opts.cidr.is_some() {
                    return Err(format!("unexpected extra argument: {arg}").into());
                }
                opts.cidr = Some(arg);
            }
        }
    }
    Ok(opts)
}

/// Print the usage banner.
pub fn usage<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "{}", "netcider v2.0".magenta())?;
    writeln!(w, "Network addressing calculator for IPv4 CIDR blocks")?;
    writeln!(w)?;
    writeln!(w, "Usage:")?;
    writeln!(w, "  netcider [-o] [--json] <A.B.C.D/P>")?;
    writeln!(w)?;
    writeln!(w, "Options:")?;
    writeln!(w, "  -o      Output the full address range to stdout")?;
    writeln!(w, "  --json  Emit the summary as JSON")?;
    writeln!(w, "  -h      Show this help")?;
    writeln!(w)?;
    writeln!(w, "Examples:")?;
    writeln!(w, "  $ netcider 192.168.0.2/24")?;
    writeln!(w, "  $ netcider -o 192.168.0.2/24")?;
    writeln!(w, "  $ echo 10.0.0.0/30 | netcider")?;
    Ok(())
}

/// Summarize every input into the sink.
///
/// All inputs are parsed up front, so a malformed CIDR anywhere in the
/// batch produces an error and no partial output.
pub fn run<W: Write>(w: &mut W, inputs: &[String], opts: &Options) -> Result<(), Box<dyn Error>> {
    let mut cidrs = Vec::with_capacity(inputs.len());
    for input in inputs {
        cidrs.push(Cidr::new(input)?);
    }

    for (i, cidr) in cidrs.iter().enumerate() {
        if i > 0 && opts.format == Format::Table {
            writeln!(w)?;
        }
        summarize(w, *cidr, opts)?;
    }
    Ok(())
}

/// Render the summary (and, with `-o`, the full range) for one block.
pub fn summarize<W: Write>(w: &mut W, cidr: Cidr, opts: &Options) -> Result<(), Box<dyn Error>> {
    let summary = NetworkSummary::from_cidr(cidr);
    log::debug!("{cidr} -> {summary:?}");

    match opts.format {
        Format::Table => output::write_summary(w, &summary)?,
        Format::Json => output::write_json(w, &summary)?,
    }
    if opts.full_range {
        output::write_range(w, summary.addresses())?;
    }
    Ok(())
}

/// Report a fatal error to the error stream, colored like the rest of the
/// diagnostics.
pub fn report_error(err: &dyn Error) {
    eprintln!("{} {err}", "error:".red());
}
