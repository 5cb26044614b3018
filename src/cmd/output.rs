use std::io::{self, BufWriter, Write};

use anyhow::Result;

/// Printed when the document has no table rows.
pub const NO_DATA_MESSAGE: &str = "No data found.";

/// Write each line followed by a newline, in order.
pub fn write_lines<W: Write>(out: W, lines: &[String]) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// Write `lines` to stdout.
pub fn print_lines(lines: &[String]) -> Result<()> {
    write_lines(io::stdout().lock(), lines)?;
    Ok(())
}
