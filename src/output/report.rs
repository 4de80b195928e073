use std::io::{self, Write};

/// Header line printed above a non-empty result list
pub const RESULTS_HEADER: &str = "Search results:";

/// Line printed when a search matched nothing
pub const NO_RESULTS: &str = "No results found.";

/// Writes search results, one `- <address>` line each, under a header
///
/// An empty result list produces the single "no results" line instead.
pub fn write_results<W: Write>(results: &[String], out: &mut W) -> io::Result<()> {
    if results.is_empty() {
        writeln!(out, "{}", NO_RESULTS)?;
        return Ok(());
    }

    writeln!(out, "{}", RESULTS_HEADER)?;
    for result in results {
        writeln!(out, "- {}", result)?;
    }
    Ok(())
}

/// Prints search results to stdout
pub fn print_results(results: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_results(results, &mut handle)
}
