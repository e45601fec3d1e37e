//! CLI output: plain text to stdout, errors to stderr.

use asset_tools::Error;

/// Write the report to stdout, exiting quietly on a closed pipe.
pub fn print_text(text: &str) -> asset_tools::Result<()> {
    use std::io::{self, Write};

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = handle.write_all(text.as_bytes()) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

pub fn print_error(err: &Error) {
    eprintln!("Error [{}]: {}", err.code.as_str(), err);
    for hint in &err.hints {
        eprintln!("  hint: {}", hint.message);
    }
}
