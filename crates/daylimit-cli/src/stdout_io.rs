use std::io::{self, Write};

/// Writes `text` to stdout. A reader that hangs up early (`daylimit demo |
/// head -1`) is not treated as a failure.
pub fn write_stdout(text: &str, trailing_newline: bool) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_to(&mut stdout, text, trailing_newline)
}

fn write_to(writer: &mut dyn Write, text: &str, trailing_newline: bool) -> io::Result<()> {
    ignore_broken_pipe(writer.write_all(text.as_bytes()))?;
    if trailing_newline {
        ignore_broken_pipe(writer.write_all(b"\n"))?;
    }
    ignore_broken_pipe(writer.flush())
}

fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
