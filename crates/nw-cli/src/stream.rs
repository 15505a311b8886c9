//! Query loop: one query per input line, one space-joined candidate list
//! per output line.

use std::io::{self, BufRead, Write};

use tracing::debug;

use nw_core::{SuggestError, Suggester};

#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("query on line {line_no} failed: {source}")]
    Query {
        line_no: usize,
        source: SuggestError,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Answer every line of `input`, flushing after each answer so the loop
/// can sit behind an interactive pipe. Lines that are not valid UTF-8 are
/// decoded lossily. Stops at the first failing query. Returns the number
/// of queries answered.
pub fn run<R: BufRead, W: Write>(
    suggester: &Suggester,
    mut input: R,
    mut output: W,
) -> Result<usize, StreamError> {
    let mut answered = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let query = String::from_utf8_lossy(raw);
        let candidates = suggester
            .suggest(&query)
            .map_err(|source| StreamError::Query {
                line_no: answered + 1,
                source,
            })?;
        writeln!(output, "{}", candidates.join(" "))?;
        output.flush()?;
        answered += 1;
    }
    debug!(answered, "input exhausted");
    Ok(answered)
}
