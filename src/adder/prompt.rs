use std::io::{self, BufRead, Write};
use crate::adder::error::AdderError;

pub const PROMPT: &str = "Enter data to add: ";

/// Prompts on `output` and reads one line from `input`, minus its terminator.
pub fn read_data<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String, AdderError> {
    output.write_all(PROMPT.as_bytes())
        .and_then(|_| output.flush())
        .map_err(|e| AdderError::Output { source: e })?;

    let mut line = String::new();
    let n = input.read_line(&mut line).map_err(|e| AdderError::Prompt { source: e })?;
    if n == 0 {
        return Err(AdderError::Prompt {
            source: io::Error::new(io::ErrorKind::UnexpectedEof, "EOF when reading a line"),
        });
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
