// file: src/wizard/prompt.rs
// version: 1.0.0
// guid: e9c2a5f8-1b37-4d60-8a94-3c7e0b6d5f21

//! Line-oriented prompting over any reader/writer pair

use crate::Result;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Interactive prompter reading answers from `R` and writing to `W`
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's standard input and output
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a new prompter
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `<label>: ` and read one trimmed line.
    ///
    /// End of input reads as an empty answer. Bytes that are not UTF-8
    /// are replaced with U+FFFD rather than failing the read.
    pub fn get_input(&mut self, label: &str) -> Result<String> {
        write!(self.writer, "{}: ", label)?;
        self.writer.flush()?;

        let mut input = Vec::new();
        self.reader.read_until(b'\n', &mut input)?;
        Ok(String::from_utf8_lossy(&input).trim().to_string())
    }

    /// Write one line of output
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.writer, "{}", line.as_ref())?;
        Ok(())
    }

    /// Consume the prompter, returning its writer
    pub fn into_writer(self) -> W {
        self.writer
    }
}
