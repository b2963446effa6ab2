use std::fmt::Display;
use std::io::{self, BufRead, Write};

use log::debug;

use crate::core::{board::Board, validate::parse_coord};

/// Line-oriented prompt/answer helper over any reader and writer.
pub struct InputReader<B, W> {
    read: B,
    out: W,
    buf: String,
}

impl<B, W> InputReader<B, W> {
    pub fn new(read: B, out: W) -> Self {
        Self {
            read,
            out,
            buf: String::new(),
        }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (B, W) {
        (self.read, self.out)
    }
}

impl InputReader<io::StdinLock<'static>, io::Stdout> {
    /// Reader bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<B: BufRead, W: Write> InputReader<B, W> {
    /// Write a line of output.
    pub fn say(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", msg)
    }

    /// Print `prompt`, read one line and return it trimmed. End of input is
    /// reported as [`io::ErrorKind::UnexpectedEof`].
    pub fn read_line(&mut self, prompt: &str) -> io::Result<&str> {
        write!(self.out, "{} ", prompt)?;
        self.out.flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            writeln!(self.out)?;
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(self.buf.trim())
    }

    /// Repeatedly reads input until `checker` accepts it. Each rejection is
    /// printed and the prompt shown again.
    pub fn read_input<F, T, E>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Result<T, E>,
        E: Display,
    {
        loop {
            let result = checker(self.read_line(prompt)?);
            match result {
                Ok(val) => return Ok(val),
                Err(e) => {
                    debug!("rejected input {:?}: {}", self.buf.trim(), e);
                    writeln!(self.out, "Invalid input: {}", e)?;
                }
            }
        }
    }

    /// Ask for a `row,col` coordinate on `board` until one is given that is
    /// in bounds and not yet targeted.
    pub fn prompt_and_parse(&mut self, prompt: &str, board: &Board) -> io::Result<(usize, usize)> {
        self.read_input(prompt, |line| parse_coord(line, board))
    }
}
