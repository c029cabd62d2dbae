//! Line-at-a-time token printer.
//!
//! Reads one line at a time from the caller's input, tokenizes it with a
//! fresh lexer and writes each token on its own line. The loop ends at the
//! end of the input or on a line reading `exit`.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::lexer::lexer::Lexer;

pub const PROMPT: &str = ">> ";
pub const EXIT: &str = "exit";

pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("input exhausted, leaving repl");
            return Ok(());
        }

        let line = line.trim_end_matches(['\n', '\r']);
        if line == EXIT {
            return Ok(());
        }

        for token in Lexer::new(line) {
            writeln!(output, "{}", token)?;
        }
    }
}
