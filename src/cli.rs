//! Command-line front end.
//!
//! Tokenizes or parses a file or an inline string, or runs the REPL.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser as ClapParser;
use log::info;
use thiserror::Error;

use crate::{display_error, lexer::lexer::tokenize, parser::parser::parse, repl};

#[derive(ClapParser, Debug, PartialEq)]
#[command(name = "monkey", version, about = "Tokenize and parse Monkey source")]
pub struct Cli {
    /// Source file to parse
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Inline source to parse
    #[arg(short, long, conflicts_with = "file")]
    pub eval: Option<String>,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    pub print_tokens: bool,

    /// Start the interactive token printer
    #[arg(long)]
    pub repl: bool,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("could not read {path:?}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error(transparent)]
    IoError(#[from] io::Error),
    /// `rendered` holds every diagnostic formatted with `display_error`.
    #[error("{count} parse error(s) in {file}")]
    ParseError {
        file: String,
        count: usize,
        rendered: String,
    },
}

pub type CliResult<T> = Result<T, CliError>;

pub fn run(cli: &Cli) -> CliResult<()> {
    let (source, file) = match (&cli.file, &cli.eval) {
        _ if cli.repl => return run_repl(),
        (Some(path), _) => {
            let source = fs::read_to_string(path).map_err(|source| CliError::ReadError {
                path: path.clone(),
                source,
            })?;
            (source, path.display().to_string())
        }
        (None, Some(code)) => (code.clone(), String::from("<eval>")),
        (None, None) => return run_repl(),
    };

    info!("processing {} ({} bytes)", file, source.len());
    execute(&source, &file, cli.print_tokens, &mut io::stdout().lock())
}

/// Writes the tokens of `source`, or the reconstruction of its statements,
/// to `out`. Parse diagnostics are returned as `CliError::ParseError`.
pub fn execute<W: Write>(source: &str, file: &str, print_tokens: bool, out: &mut W) -> CliResult<()> {
    if print_tokens {
        for token in tokenize(source) {
            writeln!(out, "{}", token)?;
        }
        return Ok(());
    }

    let (program, errors) = parse(source);

    if !errors.is_empty() {
        let rendered = errors
            .iter()
            .map(|error| display_error(error, source, file))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(CliError::ParseError {
            file: file.to_string(),
            count: errors.len(),
            rendered,
        });
    }

    for stmt in &program.statements {
        writeln!(out, "{}", stmt)?;
    }
    Ok(())
}

fn run_repl() -> CliResult<()> {
    let stdin = io::stdin();
    repl::start(stdin.lock(), io::stdout().lock())?;
    Ok(())
}
