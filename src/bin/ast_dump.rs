//! `ast-dump`: loads a previously-serialized packed AST buffer and either
//! re-emits it in binary form or renders the textual dump.
//!
//! The tokenizer and parser that would normally sit in front of this (a
//! `compile` command taking raw JavaScript source text) are external
//! collaborators not present in this repository; this binary picks up
//! the pipeline at the boundary this crate actually owns: one
//! already-packed buffer.
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::error;

use packed_ast::ast::Ast;
use packed_ast::dump::dump;

#[derive(Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Mode {
    /// Re-emit the buffer's raw wire bytes.
    Binary,
    /// Render the indented textual dump.
    Text,
}

/// Load a packed AST buffer and dump it in binary or text form.
#[derive(Parser)]
#[command(name = "ast-dump", version, about)]
struct Cli {
    /// Path to a packed AST buffer. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Output mode.
    #[arg(long, value_enum, default_value_t = Mode::Text)]
    mode: Mode,

    /// Write output here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn read_input(path: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(cli: Cli) -> io::Result<()> {
    let bytes = read_input(cli.input.as_ref())?;
    let ast = Ast::from_bytes(bytes);
    // The buffer's provenance isn't guaranteed once it comes from a file or
    // stdin; validate it through the bounds-checked reader path before
    // handing it to the panicking dump/traversal routines.
    ast.validate()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(fs::File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match cli.mode {
        Mode::Binary => out.write_all(ast.as_bytes()),
        Mode::Text => dump(&ast, &mut out),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("ast-dump: {err}");
            eprintln!("ast-dump: {err}");
            ExitCode::FAILURE
        }
    }
}
