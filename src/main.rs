use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use frog::{
    error::FrogError,
    interpreter::{lexer::Lexer, printer::render_tree},
};

/// What to do with the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Print one `TOKEN_TYPE: "literal"` line per token.
    Lex,
    /// Parse and print the program.
    Parse,
    /// Parse and run the program.
    Run,
}

/// frog runs programs written in Frog, a small imperative teaching language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The `.frg` source file.
    file: PathBuf,

    /// Stop after lexing or parsing instead of running.
    #[arg(short, long, value_enum, default_value_t = Mode::Run)]
    mode: Mode,

    /// In parse mode, draw the syntax tree instead of re-rendering the source.
    #[arg(short, long)]
    tree: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        },
    }
}

fn execute(args: &Args) -> anyhow::Result<()> {
    if args.mode == Mode::Lex {
        let source = std::fs::read_to_string(&args.file).with_context(|| {
                                                             format!("Failed to read the input file '{}'",
                                                                     args.file.display())
                                                         })?;
        let mut stdout = io::stdout().lock();
        for token in Lexer::new(&source).all_tokens() {
            writeln!(stdout, "{}", token.dump())?;
        }
        return Ok(());
    }

    let program = match frog::parse_file(&args.file) {
        Ok(program) => program,
        Err(FrogError::Parse(diagnostics)) => {
            bail!("Parser has errors:\n{diagnostics}");
        },
        Err(e) => return Err(e).context("Failed to load the program"),
    };

    match args.mode {
        Mode::Parse if args.tree => print!("{}", render_tree(&program)),
        Mode::Parse => print!("{program}"),
        _ => frog::run_program(&program, io::stdin().lock(), io::stdout().lock())?,
    }

    Ok(())
}
