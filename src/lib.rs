//! # frog
//!
//! frog is a lexer, parser and tree-walking interpreter for Frog, a small
//! imperative teaching language. Programs are delimited by `FRG_Begin` and
//! `FRG_End`, statements end with `#`, and the runtime knows integers, reals,
//! strings, booleans and growable arrays.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use crate::{
    ast::Program,
    error::{Diagnostics, FrogError},
    interpreter::{evaluator::core::Context, lexer::Lexer, parser::Parser, token::Token},
};

/// Defines the structure of parsed code.
///
/// Declares [`ast::Program`], the [`ast::Statement`] and [`ast::Expr`]
/// families and their operators. Every node carries its source position, and
/// `Display` renders a node back as Frog source.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Parse diagnostics, runtime errors and the [`error::FrogError`] returned by
/// the entry points of this crate.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// Tokens, lexer, parser, evaluator, environment, runtime values and the tree
/// printer.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Splits source text into tokens, ending with a single `EOF` token.
///
/// # Example
/// ```
/// let dump: Vec<String> = frog::tokenize("x := 1 #").iter().map(|t| t.dump()).collect();
///
/// assert_eq!(dump,
///            ["IDENTIFIER: \"x\"", "ASSIGN: \":=\"", "NUMBER: \"1\"", "HASH: \"#\"", "EOF: \"\""]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).all_tokens()
}

/// Parses a program. `FRG_Use` paths resolve against the working directory.
///
/// # Errors
/// Returns [`FrogError::Parse`] with every diagnostic if any were recorded.
pub fn parse(source: &str) -> Result<Program, FrogError> {
    finish(Parser::new(source))
}

/// Reads and parses a program file. `FRG_Use` paths resolve against the
/// file's directory.
///
/// # Errors
/// Returns [`FrogError::Io`] if the file cannot be read and
/// [`FrogError::Parse`] if the program has diagnostics.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Program, FrogError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| FrogError::Io { path: path.to_path_buf(),
                                                                                source })?;
    finish(Parser::with_origin(&source, path))
}

fn finish(mut parser: Parser<'_>) -> Result<Program, FrogError> {
    let program = parser.parse_program();
    if parser.has_errors() {
        return Err(FrogError::Parse(Diagnostics(parser.into_errors())));
    }
    Ok(program)
}

/// Parses and runs a program against the process's standard input and
/// output.
///
/// # Errors
/// Returns [`FrogError::Parse`] without running anything if the program has
/// diagnostics, or [`FrogError::Runtime`] if evaluation fails.
pub fn run(source: &str) -> Result<(), FrogError> {
    let program = parse(source)?;
    run_program(&program, io::stdin().lock(), io::stdout().lock())
}

/// Parses and runs a program against the given input and output streams.
///
/// # Errors
/// Returns [`FrogError::Parse`] without running anything if the program has
/// diagnostics, or [`FrogError::Runtime`] if evaluation fails.
///
/// # Example
/// ```
/// let mut output = Vec::new();
/// frog::run_with_io("FRG_Begin FRG_Int[] xs # xs[3] := 9 # FRG_Print xs # FRG_End",
///                   "".as_bytes(),
///                   &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "[0, 0, 0, 9]\n");
/// ```
pub fn run_with_io<R, W>(source: &str, input: R, output: W) -> Result<(), FrogError>
    where R: BufRead,
          W: Write
{
    let program = parse(source)?;
    run_program(&program, input, output)
}

/// Runs an already parsed program in a fresh context.
///
/// # Errors
/// Returns [`FrogError::Runtime`] if evaluation fails.
pub fn run_program<R, W>(program: &Program, input: R, output: W) -> Result<(), FrogError>
    where R: BufRead,
          W: Write
{
    let mut context = Context::new(input, output);
    context.eval_program(program)?;
    Ok(())
}
