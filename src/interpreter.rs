/// Tokens and source positions.
///
/// Defines [`token::Token`], the closed set of [`token::TokenKind`]s, the
/// keyword table and the names used by the token dump.
pub mod token;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces tokens one at a time, each
/// with its kind, literal text and starting line and column. Whitespace and
/// `##` comments are skipped; unknown characters become `ILLEGAL` tokens.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer with one token of lookahead,
/// builds statements and expressions, expands `FRG_Use` inclusions and
/// collects diagnostics instead of stopping at the first one.
pub mod parser;
/// The evaluator module executes AST nodes.
///
/// Walks the tree against one [`environment::Environment`], performs printing
/// and input, and propagates `Break`, `Continue` and runtime errors up to the
/// construct that handles them.
pub mod evaluator;
/// The variable store of a program run.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// Integers, reals, strings, booleans, shared arrays and the null value of
/// unassigned scalars, with their printed forms and truthiness.
pub mod value;
/// Tree view of a parsed program.
pub mod printer;
