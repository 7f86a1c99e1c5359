use std::path::PathBuf;

/// Parsing errors.
///
/// Every diagnostic the parser can record, plus the [`Diagnostics`] list that
/// collects them for one program. Parse errors never abort parsing; they are
/// accumulated and reported together.
pub mod parse_error;
/// Runtime errors.
///
/// Errors raised while evaluating a program, such as division by zero, type
/// mismatches, unknown identifiers or out-of-bounds indices. Each one carries
/// the source position of the construct that failed.
pub mod runtime_error;

pub use parse_error::{Diagnostics, ParseError};
pub use runtime_error::{RuntimeError, RuntimeErrorKind};

/// Everything the library entry points can fail with.
#[derive(Debug, thiserror::Error)]
pub enum FrogError {
    /// The program has parse diagnostics and was not evaluated.
    #[error("Parser has errors:\n{0}")]
    Parse(Diagnostics),
    /// Evaluation stopped with a runtime error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// The source file could not be read.
    #[error("could not read {}", .path.display())]
    Io {
        /// The file that failed to load.
        path:   PathBuf,
        /// The underlying failure.
        source: std::io::Error,
    },
}
