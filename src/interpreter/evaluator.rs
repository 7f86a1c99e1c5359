/// Core evaluation state.
///
/// Contains the runtime [`core::Context`], the [`core::Flow`] outcome of a
/// statement and the program-level loop.
pub mod core;

/// Statement evaluation.
///
/// Declarations, assignments with grow-on-write arrays, printing, input,
/// conditionals, blocks and the `Repeat ... Until` loop.
pub mod statement;

/// Expression evaluation.
///
/// Identifiers, literals, negation, array construction, indexing and the
/// rejection of function calls.
pub mod expression;

/// Binary operator evaluation.
///
/// Integer, real and string operators with checked integer arithmetic and
/// division-by-zero errors.
pub mod binary;
