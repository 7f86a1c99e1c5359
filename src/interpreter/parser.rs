/// Parser state and the program-level loop.
///
/// Holds the token window, the collected diagnostics and the inclusion
/// chain, and drives statement parsing from `FRG_Begin` to `FRG_End`.
pub mod core;

/// Statement grammar.
///
/// Declarations, assignments, `FRG_Print`, `FRG_Input`, `If`, `Repeat`,
/// blocks, `Break`, `Continue` and function declarations.
pub mod statement;

/// Expression parsing.
///
/// A Pratt parser: prefix and infix handlers selected by token kind, ordered
/// by [`expression::Precedence`].
pub mod expression;

/// File inclusion.
///
/// Reads and parses `FRG_Use` targets while the including program is being
/// parsed, and rejects inclusion cycles.
pub mod include;

pub use self::core::Parser;
