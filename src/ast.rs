use std::fmt;

use crate::interpreter::token::{Position, TokenKind};

/// The root of a parsed Frog program: the statements between `FRG_Begin` and
/// `FRG_End`, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements.
    pub statements: Vec<Statement>,
}

/// The three declarable scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclType {
    /// `FRG_Int`
    Int,
    /// `FRG_Real`
    Real,
    /// `FRG_Strg`
    Strg,
}

impl DeclType {
    /// Maps a type keyword token to its declared type.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::FrgInt => Some(Self::Int),
            TokenKind::FrgReal => Some(Self::Real),
            TokenKind::FrgStrg => Some(Self::Strg),
            _ => None,
        }
    }

    /// The keyword spelling of the type.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Int => "FRG_Int",
            Self::Real => "FRG_Real",
            Self::Strg => "FRG_Strg",
        }
    }
}

impl fmt::Display for DeclType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A name together with the position of the token that spelled it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The identifier text.
    pub name:     String,
    /// Where the identifier appears.
    pub position: Position,
}

impl Identifier {
    /// Creates an identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self { name: name.into(),
               position }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A typed parameter in a function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Declared parameter type.
    pub ty:   DeclType,
    /// Parameter name.
    pub name: Identifier,
}

/// A parsed `FRG_Fn` declaration.
///
/// Declarations are kept in the tree and shown by the dumps, but the
/// evaluator never runs the body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// Function name.
    pub name:        Identifier,
    /// Parameters in declaration order.
    pub params:      Vec<Parameter>,
    /// Declared return type.
    pub return_type: DeclType,
    /// The `Begin ... End` body.
    pub body:        Vec<Statement>,
    /// Position of the `FRG_Fn` keyword.
    pub position:    Position,
}

/// Statements of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `FRG_Int a, b #` or `FRG_Int[] xs #`.
    Declaration {
        /// The declared element type.
        ty:       DeclType,
        /// `true` for `TYPE[]` declarations.
        is_array: bool,
        /// Every declared name.
        names:    Vec<Identifier>,
        /// Position of the type keyword.
        position: Position,
    },
    /// `target := value #`.
    Assignment {
        /// An identifier or an index expression.
        target:   Expr,
        /// The assigned expression.
        value:    Expr,
        /// Position of the `:=` token.
        position: Position,
    },
    /// `FRG_Print e1, e2 #`.
    Print {
        /// Expressions printed in order.
        values:   Vec<Expr>,
        /// Position of `FRG_Print`.
        position: Position,
    },
    /// `FRG_Input a, b #`.
    Input {
        /// Identifiers that receive one input line each.
        targets:  Vec<Identifier>,
        /// Position of `FRG_Input`.
        position: Position,
    },
    /// `If [cond] stmt Else stmt`.
    If {
        /// The condition between the brackets.
        condition:   Expr,
        /// Statement run when the condition is truthy.
        consequence: Box<Self>,
        /// Optional `Else` statement.
        alternative: Option<Box<Self>>,
        /// Position of `If`.
        position:    Position,
    },
    /// `Repeat stmts Until [cond]`, a post-test loop.
    RepeatUntil {
        /// Loop body.
        body:      Vec<Self>,
        /// Exit condition, tested after each uninterrupted pass.
        condition: Expr,
        /// Position of `Repeat`.
        position:  Position,
    },
    /// `Begin stmts End`.
    Block {
        /// Statements of the block.
        statements: Vec<Self>,
        /// Position of `Begin`.
        position:   Position,
    },
    /// `Break #`.
    Break {
        /// Position of `Break`.
        position: Position,
    },
    /// `Continue #`.
    Continue {
        /// Position of `Continue`.
        position: Position,
    },
    /// `FRG_Use "file" #`, already expanded into the included statements.
    Use {
        /// The file name as written in the source.
        file:       String,
        /// Top-level statements of the included program.
        statements: Vec<Self>,
        /// Position of `FRG_Use`.
        position:   Position,
    },
    /// `FRG_Fn name(params) : TYPE Begin ... End`.
    FunctionDeclaration(FunctionDecl),
    /// An expression evaluated for its value, `expr #`.
    Expression {
        /// The expression.
        expr:     Expr,
        /// Position of the first token of the expression.
        position: Position,
    },
}

impl Statement {
    /// Position of the token that starts (or, for assignments, names) the
    /// statement.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Declaration { position, .. }
            | Self::Assignment { position, .. }
            | Self::Print { position, .. }
            | Self::Input { position, .. }
            | Self::If { position, .. }
            | Self::RepeatUntil { position, .. }
            | Self::Block { position, .. }
            | Self::Break { position }
            | Self::Continue { position }
            | Self::Use { position, .. }
            | Self::Expression { position, .. } => *position,
            Self::FunctionDeclaration(decl) => decl.position,
        }
    }
}

/// The only prefix operator, arithmetic negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    /// `-x`
    Negate,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => f.write_str("-"),
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfixOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
}

impl InfixOperator {
    /// Maps an operator token to its binary operator.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Subtract),
            TokenKind::Asterisk => Some(Self::Multiply),
            TokenKind::Slash => Some(Self::Divide),
            TokenKind::Modulo => Some(Self::Modulo),
            TokenKind::Equal => Some(Self::Equal),
            TokenKind::NotEqual => Some(Self::NotEqual),
            TokenKind::LessThan => Some(Self::LessThan),
            TokenKind::GreaterThan => Some(Self::GreaterThan),
            TokenKind::LessEqual => Some(Self::LessEqual),
            TokenKind::GreaterEqual => Some(Self::GreaterEqual),
            _ => None,
        }
    }

    /// The source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Expressions of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A variable reference.
    Identifier(Identifier),
    /// An integer literal such as `42`.
    Integer {
        /// Parsed value.
        value:    i64,
        /// Literal position.
        position: Position,
    },
    /// A real literal such as `3.14`.
    Real {
        /// Parsed value.
        value:    f64,
        /// The literal as written, used when re-rendering.
        literal:  String,
        /// Literal position.
        position: Position,
    },
    /// A string literal with escapes already decoded.
    Str {
        /// Decoded contents.
        value:    String,
        /// Literal position.
        position: Position,
    },
    /// `True` or `False`.
    Boolean {
        /// The truth value.
        value:    bool,
        /// Literal position.
        position: Position,
    },
    /// A prefix operation, `-x`.
    Prefix {
        /// The operator.
        op:       PrefixOperator,
        /// The operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// A binary operation.
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       InfixOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// `{e1, e2, ...}`.
    ArrayLiteral {
        /// Element expressions.
        elements: Vec<Self>,
        /// Position of `{`.
        position: Position,
    },
    /// `[n]`, an array of `n` zeros.
    ArraySize {
        /// Requested length.
        size:     Box<Self>,
        /// Position of `[`.
        position: Position,
    },
    /// `left[index]`.
    Index {
        /// The indexed expression.
        left:     Box<Self>,
        /// The index expression.
        index:    Box<Self>,
        /// Position of `[`.
        position: Position,
    },
    /// `function(arguments)`. Parsed but never callable.
    Call {
        /// The callee.
        function:  Box<Self>,
        /// Argument expressions.
        arguments: Vec<Self>,
        /// Position of `(`.
        position:  Position,
    },
}

impl Expr {
    /// Position used for diagnostics about this expression.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Identifier(ident) => ident.position,
            Self::Integer { position, .. }
            | Self::Real { position, .. }
            | Self::Str { position, .. }
            | Self::Boolean { position, .. }
            | Self::Prefix { position, .. }
            | Self::Infix { position, .. }
            | Self::ArrayLiteral { position, .. }
            | Self::ArraySize { position, .. }
            | Self::Index { position, .. }
            | Self::Call { position, .. } => *position,
        }
    }
}

fn write_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_lines(f: &mut fmt::Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    for statement in statements {
        writeln!(f, "{statement}")?;
    }
    Ok(())
}

/// Re-escapes a decoded string so the lexer reads it back unchanged.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders the program as Frog source.
///
/// # Example
/// ```
/// let program = frog::parse("FRG_Begin FRG_Int a # a := 1 + 2 * 3 # FRG_End").unwrap();
///
/// assert_eq!(program.to_string(), "FRG_Begin\nFRG_Int a #\na := (1 + (2 * 3)) #\nFRG_End\n");
/// ```
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FRG_Begin")?;
        write_lines(f, &self.statements)?;
        writeln!(f, "FRG_End")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration { ty,
                                is_array,
                                names,
                                .. } => {
                write!(f, "{ty}{} ", if *is_array { "[]" } else { "" })?;
                write_separated(f, names)?;
                f.write_str(" #")
            },
            Self::Assignment { target, value, .. } => write!(f, "{target} := {value} #"),
            Self::Print { values, .. } => {
                f.write_str("FRG_Print ")?;
                write_separated(f, values)?;
                f.write_str(" #")
            },
            Self::Input { targets, .. } => {
                f.write_str("FRG_Input ")?;
                write_separated(f, targets)?;
                f.write_str(" #")
            },
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "If [{condition}] {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " Else {alternative}")?;
                }
                Ok(())
            },
            Self::RepeatUntil { body, condition, .. } => {
                writeln!(f, "Repeat")?;
                write_lines(f, body)?;
                write!(f, "Until [{condition}]")
            },
            Self::Block { statements, .. } => {
                writeln!(f, "Begin")?;
                write_lines(f, statements)?;
                f.write_str("End")
            },
            Self::Break { .. } => f.write_str("Break #"),
            Self::Continue { .. } => f.write_str("Continue #"),
            Self::Use { file, .. } => write!(f, "FRG_Use \"{}\" #", escape(file)),
            Self::FunctionDeclaration(decl) => {
                write!(f, "FRG_Fn {}(", decl.name)?;
                for (i, param) in decl.params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} {}", param.ty, param.name)?;
                }
                writeln!(f, ") : {}", decl.return_type)?;
                writeln!(f, "Begin")?;
                write_lines(f, &decl.body)?;
                f.write_str("End")
            },
            Self::Expression { expr, .. } => write!(f, "{expr} #"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::Integer { value, .. } => write!(f, "{value}"),
            Self::Real { literal, .. } => f.write_str(literal),
            Self::Str { value, .. } => write!(f, "\"{}\"", escape(value)),
            Self::Boolean { value, .. } => f.write_str(if *value { "True" } else { "False" }),
            Self::Prefix { op, right, .. } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::ArrayLiteral { elements, .. } => {
                f.write_str("{")?;
                write_separated(f, elements)?;
                f.write_str("}")
            },
            Self::ArraySize { size, .. } => write!(f, "[{size}]"),
            Self::Index { left, index, .. } => write!(f, "{left}[{index}]"),
            Self::Call { function,
                         arguments,
                         .. } => {
                write!(f, "{function}(")?;
                write_separated(f, arguments)?;
                f.write_str(")")
            },
        }
    }
}
