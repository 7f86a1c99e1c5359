use std::fmt;

use crate::ast::{Expr, Identifier, Parameter, Program, Statement};

/// A borrowed view of any tree node, so one walker can draw them all.
#[derive(Clone, Copy)]
enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Statement),
    Expr(&'a Expr),
    Identifier(&'a Identifier),
    Parameter(&'a Parameter),
    /// A function body, drawn like a block.
    Body(&'a [Statement]),
}

impl<'a> Node<'a> {
    fn label(self) -> String {
        match self {
            Self::Program(_) => "Program:".to_string(),
            Self::Statement(statement) => statement_label(statement),
            Self::Expr(expr) => expr_label(expr),
            Self::Identifier(ident) => format!("Identifier: {}", ident.name),
            Self::Parameter(param) => format!("Parameter: {} {}", param.ty, param.name),
            Self::Body(_) => "BlockStatement:".to_string(),
        }
    }

    fn children(self) -> Vec<Node<'a>> {
        match self {
            Self::Program(program) => statements(&program.statements),
            Self::Statement(statement) => statement_children(statement),
            Self::Expr(expr) => expr_children(expr),
            Self::Identifier(_) | Self::Parameter(_) => Vec::new(),
            Self::Body(body) => statements(body),
        }
    }
}

fn statements(list: &[Statement]) -> Vec<Node<'_>> {
    list.iter().map(Node::Statement).collect()
}

fn statement_label(statement: &Statement) -> String {
    match statement {
        Statement::Declaration { ty, is_array, .. } => {
            format!("DeclarationStatement: Type={ty}{}", if *is_array { "[]" } else { "" })
        },
        Statement::Assignment { .. } => "AssignmentStatement:".to_string(),
        Statement::Print { .. } => "PrintStatement:".to_string(),
        Statement::Input { .. } => "InputStatement:".to_string(),
        Statement::If { .. } => "IfStatement:".to_string(),
        Statement::RepeatUntil { .. } => "RepeatStatement:".to_string(),
        Statement::Block { .. } => "BlockStatement:".to_string(),
        Statement::Break { .. } => "BreakStatement".to_string(),
        Statement::Continue { .. } => "ContinueStatement".to_string(),
        Statement::Use { file, .. } => format!("UseStatement: {file:?}"),
        Statement::FunctionDeclaration(decl) => {
            format!("FunctionDeclarationStatement: {} : {}", decl.name, decl.return_type)
        },
        Statement::Expression { .. } => "ExpressionStatement:".to_string(),
    }
}

fn statement_children(statement: &Statement) -> Vec<Node<'_>> {
    match statement {
        Statement::Declaration { names, .. } => names.iter().map(Node::Identifier).collect(),
        Statement::Assignment { target, value, .. } => vec![Node::Expr(target), Node::Expr(value)],
        Statement::Print { values, .. } => values.iter().map(Node::Expr).collect(),
        Statement::Input { targets, .. } => targets.iter().map(Node::Identifier).collect(),
        Statement::If { condition,
                        consequence,
                        alternative,
                        .. } => {
            let mut children = vec![Node::Expr(condition), Node::Statement(consequence)];
            if let Some(alternative) = alternative {
                children.push(Node::Statement(alternative));
            }
            children
        },
        Statement::RepeatUntil { body, condition, .. } => {
            let mut children = vec![Node::Expr(condition)];
            children.extend(statements(body));
            children
        },
        Statement::Block { statements: list, .. } | Statement::Use { statements: list, .. } => {
            statements(list)
        },
        Statement::Break { .. } | Statement::Continue { .. } => Vec::new(),
        Statement::FunctionDeclaration(decl) => {
            let mut children: Vec<Node<'_>> = decl.params.iter().map(Node::Parameter).collect();
            children.push(Node::Body(&decl.body));
            children
        },
        Statement::Expression { expr, .. } => vec![Node::Expr(expr)],
    }
}

fn expr_label(expr: &Expr) -> String {
    match expr {
        Expr::Identifier(ident) => format!("Identifier: {}", ident.name),
        Expr::Integer { value, .. } => format!("IntegerLiteral: {value}"),
        Expr::Real { value, .. } => format!("RealLiteral: {value:.6}"),
        Expr::Str { value, .. } => format!("StringLiteral: {value:?}"),
        Expr::Boolean { value, .. } => format!("Boolean: {value}"),
        Expr::Prefix { op, .. } => format!("PrefixExpression: Operator={op}"),
        Expr::Infix { op, .. } => format!("InfixExpression: Operator={op}"),
        Expr::ArrayLiteral { .. } => "ArrayLiteral:".to_string(),
        Expr::ArraySize { .. } => "ArraySizeLiteral:".to_string(),
        Expr::Index { .. } => "IndexExpression:".to_string(),
        Expr::Call { .. } => "CallExpression:".to_string(),
    }
}

fn expr_children(expr: &Expr) -> Vec<Node<'_>> {
    match expr {
        Expr::Identifier(_)
        | Expr::Integer { .. }
        | Expr::Real { .. }
        | Expr::Str { .. }
        | Expr::Boolean { .. } => Vec::new(),
        Expr::Prefix { right, .. } => vec![Node::Expr(right)],
        Expr::Infix { left, right, .. } => vec![Node::Expr(left), Node::Expr(right)],
        Expr::ArrayLiteral { elements, .. } => elements.iter().map(Node::Expr).collect(),
        Expr::ArraySize { size, .. } => vec![Node::Expr(size)],
        Expr::Index { left, index, .. } => vec![Node::Expr(left), Node::Expr(index)],
        Expr::Call { function,
                     arguments,
                     .. } => {
            let mut children = vec![Node::Expr(function)];
            children.extend(arguments.iter().map(Node::Expr));
            children
        },
    }
}

fn render_node(f: &mut fmt::Formatter<'_>,
               node: Node<'_>,
               prefix: &str,
               is_last: bool)
               -> fmt::Result {
    let (connector, extension) = if is_last { ("└── ", "    ") } else { ("├── ", "│   ") };
    writeln!(f, "{prefix}{connector}{}", node.label())?;

    let child_prefix = format!("{prefix}{extension}");
    let children = node.children();
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        render_node(f, child, &child_prefix, i + 1 == count)?;
    }
    Ok(())
}

/// Displays a program as a tree with box-drawing connectors.
pub struct Tree<'a>(pub &'a Program);

impl fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_node(f, Node::Program(self.0), "", true)
    }
}

/// Draws the program as a tree with box-drawing connectors.
///
/// # Example
/// ```
/// use frog::interpreter::printer::render_tree;
///
/// let program = frog::parse("FRG_Begin FRG_Print 1 + x # FRG_End").unwrap();
///
/// assert_eq!(render_tree(&program),
///            "└── Program:\n    └── PrintStatement:\n        └── InfixExpression: Operator=+\n            ├── IntegerLiteral: 1\n            └── Identifier: x\n");
/// ```
#[must_use]
pub fn render_tree(program: &Program) -> String {
    Tree(program).to_string()
}
