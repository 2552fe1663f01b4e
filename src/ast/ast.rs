use std::{
    fmt::{self, Display},
    mem,
};

use crate::lexer::tokens::TokenKind;

/// Arithmetic operators of a `BinaryOperation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    /// Maps an operator token to its operator, `None` for every other kind.
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Sub),
            TokenKind::Mul => Some(BinaryOperator::Mul),
            TokenKind::Div => Some(BinaryOperator::Div),
            _ => None,
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A node of the syntax tree.
///
/// Every node owns its children outright; dropping the root drops the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Program or block root. Statements in source order.
    StatementSequence(Vec<Node>),
    /// `var name = value`
    VariableDefinition { name: String, value: Box<Node> },
    VariableReference { name: String },
    StringLiteral(String),
    IntLiteral(i64),
    BoolLiteral(bool),
    /// `name(arg, ...)`, arguments in call-site order.
    FunctionCall { name: String, arguments: Vec<Node> },
    BinaryOperation {
        operator: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn definition(name: impl Into<String>, value: Node) -> Node {
        Node::VariableDefinition {
            name: name.into(),
            value: Box::new(value),
        }
    }

    pub fn reference(name: impl Into<String>) -> Node {
        Node::VariableReference { name: name.into() }
    }

    pub fn call(name: impl Into<String>, arguments: Vec<Node>) -> Node {
        Node::FunctionCall {
            name: name.into(),
            arguments,
        }
    }

    pub fn binary(operator: BinaryOperator, left: Node, right: Node) -> Node {
        Node::BinaryOperation {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::StatementSequence(_) => "StatementSequence",
            Node::VariableDefinition { .. } => "VariableDefinition",
            Node::VariableReference { .. } => "VariableReference",
            Node::StringLiteral(_) => "StringLiteral",
            Node::IntLiteral(_) => "IntLiteral",
            Node::BoolLiteral(_) => "BoolLiteral",
            Node::FunctionCall { .. } => "FunctionCall",
            Node::BinaryOperation { .. } => "BinaryOperation",
        }
    }

    /// Direct children in order. Leaves have none.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::StatementSequence(body) => body.iter().collect(),
            Node::VariableDefinition { value, .. } => vec![value.as_ref()],
            Node::FunctionCall { arguments, .. } => arguments.iter().collect(),
            Node::BinaryOperation { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Node::VariableReference { .. }
            | Node::StringLiteral(_)
            | Node::IntLiteral(_)
            | Node::BoolLiteral(_) => vec![],
        }
    }

    /// Number of nodes in the tree rooted here, this node included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children());
        }

        count
    }

    // Moves the direct children out onto `pending`, leaving leaves behind.
    fn detach_children(&mut self, pending: &mut Vec<Node>) {
        match self {
            Node::StatementSequence(body) | Node::FunctionCall { arguments: body, .. } => {
                pending.append(body)
            }
            Node::VariableDefinition { value, .. } => {
                pending.push(mem::replace(value.as_mut(), Node::BoolLiteral(false)))
            }
            Node::BinaryOperation { left, right, .. } => {
                pending.push(mem::replace(left.as_mut(), Node::BoolLiteral(false)));
                pending.push(mem::replace(right.as_mut(), Node::BoolLiteral(false)));
            }
            Node::VariableReference { .. }
            | Node::StringLiteral(_)
            | Node::IntLiteral(_)
            | Node::BoolLiteral(_) => {}
        }
    }

    fn write_line(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{}{}", "  ".repeat(depth), self.kind_name())?;

        match self {
            Node::VariableDefinition { name, .. }
            | Node::VariableReference { name }
            | Node::FunctionCall { name, .. } => write!(f, " {}", name)?,
            Node::StringLiteral(value) => write!(f, " {:?}", value)?,
            Node::IntLiteral(value) => write!(f, " {}", value)?,
            Node::BoolLiteral(value) => write!(f, " {}", value)?,
            Node::BinaryOperation { operator, .. } => write!(f, " {}", operator)?,
            Node::StatementSequence(_) => {}
        }
        writeln!(f)
    }
}

impl Drop for Node {
    /// Releases the tree one node at a time, so depth is bounded by heap only.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);

        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl Display for Node {
    /// Indented tree, one node per line, two spaces per level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![(self, 0)];

        while let Some((node, depth)) = pending.pop() {
            node.write_line(f, depth)?;
            pending.extend(node.children().into_iter().rev().map(|child| (child, depth + 1)));
        }

        Ok(())
    }
}
