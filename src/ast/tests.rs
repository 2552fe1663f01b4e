//! Unit tests for the syntax tree: construction, traversal, printing and release.

use super::ast::{BinaryOperator, Node};
use crate::lexer::tokens::TokenKind;

#[test]
fn test_operator_from_token_kind() {
    assert_eq!(BinaryOperator::from_token_kind(TokenKind::Plus), Some(BinaryOperator::Add));
    assert_eq!(BinaryOperator::from_token_kind(TokenKind::Minus), Some(BinaryOperator::Sub));
    assert_eq!(BinaryOperator::from_token_kind(TokenKind::Mul), Some(BinaryOperator::Mul));
    assert_eq!(BinaryOperator::from_token_kind(TokenKind::Div), Some(BinaryOperator::Div));
    assert_eq!(BinaryOperator::from_token_kind(TokenKind::Equals), None);
}

#[test]
fn test_children_order() {
    let call = Node::call("f", vec![Node::IntLiteral(1), Node::reference("a"), Node::BoolLiteral(true)]);
    let names: Vec<&str> = call.children().iter().map(|child| child.kind_name()).collect();

    assert_eq!(names, vec!["IntLiteral", "VariableReference", "BoolLiteral"]);
    assert!(Node::StringLiteral("s".to_string()).children().is_empty());
}

#[test]
fn test_node_count() {
    let tree = Node::StatementSequence(vec![Node::definition(
        "x",
        Node::binary(BinaryOperator::Add, Node::IntLiteral(1), Node::IntLiteral(2)),
    )]);

    assert_eq!(tree.node_count(), 5);
}

#[test]
fn test_display_tree() {
    let tree = Node::StatementSequence(vec![
        Node::definition(
            "x",
            Node::binary(BinaryOperator::Mul, Node::reference("y"), Node::IntLiteral(3)),
        ),
        Node::call("print", vec![Node::StringLiteral("hi".to_string())]),
    ]);

    let expected = "\
StatementSequence
  VariableDefinition x
    BinaryOperation Mul
      VariableReference y
      IntLiteral 3
  FunctionCall print
    StringLiteral \"hi\"
";

    assert_eq!(tree.to_string(), expected);
}

fn left_deep_chain(operators: usize) -> Node {
    let mut tree = Node::IntLiteral(1);
    for _ in 0..operators {
        tree = Node::binary(BinaryOperator::Add, tree, Node::IntLiteral(1));
    }
    tree
}

#[test]
fn test_long_operator_chain_counts_and_drops() {
    let tree = Node::StatementSequence(vec![Node::definition("x", left_deep_chain(200_000))]);

    assert_eq!(tree.node_count(), 2 + 400_001);
    drop(tree);
}

#[test]
fn test_deep_chain_prints_in_preorder() {
    let printed = left_deep_chain(2_000).to_string();
    let lines: Vec<&str> = printed.lines().collect();

    assert_eq!(lines.len(), 4_001);
    assert_eq!(lines[0], "BinaryOperation Add");
    assert_eq!(lines[2_000].trim_start(), "IntLiteral 1");
    assert_eq!(lines[2_000].len() - "IntLiteral 1".len(), 2 * 2_000);
}
