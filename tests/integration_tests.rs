//! Integration tests for the front end.
//!
//! These tests drive the public API end to end: source text in, syntax tree
//! or structured error out.

use tinyscript::{
    ast::ast::{BinaryOperator, Node},
    display_error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parse,
    parser::parser::Parser,
};

#[test]
fn test_parse_small_program() {
    let source = "var greeting = \"Hello\";\nvar n = 2 + 3 * 4;\nprint(greeting, n);";
    let tree = parse(source.to_string(), Some("hello.ts".to_string())).unwrap();

    assert_eq!(
        tree,
        Node::StatementSequence(vec![
            Node::definition("greeting", Node::StringLiteral("Hello".to_string())),
            Node::definition(
                "n",
                Node::binary(
                    BinaryOperator::Add,
                    Node::IntLiteral(2),
                    Node::binary(BinaryOperator::Mul, Node::IntLiteral(3), Node::IntLiteral(4)),
                ),
            ),
            Node::call("print", vec![Node::reference("greeting"), Node::reference("n")]),
        ])
    );
}

#[test]
fn test_parser_over_explicit_lexer() {
    let lexer = Lexer::new("var flag = true".to_string(), None);
    let mut parser = Parser::new(lexer).unwrap();

    assert_eq!(parser.current_token_kind(), TokenKind::Id);

    let tree = parser.parse().unwrap();
    assert_eq!(
        tree,
        Node::StatementSequence(vec![Node::definition("flag", Node::BoolLiteral(true))])
    );
}

#[test]
fn test_tree_printing() {
    let tree = parse("var x = (1 + 2) / y".to_string(), None).unwrap();

    assert_eq!(
        tree.to_string(),
        "StatementSequence\n  VariableDefinition x\n    BinaryOperation Div\n      BinaryOperation Add\n        IntLiteral 1\n        IntLiteral 2\n      VariableReference y\n"
    );
}

#[test]
fn test_error_report_for_missing_equals() {
    let source = "var a = 1;\nvar b 2;";
    let error = parse(source.to_string(), Some("broken.ts".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");

    let report = display_error(&error, source);
    assert!(report.starts_with("Error: UnexpectedToken (expected `Equals`, found `2`)"));
    assert!(report.contains("-> broken.ts"));
    assert!(report.contains("2 | var b 2;"));
}

#[test]
fn test_error_report_at_end_of_input() {
    let source = "print(1,";
    let error = parse(source.to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "ExpectedExpression");
    assert_eq!(error.get_position().0, 8);

    let report = display_error(&error, source);
    assert!(report.contains("1 | print(1,"));
    assert!(report.contains("| --------^"));
}

#[test]
fn test_tree_is_an_owned_value() {
    let tree = parse("var a = b".to_string(), None).unwrap();
    let copy = tree.clone();
    drop(tree);

    assert_eq!(copy.node_count(), 3);
}
