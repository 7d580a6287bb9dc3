//! Integration tests for the rill-parser crate.

use rill_parser::parse;
use rill_syntax::{pretty, ExprId, ExprKind, ItemKind, Program};

fn parse_ok(source: &str) -> Program {
    let (program, diags) = parse(source);
    assert!(diags.is_empty(), "parse errors in `{}`: {:?}", source, diags);
    program
}

fn root_expr(program: &Program) -> ExprId {
    match program.items[0].kind {
        ItemKind::Expr(id) => id,
        _ => panic!("expected an expression item"),
    }
}

fn roundtrip(source: &str) -> String {
    let program = parse_ok(source);
    pretty(&program.arena, root_expr(&program))
}

// ============================================================================
// 表达式语法
// ============================================================================

#[test]
fn test_application_binds_tighter_than_lambda_body() {
    assert_eq!(roundtrip("λx -> add x 1"), "λx.add x 1");
}

#[test]
fn test_nested_lambdas() {
    assert_eq!(roundtrip("λf -> λx -> f x"), "λf.λx.f x");
}

#[test]
fn test_application_is_left_associative() {
    let program = parse_ok("f a b c");
    let root = root_expr(&program);

    // ((f a) b) c
    let ExprKind::Apply { callee, .. } = program.arena.get(root).kind else {
        panic!("expected application");
    };
    let ExprKind::Apply { callee, .. } = program.arena.get(callee).kind else {
        panic!("expected nested application");
    };
    assert!(matches!(
        program.arena.get(callee).kind,
        ExprKind::Apply { .. }
    ));
}

#[test]
fn test_parentheses_override_associativity() {
    assert_eq!(roundtrip("f (g x) y"), "f (g x) y");
}

#[test]
fn test_if_swallows_its_branches() {
    assert_eq!(
        roundtrip("if zero n then 1 else sub n 1"),
        "if zero n then 1 else sub n 1"
    );
}

#[test]
fn test_let_in_nests_to_the_right() {
    assert_eq!(
        roundtrip("let x = 1 in let y = 2 in add x y"),
        "let x = 1 in let y = 2 in add x y"
    );
}

#[test]
fn test_lambda_as_argument_needs_parens() {
    let program = parse_ok("sin (λx -> x) ");
    let root = root_expr(&program);
    let ExprKind::Apply { arg, .. } = program.arena.get(root).kind else {
        panic!("expected application");
    };
    assert!(matches!(
        program.arena.get(arg).kind,
        ExprKind::Lambda { .. }
    ));
}

// ============================================================================
// 顶层项
// ============================================================================

#[test]
fn test_declaration_has_no_in() {
    let program = parse_ok("let inc = λx -> add x 1");
    match &program.items[0].kind {
        ItemKind::Decl { name, .. } => assert_eq!(name, "inc"),
        other => panic!("expected a declaration, got {:?}", other),
    }
}

#[test]
fn test_program_mixes_declarations_and_expressions() {
    let program = parse_ok("let one = 1\nlet add1 = λx -> add x one\nadd1 41");
    assert_eq!(program.items.len(), 3);
    assert!(matches!(program.items[0].kind, ItemKind::Decl { .. }));
    assert!(matches!(program.items[1].kind, ItemKind::Decl { .. }));
    assert!(matches!(program.items[2].kind, ItemKind::Expr(_)));
}

#[test]
fn test_binders_are_variable_nodes_in_the_arena() {
    let program = parse_ok("λx -> x");
    let root = root_expr(&program);
    let ExprKind::Lambda { param, .. } = program.arena.get(root).kind else {
        panic!("expected a lambda");
    };
    assert_eq!(program.arena.get(param).as_var(), Some("x"));
}

// ============================================================================
// 错误恢复
// ============================================================================

#[test]
fn test_missing_closing_paren_is_reported() {
    let (_, diags) = parse("add (mul 2 3");
    assert!(!diags.is_empty());
}

#[test]
fn test_missing_lambda_body_is_reported() {
    let (_, diags) = parse("λx ->");
    assert!(!diags.is_empty());
}

#[test]
fn test_missing_else_is_reported() {
    let (_, diags) = parse("if true then 1");
    assert!(!diags.is_empty());
}

#[test]
fn test_garbage_never_loops_forever() {
    let (_, diags) = parse(") ) in -> =");
    assert!(!diags.is_empty());
}
