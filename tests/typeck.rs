//! Integration tests for the rill-typeck crate.
//!
//! These drive the full inference pipeline (annotate, collect, unify,
//! apply) over parsed source, including the REPL-style declaration
//! flow.

use rill_syntax::{ExprId, ItemKind, Program};
use rill_typeck::{infer_expr, Inference, Ty, TypeEnv, TypeError, TypeErrorKind};

fn parse_expr(source: &str) -> (Program, ExprId) {
    let (program, diags) = rill_parser::parse(source);
    assert!(diags.is_empty(), "parse errors in `{}`: {:?}", source, diags);
    let ItemKind::Expr(root) = program.items[0].kind else {
        panic!("expected an expression item in `{}`", source);
    };
    (program, root)
}

fn infer_source(source: &str) -> Result<Ty, TypeError> {
    let (program, root) = parse_expr(source);
    infer_expr(&program.arena, root, &TypeEnv::with_builtins())
}

fn assert_type(source: &str, expected: &str) {
    match infer_source(source) {
        Ok(ty) => assert_eq!(ty.to_string(), expected, "for `{}`", source),
        Err(err) => panic!("inference failed for `{}`: {}", source, err),
    }
}

// ============================================================================
// 字面量与内建函数
// ============================================================================

#[test]
fn test_literal_types() {
    assert_type("1", "integer");
    assert_type("true", "boolean");
    assert_type("false", "boolean");
    assert_type("\"hello\"", "string");
}

#[test]
fn test_builtin_lookup() {
    assert_type("add", "integer -> integer -> integer");
    assert_type("zero", "integer -> boolean");
}

#[test]
fn test_partial_application() {
    assert_type("add 1", "integer -> integer");
    assert_type("add 1 2", "integer");
}

#[test]
fn test_lambda_over_builtin() {
    assert_type("λx -> add x 1", "integer -> integer");
}

#[test]
fn test_identity_keeps_its_variable() {
    // Without generalization the identity function stays at its
    // annotation variable, deterministically named
    assert_type("λx -> x", "t0 -> t0");
}

#[test]
fn test_higher_order_argument_is_parenthesized() {
    assert_type("λf -> f 1", "(integer -> t2) -> t2");
}

// ============================================================================
// 场景测试
// ============================================================================

#[test]
fn test_conditional_over_builtins_resolves_to_string() {
    assert_type(
        "if zero (sin 0) then \"correct\" else \"incorrect\"",
        "string",
    );
}

#[test]
fn test_nested_lets_resolve_to_integer() {
    assert_type("let x = 1 in let y = 1 in add x y", "integer");
}

#[test]
fn test_unbound_variable_reported_before_unification() {
    // No builtins here: `add` itself is the unbound name
    let (program, root) = parse_expr("add x y");
    let err = infer_expr(&program.arena, root, &TypeEnv::new()).unwrap_err();

    assert_eq!(err.kind, TypeErrorKind::UnboundVariable("add".to_string()));
}

#[test]
fn test_integer_condition_is_a_mismatch() {
    let err = infer_source("if 1 then true else false").unwrap_err();

    match err.kind {
        TypeErrorKind::Mismatch(left, right) => {
            assert_eq!(left, Ty::Int);
            assert_eq!(right, Ty::Bool);
        }
        other => panic!("expected a mismatch, got {}", other),
    }
}

#[test]
fn test_declared_function_is_fully_resolved() {
    let (program, diags) = rill_parser::parse("let inc = λx -> add x 1");
    assert!(diags.is_empty(), "parse errors: {:?}", diags);

    let ItemKind::Decl { ref name, value } = program.items[0].kind else {
        panic!("expected a declaration");
    };

    let mut session = Inference::new(TypeEnv::with_builtins());
    let declared = session.declare(name, &program.arena, value).unwrap();
    assert_eq!(declared.to_string(), "integer -> integer");

    let looked_up = session.env().lookup("inc").unwrap();
    assert!(!looked_up.has_vars(), "env binding still has variables");
    assert_eq!(looked_up.to_string(), "integer -> integer");
}

#[test]
fn test_declarations_compose_across_a_session() {
    let mut session = Inference::new(TypeEnv::with_builtins());

    let (first, diags) = rill_parser::parse("let double = λx -> mul x 2");
    assert!(diags.is_empty());
    let ItemKind::Decl { ref name, value } = first.items[0].kind else {
        panic!("expected a declaration");
    };
    session.declare(name, &first.arena, value).unwrap();

    let (second, root) = parse_expr("double (double 3)");
    let ty = session.infer(&second.arena, root).unwrap();
    assert_eq!(ty, Ty::Int);
}

// ============================================================================
// 错误场景
// ============================================================================

#[test]
fn test_self_application_is_an_infinite_type() {
    let err = infer_source("λx -> x x").unwrap_err();
    assert!(matches!(err.kind, TypeErrorKind::InfiniteType(_, _)));
}

#[test]
fn test_branches_must_agree() {
    let err = infer_source("if true then 1 else \"one\"").unwrap_err();
    assert!(matches!(err.kind, TypeErrorKind::Mismatch(_, _)));
}

#[test]
fn test_argument_type_is_checked() {
    let err = infer_source("sin true").unwrap_err();
    assert!(matches!(err.kind, TypeErrorKind::Mismatch(_, _)));
}

#[test]
fn test_let_shadowing_types_independently() {
    assert_type("let x = 1 in let x = \"s\" in x", "string");
}

// ============================================================================
// 性质测试
// ============================================================================

#[test]
fn test_ground_programs_resolve_without_variables() {
    for source in [
        "add 1 2",
        "let x = 1 in let y = 1 in add x y",
        "if zero (sin 0) then \"correct\" else \"incorrect\"",
        "(λx -> add x 1) 41",
    ] {
        let ty = infer_source(source).unwrap();
        assert!(!ty.has_vars(), "`{}` resolved to open type {}", source, ty);
    }
}

#[test]
fn test_solved_substitution_is_idempotent_on_its_result() {
    let (program, root) = parse_expr("λf -> f (f 1)");
    let mut session = Inference::new(TypeEnv::with_builtins());
    let (ty, trace) = session.infer_with_trace(&program.arena, root).unwrap();

    assert_eq!(trace.substitution.apply(&ty), ty);
}

#[test]
fn test_same_source_infers_the_same_type() {
    for source in ["λx -> x", "λf -> f 1", "let x = 1 in add x x"] {
        let first = infer_source(source).unwrap();
        let second = infer_source(source).unwrap();
        assert_eq!(first, second, "nondeterministic result for `{}`", source);
    }
}
