//! Plain expression rendering.

use crate::{ExprArena, ExprId, ExprKind, Literal};

/// Render an expression back to readable source form.
pub fn pretty(arena: &ExprArena, id: ExprId) -> String {
    let mut out = String::new();
    write_expr(arena, id, &mut out);
    out
}

fn write_expr(arena: &ExprArena, id: ExprId, out: &mut String) {
    match &arena.get(id).kind {
        ExprKind::Literal(_) | ExprKind::Var(_) | ExprKind::Apply { .. } => {
            write_apply(arena, id, out);
        }
        ExprKind::Lambda { param, body } => {
            out.push('λ');
            out.push_str(var_name(arena, *param));
            out.push('.');
            write_expr(arena, *body, out);
        }
        ExprKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            out.push_str("if ");
            write_expr(arena, *cond, out);
            out.push_str(" then ");
            write_expr(arena, *then_branch, out);
            out.push_str(" else ");
            write_expr(arena, *else_branch, out);
        }
        ExprKind::Let { name, value, body } => {
            out.push_str("let ");
            out.push_str(var_name(arena, *name));
            out.push_str(" = ");
            write_expr(arena, *value, out);
            out.push_str(" in ");
            write_expr(arena, *body, out);
        }
    }
}

/// Application level: left-associative juxtaposition.
fn write_apply(arena: &ExprArena, id: ExprId, out: &mut String) {
    match &arena.get(id).kind {
        ExprKind::Apply { callee, arg } => {
            write_apply(arena, *callee, out);
            out.push(' ');
            write_atom(arena, *arg, out);
        }
        _ => write_atom(arena, id, out),
    }
}

/// Atom level: anything compound gets parentheses.
fn write_atom(arena: &ExprArena, id: ExprId, out: &mut String) {
    match &arena.get(id).kind {
        ExprKind::Literal(lit) => match lit {
            Literal::Int(i) => out.push_str(&i.to_string()),
            Literal::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Literal::Str(s) => {
                out.push('"');
                out.push_str(s);
                out.push('"');
            }
        },
        ExprKind::Var(name) => out.push_str(name),
        _ => {
            out.push('(');
            write_expr(arena, id, out);
            out.push(')');
        }
    }
}

fn var_name(arena: &ExprArena, id: ExprId) -> &str {
    arena.get(id).as_var().unwrap_or("_")
}
