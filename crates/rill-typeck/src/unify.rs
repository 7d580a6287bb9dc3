//! Unification: solving the equation sequence.

use crate::{Equation, Substitution, Ty, TyVar, TypeError, TypeErrorKind};
use rill_common::Span;

/// Solve an ordered sequence of type equations into one substitution.
///
/// Sequential elimination: the accumulated substitution is applied to
/// each remaining equation exactly once, immediately before it is
/// consumed, and every new binding is composed back into the
/// accumulator (newer wins). Terminates because each step either
/// consumes an equation or splits a function equation into two
/// strictly smaller ones.
pub fn unify(equations: &[Equation]) -> Result<Substitution, TypeError> {
    let mut solution = Substitution::empty();

    for equation in equations {
        let left = solution.apply(&equation.left);
        let right = solution.apply(&equation.right);
        let step = solve(left, right, equation.span)?;
        solution = solution.compose(&step);
    }

    Ok(solution)
}

/// Solve a single equation whose sides are already resolved against
/// the accumulated substitution.
fn solve(left: Ty, right: Ty, span: Span) -> Result<Substitution, TypeError> {
    match (left, right) {
        (Ty::Int, Ty::Int) | (Ty::Bool, Ty::Bool) | (Ty::Str, Ty::Str) => {
            Ok(Substitution::empty())
        }

        // Decompose; the argument solution feeds the return pair
        (Ty::Fn(arg1, ret1), Ty::Fn(arg2, ret2)) => {
            let args = solve(*arg1, *arg2, span)?;
            let rets = solve(args.apply(&ret1), args.apply(&ret2), span)?;
            Ok(args.compose(&rets))
        }

        (Ty::Var(var), ty) | (ty, Ty::Var(var)) => bind(var, ty, span),

        (left, right) => Err(TypeError::new(TypeErrorKind::Mismatch(left, right), span)),
    }
}

/// Bind a variable, guarding against self-reference.
fn bind(var: TyVar, ty: Ty, span: Span) -> Result<Substitution, TypeError> {
    if ty == Ty::Var(var) {
        return Ok(Substitution::empty());
    }
    if ty.contains(var) {
        return Err(TypeError::new(TypeErrorKind::InfiniteType(var, ty), span));
    }
    Ok(Substitution::singleton(var, ty))
}
