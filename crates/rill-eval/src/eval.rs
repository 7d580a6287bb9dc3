//! Expression evaluation.

use crate::{Closure, Environment, Value};
use rill_syntax::{ExprArena, ExprId, ExprKind, Literal};
use std::rc::Rc;
use thiserror::Error;

/// Evaluation errors.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("unbound variable \"{0}\"")]
    UnboundVariable(String),

    #[error("cannot apply a value that is not a function")]
    NotAFunction,

    #[error("type mismatch: {0}")]
    TypeError(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("internal: {0}")]
    Internal(String),
}

/// The Rill evaluator.
///
/// Call-by-value over the expression arena; the arena is shared with
/// any closures produced so they stay callable after this evaluator
/// is gone.
pub struct Evaluator {
    arena: Rc<ExprArena>,
}

impl Evaluator {
    pub fn new(arena: Rc<ExprArena>) -> Self {
        Self { arena }
    }

    /// Evaluate the expression under `env`.
    pub fn eval(&self, id: ExprId, env: &Environment) -> Result<Value, EvalError> {
        match &self.arena.get(id).kind {
            ExprKind::Literal(lit) => Ok(match lit {
                Literal::Int(i) => Value::Int(*i),
                Literal::Bool(b) => Value::Bool(*b),
                Literal::Str(s) => Value::Str(Rc::new(s.clone())),
            }),

            ExprKind::Var(name) => env
                .get(name)
                .ok_or_else(|| EvalError::UnboundVariable(name.clone())),

            ExprKind::Lambda { param, body } => Ok(Value::Closure(Rc::new(Closure {
                param: self.binder(*param)?,
                body: *body,
                arena: Rc::clone(&self.arena),
                env: env.clone(),
            }))),

            ExprKind::Apply { callee, arg } => {
                let callee = self.eval(*callee, env)?;
                let arg = self.eval(*arg, env)?;
                apply(callee, arg)
            }

            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => match self.eval(*cond, env)? {
                Value::Bool(true) => self.eval(*then_branch, env),
                Value::Bool(false) => self.eval(*else_branch, env),
                other => Err(EvalError::TypeError(format!(
                    "condition evaluated to {}, not a boolean",
                    other
                ))),
            },

            ExprKind::Let { name, value, body } => {
                let name = self.binder(*name)?;
                let bound = self.eval_binding(&name, *value, env)?;
                let child = env.child();
                child.define(name, bound);
                self.eval(*body, &child)
            }
        }
    }

    /// Evaluate a let-bound value.
    ///
    /// A lambda is closed over an environment that already contains
    /// its own binding, so let-bound functions may call themselves.
    fn eval_binding(
        &self,
        name: &str,
        value: ExprId,
        env: &Environment,
    ) -> Result<Value, EvalError> {
        if let ExprKind::Lambda { param, body } = &self.arena.get(value).kind {
            let rec_env = env.child();
            let closure = Value::Closure(Rc::new(Closure {
                param: self.binder(*param)?,
                body: *body,
                arena: Rc::clone(&self.arena),
                env: rec_env.clone(),
            }));
            rec_env.define(name.to_string(), closure.clone());
            return Ok(closure);
        }

        self.eval(value, env)
    }

    fn binder(&self, id: ExprId) -> Result<String, EvalError> {
        self.arena.get(id).as_var().map(str::to_owned).ok_or_else(|| {
            EvalError::Internal("binder position holds a non-variable node".to_string())
        })
    }
}

/// Apply a function value to an argument.
///
/// A closure's body may live in a different arena than the caller's
/// (REPL lines each parse their own), so evaluation restarts from the
/// closure's arena.
pub fn apply(callee: Value, arg: Value) -> Result<Value, EvalError> {
    match callee {
        Value::Closure(closure) => {
            let child = closure.env.child();
            child.define(closure.param.clone(), arg);
            Evaluator::new(Rc::clone(&closure.arena)).eval(closure.body, &child)
        }
        Value::Builtin { func, .. } => func(arg),
        _ => Err(EvalError::NotAFunction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_syntax::ItemKind;

    fn eval_source(source: &str) -> Result<Value, EvalError> {
        let (program, diags) = rill_parser::parse(source);
        assert!(diags.is_empty(), "parse errors: {:?}", diags);
        let ItemKind::Expr(root) = program.items[0].kind else {
            panic!("expected an expression item");
        };

        let evaluator = Evaluator::new(Rc::new(program.arena));
        evaluator.eval(root, &Environment::with_builtins())
    }

    #[test]
    fn test_eval_literals() {
        assert!(matches!(eval_source("42"), Ok(Value::Int(42))));
        assert!(matches!(eval_source("true"), Ok(Value::Bool(true))));
        assert!(matches!(eval_source("\"hi\""), Ok(Value::Str(_))));
    }

    #[test]
    fn test_eval_builtin_application() {
        assert!(matches!(eval_source("add 1 2"), Ok(Value::Int(3))));
        assert!(matches!(eval_source("zero 0"), Ok(Value::Bool(true))));
        assert!(matches!(eval_source("zero 3"), Ok(Value::Bool(false))));
    }

    #[test]
    fn test_eval_partial_application_curries() {
        let value = eval_source("(add 1) 2").unwrap();
        assert!(matches!(value, Value::Int(3)));

        let partial = eval_source("add 1").unwrap();
        assert!(matches!(partial, Value::Builtin { .. }));
    }

    #[test]
    fn test_eval_lambda_and_application() {
        let value = eval_source("(λx -> mul x x) 7").unwrap();
        assert!(matches!(value, Value::Int(49)));
    }

    #[test]
    fn test_eval_closure_captures_environment() {
        let value = eval_source("let n = 10 in (λx -> add x n) 5").unwrap();
        assert!(matches!(value, Value::Int(15)));
    }

    #[test]
    fn test_eval_conditional_takes_one_branch() {
        let value = eval_source("if zero 0 then \"yes\" else \"no\"").unwrap();
        assert_eq!(value.to_string(), "yes");
    }

    #[test]
    fn test_eval_let_shadowing() {
        let value = eval_source("let x = 1 in let x = 2 in x").unwrap();
        assert!(matches!(value, Value::Int(2)));
    }

    #[test]
    fn test_eval_recursive_let_function() {
        // Not typeable without polymorphic recursion support, but the
        // evaluator handles self-reference through the patched closure
        // environment
        let value =
            eval_source("let f = λn -> if zero n then 0 else f (sub n 1) in f 5").unwrap();
        assert!(matches!(value, Value::Int(0)));
    }

    #[test]
    fn test_eval_unbound_variable() {
        assert!(matches!(
            eval_source("missing"),
            Err(EvalError::UnboundVariable(_))
        ));
    }

    #[test]
    fn test_eval_apply_non_function() {
        assert!(matches!(eval_source("1 2"), Err(EvalError::NotAFunction)));
    }

    #[test]
    fn test_eval_division_by_zero() {
        assert!(matches!(
            eval_source("div 1 0"),
            Err(EvalError::DivisionByZero)
        ));
    }

    #[test]
    fn test_eval_builtin_wrong_operand() {
        assert!(matches!(
            eval_source("add true 1"),
            Err(EvalError::TypeError(_))
        ));
    }
}
