//! Runtime values.

use crate::eval::EvalError;
use crate::Environment;
use rill_syntax::{pretty, ExprArena, ExprId};
use std::fmt;
use std::rc::Rc;

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    /// Integer value
    Int(i64),
    /// Boolean value
    Bool(bool),
    /// String value
    Str(Rc<String>),
    /// User function closing over its defining environment
    Closure(Rc<Closure>),
    /// Built-in function; curried builtins return further builtins
    Builtin {
        name: &'static str,
        func: Rc<dyn Fn(Value) -> Result<Value, EvalError>>,
    },
}

/// A user function together with its captured environment.
///
/// The arena is kept alive by the closure so a function declared on
/// one REPL line can be applied on a later one.
pub struct Closure {
    pub param: String,
    pub body: ExprId,
    pub arena: Rc<ExprArena>,
    pub env: Environment,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => write!(f, "{}", s),
            Value::Closure(closure) => write!(
                f,
                "<closure> λ{}.{}",
                closure.param,
                pretty(&closure.arena, closure.body)
            ),
            Value::Builtin { .. } => write!(f, "<built-in function>"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Closure(_) => write!(f, "<closure>"),
            Value::Builtin { name, .. } => write!(f, "<built-in {}>", name),
        }
    }
}
