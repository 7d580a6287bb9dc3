//! Built-in functions.

use crate::eval::EvalError;
use crate::Value;
use std::rc::Rc;

/// All built-in functions, curried where they take two arguments.
pub fn builtins() -> Vec<(&'static str, Value)> {
    vec![
        ("zero", unary("zero", |x| Ok(Value::Bool(x == 0)))),
        (
            "sin",
            unary("sin", |x| Ok(Value::Int((x as f64).sin() as i64))),
        ),
        ("add", binary("add", |x, y| Ok(Value::Int(x + y)))),
        ("sub", binary("sub", |x, y| Ok(Value::Int(x - y)))),
        ("mul", binary("mul", |x, y| Ok(Value::Int(x * y)))),
        (
            "div",
            binary("div", |x, y| {
                if y == 0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(Value::Int(x / y))
                }
            }),
        ),
    ]
}

/// A builtin over one integer.
fn unary(
    name: &'static str,
    f: impl Fn(i64) -> Result<Value, EvalError> + 'static,
) -> Value {
    Value::Builtin {
        name,
        func: Rc::new(move |x| f(expect_int(name, &x)?)),
    }
}

/// A curried builtin over two integers: the first application
/// captures the left operand and returns another builtin.
fn binary(
    name: &'static str,
    f: impl Fn(i64, i64) -> Result<Value, EvalError> + Copy + 'static,
) -> Value {
    Value::Builtin {
        name,
        func: Rc::new(move |x| {
            let x = expect_int(name, &x)?;
            Ok(Value::Builtin {
                name,
                func: Rc::new(move |y| f(x, expect_int(name, &y)?)),
            })
        }),
    }
}

fn expect_int(name: &'static str, value: &Value) -> Result<i64, EvalError> {
    match value {
        Value::Int(i) => Ok(*i),
        other => Err(EvalError::TypeError(format!(
            "\"{}\" expects an integer argument, got {}",
            name, other
        ))),
    }
}
