//! A language session.
//!
//! Drives top-level items through the full pipeline and keeps the
//! type environment and the value environment in lockstep: a
//! declaration extends both or neither.

use rill_eval::{Environment, EvalError, Evaluator, Value};
use rill_syntax::{ExprArena, Item, ItemKind};
use rill_typeck::{Inference, Trace, Ty, TypeEnv, TypeError};
use std::rc::Rc;

/// The outcome of one successfully processed item.
pub enum Outcome {
    /// A declaration bound `name` at the given type.
    Declared { name: String, ty: Ty },
    /// An expression produced a value of the given type.
    Evaluated { value: Value, ty: Ty, trace: Trace },
}

/// A failure from either half of the pipeline.
pub enum SessionError {
    Type(TypeError),
    Eval(EvalError),
}

impl SessionError {
    /// Render the failure to the terminal.
    pub fn emit(&self, source: &str, filename: &str) {
        match self {
            SessionError::Type(err) => {
                rill_diagnostic::emit(source, filename, &err.to_diagnostic());
            }
            SessionError::Eval(err) => crate::output::error(&err.to_string()),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            SessionError::Type(_) => "type error",
            SessionError::Eval(_) => "evaluation error",
        }
    }
}

/// A session: one inference context and one value environment,
/// threaded across every item.
pub struct Session {
    inference: Inference,
    values: Environment,
}

impl Session {
    pub fn new() -> Self {
        Self {
            inference: Inference::new(TypeEnv::with_builtins()),
            values: Environment::with_builtins(),
        }
    }

    /// The current type environment.
    pub fn type_env(&self) -> &TypeEnv {
        self.inference.env()
    }

    /// Run one item: inference first, evaluation only if it succeeds.
    pub fn run_item(&mut self, arena: &Rc<ExprArena>, item: &Item) -> Result<Outcome, SessionError> {
        match &item.kind {
            ItemKind::Expr(root) => {
                let (ty, trace) = self
                    .inference
                    .infer_with_trace(arena, *root)
                    .map_err(SessionError::Type)?;
                let value = Evaluator::new(Rc::clone(arena))
                    .eval(*root, &self.values)
                    .map_err(SessionError::Eval)?;
                Ok(Outcome::Evaluated { value, ty, trace })
            }

            ItemKind::Decl { name, value } => {
                let ty = self
                    .inference
                    .declare(name, arena, *value)
                    .map_err(SessionError::Type)?;
                let bound = Evaluator::new(Rc::clone(arena))
                    .eval(*value, &self.values)
                    .map_err(SessionError::Eval)?;
                self.values.define(name.clone(), bound);
                Ok(Outcome::Declared {
                    name: name.clone(),
                    ty,
                })
            }
        }
    }
}
