//! Type error construction.

use crate::{Ty, TyVar};
use rill_common::Span;
use rill_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use thiserror::Error;

/// The kind of a fatal inference error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeErrorKind {
    /// A referenced name has no binding in the environment.
    #[error("unbound variable \"{0}\"")]
    UnboundVariable(String),

    /// Two resolved types are structurally incompatible.
    #[error("cannot unify `{0}` with `{1}`")]
    Mismatch(Ty, Ty),

    /// The occurs check rejected a self-referential binding.
    #[error("infinite type: `{0}` occurs in `{1}`")]
    InfiniteType(TyVar, Ty),

    /// A core invariant was violated. Never a user error.
    #[error("internal inconsistency: {0}")]
    Internal(String),
}

/// A fatal inference error; the first one aborts the whole pass.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct TypeError {
    pub kind: TypeErrorKind,
    pub span: Span,
}

impl TypeError {
    pub fn new(kind: TypeErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match &self.kind {
            TypeErrorKind::UnboundVariable(name) => Diagnostic::error(
                DiagnosticKind::Type,
                self.span,
                format!("unbound variable \"{}\"", name),
            )
            .with_code(ErrorCode::UnboundVariable)
            .with_label(Label::new(self.span, "not in scope")),

            TypeErrorKind::Mismatch(left, right) => Diagnostic::error(
                DiagnosticKind::Type,
                self.span,
                "mismatched types",
            )
            .with_code(ErrorCode::TypeMismatch)
            .with_label(Label::new(
                self.span,
                format!("cannot unify `{}` with `{}`", left, right),
            )),

            TypeErrorKind::InfiniteType(var, ty) => Diagnostic::error(
                DiagnosticKind::Type,
                self.span,
                "infinite type",
            )
            .with_code(ErrorCode::InfiniteType)
            .with_label(Label::new(
                self.span,
                format!("`{}` would have to contain itself: `{}`", var, ty),
            )),

            TypeErrorKind::Internal(message) => Diagnostic::error(
                DiagnosticKind::Type,
                self.span,
                format!("internal inconsistency: {}", message),
            )
            .with_code(ErrorCode::InternalInconsistency)
            .with_note("this is a bug in the type checker, not in the source program"),
        }
    }
}
