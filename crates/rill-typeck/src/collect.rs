//! The constraint collector.

use crate::{Ty, TypeError, TypeTable};
use rill_common::Span;
use rill_syntax::{ExprArena, ExprId, ExprKind, Literal};
use std::fmt;

/// An equality assertion between two types.
///
/// Carries the span of the node whose typing rule produced it, so a
/// failing unification step can point back at the source. The span
/// plays no part in solving.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    pub left: Ty,
    pub right: Ty,
    pub span: Span,
}

impl Equation {
    pub fn new(left: Ty, right: Ty, span: Span) -> Self {
        Self { left, right, span }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ≡ {}", self.left, self.right)
    }
}

/// Walks an annotated tree, emitting one equation per typing rule.
///
/// Requires the tree to already be annotated; a table miss is a fatal
/// internal error, not a user error.
pub struct Collector<'a> {
    arena: &'a ExprArena,
    table: &'a TypeTable,
    equations: Vec<Equation>,
}

impl<'a> Collector<'a> {
    pub fn new(arena: &'a ExprArena, table: &'a TypeTable) -> Self {
        Self {
            arena,
            table,
            equations: Vec::new(),
        }
    }

    /// Collect the equations for the tree under `root`, in visit order.
    pub fn collect(mut self, root: ExprId) -> Result<Vec<Equation>, TypeError> {
        self.visit(root)?;
        Ok(self.equations)
    }

    fn visit(&mut self, id: ExprId) -> Result<(), TypeError> {
        let expr = self.arena.get(id);
        let span = expr.span;

        match &expr.kind {
            ExprKind::Literal(lit) => {
                let intrinsic = match lit {
                    Literal::Int(_) => Ty::Int,
                    Literal::Bool(_) => Ty::Bool,
                    Literal::Str(_) => Ty::Str,
                };
                let node = self.node_ty(id)?;
                self.equations.push(Equation::new(node, intrinsic, span));
            }

            // The annotator already shares the binder's type with each
            // use-site; nothing to equate
            ExprKind::Var(_) => {}

            ExprKind::Lambda { param, body } => {
                self.visit(*body)?;
                let node = self.node_ty(id)?;
                let shape = Ty::fun(self.node_ty(*param)?, self.node_ty(*body)?);
                self.equations.push(Equation::new(node, shape, span));
            }

            ExprKind::Apply { callee, arg } => {
                self.visit(*callee)?;
                self.visit(*arg)?;
                let callee_ty = self.node_ty(*callee)?;
                let shape = Ty::fun(self.node_ty(*arg)?, self.node_ty(id)?);
                self.equations.push(Equation::new(callee_ty, shape, span));
            }

            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.visit(*cond)?;
                self.visit(*then_branch)?;
                self.visit(*else_branch)?;

                let cond_span = self.arena.get(*cond).span;
                self.equations
                    .push(Equation::new(self.node_ty(*cond)?, Ty::Bool, cond_span));

                let node = self.node_ty(id)?;
                self.equations
                    .push(Equation::new(node.clone(), self.node_ty(*then_branch)?, span));
                self.equations
                    .push(Equation::new(node, self.node_ty(*else_branch)?, span));
            }

            ExprKind::Let { name, value, body } => {
                self.visit(*value)?;
                self.visit(*body)?;
                self.equations
                    .push(Equation::new(self.node_ty(id)?, self.node_ty(*body)?, span));
                self.equations
                    .push(Equation::new(self.node_ty(*name)?, self.node_ty(*value)?, span));
            }
        }

        Ok(())
    }

    fn node_ty(&self, id: ExprId) -> Result<Ty, TypeError> {
        self.table
            .get(id, self.arena.get(id).span)
            .map(Ty::clone)
    }
}
