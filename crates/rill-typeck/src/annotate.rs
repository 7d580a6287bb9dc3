//! The annotator: a fresh type variable for every node and bound name.

use crate::{Ty, TyVar, TypeEnv, TypeError, TypeErrorKind};
use rill_common::Span;
use rill_syntax::{ExprArena, ExprId, ExprKind};

/// The per-pass table mapping each node to its recorded type.
///
/// Keyed by node identity (the arena index), not structural content:
/// two syntactically identical subexpressions get independent entries.
/// Every slot is written at most once, during one annotation pass.
#[derive(Debug)]
pub struct TypeTable {
    slots: Vec<Option<Ty>>,
}

impl TypeTable {
    fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    fn record(&mut self, id: ExprId, ty: Ty) {
        let slot = &mut self.slots[id.0 as usize];
        debug_assert!(slot.is_none(), "node {:?} annotated twice", id);
        *slot = Some(ty);
    }

    /// The recorded type of a node. A miss means the tree was queried
    /// without (or beyond) its annotation pass — a core invariant
    /// violation surfaced as an internal error, never absorbed.
    pub fn get(&self, id: ExprId, span: Span) -> Result<&Ty, TypeError> {
        self.slots
            .get(id.0 as usize)
            .and_then(|slot| slot.as_ref())
            .ok_or_else(|| {
                TypeError::new(
                    TypeErrorKind::Internal(format!("node {} was never annotated", id.0)),
                    span,
                )
            })
    }
}

/// Assigns a fresh type variable to every node and bound name.
///
/// The variable counter is owned by the instance and is never reset:
/// ids grow monotonically across every pass run through the same
/// annotator, which is what lets a REPL session thread one annotator
/// through sequential declarations without id collisions.
#[derive(Debug, Default)]
pub struct Annotator {
    next_var: u32,
}

impl Annotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh type variable.
    fn fresh(&mut self) -> Ty {
        let var = self.next_var;
        self.next_var += 1;
        Ty::Var(TyVar(var))
    }

    /// Annotate the tree under `root`, producing the per-pass table.
    ///
    /// On failure the pass is aborted; the partially filled table is
    /// dropped with it.
    pub fn annotate(
        &mut self,
        arena: &ExprArena,
        root: ExprId,
        env: &TypeEnv,
    ) -> Result<TypeTable, TypeError> {
        let mut table = TypeTable::new(arena.len());
        self.visit(arena, &mut table, root, env)?;
        Ok(table)
    }

    fn visit(
        &mut self,
        arena: &ExprArena,
        table: &mut TypeTable,
        id: ExprId,
        env: &TypeEnv,
    ) -> Result<Ty, TypeError> {
        let expr = arena.get(id);

        let ty = match &expr.kind {
            ExprKind::Literal(_) => self.fresh(),

            // A use-site shares the binder's type directly: no fresh
            // variable here
            ExprKind::Var(name) => match env.lookup(name) {
                Some(ty) => ty.clone(),
                None => {
                    return Err(TypeError::new(
                        TypeErrorKind::UnboundVariable(name.clone()),
                        expr.span,
                    ));
                }
            },

            // The parameter's fresh variable is the one bound in the
            // child environment; the function shape itself is the
            // collector's job
            ExprKind::Lambda { param, body } => {
                let param_ty = self.fresh();
                table.record(*param, param_ty.clone());
                let child = env.extend(binder_name(arena, *param)?, param_ty);
                self.visit(arena, table, *body, &child)?;
                self.fresh()
            }

            ExprKind::Apply { callee, arg } => {
                self.visit(arena, table, *callee, env)?;
                self.visit(arena, table, *arg, env)?;
                self.fresh()
            }

            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.visit(arena, table, *cond, env)?;
                self.visit(arena, table, *then_branch, env)?;
                self.visit(arena, table, *else_branch, env)?;
                self.fresh()
            }

            // The value is visited under the current environment; the
            // name is bound to its own fresh variable, not the value's
            // inferred type
            ExprKind::Let { name, value, body } => {
                self.visit(arena, table, *value, env)?;
                let name_ty = self.fresh();
                table.record(*name, name_ty.clone());
                let child = env.extend(binder_name(arena, *name)?, name_ty);
                self.visit(arena, table, *body, &child)?;
                self.fresh()
            }
        };

        table.record(id, ty.clone());
        Ok(ty)
    }
}

fn binder_name(arena: &ExprArena, id: ExprId) -> Result<String, TypeError> {
    let expr = arena.get(id);
    expr.as_var().map(str::to_owned).ok_or_else(|| {
        TypeError::new(
            TypeErrorKind::Internal("binder position holds a non-variable node".to_string()),
            expr.span,
        )
    })
}
