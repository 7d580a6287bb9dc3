//! Type inference for Rill.
//! Rill 类型推断。
//!
//! This crate implements constraint-based Hindley-Milner style
//! inference for the Rill expression tree: every node and bound name
//! is annotated with a fresh type variable, one equality constraint is
//! emitted per typing rule, and the constraints are solved by
//! unification with an occurs check. The first failure aborts the
//! whole pass; no partial result is ever returned.
//! 本 crate 为 Rill 表达式树实现基于约束的 Hindley-Milner 风格类型
//! 推断：为每个节点和被绑定的名字标注新鲜类型变量，按类型规则逐节点
//! 生成等式约束，再通过带 occurs check 的合一求解。首个错误即中止
//! 整个推断过程，绝不返回部分结果。

mod annotate;
mod collect;
mod env;
mod errors;
mod subst;
mod ty;
mod unify;

pub use annotate::{Annotator, TypeTable};
pub use collect::{Collector, Equation};
pub use env::TypeEnv;
pub use errors::{TypeError, TypeErrorKind};
pub use subst::Substitution;
pub use ty::{Ty, TyVar};
pub use unify::unify;

use rill_syntax::{ExprArena, ExprId};

/// Infer the type of a single expression under `env`.
pub fn infer_expr(arena: &ExprArena, root: ExprId, env: &TypeEnv) -> Result<Ty, TypeError> {
    Inference::new(env.clone()).infer(arena, root)
}

/// Everything one pass produced besides the final type, for display.
#[derive(Debug)]
pub struct Trace {
    pub equations: Vec<Equation>,
    pub substitution: Substitution,
}

/// An inference session.
///
/// Holds the type environment threaded across sequential declarations
/// together with the annotator whose counter guarantees that fresh
/// variable ids never collide between them. Use a fresh session per
/// independent top-level inference.
pub struct Inference {
    annotator: Annotator,
    env: TypeEnv,
}

impl Inference {
    pub fn new(env: TypeEnv) -> Self {
        Self {
            annotator: Annotator::new(),
            env,
        }
    }

    /// The current environment.
    pub fn env(&self) -> &TypeEnv {
        &self.env
    }

    /// Run one full pass (annotate, collect, unify, apply) and report
    /// the resolved type of `root`.
    pub fn infer(&mut self, arena: &ExprArena, root: ExprId) -> Result<Ty, TypeError> {
        self.infer_with_trace(arena, root).map(|(ty, _)| ty)
    }

    /// Like [`Inference::infer`], additionally returning the collected
    /// equations and the solving substitution.
    pub fn infer_with_trace(
        &mut self,
        arena: &ExprArena,
        root: ExprId,
    ) -> Result<(Ty, Trace), TypeError> {
        let table = self.annotator.annotate(arena, root, &self.env)?;
        let equations = Collector::new(arena, &table).collect(root)?;
        let substitution = unify(&equations)?;
        let root_ty = table.get(root, arena.get(root).span)?;
        let ty = substitution.apply(root_ty);
        Ok((
            ty,
            Trace {
                equations,
                substitution,
            },
        ))
    }

    /// Run full inference for `root`, then bind `name` to the resolved
    /// type for subsequent inferences.
    pub fn declare(&mut self, name: &str, arena: &ExprArena, root: ExprId) -> Result<Ty, TypeError> {
        let ty = self.infer(arena, root)?;
        self.env = self.env.extend(name, ty.clone());
        Ok(ty)
    }
}
