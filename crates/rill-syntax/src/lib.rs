//! Abstract syntax tree for Rill.
//! Rill 抽象语法树。
//!
//! Expressions are allocated in an [`ExprArena`]; the arena index
//! ([`ExprId`]) assigned at construction is the node identity that
//! later passes key their per-node tables by.
//! 表达式分配在 [`ExprArena`] 中；构造时分配的索引（[`ExprId`]）
//! 就是节点身份，后续的分析阶段以它作为查表键。

mod ast;
mod expr;
mod pretty;

pub use ast::{Item, ItemKind, Program};
pub use expr::{Expr, ExprArena, ExprId, ExprKind, Literal};
pub use pretty::pretty;
