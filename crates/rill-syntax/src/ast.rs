//! Top-level program structure.
//! 程序顶层结构。

use crate::{ExprArena, ExprId};
use rill_common::Span;

/// A parsed program: the node arena plus the top-level items.
/// 解析后的程序：节点 arena 加上顶层项。
#[derive(Debug)]
pub struct Program {
    pub arena: ExprArena,
    pub items: Vec<Item>,
}

/// A top-level item.
/// 顶层项。
#[derive(Debug, Clone)]
pub struct Item {
    pub kind: ItemKind,
    pub span: Span,
}

/// Top-level item kind.
/// 顶层项类型。
#[derive(Debug, Clone)]
pub enum ItemKind {
    /// Declaration `let name = expr` (no `in`) / 声明
    Decl { name: String, value: ExprId },
    /// Bare expression / 普通表达式
    Expr(ExprId),
}
