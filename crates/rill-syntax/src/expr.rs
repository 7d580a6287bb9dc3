//! Expression AST nodes.
//! 表达式 AST 节点。

use rill_common::Span;

/// A unique identifier for an expression node: its index in the arena.
/// 表达式节点的唯一标识符：节点在 arena 中的索引。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprId(pub u32);

/// Arena holding every expression node of one parse.
/// 保存一次解析产生的所有表达式节点的 arena。
///
/// Nodes are immutable once allocated and are shared by reference
/// across all later passes.
/// 节点一经分配便不可变，供后续所有阶段以引用共享。
#[derive(Debug, Default)]
pub struct ExprArena {
    nodes: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node, assigning it the next arena index.
    /// 分配一个节点，并为其指定下一个 arena 索引。
    pub fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let id = ExprId(self.nodes.len() as u32);
        self.nodes.push(Expr { id, kind, span });
        id
    }

    /// Get a node by id.
    /// 通过 id 获取节点。
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.nodes[id.0 as usize]
    }

    /// Number of allocated nodes.
    /// 已分配节点的数量。
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// An expression.
/// 表达式。
#[derive(Debug, Clone)]
pub struct Expr {
    pub id: ExprId,
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    /// The variable name, if this node is a `Var`.
    /// 如果该节点是 `Var`，返回变量名。
    pub fn as_var(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Var(name) => Some(name),
            _ => None,
        }
    }
}

/// Expression kind.
/// 表达式类型。
///
/// Binder positions (`param` of a lambda, `name` of a let) are `Var`
/// nodes allocated in the same arena, so bound names carry node
/// identities of their own.
/// 绑定位置（lambda 的 `param`、let 的 `name`）是同一 arena 中的
/// `Var` 节点，因此被绑定的名字拥有自己的节点身份。
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// Literal value / 字面量
    Literal(Literal),

    /// Variable reference / 变量引用
    Var(String),

    /// Lambda `\x -> body` / Lambda 表达式
    Lambda { param: ExprId, body: ExprId },

    /// Application `f x` / 函数应用
    Apply { callee: ExprId, arg: ExprId },

    /// Conditional `if c then t else e` / 条件表达式
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },

    /// Binding `let x = v in body` / 绑定表达式
    Let {
        name: ExprId,
        value: ExprId,
        body: ExprId,
    },
}

/// A literal value.
/// 字面量。
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Bool(bool),
    Str(String),
}
