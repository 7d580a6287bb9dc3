//! Persistent type environment.

use crate::Ty;
use std::collections::HashSet;
use std::rc::Rc;

/// A persistent mapping from names to types.
///
/// Extension returns a new handle and never touches the receiver, so
/// sibling branches can keep a shared parent while each extends it
/// independently.
#[derive(Debug, Clone, Default)]
pub struct TypeEnv {
    head: Option<Rc<Binding>>,
}

#[derive(Debug)]
struct Binding {
    name: String,
    ty: Ty,
    parent: Option<Rc<Binding>>,
}

impl TypeEnv {
    /// The empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// An environment with the built-in function signatures.
    pub fn with_builtins() -> Self {
        let binary_int = || Ty::fun(Ty::Int, Ty::fun(Ty::Int, Ty::Int));
        TypeEnv::new()
            .extend("zero", Ty::fun(Ty::Int, Ty::Bool))
            .extend("sin", Ty::fun(Ty::Int, Ty::Int))
            .extend("add", binary_int())
            .extend("sub", binary_int())
            .extend("mul", binary_int())
            .extend("div", binary_int())
    }

    /// Bind `name` to `ty`, returning the extended environment.
    pub fn extend(&self, name: impl Into<String>, ty: Ty) -> TypeEnv {
        TypeEnv {
            head: Some(Rc::new(Binding {
                name: name.into(),
                ty,
                parent: self.head.clone(),
            })),
        }
    }

    /// Look up a name, innermost binding first.
    pub fn lookup(&self, name: &str) -> Option<&Ty> {
        let mut current = self.head.as_deref();
        while let Some(binding) = current {
            if binding.name == name {
                return Some(&binding.ty);
            }
            current = binding.parent.as_deref();
        }
        None
    }

    /// The visible bindings in definition order, shadowed ones skipped.
    pub fn visible_bindings(&self) -> Vec<(&str, &Ty)> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        let mut current = self.head.as_deref();
        while let Some(binding) = current {
            if seen.insert(binding.name.as_str()) {
                out.push((binding.name.as_str(), &binding.ty));
            }
            current = binding.parent.as_deref();
        }

        out.reverse();
        out
    }
}
