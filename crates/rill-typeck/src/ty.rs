//! The Rill type model.

use std::fmt;

/// A type variable, identified by the id its annotator drew for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TyVar(pub u32);

impl fmt::Display for TyVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// A type.
///
/// Equality is structural for intrinsics and functions, and id
/// equality for type variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ty {
    /// The `integer` intrinsic
    Int,
    /// The `boolean` intrinsic
    Bool,
    /// The `string` intrinsic
    Str,
    /// A type variable awaiting resolution
    Var(TyVar),
    /// A function type, one argument to one result
    Fn(Box<Ty>, Box<Ty>),
}

impl Ty {
    /// Build a function type.
    pub fn fun(arg: Ty, ret: Ty) -> Ty {
        Ty::Fn(Box::new(arg), Box::new(ret))
    }

    /// Occurs check: does `var` appear anywhere in this type?
    pub fn contains(&self, var: TyVar) -> bool {
        match self {
            Ty::Int | Ty::Bool | Ty::Str => false,
            Ty::Var(v) => *v == var,
            Ty::Fn(arg, ret) => arg.contains(var) || ret.contains(var),
        }
    }

    /// Replace every occurrence of `var` with `replacement`.
    pub fn substitute(&self, var: TyVar, replacement: &Ty) -> Ty {
        match self {
            Ty::Int | Ty::Bool | Ty::Str => self.clone(),
            Ty::Var(v) => {
                if *v == var {
                    replacement.clone()
                } else {
                    self.clone()
                }
            }
            Ty::Fn(arg, ret) => Ty::fun(
                arg.substitute(var, replacement),
                ret.substitute(var, replacement),
            ),
        }
    }

    /// Does any type variable remain reachable in this type?
    pub fn has_vars(&self) -> bool {
        match self {
            Ty::Int | Ty::Bool | Ty::Str => false,
            Ty::Var(_) => true,
            Ty::Fn(arg, ret) => arg.has_vars() || ret.has_vars(),
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Int => write!(f, "integer"),
            Ty::Bool => write!(f, "boolean"),
            Ty::Str => write!(f, "string"),
            Ty::Var(v) => write!(f, "{}", v),
            Ty::Fn(arg, ret) => {
                // A function-typed argument needs parentheses:
                // `(a -> b) -> c` is not `a -> b -> c`
                if matches!(**arg, Ty::Fn(_, _)) {
                    write!(f, "({}) -> {}", arg, ret)
                } else {
                    write!(f, "{} -> {}", arg, ret)
                }
            }
        }
    }
}
