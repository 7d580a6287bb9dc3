//! Type substitutions.

use crate::{Ty, TyVar};
use std::collections::HashMap;
use std::fmt;

/// A composable mapping from type variables to types.
///
/// Values, not state: `apply` and `compose` leave the receiver
/// untouched. The substitution a solved unification produces is
/// idempotent — applying it to its own output changes nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Substitution {
    map: HashMap<TyVar, Ty>,
}

impl Substitution {
    /// The substitution with no bindings.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The substitution with a single binding.
    pub fn singleton(var: TyVar, ty: Ty) -> Self {
        let mut map = HashMap::new();
        map.insert(var, ty);
        Substitution { map }
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, var: TyVar) -> Option<&Ty> {
        self.map.get(&var)
    }

    /// Apply to a type: bound variables are replaced, intrinsics and
    /// unbound variables are left untouched.
    pub fn apply(&self, ty: &Ty) -> Ty {
        match ty {
            Ty::Int | Ty::Bool | Ty::Str => ty.clone(),
            Ty::Var(v) => self.map.get(v).cloned().unwrap_or_else(|| ty.clone()),
            Ty::Fn(arg, ret) => Ty::fun(self.apply(arg), self.apply(ret)),
        }
    }

    /// Compose with a newer substitution.
    ///
    /// The newer substitution is applied to every type in this one's
    /// range first, so chains resolve transitively; then bindings
    /// exclusive to the newer one are merged in. On a key collision
    /// the newer binding wins.
    pub fn compose(&self, newer: &Substitution) -> Substitution {
        let mut map: HashMap<TyVar, Ty> = self
            .map
            .iter()
            .map(|(var, ty)| (*var, newer.apply(ty)))
            .collect();

        for (var, ty) in &newer.map {
            map.insert(*var, ty.clone());
        }

        Substitution { map }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bindings: Vec<_> = self.map.iter().collect();
        bindings.sort_by_key(|(var, _)| var.0);

        for (var, ty) in bindings {
            writeln!(f, "{} :: {}", var, ty)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_leaves_type_untouched() {
        let ty = Ty::fun(Ty::Int, Ty::Var(TyVar(0)));
        assert_eq!(Substitution::empty().apply(&ty), ty);
    }

    #[test]
    fn test_apply_replaces_bound_variable() {
        let subst = Substitution::singleton(TyVar(0), Ty::Int);
        assert_eq!(subst.apply(&Ty::Var(TyVar(0))), Ty::Int);
    }

    #[test]
    fn test_apply_leaves_unbound_variable() {
        let subst = Substitution::singleton(TyVar(0), Ty::Int);
        assert_eq!(subst.apply(&Ty::Var(TyVar(1))), Ty::Var(TyVar(1)));
    }

    #[test]
    fn test_apply_recurses_through_functions() {
        let subst = Substitution::singleton(TyVar(0), Ty::Int);
        let ty = Ty::fun(Ty::Var(TyVar(0)), Ty::fun(Ty::Str, Ty::Var(TyVar(0))));
        assert_eq!(
            subst.apply(&ty),
            Ty::fun(Ty::Int, Ty::fun(Ty::Str, Ty::Int))
        );
    }

    #[test]
    fn test_compose_resolves_chains() {
        // older: t0 -> t1, newer: t1 -> integer
        let older = Substitution::singleton(TyVar(0), Ty::Var(TyVar(1)));
        let newer = Substitution::singleton(TyVar(1), Ty::Int);

        let composed = older.compose(&newer);
        assert_eq!(composed.apply(&Ty::Var(TyVar(0))), Ty::Int);
        assert_eq!(composed.apply(&Ty::Var(TyVar(1))), Ty::Int);
    }

    #[test]
    fn test_compose_newer_wins_on_collision() {
        let older = Substitution::singleton(TyVar(0), Ty::Int);
        let newer = Substitution::singleton(TyVar(0), Ty::Str);

        let composed = older.compose(&newer);
        assert_eq!(composed.apply(&Ty::Var(TyVar(0))), Ty::Str);
    }

    #[test]
    fn test_composed_substitution_is_idempotent() {
        let older = Substitution::singleton(TyVar(0), Ty::Var(TyVar(1)));
        let newer = Substitution::singleton(TyVar(1), Ty::fun(Ty::Int, Ty::Bool));

        let composed = older.compose(&newer);
        let once = composed.apply(&Ty::fun(Ty::Var(TyVar(0)), Ty::Var(TyVar(1))));
        let twice = composed.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_display_sorted_by_id() {
        let subst = Substitution::singleton(TyVar(1), Ty::Bool)
            .compose(&Substitution::singleton(TyVar(0), Ty::Int));
        assert_eq!(subst.to_string(), "t0 :: integer\nt1 :: boolean\n");
    }
}
