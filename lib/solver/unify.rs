/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The call unifier: seeds a substitution map from the receiver type, then
//! walks declaration-ordered (parameter, argument) pairs through the matcher
//! to accumulate the rest. Argument-to-parameter binding itself (positional
//! vs keyword vs vararg resolution) is the host's job; this module receives
//! the pairing already built.

use dupe::Dupe;
use tracing::debug;

use crate::context::EvalContext;
use crate::context::TypeProvider;
use crate::generics::collect_generics_of;
use crate::registry::BuiltinCache;
use crate::registry::ClassRegistry;
use crate::solver::subset::match_types;
use crate::substitute::Substitutions;
use crate::types::callable::Param;
use crate::types::callable::ParamKind;
use crate::types::class::ClassId;
use crate::types::types::Type;
use crate::types::union::Union;

fn flatten_union(ty: &Type, out: &mut Vec<Type>) {
    match ty {
        Type::Union(u) => {
            for member in u.members.iter() {
                flatten_union(member, out);
            }
        }
        other => out.push(other.clone()),
    }
}

fn class_id_of(ty: &Type) -> Option<ClassId> {
    match ty {
        Type::Class(c) => Some(c.class.dupe()),
        Type::Tuple(t) => Some(t.class.dupe()),
        Type::Collection(c) => Some(c.class.class.dupe()),
        _ => None,
    }
}

/// Seed a substitution map from a receiver type: every free variable the
/// receiver itself carries is pre-bound to itself (so later matches can
/// discover what it was resolved to), then every registered `TypeProvider`
/// gets a chance to contribute a generic view and default substitutions for
/// each class alternative the receiver enumerates (a union is flattened
/// first).
pub fn unify_receiver(
    receiver: &Type,
    registry: &dyn ClassRegistry,
    builtins: &dyn BuiltinCache,
    providers: &[&dyn TypeProvider],
) -> Substitutions {
    let mut sigma = Substitutions::new();
    for var in collect_generics_of(receiver) {
        sigma.insert(var.dupe(), var.to_type());
    }

    let mut alternatives = Vec::new();
    flatten_union(receiver, &mut alternatives);

    for alt in &alternatives {
        let Some(class) = class_id_of(alt) else {
            continue;
        };
        for provider in providers {
            if let Some(generic_view) = provider.generic_type_of(&class) {
                match_types(&generic_view, alt, registry, builtins, &mut sigma, true);
            }
            for (var, ty) in provider.generic_substitutions(&class) {
                if !sigma.contains_key(&var) {
                    sigma.insert(var, ty);
                }
            }
        }
    }

    sigma
}

fn union_of(types: Vec<Type>) -> Type {
    let mut iter = types.into_iter();
    let Some(first) = iter.next() else {
        return Type::Unknown;
    };
    let rest: Vec<Type> = iter.collect();
    if rest.is_empty() {
        return first;
    }
    let mut members = vec![first];
    members.extend(rest);
    match vec1::Vec1::try_from_vec(members) {
        Ok(members) => Union::new(members).to_type(),
        Err(_) => Type::Unknown,
    }
}

/// `unifyGenericCall`: `None` means the call site is not compatible with
/// this signature (the caller may retry with another overload); `Some`
/// carries the accumulated substitutions, which may still bind variables to
/// `Unknown` where the arguments underdetermined them.
pub fn unify_generic_call<C: EvalContext>(
    receiver: &Type,
    pairs: &[(Param, C::Expr)],
    context: &C,
    registry: &dyn ClassRegistry,
    builtins: &dyn BuiltinCache,
    providers: &[&dyn TypeProvider],
) -> Option<Substitutions> {
    debug!(%receiver, arity = pairs.len(), "unify_generic_call");
    let mut sigma = unify_receiver(receiver, registry, builtins, providers);

    let mut positional_container: Option<(&Param, Vec<Type>)> = None;
    let mut keyword_container: Option<(&Param, Vec<Type>)> = None;

    for (param, arg_expr) in pairs {
        let arg_ty = context.type_of_expr(arg_expr);
        match param.kind {
            ParamKind::VarArg => {
                positional_container
                    .get_or_insert_with(|| (param, Vec::new()))
                    .1
                    .push(arg_ty);
            }
            ParamKind::KwArg => {
                keyword_container
                    .get_or_insert_with(|| (param, Vec::new()))
                    .1
                    .push(arg_ty);
            }
            ParamKind::Normal => {
                let expected = param.ty.clone().unwrap_or(Type::Unknown);
                if !match_types(&expected, &arg_ty, registry, builtins, &mut sigma, true) {
                    return None;
                }
            }
        }
    }

    if let Some((param, collected)) = positional_container {
        if let Some(expected) = &param.ty {
            let actual = union_of(collected);
            if !match_types(expected, &actual, registry, builtins, &mut sigma, true) {
                return None;
            }
        }
    }
    if let Some((param, collected)) = keyword_container {
        if let Some(expected) = &param.ty {
            let actual = union_of(collected);
            if !match_types(expected, &actual, registry, builtins, &mut sigma, true) {
                return None;
            }
        }
    }

    Some(sigma)
}

#[cfg(test)]
mod tests {
    use crate::context::MemberLookup;

    use super::*;
    use crate::registry::memory::MemoryClassRegistry;
    use crate::types::class::ClassId;
    use crate::types::class::ClassType;
    use crate::types::collection::Collection;
    use crate::types::type_var::TypeVar;
    use crate::types::type_var::TypeVarId;

    struct FakeContext {
        types: std::collections::HashMap<&'static str, Type>,
    }

    impl EvalContext for FakeContext {
        type Expr = &'static str;

        fn type_of_expr(&self, expr: &Self::Expr) -> Type {
            self.types.get(expr).cloned().unwrap_or(Type::Unknown)
        }

        fn type_of_class(&self, class: &ClassId) -> Type {
            ClassType::of_class(class.dupe()).to_type()
        }

        fn resolve_member(&self, _of: &Type, _name: &str) -> MemberLookup {
            MemberLookup::Unresolved
        }
    }

    fn instance(class: &ClassId) -> Type {
        ClassType::instance(class.dupe()).to_type()
    }

    #[test]
    fn same_variable_bound_twice_to_different_types_fails() {
        let mut reg = MemoryClassRegistry::new();
        let int_c = ClassId::new("int");
        let str_c = ClassId::new("str");
        reg.declare(int_c.dupe());
        reg.declare(str_c.dupe());

        let t = TypeVar::new(TypeVarId::new("T", None), false);
        let params = vec![
            (
                Param::positional("x", Some(t.to_type())),
                "one",
            ),
            (
                Param::positional("y", Some(t.to_type())),
                "a",
            ),
        ];
        let ctx = FakeContext {
            types: std::collections::HashMap::from([
                ("one", instance(&int_c)),
                ("a", instance(&str_c)),
            ]),
        };
        let result = unify_generic_call(&Type::Unknown, &params, &ctx, &reg, &reg, &[]);
        assert!(result.is_none());
    }

    #[test]
    fn single_arg_unifies_and_substitutes_into_return_type() {
        let mut reg = MemoryClassRegistry::new();
        let int_c = ClassId::new("int");
        let list_c = ClassId::new("list");
        reg.declare(int_c.dupe());
        reg.declare(list_c.dupe());

        let t = TypeVar::new(TypeVarId::new("T", None), false);
        let params = vec![(Param::positional("x", Some(t.to_type())), "one")];
        let ctx = FakeContext {
            types: std::collections::HashMap::from([("one", instance(&int_c))]),
        };
        let sigma = unify_generic_call(&Type::Unknown, &params, &ctx, &reg, &reg, &[]).unwrap();

        let list_of_t =
            Collection::new(ClassType::instance(list_c.dupe()), vec![t.to_type()]).to_type();
        let result = crate::substitute::substitute(&list_of_t, &sigma);
        let expected =
            Collection::new(ClassType::instance(list_c), vec![instance(&int_c)]).to_type();
        assert_eq!(result, expected);
    }
}
