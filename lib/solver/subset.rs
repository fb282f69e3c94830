/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The matcher: `match_types` decides whether a value of the `actual` type
//! can be used where `expected` is required, threading a substitution map
//! through generic variable occurrences along the way.
//!
//! The cascade below is precedence-ordered - earlier rules pre-empt later
//! ones - and the comments keep the rule numbering used while designing it,
//! so the control flow can be checked step by step against the property
//! tests in `tests/`.

use dupe::Dupe;
use tracing::trace;

use crate::numeric;
use crate::predicates::is_callable;
use crate::predicates::is_unknown;
use crate::registry::BuiltinCache;
use crate::registry::ClassRegistry;
use crate::substitute::Substitutions;
use crate::types::class::ClassId;
use crate::types::class::ClassType;
use crate::types::tuple::Tuple;
use crate::types::tuple::TupleShape;
use crate::types::types::Type;
use crate::types::union::Union;

/// `matchClasses(A, B)`: is a value of class `actual` acceptable where class
/// `expected` is required, ignoring generic parameters and definition flags
/// (those are handled by the caller)?
fn match_classes(
    registry: &dyn ClassRegistry,
    builtins: &dyn BuiltinCache,
    expected: &ClassId,
    actual: &ClassId,
) -> bool {
    if registry.is_subclass_of(actual, expected) {
        return true;
    }
    if registry.is_abc_subclass_of(actual, expected) {
        return true;
    }
    if *actual == builtins.str_class() && *expected == builtins.unicode_class() {
        return true;
    }
    if registry.has_unresolved_ancestors(actual) {
        return true;
    }
    match (registry.name(expected), registry.name(actual)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Entry point. `recursive` guards the one-step re-entry the generic-variable
/// rule performs when a variable is already bound; callers always start with
/// `recursive = true`.
pub fn match_types(
    expected: &Type,
    actual: &Type,
    registry: &dyn ClassRegistry,
    builtins: &dyn BuiltinCache,
    sigma: &mut Substitutions,
    recursive: bool,
) -> bool {
    trace!(%expected, %actual, recursive, "match_types");

    // 1. Top types.
    if let Type::Class(ec) = expected {
        if ec.class == builtins.object_class() {
            return true;
        }
        if ec.class == builtins.type_class() && actual.definition_flag() == Some(true) {
            return true;
        }
    }

    // 2. Class-vs-instance mismatch.
    if let (Some(expected_flag), Some(actual_flag)) =
        (expected.definition_flag(), actual.definition_flag())
    {
        if expected_flag != actual_flag {
            let both_forms_ok = matches!(expected, Type::TypeVar(v) if v.accepts_both_forms());
            if !both_forms_ok {
                return false;
            }
        }
    }

    // 3. String-family widening.
    if let Type::Class(ac) = actual {
        if ac.class == builtins.basestring_class() {
            let str_or_unicode = Union::new(vec1::vec1![
                ClassType::new(builtins.str_class(), ac.is_class).to_type(),
                ClassType::new(builtins.unicode_class(), ac.is_class).to_type(),
            ])
            .to_type();
            return match_types(expected, &str_or_unicode, registry, builtins, sigma, recursive);
        }
    }

    // 4. Generic variable on the expected side.
    if let Type::TypeVar(v) = expected {
        let raw_bound = v.bound().cloned().unwrap_or(Type::Unknown);
        let bound = if v.is_class() {
            raw_bound.to_class_form()
        } else {
            raw_bound
        };
        if !match_types(&bound, actual, registry, builtins, sigma, recursive) {
            return false;
        }
        return match sigma.get(v).cloned() {
            Some(existing) => {
                if &existing == actual {
                    true
                } else if recursive {
                    match_types(&existing, actual, registry, builtins, sigma, false)
                } else {
                    false
                }
            }
            None => {
                if !is_unknown(actual, true) {
                    sigma.insert(v.dupe(), actual.clone());
                } else if v.bound().is_some() {
                    sigma.insert(v.dupe(), bound);
                }
                true
            }
        };
    }

    // 5. Either side unknown.
    if is_unknown(expected, true) || is_unknown(actual, true) {
        return true;
    }

    // 6. Actual is a union.
    if let Type::Union(u) = actual {
        if let Type::Tuple(et) = expected {
            if let TupleShape::Fixed(expected_elts) = &et.shape {
                if let Some(widened) = widen_tuple_union(et.class.dupe(), expected_elts, u) {
                    // `widened` is a fixed tuple, built once from `actual`'s
                    // members - compare it directly against `expected` via the
                    // tuple-vs-tuple arm so this terminates there instead of
                    // re-entering this rule with the same `actual` union.
                    return match_class_shaped(expected, &widened, registry, builtins, sigma, recursive)
                        .unwrap_or(false);
                }
            }
        }
        return u
            .members
            .iter()
            .all(|member| match_types(expected, member, registry, builtins, sigma, recursive));
    }

    // 7. Expected is a union: concrete members first, generic variables last.
    if let Type::Union(u) = expected {
        let mut members: Vec<&Type> = u.members.iter().collect();
        members.sort_by_key(|m| matches!(m, Type::TypeVar(_)));
        return members
            .into_iter()
            .any(|member| match_types(member, actual, registry, builtins, sigma, recursive));
    }

    // 8. Both sides are class-shaped types.
    if let Some(result) = match_class_shaped(expected, actual, registry, builtins, sigma, recursive)
    {
        return result;
    }

    // 9. Callable acceptance: a function/closure matches any expected class
    // named "callable".
    if let (Type::Class(ec), Type::Function(_)) = (expected, actual) {
        if registry.name(&ec.class) == Some("callable") {
            return true;
        }
    }

    // 10. Structural types.
    if let Some(result) = match_structural(expected, actual, registry) {
        return result;
    }

    // 11. Callable x callable.
    if let (Type::Callable(ec), Type::Callable(ac)) = (expected, actual) {
        if is_callable(expected).is_yes() && is_callable(actual).is_yes() {
            return match_callables(ec, ac, registry, builtins, sigma);
        }
    }

    // 12. Numeric promotion.
    if let (Type::Class(ec), Type::Class(ac)) = (expected, actual) {
        if let (Some(en), Some(an)) = (registry.name(&ec.class), registry.name(&ac.class)) {
            if en != an && numeric::promotes(en, an) {
                return true;
            }
        }
    }

    // 13. Otherwise.
    false
}

/// Rule 6's special tuple widening: if `expected` is a fixed-arity tuple of
/// `N` elements and every member of the actual union is itself a fixed-arity
/// tuple of exactly `N` elements, build a new expected tuple whose `i`th
/// element is the union of the `i`th elements across all members.
fn widen_tuple_union(class: ClassId, expected_elts: &[Type], actual_union: &Union) -> Option<Type> {
    let n = expected_elts.len();
    let member_elements: Vec<&[Type]> = actual_union
        .members
        .iter()
        .map(|m| match m {
            Type::Tuple(t) => t.fixed_elements().filter(|e| e.len() == n),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    let widened: Vec<Type> = (0..n)
        .map(|i| {
            let column: Vec<Type> = member_elements.iter().map(|elts| elts[i].clone()).collect();
            match vec1::Vec1::try_from_vec(column) {
                Ok(members) => Union::new(members).to_type(),
                Err(_) => Type::Unknown,
            }
        })
        .collect();
    Some(Type::Tuple(Box::new(Tuple::fixed(class, widened))))
}

/// Rule 8: both sides are class-shaped (`Class`, `Tuple`, or `Collection`).
/// Returns `None` when the shapes don't line up as class-vs-class at all, so
/// the caller falls through to the later rules.
fn match_class_shaped(
    expected: &Type,
    actual: &Type,
    registry: &dyn ClassRegistry,
    builtins: &dyn BuiltinCache,
    sigma: &mut Substitutions,
    recursive: bool,
) -> Option<bool> {
    match (expected, actual) {
        (Type::Tuple(et), Type::Tuple(at)) => Some(match (&et.shape, &at.shape) {
            (TupleShape::Fixed(e), TupleShape::Fixed(a)) => {
                e.len() == a.len()
                    && e.iter()
                        .zip(a.iter())
                        .all(|(e, a)| match_types(e, a, registry, builtins, sigma, recursive))
            }
            (TupleShape::Homogeneous(e), TupleShape::Fixed(a)) => a
                .iter()
                .all(|a| match_types(e, a, registry, builtins, sigma, recursive)),
            (TupleShape::Fixed(_), TupleShape::Homogeneous(_)) => false,
            (TupleShape::Homogeneous(e), TupleShape::Homogeneous(a)) => {
                match_types(e, a, registry, builtins, sigma, recursive)
            }
        }),
        (Type::Collection(ec), Type::Tuple(at)) => {
            if !match_classes(registry, builtins, &ec.class.class, &at.class) {
                return Some(false);
            }
            let expected_elem = ec.iterated_element().cloned().unwrap_or(Type::Unknown);
            let actual_elem = match &at.shape {
                TupleShape::Homogeneous(e) => (**e).clone(),
                TupleShape::Fixed(elts) => match vec1::Vec1::try_from_vec(elts.clone()) {
                    Ok(elts) => Union::new(elts).to_type(),
                    Err(_) => Type::Unknown,
                },
            };
            Some(match_types(
                &expected_elem,
                &actual_elem,
                registry,
                builtins,
                sigma,
                recursive,
            ))
        }
        (Type::Collection(ec), Type::Collection(ac)) => {
            if !match_classes(registry, builtins, &ec.class.class, &ac.class.class) {
                return Some(false);
            }
            Some(ec.args.iter().enumerate().all(|(i, e)| {
                let a = ac.arg(i).cloned().unwrap_or(Type::Unknown);
                match_types(e, &a, registry, builtins, sigma, recursive)
            }))
        }
        (Type::Collection(ec), Type::Class(ac)) => {
            if !match_classes(registry, builtins, &ec.class.class, &ac.class) {
                return Some(false);
            }
            Some(
                ec.args
                    .iter()
                    .all(|e| match_types(e, &Type::Unknown, registry, builtins, sigma, recursive)),
            )
        }
        (Type::Class(ec), Type::Class(ac)) => {
            if match_classes(registry, builtins, &ec.class, &ac.class) {
                Some(true)
            } else if registry.name(&ec.class) == Some("callable") && ac.is_class {
                Some(true)
            } else if expected == actual {
                Some(true)
            } else {
                None
            }
        }
        _ if expected == actual => Some(true),
        _ => None,
    }
}

/// Rule 10: structural (duck) typing.
fn match_structural(expected: &Type, actual: &Type, registry: &dyn ClassRegistry) -> Option<bool> {
    match (expected, actual) {
        (_, Type::Structural(a)) if a.from_usage => Some(true),
        (Type::Structural(e), Type::Structural(a)) => {
            if e.from_usage {
                Some(true)
            } else {
                Some(e.is_subset_of_names(&a.attrs))
            }
        }
        (Type::Structural(e), Type::Class(ac)) => {
            if registry.has_dynamic_getattr(&ac.class) {
                Some(true)
            } else {
                let members = registry.member_names(&ac.class, true);
                Some(e.is_subset_of_names(&members))
            }
        }
        (Type::Class(ec), Type::Structural(a)) => {
            let members = registry.member_names(&ec.class, true);
            Some(a.is_subset_of_names(&members))
        }
        _ => None,
    }
}

/// Rule 11: callable x callable. Positional parameter types up to the
/// shorter signature compare covariantly (a known-unsound but intentional
/// choice - see the matcher's module docs); keyword/star parameters are left
/// to the call unifier.
fn match_callables(
    expected: &crate::types::callable::Callable,
    actual: &crate::types::callable::Callable,
    registry: &dyn ClassRegistry,
    builtins: &dyn BuiltinCache,
    sigma: &mut Substitutions,
) -> bool {
    if let (Some(e_params), Some(a_params)) = (&expected.params, &actual.params) {
        let n = e_params.len().min(a_params.len());
        for (e, a) in e_params.iter().zip(a_params.iter()).take(n) {
            if let (Some(e_ty), Some(a_ty)) = (&e.ty, &a.ty) {
                if !match_types(e_ty, a_ty, registry, builtins, sigma, true) {
                    return false;
                }
            }
        }
    }
    match (&expected.ret, &actual.ret) {
        (Some(e_ret), Some(a_ret)) => match_types(e_ret, a_ret, registry, builtins, sigma, true),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use dupe::Dupe;

    use super::*;
    use crate::registry::memory::MemoryClassRegistry;
    use crate::types::callable::Callable;
    use crate::types::callable::Param;
    use crate::types::class::ClassId;
    use crate::types::class::ClassType;
    use crate::types::collection::Collection;
    use crate::types::structural::Structural;
    use crate::types::type_var::TypeVar;
    use crate::types::type_var::TypeVarId;

    fn class(registry: &mut MemoryClassRegistry, name: &str) -> ClassId {
        let id = ClassId::new(name);
        registry.declare(id.dupe());
        id
    }

    fn instance(class: &ClassId) -> Type {
        ClassType::instance(class.dupe()).to_type()
    }

    fn match_top(expected: &Type, actual: &Type, registry: &MemoryClassRegistry) -> bool {
        let mut sigma = Substitutions::new();
        match_types(expected, actual, registry, registry, &mut sigma, true)
    }

    #[test]
    fn object_is_top() {
        let mut reg = MemoryClassRegistry::new();
        let foo = class(&mut reg, "Foo");
        assert!(match_top(&instance(&reg.object_class_id()), &instance(&foo), &reg));
    }

    #[test]
    fn unknown_absorbs_both_sides() {
        use crate::registry::BuiltinCache;
        let reg = MemoryClassRegistry::new();
        assert!(match_top(&Type::Unknown, &instance(&reg.str_class()), &reg));
        assert!(match_top(&instance(&reg.str_class()), &Type::Unknown, &reg));
    }

    #[test]
    fn list_of_bool_matches_list_of_int() {
        let mut reg = MemoryClassRegistry::new();
        let list = class(&mut reg, "list");
        let int_c = class(&mut reg, "int");
        let bool_c = class(&mut reg, "bool");
        let expected = Collection::new(ClassType::instance(list.dupe()), vec![instance(&int_c)])
            .to_type();
        let actual =
            Collection::new(ClassType::instance(list), vec![instance(&bool_c)]).to_type();
        assert!(match_top(&expected, &actual, &reg));
    }

    #[test]
    fn list_of_int_matches_fixed_tuple_of_int() {
        let mut reg = MemoryClassRegistry::new();
        let list = class(&mut reg, "list");
        let tuple_class = class(&mut reg, "tuple");
        let int_c = class(&mut reg, "int");
        let expected =
            Collection::new(ClassType::instance(list), vec![instance(&int_c)]).to_type();
        let actual = Tuple::fixed(
            tuple_class,
            vec![instance(&int_c), instance(&int_c), instance(&int_c)],
        )
        .to_type();
        assert!(match_top(&expected, &actual, &reg));
    }

    #[test]
    fn fixed_tuple_arity_mismatch_fails() {
        let mut reg = MemoryClassRegistry::new();
        let tuple_class = class(&mut reg, "tuple");
        let int_c = class(&mut reg, "int");
        let str_c = class(&mut reg, "str");
        let expected =
            Tuple::fixed(tuple_class.dupe(), vec![instance(&int_c), instance(&str_c)]).to_type();
        let actual = Tuple::fixed(
            tuple_class,
            vec![instance(&int_c), instance(&str_c), instance(&int_c)],
        )
        .to_type();
        assert!(!match_top(&expected, &actual, &reg));
    }

    #[test]
    fn fixed_expected_vs_homogeneous_actual_fails() {
        let mut reg = MemoryClassRegistry::new();
        let tuple_class = class(&mut reg, "tuple");
        let int_c = class(&mut reg, "int");
        let str_c = class(&mut reg, "str");
        let expected =
            Tuple::fixed(tuple_class.dupe(), vec![instance(&int_c), instance(&str_c)]).to_type();
        let actual = Tuple::homogeneous(tuple_class, instance(&int_c)).to_type();
        assert!(!match_top(&expected, &actual, &reg));
    }

    #[test]
    fn generic_variable_binds_then_checks_consistency() {
        let mut reg = MemoryClassRegistry::new();
        let int_c = class(&mut reg, "int");
        let str_c = class(&mut reg, "str");
        let v = TypeVar::new(TypeVarId::new("T", None), false);
        let mut sigma = Substitutions::new();
        assert!(match_types(
            &v.to_type(),
            &instance(&int_c),
            &reg,
            &reg,
            &mut sigma,
            true
        ));
        assert_eq!(sigma.get(&v), Some(&instance(&int_c)));
        assert!(!match_types(
            &v.to_type(),
            &instance(&str_c),
            &reg,
            &reg,
            &mut sigma,
            true
        ));
    }

    #[test]
    fn declared_structural_requires_attribute_subset() {
        let mut reg = MemoryClassRegistry::new();
        let c = class(&mut reg, "C");
        reg.add_member(&c, "foo");
        reg.add_member(&c, "bar");
        reg.add_member(&c, "baz");
        let expected = Structural::declared(["foo", "bar"]).to_type();
        assert!(match_top(&expected, &instance(&c), &reg));

        let mut reg2 = MemoryClassRegistry::new();
        let c2 = class(&mut reg2, "C");
        reg2.add_member(&c2, "foo");
        let expected2 = Structural::declared(["foo", "bar"]).to_type();
        assert!(!match_top(&expected2, &instance(&c2), &reg2));
    }

    #[test]
    fn numeric_tower_promotes_upward_only() {
        let mut reg = MemoryClassRegistry::new();
        let bool_c = class(&mut reg, "bool");
        let int_c = class(&mut reg, "int");
        assert!(match_top(&instance(&int_c), &instance(&bool_c), &reg));
        assert!(!match_top(&instance(&bool_c), &instance(&int_c), &reg));
    }

    #[test]
    fn function_matches_expected_named_callable() {
        let mut reg = MemoryClassRegistry::new();
        let callable_c = class(&mut reg, "callable");
        let f = crate::types::function::FunctionRef::new("f");
        assert!(match_top(&instance(&callable_c), &f.to_type(), &reg));
    }

    #[test]
    fn callable_vs_callable_checks_params_and_return() {
        let mut reg = MemoryClassRegistry::new();
        let int_c = class(&mut reg, "int");
        let bool_c = class(&mut reg, "bool");
        let str_c = class(&mut reg, "str");
        let expected = Callable::new(
            Some(vec![Param::positional("x", Some(instance(&int_c)))]),
            Some(instance(&str_c)),
        )
        .to_type();
        let actual = Callable::new(
            Some(vec![Param::positional("x", Some(instance(&bool_c)))]),
            Some(instance(&str_c)),
        )
        .to_type();
        assert!(match_top(&expected, &actual, &reg));
    }
}
