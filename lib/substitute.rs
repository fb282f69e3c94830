/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The substitution engine: rewrites a type tree by applying a variable→type
//! map (`Substitutions`). Read-only with respect to the map - only the
//! matcher ever inserts bindings.

use dupe::Dupe;
use starlark_map::small_map::SmallMap;
use starlark_map::small_set::SmallSet;
use vec1::Vec1;

use crate::generics::has_generics;
use crate::types::callable::Callable;
use crate::types::callable::Param;
use crate::types::collection::Collection;
use crate::types::tuple::Tuple;
use crate::types::tuple::TupleShape;
use crate::types::type_var::TypeVar;
use crate::types::type_var::TypeVarId;
use crate::types::types::Type;
use crate::types::union::Union;

/// The accumulated variable→type bindings the matcher builds up and the
/// substitution engine reads from. Keyed by the full `TypeVar` occurrence
/// (identity + definition flag), so a class-form and instance-form
/// occurrence of the same variable are distinct keys - `substitute`'s
/// dual-form lookup is what lets one stand in for the other.
pub type Substitutions = SmallMap<TypeVar, Type>;

/// Apply `sigma` over `ty`, producing a fresh type with every free variable
/// replaced. Short-circuits to a clone of `ty` when it carries no generics
/// at all.
pub fn substitute(ty: &Type, sigma: &Substitutions) -> Type {
    if !has_generics(ty) {
        return ty.clone();
    }
    let mut visited = SmallSet::new();
    substitute_inner(ty, sigma, &mut visited)
}

fn lookup_dual_form(v: &TypeVar, sigma: &Substitutions) -> Option<Type> {
    if let Some(found) = sigma.get(v) {
        return Some(found.clone());
    }
    let alt = if v.is_class() {
        v.to_instance_form()
    } else {
        v.to_class_form()
    };
    let found = sigma.get(&alt)?;
    Some(if v.is_class() {
        found.to_class_form()
    } else {
        instance_form_of(found)
    })
}

/// The symmetric counterpart to `Type::to_class_form`: demote a class-form
/// result back to instance form when chasing an instance-form variable
/// through its class-form binding.
fn instance_form_of(ty: &Type) -> Type {
    match ty {
        Type::Class(c) => Type::Class(c.with_class_form(false)),
        Type::TypeVar(v) => Type::TypeVar(v.to_instance_form()),
        other => other.clone(),
    }
}

fn substitute_inner(ty: &Type, sigma: &Substitutions, visited: &mut SmallSet<TypeVarId>) -> Type {
    match ty {
        Type::TypeVar(v) => match lookup_dual_form(v, sigma) {
            None => ty.clone(),
            Some(Type::TypeVar(ref next)) if next == v => ty.clone(),
            Some(Type::TypeVar(next)) => {
                if visited.insert(v.id().dupe()) {
                    substitute_inner(&Type::TypeVar(next), sigma, visited)
                } else {
                    Type::TypeVar(next)
                }
            }
            Some(other) => other,
        },
        Type::Union(u) => {
            let mut members: Vec<Type> = u
                .members
                .iter()
                .map(|m| substitute_inner(m, sigma, visited))
                .collect();
            // Rebuild via the union constructor, which collapses a
            // single-member result to that member directly rather than a
            // one-element `Union`.
            if members.len() == 1 {
                return members.pop().expect("checked len == 1 above");
            }
            match Vec1::try_from_vec(members) {
                Ok(members) => Type::Union(Box::new(Union {
                    members,
                    weak: u.weak,
                })),
                Err(_) => ty.clone(),
            }
        }
        Type::Tuple(t) => {
            let shape = match &t.shape {
                TupleShape::Fixed(elts) => TupleShape::Fixed(
                    elts.iter()
                        .map(|e| substitute_inner(e, sigma, visited))
                        .collect(),
                ),
                TupleShape::Homogeneous(elt) => {
                    TupleShape::Homogeneous(Box::new(substitute_inner(elt, sigma, visited)))
                }
            };
            Type::Tuple(Box::new(Tuple {
                class: t.class.dupe(),
                is_class: t.is_class,
                shape,
            }))
        }
        Type::Collection(c) => {
            let args = c
                .args
                .iter()
                .map(|a| substitute_inner(a, sigma, visited))
                .collect();
            Type::Collection(Box::new(Collection {
                class: c.class.dupe(),
                args,
            }))
        }
        Type::Callable(c) => {
            let params = c.params.as_ref().map(|params| {
                params
                    .iter()
                    .map(|p| Param {
                        name: p.name.clone(),
                        ty: p.ty.as_ref().map(|t| substitute_inner(t, sigma, visited)),
                        kind: p.kind,
                    })
                    .collect()
            });
            let ret = c
                .ret
                .as_ref()
                .map(|r| Box::new(substitute_inner(r, sigma, visited)));
            Type::Callable(Box::new(Callable {
                params,
                ret,
                is_callable: c.is_callable,
            }))
        }
        Type::Unknown | Type::Class(_) | Type::Structural(_) | Type::Function(_) => ty.clone(),
    }
}
