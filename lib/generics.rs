/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The generic-variable collector: a depth-first walk gathering every free
//! `TypeVar` in a type tree. Side-effect-free on the type itself; the only
//! mutable state is the output list and an identity-based visited set
//! guarding against cyclic bounds (a variable whose bound mentions itself).

use dupe::Dupe;
use starlark_map::small_set::SmallSet;

use crate::types::type_var::TypeVar;
use crate::types::type_var::TypeVarId;
use crate::types::types::Type;
use crate::util::visit::Visit;

/// Depth-first collection of every `TypeVar` occurrence reachable from
/// `ty`, including those nested inside a variable's own bound. `visited`
/// guards against a bound that (directly or transitively) mentions its own
/// variable.
pub fn collect_generics(ty: &Type, out: &mut Vec<TypeVar>, visited: &mut SmallSet<TypeVarId>) {
    ty.visit0(&mut |v: &TypeVar| {
        out.push(v.dupe());
        if visited.insert(v.id().dupe()) {
            if let Some(bound) = v.bound() {
                collect_generics(bound, out, visited);
            }
        }
    });
}

/// Convenience entry point: collect into a fresh list with a fresh visited
/// set.
pub fn collect_generics_of(ty: &Type) -> Vec<TypeVar> {
    let mut out = Vec::new();
    let mut visited = SmallSet::new();
    collect_generics(ty, &mut out, &mut visited);
    out
}

/// `true` if `ty` transitively contains any `TypeVar` at all. Used by
/// `substitute` to short-circuit the common case of a type with no
/// generics.
pub fn has_generics(ty: &Type) -> bool {
    let mut found = false;
    ty.visit0(&mut |_: &TypeVar| found = true);
    found
}
