/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The two predicates the matcher leans on directly: "is this type absent of
//! information" and "is this type callable". Both are pure functions of a
//! `Type` - no registry or context needed.

use crate::types::types::Type;

/// Tri-state answer: `isCallable` can't always say yes or no from the type
/// alone (e.g. a union with an unknown member).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Callability {
    Yes,
    No,
    Unknown,
}

impl Callability {
    pub fn is_yes(self) -> bool {
        matches!(self, Callability::Yes)
    }
}

/// `true` if `t` carries no usable type information: the absent type itself,
/// a generic variable (when `generics_are_unknown`), or a union with at
/// least one unknown member. A weak union is not, by itself, unknown.
pub fn is_unknown(t: &Type, generics_are_unknown: bool) -> bool {
    match t {
        Type::Unknown => true,
        Type::TypeVar(_) => generics_are_unknown,
        Type::Union(u) => u
            .members
            .iter()
            .any(|m| is_unknown(m, generics_are_unknown)),
        _ => false,
    }
}

/// Tri-state callability: used by the matcher's callable-vs-callable rule
/// (both sides must answer `Yes`) and by structural matching against
/// inferred-from-usages types.
pub fn is_callable(t: &Type) -> Callability {
    match t {
        Type::Unknown => Callability::Unknown,
        Type::Union(u) => {
            let mut any_unknown = false;
            for m in u.members.iter() {
                match is_callable(m) {
                    Callability::Yes => return Callability::Yes,
                    Callability::Unknown => any_unknown = true,
                    Callability::No => {}
                }
            }
            if any_unknown {
                Callability::Unknown
            } else {
                Callability::No
            }
        }
        Type::Callable(c) => {
            if c.is_callable {
                Callability::Yes
            } else {
                Callability::No
            }
        }
        Type::Function(_) => Callability::Yes,
        Type::Structural(s) if s.from_usage => Callability::Yes,
        _ => Callability::No,
    }
}
