/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Evaluation-context traits: the host-owned facts the matcher and call
//! unifier need about expressions and member resolution, without computing
//! them itself. The type-level algorithms stay host-agnostic by only ever
//! talking to these traits, never to a concrete AST or symbol table.

use crate::types::class::ClassId;
use crate::types::type_var::TypeVar;
use crate::types::types::Type;

/// The result of resolving a member (attribute or method) access: either a
/// concrete type, or a verdict that the member doesn't exist / can't be
/// determined without more context.
#[derive(Clone, Debug, PartialEq)]
pub enum MemberLookup {
    Found(Type),
    /// The member is not present and the class's `__getattr__` can't make it
    /// up either - this is a hard failure, not just "unknown".
    NotFound,
    /// The member's type could not be determined (e.g. in an unresolved
    /// import) - distinct from `NotFound`: the member may well exist.
    Unresolved,
}

/// A host's source of expression and member types. `Expr` is left abstract -
/// this crate places no requirements on the host's AST node representation
/// beyond identity; it is plumbed through structurally.
pub trait EvalContext {
    type Expr;

    /// The statically-known type of an expression, as already computed
    /// upstream of this engine.
    fn type_of_expr(&self, expr: &Self::Expr) -> Type;

    /// The type of a class reference as a value (its class-form type).
    fn type_of_class(&self, class: &ClassId) -> Type;

    /// Resolve `name` as a member of `of`, honoring MRO and `__getattr__`
    /// fallback the same way the host's attribute lookup would.
    fn resolve_member(&self, of: &Type, name: &str) -> MemberLookup;
}

/// Extension hook for classes whose generic parameters the matcher needs to
/// see but that aren't represented as a plain `Collection` (e.g. a class
/// with defaulted or partially-specified type arguments). Hosts that have no
/// such classes can implement this as always returning `None`.
pub trait TypeProvider {
    /// The generic view of `class` as a `Collection`-shaped type, if the host
    /// can provide one (e.g. synthesizing `Iterable[T]` from a class that
    /// only declares `__iter__`).
    fn generic_type_of(&self, class: &ClassId) -> Option<Type>;

    /// Default substitutions this class's own generic parameters carry
    /// (e.g. a subclass that fixes a base class's type variable to a
    /// concrete type), keyed by the variable occurrence they bind.
    fn generic_substitutions(&self, class: &ClassId) -> Vec<(TypeVar, Type)>;
}
