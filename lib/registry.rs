/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The class registry: per-class metadata (MRO, ABC registration, builtin
//! identity) the matcher consults but never computes itself. This is an
//! external collaborator - the host's symbol table owns the real answers;
//! this crate only defines the shape of the questions it needs to ask.

use starlark_map::small_set::SmallSet;

use crate::types::class::ClassId;

/// Per-class facts the matcher needs. Implemented by the host; see
/// `registry::memory::MemoryClassRegistry` for a minimal in-memory reference
/// implementation used by this crate's own tests.
pub trait ClassRegistry {
    /// The class's name, or `None` if it has no stable name (synthesized
    /// classes, unresolved references).
    fn name(&self, class: &ClassId) -> Option<&str>;

    /// Nominal subclassing: is `sub` a (reflexive, transitive) subclass of
    /// `sup`?
    fn is_subclass_of(&self, sub: &ClassId, sup: &ClassId) -> bool;

    /// Is `sub` registered as a subclass of the abstract base class `sup`
    /// (e.g. via `register()`), independent of nominal inheritance?
    fn is_abc_subclass_of(&self, sub: &ClassId, sup: &ClassId) -> bool;

    /// `true` if part of `class`'s ancestor chain could not be resolved
    /// (e.g. an import that failed) - `matchClasses` admits such classes
    /// conservatively rather than asserting they are *not* a subclass.
    fn has_unresolved_ancestors(&self, class: &ClassId) -> bool;

    /// The set of member (attribute/method) names visible on `class`.
    /// `inherited = false` restricts to names declared directly on the
    /// class; `true` includes everything reachable through the MRO.
    fn member_names(&self, class: &ClassId, inherited: bool) -> SmallSet<Box<str>>;

    /// `true` if `class` overrides `__getattr__`/`__getattribute__` with a
    /// non-builtin implementation - used by the structural-vs-class matching
    /// rule to decide whether a missing attribute could still resolve
    /// dynamically at runtime.
    fn has_dynamic_getattr(&self, class: &ClassId) -> bool;
}

/// Per-context lookup of canonical primitive types by name: the "builtin
/// cache" the matcher's top-type and string-widening rules consult.
pub trait BuiltinCache {
    /// `object` - the universal top type.
    fn object_class(&self) -> ClassId;

    /// `type` - the universal metaclass.
    fn type_class(&self) -> ClassId;

    /// The class that union-of-`str`-and-`unicode` widening should produce a
    /// union member for: `str`.
    fn str_class(&self) -> ClassId;

    /// `unicode` - the other half of the legacy `str`/`unicode` split.
    fn unicode_class(&self) -> ClassId;

    /// `basestring` - the Python 2 legacy common ancestor of `str` and
    /// `unicode`. Widens to `str | unicode` in the matcher's string-family
    /// rule.
    fn basestring_class(&self) -> ClassId;

    /// Look up a builtin class by name (`"basestring"`, `"str"`,
    /// `"unicode"`, or a numeric-tower name); `None` if the host doesn't
    /// register one under that name.
    fn lookup(&self, name: &str) -> Option<ClassId>;
}

pub mod memory;
