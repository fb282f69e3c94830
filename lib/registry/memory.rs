/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! A minimal in-memory `ClassRegistry`/`BuiltinCache` used by this crate's
//! own tests. Real hosts have a symbol table already; this just gives the
//! test suite somewhere to register classes without standing up one.

use dupe::Dupe;
use starlark_map::small_map::SmallMap;
use starlark_map::small_set::SmallSet;

use crate::registry::BuiltinCache;
use crate::registry::ClassRegistry;
use crate::types::class::ClassId;

#[derive(Default)]
struct ClassEntry {
    bases: Vec<ClassId>,
    abc_bases: Vec<ClassId>,
    members: SmallSet<Box<str>>,
    unresolved_ancestors: bool,
    dynamic_getattr: bool,
}

/// A registry built up by hand: `declare` a class, `extend`/`register` its
/// relationships, `add_member` its attributes. Subclass queries walk the
/// `bases`/`abc_bases` edges transitively; nothing is memoized since test
/// hierarchies are small.
pub struct MemoryClassRegistry {
    classes: SmallMap<ClassId, ClassEntry>,
    object_class: ClassId,
    type_class: ClassId,
    str_class: ClassId,
    unicode_class: ClassId,
    basestring_class: ClassId,
    by_name: SmallMap<Box<str>, ClassId>,
}

impl MemoryClassRegistry {
    pub fn new() -> Self {
        let object_class = ClassId::new("object");
        let type_class = ClassId::new("type");
        let str_class = ClassId::new("str");
        let unicode_class = ClassId::new("unicode");
        let basestring_class = ClassId::new("basestring");
        let mut registry = Self {
            classes: SmallMap::new(),
            object_class: object_class.dupe(),
            type_class: type_class.dupe(),
            str_class: str_class.dupe(),
            unicode_class: unicode_class.dupe(),
            basestring_class: basestring_class.dupe(),
            by_name: SmallMap::new(),
        };
        for class in [
            &object_class,
            &type_class,
            &str_class,
            &unicode_class,
            &basestring_class,
        ] {
            registry.declare(class.dupe());
        }
        registry.extend(&str_class, &object_class);
        registry.extend(&unicode_class, &object_class);
        registry
    }

    /// Register a class with the registry; a no-op if already declared.
    pub fn declare(&mut self, class: ClassId) {
        if !self.classes.contains_key(&class) {
            let name = class.label().to_owned().into_boxed_str();
            self.by_name.insert(name, class.dupe());
            self.classes.insert(class, ClassEntry::default());
        }
    }

    /// Record `base` as a nominal base of `sub` (both must be declared).
    pub fn extend(&mut self, sub: &ClassId, base: &ClassId) {
        self.classes
            .get_mut(sub)
            .expect("extend: subclass not declared")
            .bases
            .push(base.dupe());
    }

    /// Record `sub.register(base)` - ABC registration independent of the
    /// nominal hierarchy.
    pub fn register_abc(&mut self, sub: &ClassId, base: &ClassId) {
        self.classes
            .get_mut(sub)
            .expect("register_abc: subclass not declared")
            .abc_bases
            .push(base.dupe());
    }

    pub fn add_member(&mut self, class: &ClassId, name: impl Into<Box<str>>) {
        self.classes
            .get_mut(class)
            .expect("add_member: class not declared")
            .members
            .insert(name.into());
    }

    pub fn mark_unresolved_ancestors(&mut self, class: &ClassId) {
        self.classes
            .get_mut(class)
            .expect("mark_unresolved_ancestors: class not declared")
            .unresolved_ancestors = true;
    }

    pub fn mark_dynamic_getattr(&mut self, class: &ClassId) {
        self.classes
            .get_mut(class)
            .expect("mark_dynamic_getattr: class not declared")
            .dynamic_getattr = true;
    }

    fn walk(&self, start: &ClassId, target: &ClassId, via_abc: bool) -> bool {
        if start == target {
            return true;
        }
        let mut stack = vec![start.dupe()];
        let mut seen = SmallSet::new();
        while let Some(cur) = stack.pop() {
            if !seen.insert(cur.dupe()) {
                continue;
            }
            if let Some(entry) = self.classes.get(&cur) {
                let edges = if via_abc { &entry.abc_bases } else { &entry.bases };
                for base in edges {
                    if base == target {
                        return true;
                    }
                    stack.push(base.dupe());
                }
                if via_abc {
                    for base in &entry.bases {
                        if base == target {
                            return true;
                        }
                        stack.push(base.dupe());
                    }
                }
            }
        }
        false
    }

    pub fn object_class_id(&self) -> ClassId {
        self.object_class.dupe()
    }
}

impl Default for MemoryClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassRegistry for MemoryClassRegistry {
    fn name(&self, class: &ClassId) -> Option<&str> {
        self.classes.get(class).map(|_| class.label())
    }

    fn is_subclass_of(&self, sub: &ClassId, sup: &ClassId) -> bool {
        if sup == &self.object_class {
            return true;
        }
        self.walk(sub, sup, false)
    }

    fn is_abc_subclass_of(&self, sub: &ClassId, sup: &ClassId) -> bool {
        self.walk(sub, sup, true)
    }

    fn has_unresolved_ancestors(&self, class: &ClassId) -> bool {
        self.classes
            .get(class)
            .map(|e| e.unresolved_ancestors)
            .unwrap_or(false)
    }

    fn member_names(&self, class: &ClassId, inherited: bool) -> SmallSet<Box<str>> {
        let Some(entry) = self.classes.get(class) else {
            return SmallSet::new();
        };
        if !inherited {
            return entry.members.clone();
        }
        let mut out = SmallSet::new();
        let mut stack = vec![class.dupe()];
        let mut seen = SmallSet::new();
        while let Some(cur) = stack.pop() {
            if !seen.insert(cur.dupe()) {
                continue;
            }
            if let Some(entry) = self.classes.get(&cur) {
                for name in entry.members.iter() {
                    out.insert(name.clone());
                }
                for base in &entry.bases {
                    stack.push(base.dupe());
                }
            }
        }
        out
    }

    fn has_dynamic_getattr(&self, class: &ClassId) -> bool {
        self.classes
            .get(class)
            .map(|e| e.dynamic_getattr)
            .unwrap_or(false)
    }
}

impl BuiltinCache for MemoryClassRegistry {
    fn object_class(&self) -> ClassId {
        self.object_class.dupe()
    }

    fn type_class(&self) -> ClassId {
        self.type_class.dupe()
    }

    fn str_class(&self) -> ClassId {
        self.str_class.dupe()
    }

    fn unicode_class(&self) -> ClassId {
        self.unicode_class.dupe()
    }

    fn basestring_class(&self) -> ClassId {
        self.basestring_class.dupe()
    }

    fn lookup(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).map(Dupe::dupe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitive_subclass() {
        let mut reg = MemoryClassRegistry::new();
        let a = ClassId::new("A");
        let b = ClassId::new("B");
        let c = ClassId::new("C");
        reg.declare(a.dupe());
        reg.declare(b.dupe());
        reg.declare(c.dupe());
        reg.extend(&b, &a);
        reg.extend(&c, &b);
        assert!(reg.is_subclass_of(&c, &a));
        assert!(!reg.is_subclass_of(&a, &c));
        assert!(reg.is_subclass_of(&c, &reg.object_class_id()));
    }

    #[test]
    fn abc_registration_is_independent_of_nominal_bases() {
        let mut reg = MemoryClassRegistry::new();
        let duck = ClassId::new("Duck");
        let quacks_like = ClassId::new("QuacksLike");
        reg.declare(duck.dupe());
        reg.declare(quacks_like.dupe());
        reg.register_abc(&duck, &quacks_like);
        assert!(reg.is_abc_subclass_of(&duck, &quacks_like));
        assert!(!reg.is_subclass_of(&duck, &quacks_like));
    }

    #[test]
    fn inherited_members_walk_bases() {
        let mut reg = MemoryClassRegistry::new();
        let a = ClassId::new("A");
        let b = ClassId::new("B");
        reg.declare(a.dupe());
        reg.declare(b.dupe());
        reg.extend(&b, &a);
        reg.add_member(&a, "foo");
        reg.add_member(&b, "bar");
        assert_eq!(reg.member_names(&b, false).len(), 1);
        assert_eq!(reg.member_names(&b, true).len(), 2);
    }
}
