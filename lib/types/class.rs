/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;
use std::fmt::Display;

use dupe::Dupe;

use crate::types::types::Type;
use crate::util::arc_id::ArcId;

/// An opaque handle to a class descriptor owned by the host's class registry
/// (`ClassRegistry`). The matcher never inspects a class's members directly -
/// every question about a `ClassId` ("is it a subclass of X", "what are its
/// member names") is asked of the registry.
///
/// Two `ClassId`s are equal iff they denote the exact same class descriptor;
/// name-based fallbacks (e.g. "B's name equals A's name" in `matchClasses`)
/// go through `ClassRegistry::name`, not through this type's `Eq`.
#[derive(Clone, Dupe, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct ClassId(ArcId<ClassSlot>);

#[derive(Debug, PartialEq, Eq, Ord, PartialOrd)]
struct ClassSlot {
    /// A display-only label. Authoritative identity and subclassing facts
    /// still come from the registry keyed by this handle, never from this
    /// string - two distinct classes are free to share a label.
    label: Box<str>,
}

impl Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.label)
    }
}

impl ClassId {
    pub fn new(label: impl Into<Box<str>>) -> Self {
        Self(ArcId::new(ClassSlot {
            label: label.into(),
        }))
    }

    pub fn label(&self) -> &str {
        &self.0.label
    }
}

/// A class type: a reference to a class descriptor plus the definition flag
/// (`true` = the class itself, `Type[C]`; `false` = an instance of it, `C`).
#[derive(Clone, Dupe, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct ClassType {
    pub class: ClassId,
    pub is_class: bool,
}

impl Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_class {
            write!(f, "type[{}]", self.class)
        } else {
            write!(f, "{}", self.class)
        }
    }
}

impl ClassType {
    pub fn new(class: ClassId, is_class: bool) -> Self {
        Self { class, is_class }
    }

    pub fn instance(class: ClassId) -> Self {
        Self::new(class, false)
    }

    pub fn of_class(class: ClassId) -> Self {
        Self::new(class, true)
    }

    pub fn to_type(self) -> Type {
        Type::Class(self)
    }

    pub fn with_class_form(&self, is_class: bool) -> Self {
        Self::new(self.class.dupe(), is_class)
    }
}
