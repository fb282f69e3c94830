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

/// The identity of a generic type variable (`TypeVar` in PEP 484 terms),
/// shared by every occurrence of that variable in a signature.
///
/// Identity is by `ArcId`, not by name: two `TypeVar`s with the same `name`
/// are still distinct variables. This is what lets the substitution map use
/// the variable as a key without accidentally unifying unrelated `T`s from
/// different generic functions.
#[derive(Clone, Dupe, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct TypeVarId(ArcId<TypeVarData>);

#[derive(Debug, PartialEq, Eq, Ord, PartialOrd)]
struct TypeVarData {
    name: Box<str>,
    bound: Option<Box<Type>>,
}

impl TypeVarId {
    pub fn new(name: impl Into<Box<str>>, bound: Option<Type>) -> Self {
        Self(ArcId::new(TypeVarData {
            name: name.into(),
            bound: bound.map(Box::new),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn bound(&self) -> Option<&Type> {
        self.0.bound.as_deref()
    }
}

/// An occurrence of a generic type variable inside a type tree: the shared
/// `TypeVarId` plus the class-vs-instance definition flag for *this*
/// occurrence (mirrors how `ClassType` pairs a class descriptor with its own
/// definition flag). This is what `Type::TypeVar` carries, and what the
/// substitution map (`Substitutions`) is keyed on.
#[derive(Clone, Dupe, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct TypeVar {
    id: TypeVarId,
    is_class: bool,
}

impl Display for TypeVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_class {
            write!(f, "type[{}]", self.id.name())
        } else {
            write!(f, "{}", self.id.name())
        }
    }
}

impl TypeVar {
    pub fn new(id: TypeVarId, is_class: bool) -> Self {
        Self { id, is_class }
    }

    pub fn id(&self) -> &TypeVarId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.id.name()
    }

    pub fn bound(&self) -> Option<&Type> {
        self.id.bound()
    }

    pub fn is_class(&self) -> bool {
        self.is_class
    }

    /// `true` for an instance-form variable with no bound: it admits either a
    /// class-form or instance-form actual without tripping the
    /// class-vs-instance mismatch rule.
    pub fn accepts_both_forms(&self) -> bool {
        !self.is_class && self.id.bound().is_none()
    }

    pub fn to_type(&self) -> Type {
        Type::TypeVar(self.dupe())
    }

    /// Same variable identity, in class form - used both for promoting a
    /// variable's own form and for the substitution engine's dual-form
    /// lookup (`v.toClass()`).
    pub fn to_class_form(&self) -> Self {
        Self {
            id: self.id.dupe(),
            is_class: true,
        }
    }

    /// Same variable identity, in instance form - the symmetric counterpart
    /// used when the substitution engine chases a class-form variable.
    pub fn to_instance_form(&self) -> Self {
        Self {
            id: self.id.dupe(),
            is_class: false,
        }
    }
}
