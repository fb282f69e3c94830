/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;
use std::fmt::Display;

use crate::types::callable::Callable;
use crate::types::class::ClassType;
use crate::types::collection::Collection;
use crate::types::function::FunctionRef;
use crate::types::structural::Structural;
use crate::types::tuple::Tuple;
use crate::types::type_var::TypeVar;
use crate::types::union::Union;
use crate::util::visit::Visit;
use crate::util::visit::VisitMut;

/// The closed type universe this engine reasons about. Every variant's
/// invariants are documented on its own payload type; `Type` itself is
/// immutable - the matcher never builds new `Type`s, only the substitution
/// engine does (fresh collections/tuples/callables, never a new variant
/// shape).
#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    /// No type information. Matches anything; anything matches it.
    Unknown,
    Class(ClassType),
    TypeVar(TypeVar),
    Union(Box<Union>),
    Tuple(Box<Tuple>),
    Collection(Box<Collection>),
    Callable(Box<Callable>),
    Structural(Box<Structural>),
    /// A closure whose signature is deferred to the evaluation context.
    Function(FunctionRef),
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Unknown => write!(f, "Unknown"),
            Type::Class(c) => write!(f, "{c}"),
            Type::TypeVar(v) => write!(f, "{v}"),
            Type::Union(u) => write!(f, "{u}"),
            Type::Tuple(t) => write!(f, "{t}"),
            Type::Collection(c) => write!(f, "{c}"),
            Type::Callable(c) => write!(f, "{c}"),
            Type::Structural(s) => write!(f, "{s}"),
            Type::Function(fun) => write!(f, "{fun}"),
        }
    }
}

impl Type {
    pub fn is_unknown_variant(&self) -> bool {
        matches!(self, Type::Unknown)
    }

    pub fn as_class(&self) -> Option<&ClassType> {
        match self {
            Type::Class(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_type_var(&self) -> Option<&TypeVar> {
        match self {
            Type::TypeVar(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&Union> {
        match self {
            Type::Union(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&Tuple> {
        match self {
            Type::Tuple(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Type::Collection(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Type::Callable(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_structural(&self) -> Option<&Structural> {
        match self {
            Type::Structural(s) => Some(s),
            _ => None,
        }
    }

    /// The definition flag (class-form vs instance-form) for the types that
    /// carry one. `None` for shapes without a class/instance distinction
    /// (unions, callables, structural types, functions).
    pub fn definition_flag(&self) -> Option<bool> {
        match self {
            Type::Class(c) => Some(c.is_class),
            Type::TypeVar(v) => Some(v.is_class()),
            Type::Tuple(t) => Some(t.is_class),
            Type::Collection(c) => Some(c.class.is_class),
            _ => None,
        }
    }

    /// Promote a class-shaped type to its class form (`Type[C]` rather than
    /// `C`) - used when a generic variable's bound is promoted because the
    /// variable itself is class-form (matcher rule 4). Non-class-shaped
    /// types are returned unchanged.
    pub fn to_class_form(&self) -> Type {
        match self {
            Type::Class(c) => Type::Class(c.with_class_form(true)),
            Type::TypeVar(v) => Type::TypeVar(v.to_class_form()),
            other => other.clone(),
        }
    }

    pub fn tuple_class(&self) -> Option<&crate::types::class::ClassId> {
        match self {
            Type::Tuple(t) => Some(&t.class),
            _ => None,
        }
    }
}

// --- Visit/VisitMut: children relevant to `collectGenerics`/`substitute`. ---
//
// Every variant that can transitively carry a `Type::TypeVar` recurses into
// its children; leaves (`Unknown`, `Function`) contain none. `Class` is a
// leaf too: a bare class reference has no type arguments of its own (generic
// parameters live on `Collection`).

impl Visit<TypeVar> for Type {
    fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a TypeVar)) {
        match self {
            Type::Unknown | Type::Class(_) | Type::Function(_) => {}
            Type::TypeVar(v) => f(v),
            Type::Union(u) => u.members.iter().for_each(|m| m.visit0(f)),
            Type::Tuple(t) => match &t.shape {
                crate::types::tuple::TupleShape::Fixed(elts) => {
                    elts.iter().for_each(|e| e.visit0(f))
                }
                crate::types::tuple::TupleShape::Homogeneous(elt) => elt.visit0(f),
            },
            Type::Collection(c) => c.args.iter().for_each(|a| a.visit0(f)),
            Type::Callable(c) => {
                if let Some(params) = &c.params {
                    for p in params {
                        if let Some(ty) = &p.ty {
                            ty.visit0(f);
                        }
                    }
                }
                if let Some(ret) = &c.ret {
                    ret.visit0(f);
                }
            }
            Type::Structural(_) => {}
        }
    }
}

impl VisitMut<TypeVar> for Type {
    fn visit_mut(&mut self, f: &mut dyn FnMut(&mut TypeVar)) {
        match self {
            Type::Unknown | Type::Class(_) | Type::Function(_) => {}
            Type::TypeVar(v) => f(v),
            Type::Union(u) => u.members.iter_mut().for_each(|m| m.visit0_mut(f)),
            Type::Tuple(t) => match &mut t.shape {
                crate::types::tuple::TupleShape::Fixed(elts) => {
                    elts.iter_mut().for_each(|e| e.visit0_mut(f))
                }
                crate::types::tuple::TupleShape::Homogeneous(elt) => elt.visit0_mut(f),
            },
            Type::Collection(c) => c.args.iter_mut().for_each(|a| a.visit0_mut(f)),
            Type::Callable(c) => {
                if let Some(params) = &mut c.params {
                    for p in params {
                        if let Some(ty) = &mut p.ty {
                            ty.visit0_mut(f);
                        }
                    }
                }
                if let Some(ret) = &mut c.ret {
                    ret.visit0_mut(f);
                }
            }
            Type::Structural(_) => {}
        }
    }
}

static_assertions::assert_impl_all!(Type: Send, Sync);
