/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;
use std::fmt::Display;

use crate::types::class::ClassId;
use crate::types::types::Type;
use crate::util::display::commas_iter;

/// A tuple is a class-type specialization: either fixed-arity with an
/// ordered list of element types (possibly empty), or homogeneous with a
/// single iterated element type. The two shapes are mutually exclusive.
#[derive(Clone, Debug, PartialEq)]
pub enum TupleShape {
    Fixed(Vec<Type>),
    Homogeneous(Box<Type>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tuple {
    pub class: ClassId,
    pub is_class: bool,
    pub shape: TupleShape,
}

impl Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.shape {
            TupleShape::Fixed(elts) => {
                write!(f, "tuple[{}]", commas_iter(|| elts.iter()))
            }
            TupleShape::Homogeneous(elt) => write!(f, "tuple[{elt}, ...]"),
        }
    }
}

impl Tuple {
    pub fn fixed(class: ClassId, elements: Vec<Type>) -> Self {
        Self {
            class,
            is_class: false,
            shape: TupleShape::Fixed(elements),
        }
    }

    pub fn homogeneous(class: ClassId, element: Type) -> Self {
        Self {
            class,
            is_class: false,
            shape: TupleShape::Homogeneous(Box::new(element)),
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self.shape, TupleShape::Fixed(_))
    }

    /// The type that iterating over this tuple yields: the single element
    /// type for a homogeneous tuple, or the union of the fixed elements
    /// (callers needing the union form build it themselves via `simplify`;
    /// this just exposes the raw elements).
    pub fn fixed_elements(&self) -> Option<&[Type]> {
        match &self.shape {
            TupleShape::Fixed(elts) => Some(elts),
            TupleShape::Homogeneous(_) => None,
        }
    }

    pub fn homogeneous_element(&self) -> Option<&Type> {
        match &self.shape {
            TupleShape::Fixed(_) => None,
            TupleShape::Homogeneous(elt) => Some(elt),
        }
    }
}
