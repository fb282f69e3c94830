/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;
use std::fmt::Display;

use crate::error::TypeSubsetError;
use crate::types::class::ClassType;
use crate::types::types::Type;
use crate::util::display::commas_iter;

/// A generic collection: a class type carrying an ordered list of element
/// types (its generic parameters, e.g. `List[int]`, `Dict[str, int]`). Arity
/// is fixed per class, but this engine doesn't enforce that itself - it's the
/// class registry/host's job to only ever construct arity-correct values.
#[derive(Clone, Debug, PartialEq)]
pub struct Collection {
    pub class: ClassType,
    pub args: Vec<Type>,
}

impl Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.class)
        } else {
            write!(f, "{}[{}]", self.class, commas_iter(|| self.args.iter()))
        }
    }
}

impl Collection {
    pub fn new(class: ClassType, args: Vec<Type>) -> Self {
        Self { class, args }
    }

    /// Construct a collection after checking its argument count against the
    /// class's declared arity. Most callers go through the host's own class
    /// registry to know arity and can use the infallible `new`; this is for
    /// call sites (e.g. deserializing a generic alias) that want the check
    /// inline.
    pub fn try_new(
        class: ClassType,
        args: Vec<Type>,
        expected_arity: usize,
    ) -> Result<Self, TypeSubsetError> {
        if args.len() != expected_arity {
            return Err(TypeSubsetError::CollectionArity {
                class: class.class.label().into(),
                expected: expected_arity,
                actual: args.len(),
            });
        }
        Ok(Self { class, args })
    }

    pub fn to_type(self) -> Type {
        Type::Collection(Box::new(self))
    }

    /// The element type the collection is iterated as - for single-parameter
    /// collections (list, set, iterable) this is `args[0]`; absent if there
    /// are no parameters (treated as unknown by callers).
    pub fn iterated_element(&self) -> Option<&Type> {
        self.args.first()
    }

    /// A positional generic parameter, or `None` (treated as unknown) if the
    /// actual side simply didn't supply that many parameters.
    pub fn arg(&self, index: usize) -> Option<&Type> {
        self.args.get(index)
    }
}
