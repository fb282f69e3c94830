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

/// A closure/function value whose parameter and return information is
/// deferred to the evaluation context rather than carried in the type tree
/// itself - the matcher only ever needs this variant's identity (to match it
/// against an expected `Callable[...]` name, rule 9 of the matcher); anything
/// that needs its actual signature goes through `EvalContext::resolve_member`.
#[derive(Clone, Dupe, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct FunctionRef(ArcId<FunctionSlot>);

#[derive(Debug, PartialEq, Eq, Ord, PartialOrd)]
struct FunctionSlot {
    label: Box<str>,
}

impl Display for FunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}>", self.0.label)
    }
}

impl FunctionRef {
    pub fn new(label: impl Into<Box<str>>) -> Self {
        Self(ArcId::new(FunctionSlot {
            label: label.into(),
        }))
    }

    pub fn label(&self) -> &str {
        &self.0.label
    }

    pub fn to_type(&self) -> Type {
        Type::Function(self.dupe())
    }
}
