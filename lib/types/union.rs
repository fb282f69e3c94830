/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;
use std::fmt::Display;

use vec1::Vec1;

use crate::error::TypeSubsetError;
use crate::types::types::Type;
use crate::util::display::intersperse_iter;

/// A non-empty set of member types plus a weakness flag. A weak union was
/// synthesized (e.g. "may also be `None`") and can be stripped on demand;
/// members are compared structurally, not deduplicated by identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Union {
    pub members: Vec1<Type>,
    pub weak: bool,
}

impl Display for Union {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", intersperse_iter(|| self.members.iter(), " | "))
    }
}

impl Union {
    pub fn new(members: Vec1<Type>) -> Self {
        Self {
            members,
            weak: false,
        }
    }

    pub fn weak(members: Vec1<Type>) -> Self {
        Self {
            members,
            weak: true,
        }
    }

    /// Build a union from a plain (possibly empty) `Vec`, rejecting the
    /// empty case explicitly rather than panicking - for call sites that
    /// assemble members from a host-side collection of unknown size.
    pub fn try_from_vec(members: Vec<Type>) -> Result<Self, TypeSubsetError> {
        Vec1::try_from_vec(members)
            .map(Self::new)
            .map_err(|_| TypeSubsetError::EmptyUnion)
    }

    pub fn to_type(self) -> Type {
        Type::Union(Box::new(self))
    }

    /// Drop the weak flag, producing a plain (strong) union over the same
    /// members - does not change membership, only the flag.
    pub fn stripped(&self) -> Self {
        Self {
            members: self.members.clone(),
            weak: false,
        }
    }
}
