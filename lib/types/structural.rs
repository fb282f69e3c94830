/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;
use std::fmt::Display;

use starlark_map::small_set::SmallSet;

use crate::types::types::Type;
use crate::util::display::commas_iter;

/// A structural (duck) type: a named set of attributes a value must carry.
///
/// `from_usage = true` marks a set synthesized from observed usage sites
/// rather than a declaration - intentionally permissive, per the
/// "inferred-from-usages" rules in the matcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Structural {
    pub attrs: SmallSet<Box<str>>,
    pub from_usage: bool,
}

impl Display for Structural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", commas_iter(|| self.attrs.iter()))
    }
}

impl Structural {
    pub fn declared(attrs: impl IntoIterator<Item = impl Into<Box<str>>>) -> Self {
        Self {
            attrs: attrs.into_iter().map(Into::into).collect(),
            from_usage: false,
        }
    }

    pub fn inferred(attrs: impl IntoIterator<Item = impl Into<Box<str>>>) -> Self {
        Self {
            attrs: attrs.into_iter().map(Into::into).collect(),
            from_usage: true,
        }
    }

    pub fn to_type(self) -> Type {
        Type::Structural(Box::new(self))
    }

    /// `true` if every attribute `self` requires is present in `other`.
    pub fn is_subset_of_names(&self, other: &SmallSet<Box<str>>) -> bool {
        self.attrs.iter().all(|name| other.contains(name))
    }
}
