/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! A wrapper around `Arc` that gives pointer identity `Eq`/`Hash`/`Ord`,
//! rather than the structural equality `Arc`'s `Deref` would otherwise pick up.
//!
//! Used for anything that should be compared "is this the same variable",
//! not "do these two variables look the same" - type variables and class
//! descriptors in particular, where two distinct variables can have the same
//! name.

use std::cmp::Ordering;
use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;
use std::hash::Hasher;
use std::ops::Deref;
use std::sync::Arc;

use dupe::Dupe;

pub struct ArcId<T>(Arc<T>);

impl<T> ArcId<T> {
    pub fn new(x: T) -> Self {
        Self(Arc::new(x))
    }

    fn ptr(&self) -> *const T {
        Arc::as_ptr(&self.0)
    }
}

impl<T> Clone for ArcId<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

// Safe: cloning only bumps the refcount, never touches `T`.
impl<T> Dupe for ArcId<T> {}

impl<T> Deref for ArcId<T> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: Debug> Debug for ArcId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.0, f)
    }
}

impl<T> PartialEq for ArcId<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for ArcId<T> {}

impl<T> Hash for ArcId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ptr().hash(state)
    }
}

// There is no meaningful ordering between two distinct identities, but we
// still want a total order so `ArcId`s can live in a `BTreeMap`/sorted `Vec`
// (e.g. when iterating union members in a stable order for display). The
// pointer value is stable for the program's lifetime, which is all we need.
impl<T> PartialOrd for ArcId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ArcId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ptr().cmp(&other.ptr())
    }
}
