/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Constructor-time invariant violations. The matcher, substitution engine,
//! and call unifier never return this type - every decision they make
//! reduces to `true`/`false` or an `Option`, per the "never throws" design
//! of the matching algorithm itself. This error exists only for the small
//! set of types whose invariants can be violated at construction time (a
//! tuple built with both a fixed shape and a homogeneous element, say).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeSubsetError {
    #[error("union must have at least one member")]
    EmptyUnion,

    #[error("collection class {class} expects {expected} type argument(s), got {actual}")]
    CollectionArity {
        class: Box<str>,
        expected: usize,
        actual: usize,
    },
}
