/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Thin shape-dispatch over the three call-site shapes the unifier can be
//! asked about. This module does not decide anything about types - it only
//! picks out which sub-expression plays "receiver" and which play
//! "arguments" for a given syntactic shape, so the same unifier logic works
//! for `obj.method(a, b)`, `obj[a]`, and `a + b`.

/// One explicit (non-container) argument, or the slot a `*args`/`**kwargs`
/// parameter binds to. `Positional`/`Keyword` carry the host's own argument
/// expression handle; this module is generic over that type.
#[derive(Clone, Debug)]
pub enum Argument<E> {
    Positional(E),
    Keyword(Box<str>, E),
}

/// A call site's shape, as seen by `unifyGenericCall`. `Call` is the general
/// function/method call; `Subscript` is `obj[index]`; `BinaryOp` is an
/// operator invocation, which may need its operand order swapped when the
/// resolved method is the right-hand ("reflected") operator.
#[derive(Clone, Debug)]
pub enum CallSite<E> {
    Call {
        receiver: Option<E>,
        arguments: Vec<Argument<E>>,
    },
    Subscript {
        operand: E,
        index: E,
    },
    BinaryOp {
        left: E,
        right: E,
        /// `true` when the dispatched method is the right operand's
        /// reflected operator (`__radd__` and friends) - receiver and
        /// argument swap.
        reflected: bool,
    },
}

impl<E: Clone> CallSite<E> {
    /// The expression that plays the role of `self`/receiver for this call
    /// site, if any (a bare function call with no qualifier has none).
    pub fn receiver(&self) -> Option<E> {
        match self {
            CallSite::Call { receiver, .. } => receiver.clone(),
            CallSite::Subscript { operand, .. } => Some(operand.clone()),
            CallSite::BinaryOp {
                left,
                right,
                reflected,
            } => Some(if *reflected { right.clone() } else { left.clone() }),
        }
    }

    /// The arguments to unify against the signature's parameters, in
    /// declaration order, after the receiver has been split off.
    pub fn arguments(&self) -> Vec<Argument<E>> {
        match self {
            CallSite::Call { arguments, .. } => arguments.clone(),
            CallSite::Subscript { index, .. } => vec![Argument::Positional(index.clone())],
            CallSite::BinaryOp {
                left,
                right,
                reflected,
            } => vec![Argument::Positional(if *reflected {
                left.clone()
            } else {
                right.clone()
            })],
        }
    }

    /// Explicit (non-`*args`/`**kwargs`) positional arguments, the slice the
    /// matcher walks pairwise against declared parameters before the
    /// container-parameter pass.
    pub fn filter_explicit_positional(&self) -> Vec<E> {
        self.arguments()
            .into_iter()
            .filter_map(|a| match a {
                Argument::Positional(e) => Some(e),
                Argument::Keyword(..) => None,
            })
            .collect()
    }
}
