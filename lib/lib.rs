/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! A structural/nominal type compatibility and generic-unification engine
//! for a gradually-typed scripting language: given an *expected* and
//! *actual* type, decide whether a value of the actual type may be used
//! where the expected type is required, unifying generic type variables
//! along the way.
//!
//! The engine never touches source text, an AST, or a symbol table directly
//! - those live behind the [`context`] and [`registry`] traits, which a host
//! implements over its own compiler data structures. This crate owns only
//! the type model ([`types`]) and the algorithms over it: the matcher
//! ([`solver::subset`]), the substitution engine ([`substitute`]), the
//! generic-variable collector ([`generics`]), and the call-site unifier
//! ([`solver::unify`]).

pub mod callsite;
pub mod context;
pub mod error;
pub mod generics;
pub mod numeric;
pub mod predicates;
pub mod registry;
pub mod solver;
pub mod substitute;
pub mod types;
mod util;

pub use context::EvalContext;
pub use context::MemberLookup;
pub use context::TypeProvider;
pub use error::TypeSubsetError;
pub use generics::collect_generics;
pub use generics::collect_generics_of;
pub use generics::has_generics;
pub use predicates::is_callable;
pub use predicates::is_unknown;
pub use predicates::Callability;
pub use registry::BuiltinCache;
pub use registry::ClassRegistry;
pub use solver::subset::match_types;
pub use solver::unify::unify_generic_call;
pub use solver::unify::unify_receiver;
pub use substitute::substitute;
pub use substitute::Substitutions;
pub use types::types::Type;
