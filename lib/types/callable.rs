/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;
use std::fmt::Display;

use parse_display::Display as DeriveDisplay;

use crate::types::types::Type;
use crate::util::display::commas_iter;

/// The container kind of a parameter. `Normal` covers both positional and
/// keyword parameters equally for this engine's purposes - the matcher
/// compares positional types up to the shorter signature's length and
/// otherwise leaves keyword/star binding to the call unifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, DeriveDisplay)]
pub enum ParamKind {
    #[display("")]
    Normal,
    #[display("*")]
    VarArg,
    #[display("**")]
    KwArg,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub name: Option<Box<str>>,
    pub ty: Option<Type>,
    pub kind: ParamKind,
}

impl Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.kind;
        match (&self.name, &self.ty) {
            (Some(name), Some(ty)) => write!(f, "{prefix}{name}: {ty}"),
            (Some(name), None) => write!(f, "{prefix}{name}"),
            (None, Some(ty)) => write!(f, "{prefix}{ty}"),
            (None, None) => write!(f, "{prefix}_"),
        }
    }
}

impl Param {
    pub fn positional(name: impl Into<Box<str>>, ty: Option<Type>) -> Self {
        Self {
            name: Some(name.into()),
            ty,
            kind: ParamKind::Normal,
        }
    }

    pub fn var_arg(ty: Option<Type>) -> Self {
        Self {
            name: None,
            ty,
            kind: ParamKind::VarArg,
        }
    }

    pub fn kw_arg(ty: Option<Type>) -> Self {
        Self {
            name: None,
            ty,
            kind: ParamKind::KwArg,
        }
    }
}

/// A callable signature. `params = None` means "any signature" (matches
/// anything in the callable-vs-callable rule); `ret = None` means the return
/// type is unannotated (unknown).
#[derive(Clone, Debug, PartialEq)]
pub struct Callable {
    pub params: Option<Vec<Param>>,
    pub ret: Option<Box<Type>>,
    /// `false` marks a value that looks callable-shaped (e.g. a non-callable
    /// wrapper around a function) but should be treated as not callable by
    /// `isCallable`.
    pub is_callable: bool,
}

impl Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.params {
            Some(params) => write!(f, "({})", commas_iter(|| params.iter()))?,
            None => write!(f, "(...)")?,
        }
        match &self.ret {
            Some(ret) => write!(f, " -> {ret}"),
            None => write!(f, " -> Unknown"),
        }
    }
}

impl Callable {
    pub fn new(params: Option<Vec<Param>>, ret: Option<Type>) -> Self {
        Self {
            params,
            ret: ret.map(Box::new),
            is_callable: true,
        }
    }

    pub fn not_callable(params: Option<Vec<Param>>, ret: Option<Type>) -> Self {
        Self {
            params,
            ret: ret.map(Box::new),
            is_callable: false,
        }
    }

    pub fn to_type(self) -> Type {
        Type::Callable(Box::new(self))
    }
}
