/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Uniplate-style traversal: `Visit`/`VisitMut` let `collect_generics` and
//! `substitute` ask "what are my `To`-typed children" once per `Type`
//! variant, instead of duplicating that recursion in every caller.
//!
//! Based on <https://ndmitchell.com/#uniplate_30_sep_2007>, trimmed down from
//! the AST-oriented version this was adapted from: no `CONTAINS`
//! compile-time pruning, just a runtime `Any` downcast in `visit0`/`visit0_mut`
//! to detect `To == Self`. The type tree here is small enough that the extra
//! constant-folding isn't worth the complexity.

use std::any::Any;

/// Should call `f` on every `To` reachable as a direct or indirect child of `self`.
pub trait Visit<To: 'static = Self>: 'static {
    fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a To));

    /// Like `visit`, but if `To == Self`, call `f` on `self` directly.
    fn visit0<'a>(&'a self, f: &mut dyn FnMut(&'a To)) {
        if let Some(to) = (self as &dyn Any).downcast_ref::<To>() {
            f(to);
        } else {
            self.visit(f)
        }
    }
}

/// Like `Visit`, but mutably.
pub trait VisitMut<To: 'static = Self>: 'static {
    fn visit_mut(&mut self, f: &mut dyn FnMut(&mut To));

    fn visit0_mut(&mut self, f: &mut dyn FnMut(&mut To)) {
        if let Some(to) = (self as &mut dyn Any).downcast_mut::<To>() {
            f(to);
        } else {
            self.visit_mut(f)
        }
    }
}

macro_rules! visit_nothing {
    ($t:ty) => {
        impl<To: 'static> Visit<To> for $t {
            fn visit<'a>(&'a self, _: &mut dyn FnMut(&'a To)) {}
        }

        impl<To: 'static> VisitMut<To> for $t {
            fn visit_mut(&mut self, _: &mut dyn FnMut(&mut To)) {}
        }
    };
}

visit_nothing!(bool);
visit_nothing!(i32);
visit_nothing!(u32);
visit_nothing!(u64);
visit_nothing!(usize);
visit_nothing!(());
visit_nothing!(Box<str>);
visit_nothing!(String);

impl<To: 'static, T: Visit<To>> Visit<To> for Vec<T> {
    fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a To)) {
        for item in self {
            item.visit0(f);
        }
    }
}

impl<To: 'static, T: VisitMut<To>> VisitMut<To> for Vec<T> {
    fn visit_mut(&mut self, f: &mut dyn FnMut(&mut To)) {
        for item in self {
            item.visit0_mut(f);
        }
    }
}

impl<To: 'static, T: Visit<To>> Visit<To> for Option<T> {
    fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a To)) {
        if let Some(item) = self {
            item.visit0(f)
        }
    }
}

impl<To: 'static, T: VisitMut<To>> VisitMut<To> for Option<T> {
    fn visit_mut(&mut self, f: &mut dyn FnMut(&mut To)) {
        if let Some(item) = self {
            item.visit0_mut(f);
        }
    }
}

impl<To: 'static, T: Visit<To>> Visit<To> for Box<T> {
    fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a To)) {
        (**self).visit0(f)
    }
}

impl<To: 'static, T: VisitMut<To>> VisitMut<To> for Box<T> {
    fn visit_mut(&mut self, f: &mut dyn FnMut(&mut To)) {
        (**self).visit0_mut(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit() {
        let mut info: (Vec<i32>, Option<i32>, Vec<Option<i32>>) =
            (vec![1, 2, 3], Some(4i32), vec![Some(5i32)]);
        let mut collect = Vec::new();
        info.0.visit0(&mut |x: &i32| collect.push(*x));
        info.1.visit0(&mut |x: &i32| collect.push(*x));
        info.2.visit0(&mut |x: &i32| collect.push(*x));
        assert_eq!(&collect, &[1i32, 2, 3, 4, 5]);

        info.0.visit0_mut(&mut |x: &mut i32| *x *= 2);
        let mut collect = Vec::new();
        info.0.visit0(&mut |x: &i32| collect.push(*x));
        assert_eq!(&collect, &[2i32, 4, 6]);
    }
}
