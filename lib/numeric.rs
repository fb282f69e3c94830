/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The numeric promotion lattice: `bool ⊂ int ⊂ long ⊂ float ⊂ complex ⊂
//! number`, plus the `numbers` ABC surface names (`Integral`, `Real`,
//! `Complex`, `Number`) each matching its corresponding concrete prefix of
//! the chain. Hard-coded by name, per the matcher's contract that an
//! unrecognized numeric name degrades to equality rather than erroring.

use enum_iterator::all;
use enum_iterator::Sequence;

/// The concrete rungs of the numeric tower, in ascending promotion order.
/// `Sequence` lets us derive a name→rung lookup by walking every variant
/// rather than hand-listing ranks twice (once here, once in a match arm).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Sequence)]
enum Rung {
    Bool,
    Int,
    Long,
    Float,
    Complex,
    Number,
}

impl Rung {
    fn name(self) -> &'static str {
        match self {
            Rung::Bool => "bool",
            Rung::Int => "int",
            Rung::Long => "long",
            Rung::Float => "float",
            Rung::Complex => "complex",
            Rung::Number => "number",
        }
    }

    fn of(name: &str) -> Option<Self> {
        all::<Rung>().find(|rung| rung.name() == name)
    }
}

/// The highest concrete rung an ABC surface name admits.
fn abc_ceiling(name: &str) -> Option<Rung> {
    match name {
        "Integral" => Some(Rung::Long),
        "Real" => Some(Rung::Float),
        "Complex" => Some(Rung::Complex),
        "Number" => Some(Rung::Number),
        _ => None,
    }
}

/// `true` if a value named `actual` is promotable to a value named
/// `expected` under the numeric tower. Called only once the matcher has
/// already established both sides are (unequal-named) class types; equal
/// names are handled here too for convenience.
pub fn promotes(expected: &str, actual: &str) -> bool {
    if expected == actual {
        return true;
    }
    let Some(actual_rung) = Rung::of(actual) else {
        return false;
    };
    if let Some(expected_rung) = Rung::of(expected) {
        return expected_rung >= actual_rung;
    }
    if let Some(ceiling) = abc_ceiling(expected) {
        return ceiling >= actual_rung;
    }
    false
}
