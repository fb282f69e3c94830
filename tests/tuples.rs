/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

mod common;

use dupe::Dupe;
use typesubset::match_types;
use typesubset::substitute::Substitutions;
use typesubset::types::class::ClassId;
use typesubset::types::class::ClassType;
use typesubset::types::collection::Collection;
use typesubset::types::tuple::Tuple;
use typesubset::Type;

fn instance(class: &ClassId) -> Type {
    ClassType::instance(class.dupe()).to_type()
}

#[test]
fn scenario_list_of_int_matches_fixed_tuple() {
    let mut reg = common::registry();
    let list = ClassId::new("list");
    let tuple_class = ClassId::new("tuple");
    let int_c = ClassId::new("int");
    reg.declare(list.dupe());
    reg.declare(tuple_class.dupe());
    reg.declare(int_c.dupe());

    let expected = Collection::new(ClassType::instance(list), vec![instance(&int_c)]).to_type();
    let actual = Tuple::fixed(
        tuple_class,
        vec![instance(&int_c), instance(&int_c), instance(&int_c)],
    )
    .to_type();

    let mut sigma = Substitutions::new();
    assert!(match_types(&expected, &actual, &reg, &reg, &mut sigma, true));
}

#[test]
fn scenario_fixed_arity_mismatch_is_false() {
    let mut reg = common::registry();
    let tuple_class = ClassId::new("tuple");
    let int_c = ClassId::new("int");
    let str_c = ClassId::new("str");
    reg.declare(tuple_class.dupe());
    reg.declare(int_c.dupe());
    reg.declare(str_c.dupe());

    let expected =
        Tuple::fixed(tuple_class.dupe(), vec![instance(&int_c), instance(&str_c)]).to_type();
    let actual = Tuple::fixed(
        tuple_class,
        vec![instance(&int_c), instance(&str_c), instance(&int_c)],
    )
    .to_type();

    let mut sigma = Substitutions::new();
    assert!(!match_types(&expected, &actual, &reg, &reg, &mut sigma, true));
}

#[test]
fn scenario_fixed_expected_vs_homogeneous_actual_is_false() {
    let mut reg = common::registry();
    let tuple_class = ClassId::new("tuple");
    let int_c = ClassId::new("int");
    let str_c = ClassId::new("str");
    reg.declare(tuple_class.dupe());
    reg.declare(int_c.dupe());
    reg.declare(str_c.dupe());

    let expected =
        Tuple::fixed(tuple_class.dupe(), vec![instance(&int_c), instance(&str_c)]).to_type();
    let actual = Tuple::homogeneous(tuple_class, instance(&int_c)).to_type();

    let mut sigma = Substitutions::new();
    assert!(!match_types(&expected, &actual, &reg, &reg, &mut sigma, true));
}

#[test]
fn homogeneous_expected_accepts_any_length_fixed_actual() {
    let mut reg = common::registry();
    let tuple_class = ClassId::new("tuple");
    let int_c = ClassId::new("int");
    let bool_c = ClassId::new("bool");
    reg.declare(tuple_class.dupe());
    reg.declare(int_c.dupe());
    reg.declare(bool_c.dupe());

    let expected = Tuple::homogeneous(tuple_class.dupe(), instance(&int_c)).to_type();
    let actual = Tuple::fixed(
        tuple_class,
        vec![instance(&bool_c), instance(&bool_c), instance(&bool_c)],
    )
    .to_type();

    let mut sigma = Substitutions::new();
    assert!(match_types(&expected, &actual, &reg, &reg, &mut sigma, true));
}

#[test]
fn homogeneous_vs_homogeneous_recurses_on_element() {
    let mut reg = common::registry();
    let tuple_class = ClassId::new("tuple");
    let int_c = ClassId::new("int");
    let bool_c = ClassId::new("bool");
    let str_c = ClassId::new("str");
    reg.declare(tuple_class.dupe());
    reg.declare(int_c.dupe());
    reg.declare(bool_c.dupe());
    reg.declare(str_c.dupe());

    let expected = Tuple::homogeneous(tuple_class.dupe(), instance(&int_c)).to_type();
    let ok_actual = Tuple::homogeneous(tuple_class.dupe(), instance(&bool_c)).to_type();
    let bad_actual = Tuple::homogeneous(tuple_class, instance(&str_c)).to_type();

    let mut sigma = Substitutions::new();
    assert!(match_types(&expected, &ok_actual, &reg, &reg, &mut sigma, true));
    let mut sigma2 = Substitutions::new();
    assert!(!match_types(&expected, &bad_actual, &reg, &reg, &mut sigma2, true));
}
