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
use typesubset::types::union::Union;
use typesubset::Type;

fn instance(class: &ClassId) -> Type {
    ClassType::instance(class.dupe()).to_type()
}

#[test]
fn union_left_distributes_over_actual() {
    common::init_tracing();
    let mut reg = common::registry();
    let a = ClassId::new("A");
    let b = ClassId::new("B");
    reg.declare(a.dupe());
    reg.declare(b.dupe());

    let object = instance(&reg.object_class_id());
    let actual = Union::new(vec1::vec1![instance(&a), instance(&b)]).to_type();

    let mut sigma = Substitutions::new();
    assert!(match_types(&object, &actual, &reg, &reg, &mut sigma, true));
}

#[test]
fn union_right_distributes_some_member_matches() {
    common::init_tracing();
    let mut reg = common::registry();
    let a = ClassId::new("A");
    let b = ClassId::new("B");
    reg.declare(a.dupe());
    reg.declare(b.dupe());

    let expected = Union::new(vec1::vec1![instance(&a), instance(&b)]).to_type();
    let mut sigma = Substitutions::new();
    assert!(match_types(&expected, &instance(&b), &reg, &reg, &mut sigma, true));

    let c = ClassId::new("C");
    reg.declare(c.dupe());
    let mut sigma2 = Substitutions::new();
    assert!(!match_types(&expected, &instance(&c), &reg, &reg, &mut sigma2, true));
}

#[test]
fn weak_union_can_be_stripped() {
    let a = ClassId::new("A");
    let union = Union::weak(vec1::vec1![instance(&a), Type::Unknown]);
    assert!(union.weak);
    let stripped = union.stripped();
    assert!(!stripped.weak);
    assert_eq!(stripped.members, union.members);
}

#[test]
fn fixed_tuple_union_widening_end_to_end() {
    use typesubset::types::tuple::Tuple;
    common::init_tracing();
    let mut reg = common::registry();
    let tuple_class = ClassId::new("tuple");
    let int_c = ClassId::new("int");
    let str_c = ClassId::new("str");
    reg.declare(tuple_class.dupe());
    reg.declare(int_c.dupe());
    reg.declare(str_c.dupe());

    // expected: tuple[int, str]
    let expected = Tuple::fixed(
        tuple_class.dupe(),
        vec![instance(&int_c), instance(&str_c)],
    )
    .to_type();
    // actual: tuple[int, str] | tuple[int, str] -- a union whose members are
    // each shaped like the expected tuple; widening should succeed element
    // by element rather than requiring identical members.
    let actual = Union::new(vec1::vec1![
        Tuple::fixed(tuple_class.dupe(), vec![instance(&int_c), instance(&str_c)]).to_type(),
        Tuple::fixed(tuple_class, vec![instance(&int_c), instance(&str_c)]).to_type(),
    ])
    .to_type();

    let mut sigma = Substitutions::new();
    assert!(match_types(&expected, &actual, &reg, &reg, &mut sigma, true));
}
