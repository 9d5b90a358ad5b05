// Copyright 2026 the class_list Authors
// SPDX-License-Identifier: Apache-2.0

//! Tests for batch modification with [`ClassModifier`]s and [`ClassIter`]s.

use class_list::{ClassModifier, ClassName, add_classes, apply_modifiers, remove_classes};

mod common;
use common::*;

#[test]
fn modifiers_apply_in_order_with_one_write() {
    let mut element = TestElement::new("a b");
    let changed = apply_modifiers(
        &mut element,
        [
            ClassModifier::Add("c".into()),
            ClassModifier::Remove("a".into()),
            ClassModifier::Add("a".into()),
            ClassModifier::Add("c".into()),
        ],
    );
    assert!(changed);
    assert_eq!(element.class_attribute, "b c a");
    assert_eq!(element.writes(), ["b c a"]);
}

#[test]
fn later_remove_wins() {
    let mut element = TestElement::new("x");
    let changed = apply_modifiers(
        &mut element,
        [ClassModifier::Add("y".into()), ClassModifier::Remove("y".into())],
    );
    // Added then removed again, nothing to write
    assert!(!changed);
    assert!(element.writes().is_empty());
}

#[test]
fn no_write_without_change() {
    let mut element = TestElement::new("a  b");
    assert!(!add_classes(&mut element, &["a", "b"]));
    assert!(!remove_classes(&mut element, &vec!["c"]));
    assert!(!apply_modifiers(&mut element, []));
    assert!(element.writes().is_empty());
    assert_eq!(element.class_attribute, "a  b");
}

#[test]
fn class_sources() {
    let mut classes = String::new();
    let optional: Option<&'static str> = None;
    add_classes(&mut classes, &optional);
    assert_eq!(classes, "");

    add_classes(&mut classes, &Some(String::from("one")));
    add_classes(&mut classes, &vec!["two", "three"]);
    add_classes(&mut classes, &[ClassName::new("four").unwrap()]);
    assert_eq!(classes, "one two three four");

    remove_classes(&mut classes, &["one", "three"]);
    assert_eq!(classes, "two four");
}

#[test]
fn removing_collapses_whitespace() {
    let mut classes = String::from("\ta  b\nc ");
    remove_classes(&mut classes, &["b"]);
    assert_eq!(classes, "a c");
}

#[test]
fn empty_add_is_a_no_op() {
    let mut element = TestElement::new("a b");
    assert!(!apply_modifiers(&mut element, [ClassModifier::Add("".into())]));
    assert!(!apply_modifiers(&mut element, [ClassModifier::Add("".into())]));
    assert!(element.writes().is_empty());
    assert_eq!(element.class_attribute, "a b");
}

#[test]
fn add_with_whitespace_adds_each_token_once() {
    let mut element = TestElement::new("a");
    assert!(apply_modifiers(&mut element, [ClassModifier::Add("b c".into())]));
    assert!(!apply_modifiers(&mut element, [ClassModifier::Add("c b".into())]));
    assert_eq!(element.writes(), ["a b c"]);
}
