// Copyright 2026 the class_list Authors
// SPDX-License-Identifier: Apache-2.0

use crate::class_name::{contains, tokens};
use crate::{ClassAttribute, ClassIter, ClassModifier, EmptyAttribute};

/// Returns whether `class_name` is one of the whitespace-separated tokens of the class attribute of `element`.
///
/// Tokens are compared by exact string equality. No pattern is built from `class_name`,
/// so characters like `.` or `+` only ever match themselves.
///
/// ```
/// use class_list::has_class;
///
/// let classes = String::from("foo foobar");
/// assert!(has_class(&classes, "foo"));
/// assert!(!has_class(&classes, "bar"));
/// ```
pub fn has_class<E: ClassAttribute + ?Sized>(element: &E, class_name: &str) -> bool {
    contains(&element.class_attribute(), class_name)
}

/// Appends `class_name` to the class attribute of `element`, unless it is already present.
///
/// When the class is already present, the attribute is not written at all.
/// An empty (or whitespace only) attribute is replaced by `class_name` alone.
///
/// ```
/// use class_list::add_class;
///
/// let mut classes = String::from("active");
/// add_class(&mut classes, "open");
/// add_class(&mut classes, "open");
/// assert_eq!(classes, "active open");
/// ```
pub fn add_class<E: ClassAttribute + ?Sized>(element: &mut E, class_name: &str) {
    add_class_with(element, class_name, EmptyAttribute::Normalize);
}

pub(crate) fn add_class_with<E: ClassAttribute + ?Sized>(
    element: &mut E,
    class_name: &str,
    empty_attribute: EmptyAttribute,
) {
    let current = element.class_attribute();
    if contains(&current, class_name) {
        return;
    }
    let updated = append(&current, class_name, empty_attribute);
    drop(current);
    tracing::trace!(class_name, "adding class");
    element.set_class_attribute(&updated);
}

fn append(current: &str, class_name: &str, empty_attribute: EmptyAttribute) -> String {
    if empty_attribute == EmptyAttribute::Normalize && tokens(current).next().is_none() {
        return class_name.to_owned();
    }
    let mut updated = String::with_capacity(current.len() + 1 + class_name.len());
    updated.push_str(current);
    updated.push(' ');
    updated.push_str(class_name);
    updated
}

/// Removes every occurrence of `class_name` from the class attribute of `element`.
///
/// Returns whether anything was removed. The attribute is only written when it was,
/// in which case the remaining tokens keep their order and are joined by single spaces.
pub fn remove_class<E: ClassAttribute + ?Sized>(element: &mut E, class_name: &str) -> bool {
    let current = element.class_attribute();
    if !tokens(&current).any(|token| token == class_name) {
        return false;
    }
    let updated = join(tokens(&current).filter(|token| *token != class_name));
    drop(current);
    tracing::trace!(class_name, "removing class");
    element.set_class_attribute(&updated);
    true
}

/// Removes `class_name` when present, adds it otherwise.
///
/// Returns whether the class is present afterwards, as reported by [`has_class`].
pub fn toggle_class<E: ClassAttribute + ?Sized>(element: &mut E, class_name: &str) -> bool {
    toggle_class_with(element, class_name, EmptyAttribute::Normalize)
}

pub(crate) fn toggle_class_with<E: ClassAttribute + ?Sized>(
    element: &mut E,
    class_name: &str,
    empty_attribute: EmptyAttribute,
) -> bool {
    if has_class(&*element, class_name) {
        remove_class(element, class_name);
    } else {
        add_class_with(element, class_name, empty_attribute);
    }
    // Names which aren't single tokens can't always be removed again
    has_class(&*element, class_name)
}

/// Returns the non-empty tokens of the class attribute of `element`, in order.
///
/// The tokens are collected, as the attribute may not be borrowable from `element`.
pub fn classes<E: ClassAttribute + ?Sized>(element: &E) -> Vec<String> {
    tokens(&element.class_attribute())
        .map(str::to_owned)
        .collect()
}

/// Applies `modifiers` in order to the class attribute of `element`.
///
/// [`ClassModifier::Add`] appends each token of its name unless it is present already,
/// so an empty name adds nothing. [`ClassModifier::Remove`] drops every occurrence of the class.
/// The attribute is written at most once, and only if the resulting tokens differ,
/// in which case it is rewritten with single spaces between tokens.
///
/// Returns whether the attribute was written.
pub fn apply_modifiers<E, I>(element: &mut E, modifiers: I) -> bool
where
    E: ClassAttribute + ?Sized,
    I: IntoIterator<Item = ClassModifier>,
{
    let current = element.class_attribute();
    let initial: Vec<&str> = tokens(&current).collect();
    let mut classes = initial.clone();
    let modifiers: Vec<ClassModifier> = modifiers.into_iter().collect();
    for modifier in &modifiers {
        match modifier {
            ClassModifier::Add(class_name) => {
                for token in tokens(class_name) {
                    if !classes.contains(&token) {
                        classes.push(token);
                    }
                }
            }
            ClassModifier::Remove(class_name) => {
                classes.retain(|class| *class != &**class_name);
            }
        }
    }
    if classes == initial {
        return false;
    }
    let before = initial.len();
    let after = classes.len();
    let updated = join(classes.into_iter());
    drop(current);
    tracing::trace!(before, after, "applying class modifiers");
    element.set_class_attribute(&updated);
    true
}

/// Adds every class of `classes`, see [`apply_modifiers`].
pub fn add_classes<E: ClassAttribute + ?Sized>(
    element: &mut E,
    classes: &impl ClassIter,
) -> bool {
    apply_modifiers(element, classes.add_class_iter())
}

/// Removes every class of `classes`, see [`apply_modifiers`].
pub fn remove_classes<E: ClassAttribute + ?Sized>(
    element: &mut E,
    classes: &impl ClassIter,
) -> bool {
    apply_modifiers(element, classes.remove_class_iter())
}

// intersperse would be the right way to do this, but it's unstable in std
fn join<'a>(classes: impl Iterator<Item = &'a str>) -> String {
    let mut joined = String::new();
    for (idx, class) in classes.enumerate() {
        if idx != 0 {
            joined.push(' ');
        }
        joined += class;
    }
    joined
}
