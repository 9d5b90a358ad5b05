// Copyright 2026 the class_list Authors
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use crate::ClassName;

type CowStr = Cow<'static, str>;

#[derive(Debug, PartialEq, Eq, Clone)]
/// A modifier to either add or remove a class of an element.
///
/// See [`apply_modifiers`](crate::apply_modifiers).
pub enum ClassModifier {
    /// Adds the class, unless it is already present.
    Add(CowStr),
    /// Removes every occurrence of the class.
    Remove(CowStr),
}

impl ClassModifier {
    /// Returns the class name of this modifier.
    pub fn name(&self) -> &CowStr {
        let (Self::Add(name) | Self::Remove(name)) = self;
        name
    }
}

/// Types implementing this trait can be used as a batch of class names, see [`add_classes`](crate::add_classes).
pub trait ClassIter {
    /// Returns an iterator of class compliant strings (e.g. the strings aren't supposed to contain spaces).
    fn class_iter(&self) -> impl Iterator<Item = CowStr>;

    /// Returns an iterator of additive classes, i.e. all classes of this iterator are added to the current element.
    fn add_class_iter(&self) -> impl Iterator<Item = ClassModifier> {
        self.class_iter().map(ClassModifier::Add)
    }

    /// Returns an iterator of to remove classes, i.e. all classes of this iterator are removed from the current element.
    fn remove_class_iter(&self) -> impl Iterator<Item = ClassModifier> {
        self.class_iter().map(ClassModifier::Remove)
    }
}

impl<C: ClassIter> ClassIter for Option<C> {
    fn class_iter(&self) -> impl Iterator<Item = CowStr> {
        self.iter().flat_map(|c| c.class_iter())
    }
}

impl ClassIter for String {
    fn class_iter(&self) -> impl Iterator<Item = CowStr> {
        std::iter::once(self.clone().into())
    }
}

impl ClassIter for &'static str {
    fn class_iter(&self) -> impl Iterator<Item = CowStr> {
        std::iter::once(CowStr::from(*self))
    }
}

impl ClassIter for CowStr {
    fn class_iter(&self) -> impl Iterator<Item = CowStr> {
        std::iter::once(self.clone())
    }
}

impl ClassIter for ClassName {
    fn class_iter(&self) -> impl Iterator<Item = CowStr> {
        std::iter::once(self.clone().into())
    }
}

impl<C: ClassIter> ClassIter for Vec<C> {
    fn class_iter(&self) -> impl Iterator<Item = CowStr> {
        self.iter().flat_map(|c| c.class_iter())
    }
}

impl<C: ClassIter, const N: usize> ClassIter for [C; N] {
    fn class_iter(&self) -> impl Iterator<Item = CowStr> {
        self.iter().flat_map(|c| c.class_iter())
    }
}
