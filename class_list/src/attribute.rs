// Copyright 2026 the class_list Authors
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

/// Read and write access to the class attribute of an element.
///
/// The attribute holds an ordered, whitespace-separated list of class tokens.
/// This is the only capability the functions in this crate need, so they can be used
/// with DOM nodes (see the `web` feature), virtual DOM nodes or plain strings alike.
pub trait ClassAttribute {
    /// Returns the current value of the class attribute.
    fn class_attribute(&self) -> Cow<'_, str>;

    /// Replaces the class attribute with `value`.
    fn set_class_attribute(&mut self, value: &str);
}

impl ClassAttribute for String {
    fn class_attribute(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    fn set_class_attribute(&mut self, value: &str) {
        self.clear();
        self.push_str(value);
    }
}

impl<E: ClassAttribute + ?Sized> ClassAttribute for &mut E {
    fn class_attribute(&self) -> Cow<'_, str> {
        (**self).class_attribute()
    }

    fn set_class_attribute(&mut self, value: &str) {
        (**self).set_class_attribute(value);
    }
}

impl<E: ClassAttribute + ?Sized> ClassAttribute for Box<E> {
    fn class_attribute(&self) -> Cow<'_, str> {
        (**self).class_attribute()
    }

    fn set_class_attribute(&mut self, value: &str) {
        (**self).set_class_attribute(value);
    }
}
