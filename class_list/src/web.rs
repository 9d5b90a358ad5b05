// Copyright 2026 the class_list Authors
// SPDX-License-Identifier: Apache-2.0

//! [`ClassAttribute`] for DOM elements.

use std::borrow::Cow;

use wasm_bindgen::{JsCast, UnwrapThrowExt};

use crate::ClassAttribute;

// Svg elements do have issues with className, see https://developer.mozilla.org/en-US/docs/Web/API/Element/className
fn is_svg(element: &web_sys::Element) -> bool {
    element.dyn_ref::<web_sys::SvgElement>().is_some()
}

impl ClassAttribute for web_sys::Element {
    fn class_attribute(&self) -> Cow<'_, str> {
        if is_svg(self) {
            Cow::Owned(
                self.get_attribute(wasm_bindgen::intern("class"))
                    .unwrap_or_default(),
            )
        } else {
            Cow::Owned(self.class_name())
        }
    }

    fn set_class_attribute(&mut self, value: &str) {
        if is_svg(self) {
            self.set_attribute(wasm_bindgen::intern("class"), value)
                .unwrap_throw();
        } else {
            self.set_class_name(value);
        }
    }
}
