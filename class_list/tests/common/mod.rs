// Copyright 2026 the class_list Authors
// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code, reason = "Not every test binary uses every helper")]

use std::borrow::Cow;
use std::cell::RefCell;

use class_list::ClassAttribute;

#[derive(PartialEq, Eq, Debug, Clone)]
pub(crate) enum Operation {
    Read,
    Write(String),
}

/// An element which records every access to its class attribute.
#[derive(Debug, Default)]
pub(crate) struct TestElement {
    pub class_attribute: String,
    pub operations: RefCell<Vec<Operation>>,
}

impl TestElement {
    pub(crate) fn new(class_attribute: &str) -> Self {
        Self {
            class_attribute: class_attribute.to_owned(),
            operations: RefCell::default(),
        }
    }

    pub(crate) fn writes(&self) -> Vec<String> {
        self.operations
            .borrow()
            .iter()
            .filter_map(|op| match op {
                Operation::Write(value) => Some(value.clone()),
                Operation::Read => None,
            })
            .collect()
    }
}

impl ClassAttribute for TestElement {
    fn class_attribute(&self) -> Cow<'_, str> {
        self.operations.borrow_mut().push(Operation::Read);
        Cow::Borrowed(&self.class_attribute)
    }

    fn set_class_attribute(&mut self, value: &str) {
        self.operations
            .get_mut()
            .push(Operation::Write(value.to_owned()));
        self.class_attribute = value.to_owned();
    }
}

pub(crate) fn init_tracing() {
    let _ = class_list::tracing_backend::try_init_test_tracing();
}
