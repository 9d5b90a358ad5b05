// Copyright 2026 the class_list Authors
// SPDX-License-Identifier: Apache-2.0

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// LINEBENDER LINT SET - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(clippy::print_stdout, clippy::print_stderr)]

mod attribute;
mod class_name;
mod classes;
mod error;
mod modifier;
mod options;
#[cfg(feature = "web")]
mod web;

pub mod tracing_backend;

pub use attribute::ClassAttribute;
pub use class_name::ClassName;
pub use classes::{
    add_class, add_classes, apply_modifiers, classes, has_class, remove_class, remove_classes,
    toggle_class,
};
pub use error::{ClassError, TracingSubscriberHasBeenSetError};
pub use modifier::{ClassIter, ClassModifier};
pub use options::{ClassListOptions, EmptyAttribute, Validation};
