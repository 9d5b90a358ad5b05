// Copyright 2026 the class_list Authors
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// The reason a string was rejected as a class name.
///
/// Only produced by [`ClassName::new`](crate::ClassName::new) and by
/// [`ClassListOptions`](crate::ClassListOptions) configured with
/// [`Validation::Strict`](crate::Validation::Strict).
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ClassError {
    /// The class name was the empty string.
    #[error("class name must not be empty")]
    Empty,
    /// The class name contained at least one whitespace character, so it would be split into several tokens.
    #[error("class name {0:?} contains whitespace")]
    ContainsWhitespace(String),
}

/// An Error indicating that a tracing subscriber has been set before.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("A tracing subscriber has been set before.")]
pub struct TracingSubscriberHasBeenSetError;
