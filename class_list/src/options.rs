// Copyright 2026 the class_list Authors
// SPDX-License-Identifier: Apache-2.0

use crate::class_name::{contains, validate};
use crate::classes::{add_class_with, remove_class, toggle_class_with};
use crate::{ClassAttribute, ClassError};

/// How class names passed to [`ClassListOptions`] are checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validation {
    /// Class names are used as-is. Names that [`Strict`](Self::Strict) would reject are logged as a warning.
    #[default]
    Lenient,
    /// Empty class names and names containing whitespace are rejected with a [`ClassError`],
    /// without touching the element.
    Strict,
}

/// What [`ClassListOptions::add_class`] does when the class attribute holds no tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyAttribute {
    /// The attribute is replaced by the class name alone.
    #[default]
    Normalize,
    /// The class name is appended after a separator anyway, e.g. `""` becomes `" open"`.
    ///
    /// This matches what naive split/push/join helpers produce.
    KeepSeparator,
}

/// Configures validation and formatting of class list operations.
///
/// The free functions ([`add_class`](crate::add_class) etc.) behave like the default options,
/// except that they never log or fail.
///
/// ```
/// use class_list::{ClassError, ClassListOptions, Validation};
///
/// let options = ClassListOptions::new().validation(Validation::Strict);
/// let mut classes = String::from("active");
/// assert_eq!(options.add_class(&mut classes, "open"), Ok(()));
/// assert_eq!(options.add_class(&mut classes, ""), Err(ClassError::Empty));
/// assert_eq!(classes, "active open");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassListOptions {
    validation: Validation,
    empty_attribute: EmptyAttribute,
}

impl ClassListOptions {
    /// Lenient validation, normalized empty attributes.
    pub const fn new() -> Self {
        Self {
            validation: Validation::Lenient,
            empty_attribute: EmptyAttribute::Normalize,
        }
    }

    /// Builder-style method for setting the [`Validation`] mode.
    pub const fn validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Builder-style method for setting the [`EmptyAttribute`] policy.
    pub const fn empty_attribute(mut self, empty_attribute: EmptyAttribute) -> Self {
        self.empty_attribute = empty_attribute;
        self
    }

    /// The configured [`Validation`] mode.
    pub const fn validation_mode(&self) -> Validation {
        self.validation
    }

    /// The configured [`EmptyAttribute`] policy.
    pub const fn empty_attribute_policy(&self) -> EmptyAttribute {
        self.empty_attribute
    }

    fn check(&self, class_name: &str) -> Result<(), ClassError> {
        match (self.validation, validate(class_name)) {
            (_, Ok(())) => Ok(()),
            (Validation::Strict, Err(err)) => Err(err),
            (Validation::Lenient, Err(err)) => {
                tracing::warn!(%err, "Using invalid class name as-is");
                Ok(())
            }
        }
    }

    /// See [`has_class`](crate::has_class).
    pub fn has_class<E: ClassAttribute + ?Sized>(
        &self,
        element: &E,
        class_name: &str,
    ) -> Result<bool, ClassError> {
        self.check(class_name)?;
        Ok(contains(&element.class_attribute(), class_name))
    }

    /// See [`add_class`](crate::add_class), the empty attribute is handled according to [`EmptyAttribute`].
    pub fn add_class<E: ClassAttribute + ?Sized>(
        &self,
        element: &mut E,
        class_name: &str,
    ) -> Result<(), ClassError> {
        self.check(class_name)?;
        add_class_with(element, class_name, self.empty_attribute);
        Ok(())
    }

    /// See [`remove_class`](crate::remove_class).
    pub fn remove_class<E: ClassAttribute + ?Sized>(
        &self,
        element: &mut E,
        class_name: &str,
    ) -> Result<bool, ClassError> {
        self.check(class_name)?;
        Ok(remove_class(element, class_name))
    }

    /// See [`toggle_class`](crate::toggle_class).
    pub fn toggle_class<E: ClassAttribute + ?Sized>(
        &self,
        element: &mut E,
        class_name: &str,
    ) -> Result<bool, ClassError> {
        self.check(class_name)?;
        Ok(toggle_class_with(element, class_name, self.empty_attribute))
    }
}
