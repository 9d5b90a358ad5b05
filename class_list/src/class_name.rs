// Copyright 2026 the class_list Authors
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

use crate::ClassError;

type CowStr = Cow<'static, str>;

/// Whether `c` separates two tokens of a class attribute.
///
/// This is the ECMAScript `\s` set: `WhiteSpace` and `LineTerminator`.
/// Unlike [`char::is_whitespace`] it includes U+FEFF and excludes U+0085.
#[inline]
pub(crate) fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\u{9}'..='\u{d}'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Iterates over the non-empty tokens of a class attribute, in order.
pub(crate) fn tokens(class_attribute: &str) -> impl Iterator<Item = &str> {
    class_attribute
        .split(is_separator)
        .filter(|token| !token.is_empty())
}

/// Whether `class_name` occurs in `class_attribute` bounded by the start or a separator
/// on the left, and by a separator or the end on the right.
///
/// For a valid class name this is plain token equality. Names which aren't single tokens
/// keep the `(^|\s)name(\s|$)` semantics: a name containing a separator is found as a
/// contiguous run of tokens, and an empty name is found in an empty attribute
/// or between two adjacent separators.
pub(crate) fn contains(class_attribute: &str, class_name: &str) -> bool {
    if !class_name.is_empty() && !class_name.contains(is_separator) {
        return tokens(class_attribute).any(|token| token == class_name);
    }
    class_attribute
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(class_attribute.len()))
        .any(|start| {
            let Some(rest) = class_attribute[start..].strip_prefix(class_name) else {
                return false;
            };
            class_attribute[..start]
                .chars()
                .next_back()
                .is_none_or(is_separator)
                && rest.chars().next().is_none_or(is_separator)
        })
}

/// Checks that `class_name` is usable as a single class token.
pub(crate) fn validate(class_name: &str) -> Result<(), ClassError> {
    if class_name.is_empty() {
        Err(ClassError::Empty)
    } else if class_name.contains(is_separator) {
        Err(ClassError::ContainsWhitespace(class_name.to_owned()))
    } else {
        Ok(())
    }
}

/// A single class token: non-empty, without whitespace.
///
/// Comparison is exact string equality; no case folding or trimming is done.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassName(CowStr);

impl ClassName {
    /// Validates `name` as a class token.
    pub fn new(name: impl Into<CowStr>) -> Result<Self, ClassError> {
        let name = name.into();
        validate(&name)?;
        Ok(Self(name))
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the underlying string.
    pub fn into_inner(self) -> CowStr {
        self.0
    }
}

impl Deref for ClassName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl TryFrom<&'static str> for ClassName {
    type Error = ClassError;

    fn try_from(name: &'static str) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl TryFrom<String> for ClassName {
    type Error = ClassError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<ClassName> for CowStr {
    fn from(name: ClassName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_skip_empty_pieces() {
        let tokens: Vec<_> = tokens("  a\tb \n c  ").collect();
        assert_eq!(tokens, ["a", "b", "c"]);
        assert_eq!(super::tokens("").count(), 0);
    }

    #[test]
    fn contains_whole_tokens_only() {
        assert!(contains("foo foobar", "foo"));
        assert!(contains("foo foobar", "foobar"));
        assert!(!contains("foo foobar", "bar"));
        assert!(!contains("foo foobar", "oo"));
        assert!(contains("x\tfoo\ny", "foo"));
    }

    #[test]
    fn contains_is_literal() {
        assert!(!contains("axb", "a.b"));
        assert!(contains("a.b", "a.b"));
        assert!(!contains("aaa", "a+"));
        assert!(contains("[x] (y)", "(y)"));
    }

    #[test]
    fn empty_name_matches_empty_attribute() {
        assert!(contains("", ""));
        assert!(contains("a  b", ""));
        assert!(!contains("a b", ""));
    }

    #[test]
    fn contains_runs_of_tokens() {
        assert!(contains("a b c d", "c d"));
        assert!(contains("a b c d", "a b"));
        assert!(!contains("a bc d", "b c"));
        // The first candidate isn't bounded, a later overlapping one is
        assert!(contains("ba a a", "a a"));
        assert!(!contains("ab ab", "b a"));
    }

    #[test]
    fn separators_follow_ecmascript() {
        assert!(contains("a\u{feff}b", "b"));
        assert!(contains("a\u{3000}b", "a"));
        assert!(!contains("a\u{85}b", "b"));
        assert_eq!(tokens("a\u{85}b").count(), 1);
    }

    #[test]
    fn validation() {
        assert_eq!(validate("open"), Ok(()));
        assert_eq!(validate(""), Err(ClassError::Empty));
        assert_eq!(
            validate("a b"),
            Err(ClassError::ContainsWhitespace("a b".into()))
        );
        assert_eq!(
            validate("tab\there"),
            Err(ClassError::ContainsWhitespace("tab\there".into()))
        );
    }

    #[test]
    fn class_name_display_and_deref() {
        let name = ClassName::new("active").unwrap();
        assert_eq!(name.to_string(), "active");
        assert_eq!(name.len(), 6);
        assert_eq!(name.as_str(), "active");
        assert!(ClassName::try_from(String::from(" ")).is_err());
    }
}
