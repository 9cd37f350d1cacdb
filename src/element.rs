//! The capability a type needs to be stored in a [`Tree`][crate::Tree].
//!
//! The tree never decides on its own how two elements relate. Every placement
//! and search decision goes through [`Element::compare`], and every diagnostic
//! print goes through [`Element::display`].
//!
//! Anything that is already [`Ord`] and [`fmt::Display`] gets the capability
//! for free. A local type can instead implement [`Element`] by hand, for
//! example to order strings case-insensitively:
//!
//! ```
//! use std::cmp::Ordering;
//! use std::fmt;
//!
//! use adt_bst::{Element, Tree};
//!
//! struct Word(String);
//!
//! impl Element for Word {
//!     fn compare(&self, other: &Self) -> Ordering {
//!         self.0.to_lowercase().cmp(&other.0.to_lowercase())
//!     }
//!
//!     fn display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str(&self.0)
//!     }
//! }
//!
//! let mut tree = Tree::new();
//! tree.insert(Word("Apple".to_string())).unwrap();
//!
//! // Same word, different case: ignored as a duplicate.
//! assert!(!tree.insert(Word("APPLE".to_string())).unwrap());
//! assert_eq!(tree.size(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A totally ordered, printable element.
pub trait Element {
    /// Three-way comparison. Must be a total order and consistent between calls.
    fn compare(&self, other: &Self) -> Ordering;

    /// Writes a human readable form of the element. Only used for diagnostics.
    fn display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T> Element for T
where
    T: Ord + fmt::Display,
{
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Adapter that formats an element through [`Element::display`].
pub(crate) struct Shown<'a, T>(pub(crate) &'a T);

impl<T: Element> fmt::Display for Shown<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.display(f)
    }
}
