//! An opaque handle to a [`Tree`] that can be in one of two states: live (created and not yet
//! destroyed) or absent (never created, or destroyed). Every operation on an absent handle
//! reports [`Error::NullHandle`] instead of touching memory that isn't there, except the queries
//! that have an obvious answer for "no tree" ([`Handle::contains`] and [`Handle::is_empty`]).
//!
//! # Examples
//!
//! ```
//! use adt_bst::{Error, Handle};
//!
//! let mut handle = Handle::create();
//! handle.insert(4).unwrap();
//! handle.insert(1).unwrap();
//! assert_eq!(handle.size(), Ok(2));
//!
//! handle.destroy().unwrap();
//!
//! // The handle is now absent and says so.
//! assert_eq!(handle.size(), Err(Error::NullHandle));
//! assert_eq!(handle.destroy(), Err(Error::NullHandle));
//! assert!(handle.is_empty());
//! ```

use log::debug;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::render::{Sideways, DEFAULT_INDENT};
use crate::tree::Tree;

/// A possibly absent tree.
#[derive(Clone, Debug)]
pub struct Handle<T> {
    tree: Option<Tree<T>>,
}

/// A default handle is absent, like a pointer that was never assigned.
impl<T> Default for Handle<T> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> Handle<T> {
    /// A live handle to a new, empty tree.
    pub fn create() -> Self {
        Self {
            tree: Some(Tree::new()),
        }
    }

    /// A handle that doesn't refer to any tree.
    pub fn absent() -> Self {
        Self { tree: None }
    }

    /// Whether the handle refers to a tree.
    pub fn is_live(&self) -> bool {
        self.tree.is_some()
    }

    /// The tree behind the handle.
    pub fn tree(&self) -> Result<&Tree<T>> {
        self.tree.as_ref().ok_or(Error::NullHandle)
    }

    /// The tree behind the handle, mutably.
    pub fn tree_mut(&mut self) -> Result<&mut Tree<T>> {
        self.tree.as_mut().ok_or(Error::NullHandle)
    }

    /// Drops every element and then the tree itself, leaving the handle absent.
    ///
    /// # Errors
    ///
    /// [`Error::NullHandle`] if the handle was already absent.
    pub fn destroy(&mut self) -> Result<()> {
        let mut tree = self.tree.take().ok_or(Error::NullHandle)?;
        tree.clear();
        debug!("destroyed tree handle");
        Ok(())
    }

    /// Drops every element. The handle stays live.
    pub fn clear(&mut self) -> Result<()> {
        self.tree_mut()?.clear();
        Ok(())
    }

    /// See [`Tree::height`].
    pub fn height(&self) -> Result<isize> {
        Ok(self.tree()?.height())
    }

    /// See [`Tree::size`].
    pub fn size(&self) -> Result<usize> {
        Ok(self.tree()?.size())
    }

    /// `true` for an absent handle as well as for an empty tree.
    pub fn is_empty(&self) -> bool {
        self.tree.as_ref().map_or(true, Tree::is_empty)
    }

    /// See [`Tree::sideways`].
    pub fn sideways(&self) -> Result<Sideways<'_, T>> {
        Ok(self.tree()?.sideways())
    }
}

impl<T: Element> Handle<T> {
    /// Inserts the element. An element that is already present is silently ignored.
    ///
    /// # Errors
    ///
    /// [`Error::NullHandle`] on an absent handle, [`Error::OutOfMemory`] if the node could not be
    /// allocated.
    pub fn insert(&mut self, element: T) -> Result<()> {
        self.tree_mut()?.insert(element)?;
        Ok(())
    }

    /// Removes the element if it is present and does nothing otherwise.
    ///
    /// # Errors
    ///
    /// [`Error::NullHandle`] on an absent handle, [`Error::EmptyTree`] when the tree has no
    /// elements.
    pub fn remove(&mut self, element: &T) -> Result<()> {
        self.tree_mut()?.remove(element)?;
        Ok(())
    }

    /// `false` for an absent handle.
    pub fn contains(&self, element: &T) -> bool {
        self.tree
            .as_ref()
            .is_some_and(|tree| tree.contains(element))
    }

    /// See [`Tree::minimum`].
    pub fn minimum(&self) -> Result<&T> {
        self.tree()?.minimum()
    }

    /// See [`Tree::maximum`].
    pub fn maximum(&self) -> Result<&T> {
        self.tree()?.maximum()
    }

    /// Prints the tree on its side to stdout, or `(BST NULL)` for an absent handle.
    pub fn print(&self) {
        self.print_with(DEFAULT_INDENT);
    }

    /// Like [`Handle::print`], writing `indent` once per unit of height.
    pub fn print_with(&self, indent: &str) {
        print!("{}", self.render_with(indent));
    }

    fn render_with(&self, indent: &str) -> String {
        match self.sideways() {
            Ok(sideways) => sideways.indent(indent).to_string(),
            Err(_) => "(BST NULL)\n".to_string(),
        }
    }
}
