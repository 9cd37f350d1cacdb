//! This crate exposes a Binary Search Tree (BST) abstract data type, mostly for educational
//! purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for an element takes `O(height)` (where `height` is the number of edges on the
//! longest path from the root `Node` to a leaf `Node`). This tree does no rebalancing, so
//! inserting elements in sorted order degrades it into a list with a height of `N - 1`. BSTs also
//! naturally support sorted traversal by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! ## Layout
//!
//! * [`Tree`] is the tree itself. It is always valid and owns its elements.
//! * [`Handle`] wraps a tree that may be absent, for callers that create and destroy trees
//!   explicitly.
//! * [`Element`] is what a type needs to be stored: a total order and a way to print itself.
//!
//! ```
//! use adt_bst::Tree;
//!
//! let mut tree = Tree::new();
//! for x in [4, 1, 18, 9, 4, 7, 14, 3, 1] {
//!     tree.insert(x).unwrap();
//! }
//!
//! assert_eq!(tree.size(), 7);
//! assert_eq!(tree.maximum(), Ok(&18));
//! assert_eq!(tree.in_order().to_string(), "1 3 4 7 9 14 18");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod element;
pub mod error;
pub mod handle;
pub mod render;
pub mod tree;

pub use element::Element;
pub use error::{Error, Result};
pub use handle::Handle;
pub use render::{InOrder, PreOrder, Sideways};
pub use tree::Tree;
