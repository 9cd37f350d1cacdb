//! An unbalanced BST that owns its nodes in an arena. Children and parents are linked by index
//! so a node is only ever freed through the tree that owns it.
//!
//! # Examples
//!
//! ```
//! use adt_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.minimum(), Err(Error::EmptyTree));
//!
//! tree.insert(1).unwrap();
//! assert!(tree.contains(&1));
//!
//! // Inserting the same element again is ignored.
//! assert!(!tree.insert(1).unwrap());
//! assert_eq!(tree.size(), 1);
//!
//! // Removing an element hands it back.
//! assert_eq!(tree.remove(&1), Ok(Some(1)));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::element::{Element, Shown};
use crate::error::{Error, Result};

/// Index of a slot in a [`Tree`]'s arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeId(pub(crate) usize);

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    /// Navigation only. Following it never frees anything.
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    fn leaf(element: T, parent: Option<NodeId>) -> Self {
        Self {
            element,
            parent,
            left: None,
            right: None,
        }
    }
}

#[derive(Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    /// A freed slot, threaded onto the free list.
    Vacant { next_free: Option<NodeId> },
}

/// A Binary Search Tree of [`Element`]s. No rebalancing happens so inserting elements in sorted
/// order produces a tree as tall as it is large.
#[derive(Clone)]
pub struct Tree<T> {
    root: Option<NodeId>,
    slots: Vec<Slot<T>>,
    free: Option<NodeId>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`. This does not allocate.
    pub fn new() -> Self {
        Self {
            root: None,
            slots: Vec::new(),
            free: None,
        }
    }

    /// Whether the tree has no elements at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes of the tree. This walks the whole tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.size(), 0);
    ///
    /// for x in [2, 1, 3, 1] {
    ///     tree.insert(x).unwrap();
    /// }
    /// assert_eq!(tree.size(), 3);
    /// ```
    pub fn size(&self) -> usize {
        let mut size = 0;
        let mut stack = self.root.into_iter().collect::<Vec<_>>();
        while let Some(id) = stack.pop() {
            size += 1;
            let node = self.node(id);
            stack.extend(node.left);
            stack.extend(node.right);
        }
        size
    }

    /// The number of edges on the longest path from the root down to a leaf. A single node has a
    /// height of 0 and an empty tree has a height of -1. This walks the whole tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(2).unwrap();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut stack = self
            .root
            .map(|root| (root, 0))
            .into_iter()
            .collect::<Vec<_>>();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node(id);
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        height
    }

    /// Drops every element, children before their parents, and leaves the tree empty and ready
    /// for reuse.
    pub fn clear(&mut self) {
        let dropped = match self.root.take() {
            Some(root) => self.drop_subtree(root),
            None => 0,
        };
        self.slots.clear();
        self.free = None;
        debug!("cleared tree, dropped {dropped} nodes");
    }

    /// Calls `f` on every element in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [5, 2, 8, 1] {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// let mut seen = Vec::new();
    /// tree.for_each_in_order(|x| seen.push(*x));
    /// assert_eq!(seen, [1, 2, 5, 8]);
    /// ```
    pub fn for_each_in_order<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a T),
    {
        let _ = self.try_walk_in_order(false, |id| {
            f(&self.node(id).element);
            Ok::<_, Infallible>(())
        });
    }

    /// Calls `f` on every element, each node before its left subtree and its left subtree before
    /// its right subtree.
    pub fn for_each_pre_order<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a T),
    {
        let mut stack = self.root.into_iter().collect::<Vec<_>>();
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            f(&node.element);
            stack.extend(node.right);
            stack.extend(node.left);
        }
    }

    pub(crate) fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to vacant slot {}", id.0),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to vacant slot {}", id.0),
        }
    }

    /// Heights of every node in the subtree rooted at `root`, indexed by slot.
    pub(crate) fn fill_heights(&self, root: NodeId) -> Vec<isize> {
        let mut heights = vec![-1; self.slots.len()];
        // A node comes off the stack a second time once both its children have heights.
        let mut stack = vec![(root, false)];
        while let Some((id, children_done)) = stack.pop() {
            let node = self.node(id);
            if children_done {
                let left = node.left.map_or(-1, |left| heights[left.0]);
                let right = node.right.map_or(-1, |right| heights[right.0]);
                heights[id.0] = 1 + left.max(right);
            } else {
                stack.push((id, true));
                stack.extend(node.left.map(|left| (left, false)));
                stack.extend(node.right.map(|right| (right, false)));
            }
        }
        heights
    }

    /// Hands every node id to `f` in ascending order of elements, or descending when `reverse`
    /// is set. Stops at the first error.
    pub(crate) fn try_walk_in_order<E, F>(&self, reverse: bool, mut f: F) -> Result<(), E>
    where
        F: FnMut(NodeId) -> Result<(), E>,
    {
        let first = |node: &Node<T>| if reverse { node.right } else { node.left };
        let second = |node: &Node<T>| if reverse { node.left } else { node.right };

        let mut stack = Vec::new();
        let mut current = self.root;
        loop {
            while let Some(id) = current {
                stack.push(id);
                current = first(self.node(id));
            }
            let Some(id) = stack.pop() else {
                return Ok(());
            };
            f(id)?;
            current = second(self.node(id));
        }
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.node(id).right {
            id = right;
        }
        id
    }

    /// Places `node` in a free slot. Nothing about the tree changes if this fails.
    fn alloc(&mut self, node: Node<T>) -> Result<NodeId> {
        match self.free {
            Some(id) => {
                self.free = match self.slots[id.0] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at occupied slot {}", id.0),
                };
                self.slots[id.0] = Slot::Occupied(node);
                Ok(id)
            }
            None => {
                self.slots
                    .try_reserve(1)
                    .map_err(|_| Error::OutOfMemory)?;
                self.slots.push(Slot::Occupied(node));
                Ok(NodeId(self.slots.len() - 1))
            }
        }
    }

    /// Vacates the slot of `id` and hands back its element. The caller must have already
    /// unhooked `id` from its parent and children.
    fn release(&mut self, id: NodeId) -> T {
        let slot = mem::replace(
            &mut self.slots[id.0],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(id);
        match slot {
            Slot::Occupied(node) => node.element,
            Slot::Vacant { .. } => unreachable!("released vacant slot {}", id.0),
        }
    }

    /// Post-order: left subtree, right subtree, then the node itself.
    fn drop_subtree(&mut self, root: NodeId) -> usize {
        let mut dropped = 0;
        // A node comes off the stack a second time once both its subtrees are gone.
        let mut stack = vec![(root, false)];
        while let Some((id, children_done)) = stack.pop() {
            if children_done {
                drop(self.release(id));
                dropped += 1;
            } else {
                let node = self.node(id);
                stack.push((id, true));
                stack.extend(node.right.map(|right| (right, false)));
                stack.extend(node.left.map(|left| (left, false)));
            }
        }
        dropped
    }

    /// Removes a node that has at most one child by moving that child into its place.
    fn unlink(&mut self, id: NodeId) -> T {
        let (parent, child) = {
            let node = self.node(id);
            debug_assert!(
                node.left.is_none() || node.right.is_none(),
                "unlinking a node with two children"
            );
            (node.parent, node.left.or(node.right))
        };

        if let Some(child) = child {
            self.node_mut(child).parent = parent;
        }
        match parent {
            None => self.root = child,
            Some(parent) => {
                let parent_node = self.node_mut(parent);
                if parent_node.left == Some(id) {
                    parent_node.left = child;
                } else {
                    parent_node.right = child;
                }
            }
        }

        self.release(id)
    }
}

impl<T: Element> Tree<T> {
    /// Inserts the element into the tree. Returns `Ok(false)` without touching the tree when an
    /// equal element is already present.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] when no room could be made for the new node. The tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(4), Ok(true));
    /// assert_eq!(tree.insert(4), Ok(false));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> Result<bool> {
        let Some(mut current) = self.root else {
            debug!("{} is the new root", Shown(&element));
            self.root = Some(self.alloc(Node::leaf(element, None))?);
            return Ok(true);
        };

        loop {
            let (ordering, left, right) = {
                let node = self.node(current);
                (element.compare(&node.element), node.left, node.right)
            };
            match (ordering, left, right) {
                (Ordering::Equal, _, _) => {
                    debug!("{} is already present, ignoring", Shown(&element));
                    return Ok(false);
                }
                (Ordering::Less, Some(left), _) => current = left,
                (Ordering::Greater, _, Some(right)) => current = right,
                (Ordering::Less, None, _) => {
                    trace!("attaching {} as a left child", Shown(&element));
                    let id = self.alloc(Node::leaf(element, Some(current)))?;
                    self.node_mut(current).left = Some(id);
                    break;
                }
                (Ordering::Greater, _, None) => {
                    trace!("attaching {} as a right child", Shown(&element));
                    let id = self.alloc(Node::leaf(element, Some(current)))?;
                    self.node_mut(current).right = Some(id);
                    break;
                }
            }
        }

        if cfg!(debug_assertions) {
            self.assert_local_order(current);
        }
        Ok(true)
    }

    /// Removes the element equal to `element` and returns it. A missing element is not an error:
    /// the tree is left alone and `Ok(None)` comes back.
    ///
    /// A node with two children is not unhooked itself. It takes over the element of its in-order
    /// successor (the leftmost node of its right subtree) and the successor's node, which never
    /// has a left child, is unhooked instead.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] when there is nothing to remove from.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.remove(&1), Err(Error::EmptyTree));
    ///
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.remove(&2), Ok(None));
    /// assert_eq!(tree.remove(&1), Ok(Some(1)));
    /// ```
    pub fn remove(&mut self, element: &T) -> Result<Option<T>> {
        if self.is_empty() {
            return Err(Error::EmptyTree);
        }
        let Some(id) = self.find(element) else {
            debug!("{} not found, nothing removed", Shown(element));
            return Ok(None);
        };

        let (parent, left, right) = {
            let node = self.node(id);
            (node.parent, node.left, node.right)
        };
        let removed = match (left, right) {
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                let replacement = self.unlink(successor);
                debug!(
                    "{} has two children, replacing it with its successor {}",
                    Shown(element),
                    Shown(&replacement)
                );
                let removed = mem::replace(&mut self.node_mut(id).element, replacement);
                if cfg!(debug_assertions) {
                    self.assert_local_order(id);
                }
                removed
            }
            _ => self.unlink(id),
        };

        if cfg!(debug_assertions) {
            if let Some(parent) = parent {
                self.assert_local_order(parent);
            }
        }
        Ok(Some(removed))
    }

    /// Whether an element equal to `element` is stored in the tree.
    pub fn contains(&self, element: &T) -> bool {
        self.find(element).is_some()
    }

    /// The smallest element of the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] when the tree has no elements.
    pub fn minimum(&self) -> Result<&T> {
        let root = self.root.ok_or(Error::EmptyTree)?;
        Ok(&self.node(self.leftmost(root)).element)
    }

    /// The largest element of the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] when the tree has no elements.
    pub fn maximum(&self) -> Result<&T> {
        let root = self.root.ok_or(Error::EmptyTree)?;
        Ok(&self.node(self.rightmost(root)).element)
    }

    /// Prints the tree on its side to stdout. See [`Tree::sideways`].
    pub fn print(&self) {
        print!("{}", self.sideways());
    }

    fn find(&self, element: &T) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            current = match element.compare(&node.element) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
            trace!("{} descends past {}", Shown(element), Shown(&node.element));
        }
        None
    }

    /// Checks that the children of `id` point back at it and sit on the correct side of it.
    fn assert_local_order(&self, id: NodeId) {
        let node = self.node(id);
        if let Some(left) = node.left {
            let left = self.node(left);
            assert_eq!(left.parent, Some(id));
            assert_eq!(left.element.compare(&node.element), Ordering::Less);
        }
        if let Some(right) = node.right {
            let right = self.node(right);
            assert_eq!(right.parent, Some(id));
            assert_eq!(right.element.compare(&node.element), Ordering::Greater);
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root.map(|id| DebugNode { tree: self, id }))
            .finish()
    }
}

struct DebugNode<'a, T> {
    tree: &'a Tree<T>,
    id: NodeId,
}

impl<T> fmt::Debug for DebugNode<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.tree.node(self.id);
        let child = |id: Option<NodeId>| {
            id.map(|id| DebugNode {
                tree: self.tree,
                id,
            })
        };
        f.debug_struct("Node")
            .field("element", &node.element)
            .field("left", &child(node.left))
            .field("right", &child(node.right))
            .finish()
    }
}

#[cfg(test)]
impl Tree<i32> {
    /// The tree that inserting `0..len` in order builds, without paying for the quadratic inserts.
    pub(crate) fn ascending_chain(len: usize) -> Self {
        let slots = (0..len)
            .map(|i| {
                Slot::Occupied(Node {
                    element: i as i32,
                    parent: i.checked_sub(1).map(NodeId),
                    left: None,
                    right: Some(i + 1).filter(|next| *next < len).map(NodeId),
                })
            })
            .collect();
        Self {
            root: (len > 0).then_some(NodeId(0)),
            slots,
            free: None,
        }
    }
}
