//! Text renderings of a [`Tree`] for eyeballing its shape. None of these are meant to be parsed.

use std::fmt;

use crate::element::Element;
use crate::tree::{NodeId, Tree};

/// Indentation written per unit of height by [`Sideways`] unless told otherwise.
pub const DEFAULT_INDENT: &str = "    ";

/// The tree lying on its side, right subtrees above their parents and left subtrees below. Each
/// element is indented once per unit of its own height, so leaves line up in the left-most column
/// and the root sits furthest to the right.
///
/// # Examples
///
/// ```
/// use adt_bst::Tree;
///
/// let mut tree = Tree::new();
/// for x in [2, 1, 3] {
///     tree.insert(x).unwrap();
/// }
///
/// assert_eq!(tree.sideways().to_string(), "3\n    2\n1\n\n");
/// assert_eq!(tree.sideways().indent("..").to_string(), "3\n..2\n1\n\n");
/// ```
pub struct Sideways<'a, T> {
    tree: &'a Tree<T>,
    indent: &'a str,
}

impl<'a, T> Sideways<'a, T> {
    /// Use `indent` for each unit of height instead of [`DEFAULT_INDENT`].
    pub fn indent(self, indent: &'a str) -> Self {
        Self { indent, ..self }
    }
}

impl<T: Element> fmt::Display for Sideways<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.tree.root() else {
            return writeln!(f, "(BST EMPTY)");
        };
        let heights = self.tree.fill_heights(root);
        self.tree.try_walk_in_order(true, |id| {
            for _ in 0..heights[id.0] {
                f.write_str(self.indent)?;
            }
            self.tree.node(id).element.display(f)?;
            writeln!(f)
        })?;
        writeln!(f)
    }
}

/// Every element in ascending order, separated by single spaces.
///
/// ```
/// use adt_bst::Tree;
///
/// let mut tree = Tree::new();
/// for x in [4, 1, 18, 9] {
///     tree.insert(x).unwrap();
/// }
///
/// assert_eq!(tree.in_order().to_string(), "1 4 9 18");
/// ```
pub struct InOrder<'a, T>(&'a Tree<T>);

impl<T: Element> fmt::Display for InOrder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        self.0.try_walk_in_order(false, |id| {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            self.0.node(id).element.display(f)
        })
    }
}

/// Each node followed by its left subtree in parentheses and, if there is one, its right subtree
/// in parentheses. Leaves are written bare and a missing left child shows up as `( )`.
///
/// ```
/// use adt_bst::Tree;
///
/// let mut tree = Tree::new();
/// for x in [4, 1, 18, 3] {
///     tree.insert(x).unwrap();
/// }
///
/// assert_eq!(tree.pre_order().to_string(), "4 ( 1 ( )( 3 ))( 18 )");
/// ```
pub struct PreOrder<'a, T>(&'a Tree<T>);

/// What [`PreOrder`] still has left to write.
enum Step {
    Node(NodeId),
    Text(&'static str),
}

impl<T: Element> fmt::Display for PreOrder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Steps are pushed in the reverse of the order they are written in.
        let mut stack = self.0.root().map(Step::Node).into_iter().collect::<Vec<_>>();
        while let Some(step) = stack.pop() {
            let id = match step {
                Step::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Step::Node(id) => id,
            };
            let node = self.0.node(id);
            node.element.display(f)?;
            f.write_str(" ")?;
            if node.left.is_none() && node.right.is_none() {
                continue;
            }

            if let Some(right) = node.right {
                stack.extend([Step::Text(")"), Step::Node(right), Step::Text("( ")]);
            }
            stack.push(Step::Text(")"));
            stack.extend(node.left.map(Step::Node));
            stack.push(Step::Text("( "));
        }
        Ok(())
    }
}

impl<T> Tree<T> {
    /// Renders the tree on its side. Printing this is what [`Tree::print`] does.
    pub fn sideways(&self) -> Sideways<'_, T> {
        Sideways {
            tree: self,
            indent: DEFAULT_INDENT,
        }
    }

    /// Renders the elements in ascending order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder(self)
    }

    /// Renders the tree in parenthesised pre-order.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder(self)
    }
}
