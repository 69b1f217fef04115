//! A self-balancing Binary Search Tree (specifically, an AVL tree).
//!
//! Every node caches its height. On the way back up from an insertion or deletion each node on
//! the path recomputes its height and, if its subtrees' heights now differ by two, is rotated back
//! into balance. This keeps the height of the tree `O(lg N)`.
//!
//! # Examples
//!
//! ```
//! use ordtree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//!
//! // Sorted inserts would make a plain BST into a list.
//! for x in 0..15 {
//!     tree.add(x);
//! }
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.root_value(), Ok(&7));
//!
//! assert_eq!(tree.remove(&7), Some(7));
//! assert_eq!(tree.get(&7), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::Deref;

use crate::binary::{fmt_subtree, link_height, BinaryTree, Link, Node};
use crate::iter::InorderIter;
use crate::search;

/// A Binary Search Tree that rebalances itself after every insertion and deletion.
///
/// Read-only operations from [`BinaryTree`] (traversals, subtree copies, `root_value`...) are
/// available through `Deref`.
#[derive(Clone, Debug)]
pub struct AvlTree<T> {
    tree: BinaryTree<T>,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for AvlTree<T> {
    type Target = BinaryTree<T>;

    fn deref(&self) -> &Self::Target {
        &self.tree
    }
}

impl<T> AvlTree<T> {
    /// Generate a new, empty `AvlTree`.
    pub fn new() -> Self {
        Self {
            tree: BinaryTree::new(),
        }
    }

    /// The height of the tree, read from the root's cached height. Both the empty tree and a
    /// tree with a single node have height 0.
    pub fn height(&self) -> usize {
        self.tree.root.as_ref().map_or(0, |n| n.height as usize)
    }

    /// Inserts the given value into the tree. Inserting a value equal to a stored one overwrites
    /// it and returns the old value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{AvlTree, Entry};
    ///
    /// let mut tree = AvlTree::new();
    ///
    /// tree.add(Entry::new(1, 2));
    /// assert_eq!(tree.get(&Entry::new(1, 0)).map(Entry::value), Some(&2));
    ///
    /// tree.add(Entry::new(1, 3));
    /// assert_eq!(tree.get(&Entry::new(1, 0)).map(Entry::value), Some(&3));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> Option<T>
    where
        T: Ord,
    {
        let replaced = match self.tree.root.as_mut() {
            Some(root) => insert(root, value),
            None => {
                self.tree.root = Some(Node::new_boxed(value));
                None
            }
        };
        if replaced.is_none() {
            self.tree.count += 1;
        }
        replaced
    }

    /// Finds the stored value equal to `value`, if there is one.
    pub fn get(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        search::find(self.tree.root(), value)
    }

    /// Whether a value equal to `value` is stored.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.get(value).is_some()
    }

    /// Deletes the stored value equal to `value` and returns it. If the tree has no such value,
    /// nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.add(1);
    ///
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let mut removed = None;
        let root = self.tree.root.take();
        self.tree.root = root.and_then(|root| delete(root, value, &mut removed));
        if removed.is_some() {
            self.tree.count -= 1;
        }
        removed
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Iterates over the values in order.
    pub fn iter(&self) -> InorderIter<'_, T> {
        self.tree.inorder_iter()
    }
}

/// Shows each value followed by its balance factor.
impl<T: fmt::Display> fmt::Display for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tree size: {}", self.tree.count)?;
        if self.tree.is_empty() {
            return writeln!(f, "empty");
        }
        fmt_subtree(f, self.tree.root(), 0, &|f, n| {
            write!(f, " ({})", n.balance_factor())
        })
    }
}

fn insert<T: Ord>(node: &mut Node<T>, value: T) -> Option<T> {
    let child = match value.cmp(&node.value) {
        Ordering::Less => &mut node.left,
        Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
        Ordering::Greater => &mut node.right,
    };
    let replaced = match child {
        Some(child) => insert(child, value),
        None => {
            *child = Some(Node::new_boxed(value));
            None
        }
    };
    rebalance(node);
    replaced
}

/// Deletes `value` from the subtree rooted at `node`, storing it in `removed`, and returns the
/// subtree's new root.
fn delete<T: Ord>(mut node: Box<Node<T>>, value: &T, removed: &mut Option<T>) -> Link<T> {
    match value.cmp(&node.value) {
        Ordering::Less => {
            let left = node.left.take();
            node.left = left.and_then(|left| delete(left, value, removed));
        }
        Ordering::Greater => {
            let right = node.right.take();
            node.right = right.and_then(|right| delete(right, value, removed));
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => {
                *removed = Some(node.value);
                return child;
            }
            (left, Some(right)) => {
                let (successor, right) = take_min(right);
                *removed = Some(mem::replace(&mut node.value, successor));
                node.left = left;
                node.right = right;
            }
        },
    }
    rebalance(&mut node);
    Some(node)
}

/// Removes the leftmost node of the subtree rooted at `node`. Returns its value and the subtree's
/// new root.
fn take_min<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (value, right)
        }
        Some(left) => {
            let (min, left) = take_min(left);
            node.left = left;
            rebalance(&mut node);
            (min, Some(node))
        }
    }
}

/// Recomputes the height of `node` and rotates it if its subtrees' heights differ by two.
///
/// See [the Wikipedia page][wiki] for the cases.
///
/// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing
fn rebalance<T>(node: &mut Node<T>) {
    node.fix_height();
    match node.balance_factor() {
        2 => {
            let left = node.left.as_deref_mut().expect("Left heavy => left child");
            if left.balance_factor() < 0 {
                log::trace!("left-right rotation");
                rotate_left(left);
            } else {
                log::trace!("right rotation");
            }
            rotate_right(node);
        }
        -2 => {
            let right = node.right.as_deref_mut().expect("Right heavy => right child");
            if right.balance_factor() > 0 {
                log::trace!("right-left rotation");
                rotate_right(right);
            } else {
                log::trace!("left rotation");
            }
            rotate_left(node);
        }
        _ => {}
    }

    if cfg!(debug_assertions) {
        let left_height = link_height(&node.left);
        let right_height = link_height(&node.right);
        assert_eq!(node.height, left_height.max(right_height) + 1);
        assert!((left_height - right_height).abs() <= 1);
    }
}

/// Rotate `node` to the right. The left child's value moves up into `node` and `node`'s old
/// value moves down into the right subtree. Nodes are reused; only values and links move.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///        node                  node
///       /    \                /    \
///     left    z   rotate ->  x    left
///     /  \                        /  \
///    x    y                      y    z
/// ```
///
/// where on the right `node` now holds the old left child's value and `left` (now the right
/// child) holds `node`'s old value.
fn rotate_right<T>(node: &mut Node<T>) {
    let mut pivot = node.left.take().expect("Rotate right => left child");
    mem::swap(&mut node.value, &mut pivot.value);
    node.left = pivot.left.take();
    pivot.left = pivot.right.take();
    pivot.right = node.right.take();
    pivot.fix_height();
    node.right = Some(pivot);
    node.fix_height();
}

/// Mirror image of [`rotate_right`].
fn rotate_left<T>(node: &mut Node<T>) {
    let mut pivot = node.right.take().expect("Rotate left => right child");
    mem::swap(&mut node.value, &mut pivot.value);
    node.right = pivot.right.take();
    pivot.right = pivot.left.take();
    pivot.left = node.left.take();
    pivot.fix_height();
    node.left = Some(pivot);
    node.fix_height();
}
