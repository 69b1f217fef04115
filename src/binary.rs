//! A plain binary tree. Nodes have zero, one or two children and no ordering is assumed between
//! them. This is the shape shared by [`BinarySearchTree`][crate::BinarySearchTree] and
//! [`AvlTree`][crate::AvlTree], which only read it through this type.
//!
//! # Examples
//!
//! ```
//! use ordtree::BinaryTree;
//!
//! let leaf = BinaryTree::build(8, &BinaryTree::new(), &BinaryTree::new());
//! let right = BinaryTree::build(6, &leaf, &BinaryTree::new());
//! let tree = BinaryTree::build(12, &leaf, &right);
//!
//! assert_eq!(tree.size(), 4);
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.root_value(), Ok(&12));
//!
//! let mut inorder = Vec::new();
//! tree.visit_inorder(|v| inorder.push(*v));
//! assert_eq!(inorder, [8, 12, 8, 6]);
//! ```

use std::fmt;

use crate::error::{Result, TreeError};
use crate::iter::{InorderIter, PostorderIter, PreorderIter};

/// How many spaces each level of a tree is indented by when displayed.
pub(crate) const INDENT: usize = 3;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A node in a binary tree. Each node owns its children outright.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    /// The length of the longest path from this node down to a leaf. A leaf has height 0 and a
    /// missing child counts as -1. Only kept up to date by AVL trees.
    pub(crate) height: isize,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            height: 0,
        })
    }

    pub(crate) fn with_children(value: T, left: Link<T>, right: Link<T>) -> Box<Self> {
        let mut node = Self::new_boxed(value);
        node.left = left;
        node.right = right;
        node.fix_height();
        node
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Sets the cached height from the children's cached heights.
    pub(crate) fn fix_height(&mut self) {
        self.height = link_height(&self.left).max(link_height(&self.right)) + 1;
    }

    /// Left height minus right height, from the cached heights.
    pub(crate) fn balance_factor(&self) -> isize {
        link_height(&self.left) - link_height(&self.right)
    }

    fn visit_preorder<F: FnMut(&T)>(&self, f: &mut F) {
        f(&self.value);
        if let Some(left) = self.left() {
            left.visit_preorder(f);
        }
        if let Some(right) = self.right() {
            right.visit_preorder(f);
        }
    }

    fn visit_inorder<F: FnMut(&T)>(&self, f: &mut F) {
        if let Some(left) = self.left() {
            left.visit_inorder(f);
        }
        f(&self.value);
        if let Some(right) = self.right() {
            right.visit_inorder(f);
        }
    }

    fn visit_postorder<F: FnMut(&T)>(&self, f: &mut F) {
        if let Some(left) = self.left() {
            left.visit_postorder(f);
        }
        if let Some(right) = self.right() {
            right.visit_postorder(f);
        }
        f(&self.value);
    }
}

/// Frees a subtree one node at a time. Dropping a `Box` chain directly recurses once per level,
/// which an unbalanced tree can make as deep as it is large.
pub(crate) fn drop_link<T>(link: Link<T>) {
    let mut stack: Vec<_> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Cached height of a possibly missing subtree.
pub(crate) fn link_height<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(-1, |n| n.height)
}

/// Writes one node per line, children indented below their parent. A missing child of a node
/// that has one child is written as `-`. `label` writes what follows the value on its line.
pub(crate) fn fmt_subtree<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: Option<&Node<T>>,
    indent: usize,
    label: &dyn Fn(&mut fmt::Formatter<'_>, &Node<T>) -> fmt::Result,
) -> fmt::Result {
    write!(f, "{:indent$}", "", indent = indent)?;
    let Some(node) = node else {
        return writeln!(f, "-");
    };
    write!(f, "{}", node.value)?;
    label(f, node)?;
    writeln!(f)?;
    if node.is_leaf() {
        return Ok(());
    }
    fmt_subtree(f, node.left(), indent + INDENT, label)?;
    fmt_subtree(f, node.right(), indent + INDENT, label)
}

/// A binary tree whose nodes hold one value each.
#[derive(Clone, Debug)]
pub struct BinaryTree<T> {
    pub(crate) root: Link<T>,
    pub(crate) count: usize,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
        }
    }

    /// Makes a tree with `value` at its root and copies of `left` and `right` as its subtrees.
    /// Nothing is shared with `left` or `right` afterwards.
    pub fn build(value: T, left: &Self, right: &Self) -> Self
    where
        T: Clone,
    {
        Self {
            root: Some(Node::with_children(
                value,
                left.root.clone(),
                right.root.clone(),
            )),
            count: 1 + left.count + right.count,
        }
    }

    /// How many values are stored in the tree.
    pub fn size(&self) -> usize {
        self.count
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        log::debug!("clearing tree of {} values", self.count);
        drop_link(self.root.take());
        self.count = 0;
    }

    /// The number of edges on the longest path from the root to a leaf. Both the empty tree and
    /// a tree with a single node have height 0.
    pub fn height(&self) -> usize {
        // Walked with a stack: the cached heights are only kept by AVL trees.
        let mut height = 0;
        let mut stack: Vec<_> = self.root().map(|n| (n, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Whether any node holds a value equal to `value`. No ordering is assumed so every node
    /// may be visited.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.preorder_iter().any(|v| v == value)
    }

    /// The value at the root.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree is empty.
    pub fn root_value(&self) -> Result<&T> {
        self.root()
            .map(|n| &n.value)
            .ok_or(TreeError::EmptyTree)
    }

    /// A copy of the root's left subtree.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree is empty.
    pub fn left_subtree(&self) -> Result<Self>
    where
        T: Clone,
    {
        let root = self.root().ok_or(TreeError::EmptyTree)?;
        Ok(Self::from_link(root.left.clone()))
    }

    /// A copy of the root's right subtree.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree is empty.
    pub fn right_subtree(&self) -> Result<Self>
    where
        T: Clone,
    {
        let root = self.root().ok_or(TreeError::EmptyTree)?;
        Ok(Self::from_link(root.right.clone()))
    }

    /// Calls `f` on every value: root, then left subtree, then right subtree.
    pub fn visit_preorder<F: FnMut(&T)>(&self, mut f: F) {
        if let Some(root) = self.root() {
            root.visit_preorder(&mut f);
        }
    }

    /// Calls `f` on every value: left subtree, then root, then right subtree.
    pub fn visit_inorder<F: FnMut(&T)>(&self, mut f: F) {
        if let Some(root) = self.root() {
            root.visit_inorder(&mut f);
        }
    }

    /// Calls `f` on every value: left subtree, then right subtree, then root.
    pub fn visit_postorder<F: FnMut(&T)>(&self, mut f: F) {
        if let Some(root) = self.root() {
            root.visit_postorder(&mut f);
        }
    }

    /// An external iterator yielding values in preorder.
    pub fn preorder_iter(&self) -> PreorderIter<'_, T> {
        PreorderIter::new(self.root())
    }

    /// An external iterator yielding values in order.
    pub fn inorder_iter(&self) -> InorderIter<'_, T> {
        InorderIter::new(self.root())
    }

    /// An external iterator yielding values in postorder.
    pub fn postorder_iter(&self) -> PostorderIter<'_, T> {
        PostorderIter::new(self.root())
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    fn from_link(root: Link<T>) -> Self {
        let count = PreorderIter::new(root.as_deref()).count();
        Self { root, count }
    }
}

impl<T> Drop for BinaryTree<T> {
    fn drop(&mut self) {
        drop_link(self.root.take());
    }
}

impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tree size: {}", self.count)?;
        fmt_subtree(f, self.root(), 0, &|_, _| Ok(()))
    }
}
