//! External iterators over binary trees.
//!
//! Rather than recursing, each iterator keeps the nodes it has still to deal with on an explicit
//! stack. That makes iteration resumable: the caller pulls one value at a time and can start over
//! with [`ExternalIterator::reset`]. The order of values matches the recursive `visit_*`
//! methods on [`BinaryTree`][crate::BinaryTree].

use std::ptr;

use crate::binary::Node;

/// An iterator that can report whether it is finished and be rewound to its start.
///
/// Calling [`Iterator::next`] on a finished iterator returns `None`.
pub trait ExternalIterator: Iterator {
    /// Starts the iteration over from the first value.
    fn reset(&mut self);

    /// Whether every value has been yielded.
    fn is_done(&self) -> bool;
}

/// Yields values root first, then the left subtree, then the right subtree.
#[derive(Clone, Debug)]
pub struct PreorderIter<'a, T> {
    root: Option<&'a Node<T>>,
    /// Deferred subtrees. The next value is at the top.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreorderIter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {
            root,
            stack: Vec::new(),
        };
        iter.reset();
        iter
    }
}

impl<'a, T> Iterator for PreorderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }
        Some(&node.value)
    }
}

impl<'a, T> ExternalIterator for PreorderIter<'a, T> {
    fn reset(&mut self) {
        self.stack.clear();
        self.stack.extend(self.root);
    }

    fn is_done(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Yields values in order: left subtree, then root, then right subtree.
#[derive(Clone, Debug)]
pub struct InorderIter<'a, T> {
    root: Option<&'a Node<T>>,
    /// Nodes whose left subtrees are being walked. The next value is at the top.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InorderIter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {
            root,
            stack: Vec::new(),
        };
        iter.reset();
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InorderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

impl<'a, T> ExternalIterator for InorderIter<'a, T> {
    fn reset(&mut self) {
        self.stack.clear();
        self.push_left_spine(self.root);
    }

    fn is_done(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Yields values left subtree first, then the right subtree, then the root.
#[derive(Clone, Debug)]
pub struct PostorderIter<'a, T> {
    root: Option<&'a Node<T>>,
    /// Ancestors of `next`. The top of the stack is its parent.
    stack: Vec<&'a Node<T>>,
    /// The node holding the value the next call to `next` yields.
    next: Option<&'a Node<T>>,
}

impl<'a, T> PostorderIter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {
            root,
            stack: Vec::new(),
            next: None,
        };
        iter.reset();
        iter
    }

    /// Pushes the path from `node` down to the first node visited in postorder, preferring left
    /// children over right ones.
    fn push_first_path(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left().or_else(|| n.right());
        }
    }
}

impl<'a, T> Iterator for PostorderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if let Some(&parent) = self.stack.last() {
            // Coming up from the left means the right subtree still has to be walked.
            let from_right = parent.right().map_or(false, |r| ptr::eq(r, current));
            if !from_right {
                self.push_first_path(parent.right());
            }
        }
        self.next = self.stack.pop();
        Some(&current.value)
    }
}

impl<'a, T> ExternalIterator for PostorderIter<'a, T> {
    fn reset(&mut self) {
        self.stack.clear();
        self.push_first_path(self.root);
        self.next = self.stack.pop();
    }

    fn is_done(&self) -> bool {
        self.next.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BinaryTree;

    /// ```text
    ///        4
    ///      /   \
    ///     2     6
    ///    / \     \
    ///   1   3     7
    ///            /
    ///           5
    /// ```
    fn lopsided() -> BinaryTree<i32> {
        let empty = BinaryTree::new();
        let leaf = |v| BinaryTree::build(v, &empty, &empty);
        let two = BinaryTree::build(2, &leaf(1), &leaf(3));
        let seven = BinaryTree::build(7, &leaf(5), &empty);
        let six = BinaryTree::build(6, &empty, &seven);
        BinaryTree::build(4, &two, &six)
    }

    fn recursive<F>(visit: F) -> Vec<i32>
    where
        F: FnOnce(&mut dyn FnMut(&i32)),
    {
        let mut values = Vec::new();
        visit(&mut |v| values.push(*v));
        values
    }

    #[test]
    fn iterators_match_visitors() {
        let tree = lopsided();

        let pre = recursive(|f| tree.visit_preorder(f));
        let ino = recursive(|f| tree.visit_inorder(f));
        let post = recursive(|f| tree.visit_postorder(f));

        assert_eq!(pre, [4, 2, 1, 3, 6, 7, 5]);
        assert_eq!(ino, [1, 2, 3, 4, 6, 5, 7]);
        assert_eq!(post, [1, 3, 2, 5, 7, 6, 4]);

        assert_eq!(tree.preorder_iter().copied().collect::<Vec<_>>(), pre);
        assert_eq!(tree.inorder_iter().copied().collect::<Vec<_>>(), ino);
        assert_eq!(tree.postorder_iter().copied().collect::<Vec<_>>(), post);
    }

    #[test]
    fn reset_mid_iteration() {
        let tree = lopsided();

        let mut iter = tree.postorder_iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&3));
        iter.reset();
        assert_eq!(iter.copied().collect::<Vec<_>>(), [1, 3, 2, 5, 7, 6, 4]);

        let mut iter = tree.inorder_iter();
        iter.next();
        iter.reset();
        assert_eq!(iter.next(), Some(&1));
    }

    #[test]
    fn finished_iterators_stay_finished() {
        let tree = lopsided();
        let mut iter = tree.preorder_iter();
        for _ in 0..tree.size() {
            assert!(!iter.is_done());
            assert!(iter.next().is_some());
        }
        assert!(iter.is_done());
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
