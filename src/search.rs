//! An unbalanced Binary Search Tree.
//!
//! Values are kept in order so that finding, inserting, and deleting take `O(height)`. Nothing is
//! done to keep the height down: inserting values in sorted order builds a tree that is really a
//! linked list.
//!
//! # Examples
//!
//! ```
//! use ordtree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.get(&1), None);
//!
//! tree.add(1);
//! tree.add(2);
//! assert_eq!(tree.get(&1), Some(&1));
//! assert_eq!(tree.size(), 2);
//!
//! // Removing a value returns it.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.get(&1), None);
//! ```

use std::cmp::Ordering;
use std::mem;
use std::ops::Deref;

use crate::binary::{BinaryTree, Link, Node};
use crate::iter::InorderIter;

/// A Binary Search Tree with no balancing.
///
/// Read-only operations from [`BinaryTree`] (traversals, subtree copies, `root_value`...) are
/// available through `Deref`.
#[derive(Clone, Debug)]
pub struct BinarySearchTree<T> {
    tree: BinaryTree<T>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for BinarySearchTree<T> {
    type Target = BinaryTree<T>;

    fn deref(&self) -> &Self::Target {
        &self.tree
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self {
            tree: BinaryTree::new(),
        }
    }

    /// Inserts `value` at the bottom of the tree. If an equal value is already stored it is
    /// overwritten and returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{BinarySearchTree, Entry};
    ///
    /// let mut tree = BinarySearchTree::new();
    ///
    /// assert!(tree.add(Entry::new(1, 'a')).is_none());
    /// let old = tree.add(Entry::new(1, 'b')).unwrap();
    ///
    /// assert_eq!(old.value(), &'a');
    /// assert_eq!(tree.get(&Entry::new(1, 'z')).unwrap().value(), &'b');
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> Option<T>
    where
        T: Ord,
    {
        let replaced = insert(&mut self.tree.root, value);
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
        find(self.tree.root(), value)
    }

    /// Whether a value equal to `value` is stored. Unlike [`BinaryTree::contains`] this only
    /// follows one path down the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.get(value).is_some()
    }

    /// Deletes the stored value equal to `value` and returns it. If there is no such value,
    /// nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.add(2);
    /// tree.add(1);
    /// tree.add(3);
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let removed = delete(&mut self.tree.root, value);
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

/// Follows the path `value` would take down from `node`.
pub(crate) fn find<'a, T: Ord>(mut node: Option<&'a Node<T>>, value: &T) -> Option<&'a T> {
    while let Some(n) = node {
        node = match value.cmp(&n.value) {
            Ordering::Less => n.left(),
            Ordering::Equal => return Some(&n.value),
            Ordering::Greater => n.right(),
        };
    }
    None
}

/// Walks down from `link` to the empty slot `value` belongs in. Loops rather than recursing
/// since sorted input makes the tree as deep as it is large.
fn insert<T: Ord>(mut link: &mut Link<T>, value: T) -> Option<T> {
    while let Some(node) = link {
        link = match value.cmp(&node.value) {
            Ordering::Less => &mut node.left,
            Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
            Ordering::Greater => &mut node.right,
        };
    }
    *link = Some(Node::new_boxed(value));
    None
}

fn delete<T: Ord>(mut link: &mut Link<T>, value: &T) -> Option<T> {
    loop {
        let ordering = value.cmp(&link.as_ref()?.value);
        link = match ordering {
            Ordering::Less => &mut link.as_mut()?.left,
            Ordering::Equal => break,
            Ordering::Greater => &mut link.as_mut()?.right,
        };
    }

    let mut node = link.take()?;
    match (node.left.take(), node.right.take()) {
        // Zero or one child: the child takes this node's place.
        (None, child) | (child, None) => {
            *link = child;
            Some(node.value)
        }
        // Two children: the inorder successor's value moves up into this node and the
        // successor's node goes away instead.
        (left, Some(right)) => {
            node.left = left;
            node.right = Some(right);
            let successor = take_min(&mut node.right).expect("Two children => successor");
            let removed = mem::replace(&mut node.value, successor);
            *link = Some(node);
            Some(removed)
        }
    }
}

/// Unlinks the leftmost node below `link`, splicing in its right child, and returns its value.
fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let node = link.take()?;
    let Node { value, right, .. } = *node;
    *link = right;
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Entry;

    fn kv(key: i32, value: &'static str) -> Entry<i32, &'static str> {
        Entry::new(key, value)
    }

    fn lookup(key: i32) -> Entry<i32, &'static str> {
        Entry::lookup(key)
    }

    fn inorder(tree: &BinarySearchTree<Entry<i32, &'static str>>) -> Vec<(i32, &'static str)> {
        tree.iter().map(|e| (*e.key(), *e.value())).collect()
    }

    #[test]
    fn empty_tree() {
        let mut tree: BinarySearchTree<Entry<i32, &str>> = BinarySearchTree::new();

        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);
        assert!(!tree.contains(&lookup(4)));
        assert_eq!(tree.remove(&lookup(4)), None);
        assert!(tree.get(&lookup(4)).is_none());
    }

    #[test]
    fn non_empty_tree() {
        let mut tree = BinarySearchTree::new();
        for (k, v) in [
            (20, "twenty"),
            (10, "ten"),
            (30, "thirty"),
            (5, "five"),
            (15, "fifteen"),
            (25, "twenty-five"),
            (30, "thirty"),
            (27, "twenty-seven"),
            (3, "three"),
            (15, "fifteen"),
            (18, "eighteen"),
            (26, "twenty-six"),
        ] {
            tree.add(kv(k, v));
        }

        assert!(!tree.is_empty());
        assert_eq!(tree.size(), 10);
        assert_eq!(tree.root_value().map(Entry::key), Ok(&20));
        assert!(tree.contains(&lookup(26)));
        assert!(!tree.contains(&lookup(13)));
        assert_eq!(tree.get(&kv(27, "glop")).map(Entry::value), Some(&"twenty-seven"));

        assert_eq!(
            inorder(&tree),
            [
                (3, "three"),
                (5, "five"),
                (10, "ten"),
                (15, "fifteen"),
                (18, "eighteen"),
                (20, "twenty"),
                (25, "twenty-five"),
                (26, "twenty-six"),
                (27, "twenty-seven"),
                (30, "thirty"),
            ]
        );

        for k in [8, 15, 3, 25, 20, 30, 10] {
            tree.remove(&lookup(k));
        }
        assert_eq!(tree.size(), 4);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.root_value().map(Entry::key), Ok(&26));
        assert_eq!(
            inorder(&tree),
            [
                (5, "five"),
                (18, "eighteen"),
                (26, "twenty-six"),
                (27, "twenty-seven")
            ]
        );

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);
    }

    #[test]
    fn empty_by_deleting() {
        let mut tree = BinarySearchTree::new();
        for k in [10, 25, 27, 3] {
            tree.add(k);
        }
        for k in [10, 3, 27, 25] {
            assert_eq!(tree.remove(&k), Some(k));
        }
        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn delete_with_no_children() {
        let mut tree = BinarySearchTree::new();
        tree.add(5);
        tree.add(3);
        tree.add(7);

        assert_eq!(tree.remove(&7), Some(7));
        assert_eq!(tree.get(&7), None);
        assert_eq!(tree.get(&3), Some(&3));
        assert_eq!(tree.get(&5), Some(&5));
    }

    #[test]
    fn delete_with_deeper_successor() {
        let mut tree = BinarySearchTree::new();
        for k in [5, 3, 8, 2, 6, 9, 7] {
            tree.add(k);
        }

        assert_eq!(tree.remove(&5), Some(5));
        assert_eq!(tree.root_value(), Ok(&6));
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [2, 3, 6, 7, 8, 9]);
    }

    #[test]
    fn long_sorted_chains() {
        let mut tree = BinarySearchTree::new();
        for k in 0..20_000 {
            tree.add(k);
        }
        assert_eq!(tree.size(), 20_000);
        assert_eq!(tree.height(), 19_999);
        assert_eq!(tree.get(&19_999), Some(&19_999));

        assert_eq!(tree.remove(&0), Some(0));
        assert_eq!(tree.remove(&19_999), Some(19_999));
        assert_eq!(tree.remove(&10_000), Some(10_000));
        assert_eq!(tree.remove(&10_000), None);
        assert_eq!(tree.size(), 19_997);
        assert_eq!(tree.iter().count(), 19_997);

        let mut falling = BinarySearchTree::new();
        for k in (0..20_000).rev() {
            falling.add(k);
        }
        assert_eq!(falling.remove(&19_999), Some(19_999));
        assert_eq!(falling.height(), 19_998);
        falling.clear();
        assert!(falling.is_empty());
    }

    #[test]
    fn sorted_inserts_degrade_height() {
        let mut tree = BinarySearchTree::new();
        for k in 0..10 {
            tree.add(k);
        }
        assert_eq!(tree.height(), 9);
    }
}
