//! The operations every ordered tree shares, and a way to pick a tree at runtime.

use std::fmt;

use crate::{AvlTree, BinarySearchTree, BinaryTree, TwoThreeTree};

/// An ordered collection of values, each stored at most once.
///
/// This trait is object safe, so callers that don't care which balancing scheme they get can hold
/// a `Box<dyn OrderedTree<T>>` built by a [`Strategy`].
pub trait OrderedTree<T> {
    /// Inserts `value`. If an equal value is already stored it is overwritten and returned.
    fn add(&mut self, value: T) -> Option<T>;

    /// Finds the stored value equal to `value`.
    fn get(&self, value: &T) -> Option<&T>;

    /// Deletes and returns the stored value equal to `value`.
    fn remove(&mut self, value: &T) -> Option<T>;

    /// Whether a value equal to `value` is stored.
    fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// The number of values stored.
    fn size(&self) -> usize;

    /// Whether no values are stored.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Removes every value.
    fn clear(&mut self);

    /// The number of levels below the root.
    fn height(&self) -> usize;

    /// Calls `f` on each value in order.
    fn visit_inorder(&self, f: &mut dyn FnMut(&T));

    /// Iterates over the values in order.
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;
}

impl<T: Ord> OrderedTree<T> for BinarySearchTree<T> {
    fn add(&mut self, value: T) -> Option<T> {
        BinarySearchTree::add(self, value)
    }

    fn get(&self, value: &T) -> Option<&T> {
        BinarySearchTree::get(self, value)
    }

    fn remove(&mut self, value: &T) -> Option<T> {
        BinarySearchTree::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        BinarySearchTree::contains(self, value)
    }

    fn size(&self) -> usize {
        BinaryTree::size(self)
    }

    fn clear(&mut self) {
        BinarySearchTree::clear(self)
    }

    fn height(&self) -> usize {
        BinaryTree::height(self)
    }

    fn visit_inorder(&self, f: &mut dyn FnMut(&T)) {
        BinaryTree::visit_inorder(self, f)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(BinarySearchTree::iter(self))
    }
}

impl<T: Ord> OrderedTree<T> for AvlTree<T> {
    fn add(&mut self, value: T) -> Option<T> {
        AvlTree::add(self, value)
    }

    fn get(&self, value: &T) -> Option<&T> {
        AvlTree::get(self, value)
    }

    fn remove(&mut self, value: &T) -> Option<T> {
        AvlTree::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        AvlTree::contains(self, value)
    }

    fn size(&self) -> usize {
        BinaryTree::size(self)
    }

    fn clear(&mut self) {
        AvlTree::clear(self)
    }

    fn height(&self) -> usize {
        AvlTree::height(self)
    }

    fn visit_inorder(&self, f: &mut dyn FnMut(&T)) {
        BinaryTree::visit_inorder(self, f)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(AvlTree::iter(self))
    }
}

impl<T: Ord> OrderedTree<T> for TwoThreeTree<T> {
    fn add(&mut self, value: T) -> Option<T> {
        TwoThreeTree::add(self, value)
    }

    fn get(&self, value: &T) -> Option<&T> {
        TwoThreeTree::get(self, value)
    }

    fn remove(&mut self, value: &T) -> Option<T> {
        TwoThreeTree::remove(self, value)
    }

    fn size(&self) -> usize {
        TwoThreeTree::size(self)
    }

    fn clear(&mut self) {
        TwoThreeTree::clear(self)
    }

    fn height(&self) -> usize {
        TwoThreeTree::height(self)
    }

    fn visit_inorder(&self, f: &mut dyn FnMut(&T)) {
        TwoThreeTree::visit_inorder(self, f)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(TwoThreeTree::iter(self))
    }
}

/// Which kind of tree [`Strategy::build`] makes.
///
/// # Examples
///
/// ```
/// use ordtree::{OrderedTree, Strategy};
///
/// for strategy in Strategy::ALL {
///     let mut tree = strategy.build();
///     for v in [3, 1, 2] {
///         tree.add(v);
///     }
///     assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3], "{}", strategy);
/// }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// A [`BinarySearchTree`], which never rebalances.
    Unbalanced,
    /// An [`AvlTree`].
    #[default]
    Avl,
    /// A [`TwoThreeTree`].
    TwoThree,
}

impl Strategy {
    /// Every strategy, from least to most balanced.
    pub const ALL: [Strategy; 3] = [Strategy::Unbalanced, Strategy::Avl, Strategy::TwoThree];

    /// Makes an empty tree of this kind.
    pub fn build<T: Ord + 'static>(self) -> Box<dyn OrderedTree<T>> {
        match self {
            Strategy::Unbalanced => Box::new(BinarySearchTree::new()),
            Strategy::Avl => Box::new(AvlTree::new()),
            Strategy::TwoThree => Box::new(TwoThreeTree::new()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Unbalanced => "unbalanced",
            Strategy::Avl => "avl",
            Strategy::TwoThree => "two-three",
        })
    }
}
