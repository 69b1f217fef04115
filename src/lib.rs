//! This crate provides ordered trees: containers that keep comparable values
//! sorted so they can be inserted, found, and deleted quickly and walked in order.
//! They are the storage underneath set and map types.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is built from nodes that each hold one value and
//! up to two children. The most important invariants of a BST are:
//!
//! 1. For every node in a BST, all the nodes in its left subtree have a
//!    value less than its own value.
//! 2. For every node in a BST, all the nodes in its right subtree have a
//!    value greater than its own value.
//!
//! Searching takes `O(height)`, where `height` is the longest path from the
//! root to a leaf. [`BinarySearchTree`] does nothing about its height, so
//! sorted input degrades it into a list. [`AvlTree`] rotates nodes after each
//! change so the heights of any node's two subtrees never differ by more than
//! one, which keeps the height `O(lg N)`.
//!
//! ## 2-3 Tree
//!
//! A [`TwoThreeTree`] node holds one value and two children or two values and
//! three children. It grows by splitting at the root instead of rotating, so
//! every leaf is always at the same depth.
//!
//! ## Choosing a tree
//!
//! All three implement [`OrderedTree`], and a [`Strategy`] builds any of them
//! behind a trait object:
//!
//! ```
//! use ordtree::{Entry, OrderedTree, Strategy};
//!
//! let mut tree = Strategy::default().build();
//! tree.add(Entry::new("b", 2));
//! tree.add(Entry::new("a", 1));
//!
//! let keys: Vec<_> = tree.iter().map(Entry::key).collect();
//! assert_eq!(keys, [&"a", &"b"]);
//! ```
//!
//! Values are compared with [`Ord`]. To store payloads that don't take part in
//! the ordering, wrap them in an [`Entry`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod avl;
mod binary;
mod entry;
mod error;
mod iter;
mod ordered;
mod search;
mod two_three;


pub use avl::AvlTree;
pub use binary::BinaryTree;
pub use entry::Entry;
pub use error::{Result, TreeError};
pub use iter::{ExternalIterator, InorderIter, PostorderIter, PreorderIter};
pub use ordered::{OrderedTree, Strategy};
pub use search::BinarySearchTree;
pub use two_three::{TwoThreeIter, TwoThreeTree};
