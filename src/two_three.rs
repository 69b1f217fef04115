//! A 2-3 tree.
//!
//! Every internal node has either one value and two children or two values and three children,
//! and every leaf sits at the same depth. The tree only grows or shrinks at the root, so it is
//! always perfectly balanced and finding, inserting, and deleting take `O(log n)`.
//!
//! Nodes are rebuilt on the way back up from an insertion or deletion: each step consumes a node
//! and hands its parent either a finished subtree or one that still needs fixing (a split when
//! inserting, an underflow when deleting). Each operation makes a single pass down the tree.
//! The price is an allocation for every internal node on the search path, since each one gets a
//! freshly boxed array of children, even when an insert only overwrites a stored value or a
//! remove finds nothing to delete.
//!
//! # Examples
//!
//! ```
//! use ordtree::TwoThreeTree;
//!
//! let mut tree = TwoThreeTree::new();
//! for v in [30, 40, 25, 50, 20] {
//!     tree.add(v);
//! }
//!
//! assert_eq!(tree.size(), 5);
//! assert_eq!(tree.height(), 1);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [20, 25, 30, 40, 50]);
//!
//! assert_eq!(tree.remove(&30), Some(30));
//! assert_eq!(tree.get(&30), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::binary::INDENT;
use crate::iter::ExternalIterator;

type Sub<T> = Option<Node<T>>;

#[derive(Clone, Debug)]
pub(crate) enum Node<T> {
    Two {
        value: T,
        kids: Option<Box<[Node<T>; 2]>>,
    },
    Three {
        low: T,
        high: T,
        kids: Option<Box<[Node<T>; 3]>>,
    },
}

/// A node taken apart into its subtrees and values, left to right.
enum Parts<T> {
    Two(Sub<T>, T, Sub<T>),
    Three(Sub<T>, T, Sub<T>, T, Sub<T>),
}

impl<T> Parts<T> {
    fn into_node(self) -> Node<T> {
        match self {
            Parts::Two(left, a, mid) => Node::two(left, a, mid),
            Parts::Three(left, a, mid, b, right) => Node::three(left, a, mid, b, right),
        }
    }
}

/// The result of inserting into a subtree.
enum Grown<T> {
    /// The subtree absorbed the value and kept its height.
    Fit(Node<T>),
    /// The subtree overflowed. The middle value has to be pushed up into the parent, between
    /// the two halves.
    Split(Sub<T>, T, Sub<T>),
}

/// The result of deleting from a subtree.
enum Removal<T> {
    /// The subtree kept its height.
    Kept(Sub<T>),
    /// The subtree lost a level. The parent has to borrow a value from a sibling or merge.
    Underflow(Sub<T>),
}

impl<T> Node<T> {
    fn two(left: Sub<T>, value: T, mid: Sub<T>) -> Self {
        debug_assert_eq!(left.is_some(), mid.is_some(), "2-node with one child");
        Node::Two {
            value,
            kids: left.zip(mid).map(|(l, m)| Box::new([l, m])),
        }
    }

    fn three(left: Sub<T>, low: T, mid: Sub<T>, high: T, right: Sub<T>) -> Self {
        debug_assert!(
            left.is_some() == mid.is_some() && mid.is_some() == right.is_some(),
            "3-node with missing children"
        );
        Node::Three {
            low,
            high,
            kids: left
                .zip(mid)
                .zip(right)
                .map(|((l, m), r)| Box::new([l, m, r])),
        }
    }

    fn into_parts(self) -> Parts<T> {
        match self {
            Node::Two { value, kids } => match kids {
                Some(kids) => {
                    let [left, mid] = *kids;
                    Parts::Two(Some(left), value, Some(mid))
                }
                None => Parts::Two(None, value, None),
            },
            Node::Three { low, high, kids } => match kids {
                Some(kids) => {
                    let [left, mid, right] = *kids;
                    Parts::Three(Some(left), low, Some(mid), high, Some(right))
                }
                None => Parts::Three(None, low, None, high, None),
            },
        }
    }

    pub(crate) fn children(&self) -> &[Self] {
        match self {
            Node::Two { kids: Some(k), .. } => &k[..],
            Node::Three { kids: Some(k), .. } => &k[..],
            _ => &[],
        }
    }

    /// The first value and, for a 3-node, the second.
    pub(crate) fn values(&self) -> (&T, Option<&T>) {
        match self {
            Node::Two { value, .. } => (value, None),
            Node::Three { low, high, .. } => (low, Some(high)),
        }
    }

    fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    fn height(&self) -> usize {
        self.children().first().map_or(0, |c| 1 + c.height())
    }

    /// Like `slice::binary_search`: `Ok(i)` if `value` equals this node's `i`th value,
    /// otherwise `Err(i)` where `i` is the child it would be under.
    fn search(&self, value: &T) -> Result<usize, usize>
    where
        T: Ord,
    {
        match self {
            Node::Two { value: a, .. } => match value.cmp(a) {
                Ordering::Less => Err(0),
                Ordering::Equal => Ok(0),
                Ordering::Greater => Err(1),
            },
            Node::Three { low, high, .. } => match (value.cmp(low), value.cmp(high)) {
                (Ordering::Less, _) => Err(0),
                (Ordering::Equal, _) => Ok(0),
                (_, Ordering::Less) => Err(1),
                (_, Ordering::Equal) => Ok(1),
                (_, Ordering::Greater) => Err(2),
            },
        }
    }

    /// Inserts `value` below this node. A stored value equal to it is swapped out into
    /// `replaced` instead, leaving the shape alone.
    fn insert(self, value: T, replaced: &mut Option<T>) -> Grown<T>
    where
        T: Ord,
    {
        match self.into_parts() {
            Parts::Two(left, a, mid) => match value.cmp(&a) {
                Ordering::Less => match insert(left, value, replaced) {
                    Grown::Fit(l) => Grown::Fit(Node::two(Some(l), a, mid)),
                    Grown::Split(x, k, y) => Grown::Fit(Node::three(x, k, y, a, mid)),
                },
                Ordering::Equal => {
                    *replaced = Some(a);
                    Grown::Fit(Node::two(left, value, mid))
                }
                Ordering::Greater => match insert(mid, value, replaced) {
                    Grown::Fit(m) => Grown::Fit(Node::two(left, a, Some(m))),
                    Grown::Split(x, k, y) => Grown::Fit(Node::three(left, a, x, k, y)),
                },
            },
            Parts::Three(left, a, mid, b, right) => match (value.cmp(&a), value.cmp(&b)) {
                (Ordering::Less, _) => match insert(left, value, replaced) {
                    Grown::Fit(l) => Grown::Fit(Node::three(Some(l), a, mid, b, right)),
                    Grown::Split(x, k, y) => {
                        log::trace!("splitting 3-node from its left child");
                        Grown::Split(
                            Some(Node::two(x, k, y)),
                            a,
                            Some(Node::two(mid, b, right)),
                        )
                    }
                },
                (Ordering::Equal, _) => {
                    *replaced = Some(a);
                    Grown::Fit(Node::three(left, value, mid, b, right))
                }
                (_, Ordering::Less) => match insert(mid, value, replaced) {
                    Grown::Fit(m) => Grown::Fit(Node::three(left, a, Some(m), b, right)),
                    Grown::Split(x, k, y) => {
                        log::trace!("splitting 3-node from its middle child");
                        Grown::Split(
                            Some(Node::two(left, a, x)),
                            k,
                            Some(Node::two(y, b, right)),
                        )
                    }
                },
                (_, Ordering::Equal) => {
                    *replaced = Some(b);
                    Grown::Fit(Node::three(left, a, mid, value, right))
                }
                (_, Ordering::Greater) => match insert(right, value, replaced) {
                    Grown::Fit(r) => Grown::Fit(Node::three(left, a, mid, b, Some(r))),
                    Grown::Split(x, k, y) => {
                        log::trace!("splitting 3-node from its right child");
                        Grown::Split(
                            Some(Node::two(left, a, mid)),
                            b,
                            Some(Node::two(x, k, y)),
                        )
                    }
                },
            },
        }
    }

    fn remove(self, value: &T) -> (Removal<T>, Option<T>)
    where
        T: Ord,
    {
        match self.into_parts() {
            Parts::Two(left, a, mid) => match value.cmp(&a) {
                Ordering::Less => {
                    let (removal, removed) = remove(left, value);
                    (fix_two_left(removal, a, mid), removed)
                }
                Ordering::Greater => {
                    let (removal, removed) = remove(mid, value);
                    (fix_two_mid(left, a, removal), removed)
                }
                Ordering::Equal => match mid {
                    None => (Removal::Underflow(None), Some(a)),
                    Some(mid) => {
                        let (successor, removal) = mid.remove_min();
                        (fix_two_mid(left, successor, removal), Some(a))
                    }
                },
            },
            Parts::Three(left, a, mid, b, right) => match (value.cmp(&a), value.cmp(&b)) {
                (Ordering::Less, _) => {
                    let (removal, removed) = remove(left, value);
                    (fix_three_left(removal, a, mid, b, right), removed)
                }
                (Ordering::Equal, _) => match mid {
                    None => (Removal::Kept(Some(Node::two(left, b, right))), Some(a)),
                    Some(mid) => {
                        let (successor, removal) = mid.remove_min();
                        (fix_three_mid(left, successor, removal, b, right), Some(a))
                    }
                },
                (_, Ordering::Less) => {
                    let (removal, removed) = remove(mid, value);
                    (fix_three_mid(left, a, removal, b, right), removed)
                }
                (_, Ordering::Equal) => match right {
                    None => (Removal::Kept(Some(Node::two(left, a, mid))), Some(b)),
                    Some(right) => {
                        let (successor, removal) = right.remove_min();
                        (fix_three_right(left, a, mid, successor, removal), Some(b))
                    }
                },
                (_, Ordering::Greater) => {
                    let (removal, removed) = remove(right, value);
                    (fix_three_right(left, a, mid, b, removal), removed)
                }
            },
        }
    }

    /// Takes the smallest value out of the subtree.
    fn remove_min(self) -> (T, Removal<T>) {
        match self.into_parts() {
            Parts::Two(None, a, _) => (a, Removal::Underflow(None)),
            Parts::Two(Some(left), a, mid) => {
                let (min, removal) = left.remove_min();
                (min, fix_two_left(removal, a, mid))
            }
            Parts::Three(None, a, mid, b, right) => {
                (a, Removal::Kept(Some(Node::two(mid, b, right))))
            }
            Parts::Three(Some(left), a, mid, b, right) => {
                let (min, removal) = left.remove_min();
                (min, fix_three_left(removal, a, mid, b, right))
            }
        }
    }

    fn visit_preorder<F: FnMut(&T)>(&self, f: &mut F) {
        let (a, b) = self.values();
        f(a);
        if let Some(b) = b {
            f(b);
        }
        for child in self.children() {
            child.visit_preorder(f);
        }
    }

    fn visit_inorder<F: FnMut(&T)>(&self, f: &mut F) {
        let children = self.children();
        let (a, b) = self.values();
        if let Some(left) = children.first() {
            left.visit_inorder(f);
        }
        f(a);
        if let Some(mid) = children.get(1) {
            mid.visit_inorder(f);
        }
        if let Some(b) = b {
            f(b);
            if let Some(right) = children.get(2) {
                right.visit_inorder(f);
            }
        }
    }

    fn visit_postorder<F: FnMut(&T)>(&self, f: &mut F) {
        for child in self.children() {
            child.visit_postorder(f);
        }
        let (a, b) = self.values();
        f(a);
        if let Some(b) = b {
            f(b);
        }
    }

    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result
    where
        T: fmt::Display,
    {
        write!(f, "{:indent$}", "", indent = indent)?;
        match self.values() {
            (a, Some(b)) => writeln!(f, "{} / {}", a, b)?,
            (a, None) => writeln!(f, "{}", a)?,
        }
        if self.is_leaf() {
            return Ok(());
        }
        for child in self.children() {
            child.fmt_subtree(f, indent + INDENT)?;
        }
        Ok(())
    }
}

fn insert<T: Ord>(sub: Sub<T>, value: T, replaced: &mut Option<T>) -> Grown<T> {
    match sub {
        None => Grown::Split(None, value, None),
        Some(node) => node.insert(value, replaced),
    }
}

fn remove<T: Ord>(sub: Sub<T>, value: &T) -> (Removal<T>, Option<T>) {
    match sub {
        None => (Removal::Kept(None), None),
        Some(node) => node.remove(value),
    }
}

/// Takes apart the sibling of an underflowed child.
fn sibling<T>(sub: Sub<T>) -> Parts<T> {
    sub.expect("an internal 2-3 node has all of its children")
        .into_parts()
}

/// Rebuilds a 2-node after deleting from its left subtree.
fn fix_two_left<T>(removal: Removal<T>, a: T, mid: Sub<T>) -> Removal<T> {
    let hole = match removal {
        Removal::Kept(left) => return Removal::Kept(Some(Node::two(left, a, mid))),
        Removal::Underflow(hole) => hole,
    };
    match sibling(mid) {
        Parts::Three(ml, m1, mm, m2, mr) => {
            log::trace!("left child borrows from middle sibling");
            Removal::Kept(Some(Node::two(
                Some(Node::two(hole, a, ml)),
                m1,
                Some(Node::two(mm, m2, mr)),
            )))
        }
        Parts::Two(ml, m1, mm) => {
            log::trace!("pushing underflow up past 2-node");
            Removal::Underflow(Some(Node::three(hole, a, ml, m1, mm)))
        }
    }
}

/// Rebuilds a 2-node after deleting from its middle subtree.
fn fix_two_mid<T>(left: Sub<T>, a: T, removal: Removal<T>) -> Removal<T> {
    let hole = match removal {
        Removal::Kept(mid) => return Removal::Kept(Some(Node::two(left, a, mid))),
        Removal::Underflow(hole) => hole,
    };
    match sibling(left) {
        Parts::Three(ll, l1, lm, l2, lr) => {
            log::trace!("middle child borrows from left sibling");
            Removal::Kept(Some(Node::two(
                Some(Node::two(ll, l1, lm)),
                l2,
                Some(Node::two(lr, a, hole)),
            )))
        }
        Parts::Two(ll, l1, lm) => {
            log::trace!("pushing underflow up past 2-node");
            Removal::Underflow(Some(Node::three(ll, l1, lm, a, hole)))
        }
    }
}

/// Rebuilds a 3-node after deleting from its left subtree. A 3-node always has a value to spare,
/// so the result never underflows.
fn fix_three_left<T>(removal: Removal<T>, a: T, mid: Sub<T>, b: T, right: Sub<T>) -> Removal<T> {
    let hole = match removal {
        Removal::Kept(left) => return Removal::Kept(Some(Node::three(left, a, mid, b, right))),
        Removal::Underflow(hole) => hole,
    };
    let node = match sibling(mid) {
        Parts::Three(ml, m1, mm, m2, mr) => {
            log::trace!("left child borrows from middle sibling");
            Node::three(
                Some(Node::two(hole, a, ml)),
                m1,
                Some(Node::two(mm, m2, mr)),
                b,
                right,
            )
        }
        Parts::Two(ml, m1, mm) => match sibling(right) {
            Parts::Three(rl, r1, rm, r2, rr) => {
                log::trace!("left child borrows through middle from right sibling");
                Node::three(
                    Some(Node::two(hole, a, ml)),
                    m1,
                    Some(Node::two(mm, b, rl)),
                    r1,
                    Some(Node::two(rm, r2, rr)),
                )
            }
            right @ Parts::Two(..) => {
                log::trace!("folding left child into middle sibling");
                Node::two(
                    Some(Node::three(hole, a, ml, m1, mm)),
                    b,
                    Some(right.into_node()),
                )
            }
        },
    };
    Removal::Kept(Some(node))
}

/// Rebuilds a 3-node after deleting from its middle subtree.
fn fix_three_mid<T>(left: Sub<T>, a: T, removal: Removal<T>, b: T, right: Sub<T>) -> Removal<T> {
    let hole = match removal {
        Removal::Kept(mid) => return Removal::Kept(Some(Node::three(left, a, mid, b, right))),
        Removal::Underflow(hole) => hole,
    };
    let node = match sibling(left) {
        Parts::Three(ll, l1, lm, l2, lr) => {
            log::trace!("middle child borrows from left sibling");
            Node::three(
                Some(Node::two(ll, l1, lm)),
                l2,
                Some(Node::two(lr, a, hole)),
                b,
                right,
            )
        }
        left @ Parts::Two(..) => {
            let left = Some(left.into_node());
            match sibling(right) {
                Parts::Three(rl, r1, rm, r2, rr) => {
                    log::trace!("middle child borrows from right sibling");
                    Node::three(
                        left,
                        a,
                        Some(Node::two(hole, b, rl)),
                        r1,
                        Some(Node::two(rm, r2, rr)),
                    )
                }
                Parts::Two(rl, r1, rm) => {
                    log::trace!("folding middle child into right sibling");
                    Node::two(left, a, Some(Node::three(hole, b, rl, r1, rm)))
                }
            }
        }
    };
    Removal::Kept(Some(node))
}

/// Rebuilds a 3-node after deleting from its right subtree.
fn fix_three_right<T>(left: Sub<T>, a: T, mid: Sub<T>, b: T, removal: Removal<T>) -> Removal<T> {
    let hole = match removal {
        Removal::Kept(right) => return Removal::Kept(Some(Node::three(left, a, mid, b, right))),
        Removal::Underflow(hole) => hole,
    };
    let node = match (sibling(left), sibling(mid)) {
        (left, Parts::Three(ml, m1, mm, m2, mr)) => {
            log::trace!("right child borrows from middle sibling");
            Node::three(
                Some(left.into_node()),
                a,
                Some(Node::two(ml, m1, mm)),
                m2,
                Some(Node::two(mr, b, hole)),
            )
        }
        (Parts::Three(ll, l1, lm, l2, lr), Parts::Two(ml, m1, mm)) => {
            log::trace!("right child borrows through middle from left sibling");
            Node::three(
                Some(Node::two(ll, l1, lm)),
                l2,
                Some(Node::two(lr, a, ml)),
                m1,
                Some(Node::two(mm, b, hole)),
            )
        }
        (left @ Parts::Two(..), Parts::Two(ml, m1, mm)) => {
            log::trace!("folding right child into middle sibling");
            Node::two(
                Some(left.into_node()),
                a,
                Some(Node::three(ml, m1, mm, b, hole)),
            )
        }
    };
    Removal::Kept(Some(node))
}

/// A 2-3 tree.
#[derive(Clone, Debug)]
pub struct TwoThreeTree<T> {
    root: Sub<T>,
    count: usize,
}

impl<T> Default for TwoThreeTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TwoThreeTree<T> {
    /// Generates a new, empty `TwoThreeTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
        }
    }

    /// The number of values stored.
    pub fn size(&self) -> usize {
        self.count
    }

    /// Whether no values are stored.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        log::debug!("clearing 2-3 tree of {} values", self.count);
        self.root = None;
        self.count = 0;
    }

    /// The number of levels below the root. Empty trees and lone leaves have height 0.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, Node::height)
    }

    /// Inserts `value`, splitting full nodes on the way back up. If an equal value is already
    /// stored it is overwritten and returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Entry, TwoThreeTree};
    ///
    /// let mut tree = TwoThreeTree::new();
    /// tree.add(Entry::new("b", 1));
    /// tree.add(Entry::new("a", 2));
    /// tree.add(Entry::new("c", 3));
    /// assert_eq!(tree.height(), 1);
    ///
    /// let old = tree.add(Entry::new("a", 20)).unwrap();
    /// assert_eq!(old.value(), &2);
    /// assert_eq!(tree.size(), 3);
    /// ```
    pub fn add(&mut self, value: T) -> Option<T>
    where
        T: Ord,
    {
        let mut replaced = None;
        let root = match insert(self.root.take(), value, &mut replaced) {
            Grown::Fit(root) => root,
            Grown::Split(left, value, mid) => {
                let root = Node::two(left, value, mid);
                log::trace!("root split, height now {}", root.height());
                root
            }
        };
        self.root = Some(root);
        if replaced.is_none() {
            self.count += 1;
        }
        replaced
    }

    /// Finds the stored value equal to `value`, if there is one.
    pub fn get(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut node = self.root.as_ref();
        while let Some(n) = node {
            match n.search(value) {
                Ok(0) => return Some(n.values().0),
                Ok(_) => return n.values().1,
                Err(i) => node = n.children().get(i),
            }
        }
        None
    }

    /// Whether a value equal to `value` is stored.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.get(value).is_some()
    }

    /// Deletes the stored value equal to `value` and returns it. If there is no such value,
    /// nothing happens.
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let (removal, removed) = self.root.take()?.remove(value);
        self.root = match removal {
            Removal::Kept(root) => root,
            Removal::Underflow(root) => {
                log::trace!(
                    "root emptied, height now {}",
                    root.as_ref().map_or(0, Node::height)
                );
                root
            }
        };
        if removed.is_some() {
            self.count -= 1;
        }
        removed
    }

    /// Calls `f` on each value, a node's values before its subtrees.
    pub fn visit_preorder<F: FnMut(&T)>(&self, mut f: F) {
        if let Some(root) = &self.root {
            root.visit_preorder(&mut f);
        }
    }

    /// Calls `f` on each value in order.
    pub fn visit_inorder<F: FnMut(&T)>(&self, mut f: F) {
        if let Some(root) = &self.root {
            root.visit_inorder(&mut f);
        }
    }

    /// Calls `f` on each value, a node's subtrees before its values.
    pub fn visit_postorder<F: FnMut(&T)>(&self, mut f: F) {
        if let Some(root) = &self.root {
            root.visit_postorder(&mut f);
        }
    }

    /// Iterates over the values in order.
    pub fn iter(&self) -> TwoThreeIter<'_, T> {
        TwoThreeIter::new(self.root.as_ref())
    }
}

impl<T: fmt::Display> fmt::Display for TwoThreeTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            None => writeln!(f, "Empty 2-3 tree"),
            Some(root) => {
                writeln!(f, "2-3 tree size {}", self.count)?;
                root.fmt_subtree(f, 0)
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a TwoThreeTree<T> {
    type Item = &'a T;
    type IntoIter = TwoThreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
enum Pending<'a, T> {
    /// A node whose left subtree is done. Its first value comes next.
    Node(&'a Node<T>),
    /// The second value of a 3-node whose middle subtree is done, with the subtree after it.
    Tail(&'a T, Option<&'a Node<T>>),
}

/// An in-order iterator over a [`TwoThreeTree`].
#[derive(Clone, Debug)]
pub struct TwoThreeIter<'a, T> {
    root: Option<&'a Node<T>>,
    stack: Vec<Pending<'a, T>>,
}

impl<'a, T> TwoThreeIter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {
            root,
            stack: Vec::new(),
        };
        iter.reset();
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(Pending::Node(n));
            node = n.children().first();
        }
    }
}

impl<'a, T> Iterator for TwoThreeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stack.pop()? {
            Pending::Node(node) => {
                let children = node.children();
                let (a, b) = node.values();
                if let Some(b) = b {
                    self.stack.push(Pending::Tail(b, children.get(2)));
                }
                self.push_left_spine(children.get(1));
                Some(a)
            }
            Pending::Tail(b, right) => {
                self.push_left_spine(right);
                Some(b)
            }
        }
    }
}

impl<'a, T> ExternalIterator for TwoThreeIter<'a, T> {
    fn reset(&mut self) {
        self.stack.clear();
        self.push_left_spine(self.root);
    }

    fn is_done(&self) -> bool {
        self.stack.is_empty()
    }
}
