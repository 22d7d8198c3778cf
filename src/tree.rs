//! A plain Binary Search Tree. Every node is exclusively owned by its parent (or by the tree
//! for the root) so there are no parent pointers. Operations that need to change a parent's
//! child instead walk down while holding a mutable reference to the child slot they came from.
//!
//! # Examples
//!
//! ```
//! use search_tree::{BinarySearchTree, Error};
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.root(), Err(Error::EmptyTree));
//!
//! tree.insert(1).unwrap();
//! assert!(tree.contains(&1));
//!
//! // Values are stored at most once.
//! assert_eq!(tree.insert(1), Err(Error::DuplicateValue));
//! assert_eq!(tree.count(), 1);
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Err(Error::ValueNotFound));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::error::{Error, Result};

/// An owned child slot. Empty at the bottom of a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    /// The child slot to descend into when the searched value compares to this node's value as
    /// `ordering`. Must not be called with `Ordering::Equal`.
    fn child_mut(&mut self, ordering: Ordering) -> &mut Link<T> {
        match ordering {
            Ordering::Less => &mut self.left,
            Ordering::Equal | Ordering::Greater => &mut self.right,
        }
    }
}

/// An unbalanced Binary Search Tree of distinct values. This can be used for inserting,
/// finding, and removing values, and for visiting them in several orders.
pub struct BinarySearchTree<T> {
    root: Link<T>,
    /// Number of nodes reachable from `root`.
    size: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Builds a tree by inserting `values` in the given order. The first value that is already
    /// in the tree aborts construction with [`Error::DuplicateValue`].
    ///
    /// To silently drop duplicates instead, collect into the tree (see [`FromIterator`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::{BinarySearchTree, Error};
    ///
    /// let tree = BinarySearchTree::from_values([2, 1, 3]).unwrap();
    /// assert_eq!(tree.to_array(), vec![2, 1, 3]);
    ///
    /// let duplicated = BinarySearchTree::from_values([2, 1, 2]);
    /// assert_eq!(duplicated.err(), Some(Error::DuplicateValue));
    /// ```
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut tree = Self::new();
        for value in values {
            tree.insert(value)?;
        }
        Ok(tree)
    }

    /// Inserts `value` as a new leaf, keeping every left subtree smaller and every right subtree
    /// larger than its parent. Fails with [`Error::DuplicateValue`] if the value is already
    /// present, in which case the tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::{BinarySearchTree, Error};
    ///
    /// let mut tree = BinarySearchTree::new();
    ///
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.to_array(), vec![2, 1]);
    ///
    /// assert_eq!(tree.insert(1), Err(Error::DuplicateValue));
    /// assert_eq!(tree.count(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> Result<()>
    where
        T: Ord,
    {
        let slot = locate(&mut self.root, &value);
        if slot.is_some() {
            return Err(Error::DuplicateValue);
        }
        *slot = Some(Node::new_boxed(value));
        self.size += 1;
        trace!("inserted leaf, tree holds {} values", self.size);
        Ok(())
    }

    /// Returns whether `value` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::from_values([4, 1, 6]).unwrap();
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Removes `value` from the tree and returns it. Fails with [`Error::ValueNotFound`] if the
    /// value is not present, in which case the tree is unchanged.
    ///
    /// A leaf is simply detached and a node with one child is replaced by that child. A node
    /// with two children keeps its place in the tree but takes over the value of its in-order
    /// successor, which is then detached (its right subtree, if any, moves up into its slot).
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::from_values([4, 1, 6, 0, 12, 7, 13, 5]).unwrap();
    ///
    /// assert_eq!(tree.remove(&4), Ok(4));
    /// assert_eq!(tree.to_array(), vec![5, 1, 6, 0, 12, 7, 13]);
    /// assert_eq!(tree.count(), 7);
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<T>
    where
        T: Ord,
    {
        let slot = locate(&mut self.root, value);
        let mut node = slot.take().ok_or(Error::ValueNotFound)?;

        let removed = match (node.left.take(), node.right.take()) {
            (None, None) => {
                trace!("removed leaf");
                node.value
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!("removed node with one child");
                *slot = Some(child);
                node.value
            }
            (Some(left), Some(right)) => {
                trace!("removed node with two children");
                let (successor, rest) = detach_min(right);
                node.left = Some(left);
                node.right = rest;
                let removed = mem::replace(&mut node.value, successor);
                *slot = Some(node);
                removed
            }
        };

        self.size -= 1;
        Ok(removed)
    }

    /// Removes every value from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::{BinarySearchTree, Error};
    ///
    /// let mut tree = BinarySearchTree::from_values([2, 1, 3]).unwrap();
    /// tree.clear();
    ///
    /// assert_eq!(tree.count(), 0);
    /// assert_eq!(tree.root(), Err(Error::EmptyTree));
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing tree of {} values", self.size);
        self.release();
    }

    /// Returns the value stored at the root or [`Error::EmptyTree`].
    pub fn root(&self) -> Result<&T> {
        self.root
            .as_deref()
            .map(|node| &node.value)
            .ok_or(Error::EmptyTree)
    }

    /// Number of values in the tree.
    pub fn count(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn root_node(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Drops every node without recursing so degenerate trees can't overflow the stack.
    fn release(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.size = 0;
    }
}

/// Walks down from `slot` and returns the slot that holds `value`, or the empty slot where it
/// would be inserted.
fn locate<'a, T>(mut slot: &'a mut Link<T>, value: &T) -> &'a mut Link<T>
where
    T: Ord,
{
    loop {
        let ordering = match slot.as_deref() {
            Some(node) => value.cmp(&node.value),
            None => return slot,
        };
        if ordering == Ordering::Equal {
            return slot;
        }
        if let Some(node) = slot {
            slot = node.child_mut(ordering);
        }
    }
}

/// Detaches the smallest node of the subtree rooted at `root`. Returns its value and what is
/// left of the subtree.
fn detach_min<T>(mut root: Box<Node<T>>) -> (T, Link<T>) {
    match take_min(&mut root.left) {
        Some(min) => (min, Some(root)),
        None => {
            let Node { value, right, .. } = *root;
            (value, right)
        }
    }
}

/// Removes the leftmost node below `slot`, splicing its right child into its place.
fn take_min<T>(mut slot: &mut Link<T>) -> Option<T> {
    loop {
        if slot.as_deref()?.left.is_none() {
            break;
        }
        if let Some(node) = slot {
            slot = &mut node.left;
        }
    }
    let min = slot.take()?;
    let Node { value, right, .. } = *min;
    *slot = right;
    Some(value)
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    /// Inserts every value, skipping the ones already present.
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            if let Err(e) = self.insert(value) {
                debug!("skipped value during bulk load: {}", e);
            }
        }
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut tree = Self::new();
        tree.extend(values);
        tree
    }
}

/// Re-inserting the values in level order rebuilds a tree of exactly the same shape.
impl<T> Clone for BinarySearchTree<T>
where
    T: Ord + Clone,
{
    fn clone(&self) -> Self {
        self.levels().cloned().collect()
    }
}

/// Two trees are equal when they visit the same values in level order. For BSTs that also
/// means they have the same shape.
impl<T> PartialEq for BinarySearchTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.levels().eq(other.levels())
    }
}

impl<T> Eq for BinarySearchTree<T> where T: Eq {}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
