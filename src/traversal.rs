//! Ways of visiting every value of a [`BinarySearchTree`]. Each order is available both as a
//! borrowing iterator and as a `traversal_*` method that calls an action once per value.
//!
//! None of the walks recurse. The depth-first orders keep an explicit stack and the
//! breadth-first order keeps a queue local to its iterator.
//!
//! # Examples
//!
//! ```
//! use search_tree::BinarySearchTree;
//!
//! let tree = BinarySearchTree::from_values([4, 1, 6, 0, 5]).unwrap();
//!
//! let mut visited = Vec::new();
//! tree.traversal_pre_order(|value| visited.push(*value));
//! assert_eq!(visited, vec![4, 1, 0, 6, 5]);
//!
//! assert!(tree.iter().copied().eq([0, 1, 4, 5, 6]));
//! assert!(tree.iter_post_order().copied().eq([0, 1, 5, 6, 4]));
//! assert!(tree.levels().copied().eq([4, 1, 6, 0, 5]));
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree::Node;
use crate::BinarySearchTree;

impl<T> BinarySearchTree<T> {
    /// Iterates over the values in ascending order (left subtree, node, right subtree).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root_node(), self.count())
    }

    /// Iterates over the values visiting each node before its left and then right subtree.
    pub fn iter_pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root_node().into_iter().collect(),
            remaining: self.count(),
        }
    }

    /// Iterates over the values visiting each node after both of its subtrees, so children
    /// always come before their parent.
    pub fn iter_post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: self.root_node().map(|root| (root, false)).into_iter().collect(),
            remaining: self.count(),
        }
    }

    /// Iterates over the values level by level, starting at the root and going left to right
    /// within a level.
    pub fn levels(&self) -> Levels<'_, T> {
        Levels {
            queue: self.root_node().into_iter().collect(),
            remaining: self.count(),
        }
    }

    /// Calls `action` on every value in ascending order.
    pub fn traversal_in_order<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(action);
    }

    /// Calls `action` on every value, each node before its subtrees.
    pub fn traversal_pre_order<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.iter_pre_order().for_each(action);
    }

    /// Calls `action` on every value, each node after its subtrees.
    pub fn traversal_post_order<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.iter_post_order().for_each(action);
    }

    /// Returns the values in breadth-first order. An empty tree gives an empty `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::from_values([4, 1, 6, 0, 12, 7, 13, 5]).unwrap();
    /// assert_eq!(tree.to_array(), vec![4, 1, 6, 0, 5, 12, 7, 13]);
    /// ```
    pub fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.levels().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator created by [`BinarySearchTree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose value hasn't been yielded yet but whose left subtree has been pushed.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, remaining: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Pre-order iterator created by [`BinarySearchTree::iter_pre_order`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Post-order iterator created by [`BinarySearchTree::iter_post_order`].
pub struct PostOrder<'a, T> {
    /// Each node is pushed twice: first unexpanded, then again once its children are queued.
    stack: Vec<(&'a Node<T>, bool)>,
    remaining: usize,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                self.remaining -= 1;
                return Some(&node.value);
            }
            self.stack.push((node, true));
            self.stack
                .extend(node.right.as_deref().map(|right| (right, false)));
            self.stack
                .extend(node.left.as_deref().map(|left| (left, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Breadth-first iterator created by [`BinarySearchTree::levels`].
pub struct Levels<'a, T> {
    queue: VecDeque<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Levels<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> ExactSizeIterator for PreOrder<'_, T> {}
impl<T> ExactSizeIterator for PostOrder<'_, T> {}
impl<T> ExactSizeIterator for Levels<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
impl<T> FusedIterator for PreOrder<'_, T> {}
impl<T> FusedIterator for PostOrder<'_, T> {}
impl<T> FusedIterator for Levels<'_, T> {}
