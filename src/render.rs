use std::fmt;

use crate::tree::Node;
use crate::BinarySearchTree;

/// Spaces of indentation per level of depth in [`Pretty`] output.
const INDENT: usize = 5;

/// Displays the values in level order as a list, e.g. `[4, 1, 6]`.
impl<T> fmt::Display for BinarySearchTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.levels().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl<T> BinarySearchTree<T> {
    /// Returns a [`Display`][fmt::Display] adapter that draws the tree one value per line in
    /// pre-order, each value indented by its depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::from_values([4, 1, 6, 0]).unwrap();
    ///
    /// assert_eq!(
    ///     tree.pretty().to_string(),
    ///     "4\n     1\n          0\n     6\n",
    /// );
    /// ```
    pub fn pretty(&self) -> Pretty<'_, T> {
        Pretty { tree: self }
    }
}

/// Indented rendering of a tree, created by [`BinarySearchTree::pretty`]. An empty tree renders
/// as nothing.
pub struct Pretty<'a, T> {
    tree: &'a BinarySearchTree<T>,
}

impl<T> fmt::Display for Pretty<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(&Node<T>, usize)> =
            self.tree.root_node().map(|root| (root, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            writeln!(f, "{:indent$}{}", "", node.value, indent = depth * INDENT)?;
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
        }
        Ok(())
    }
}
