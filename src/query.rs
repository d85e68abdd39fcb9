//! Read-only queries that use the cached heights and the BST ordering to skip
//! subtrees that cannot contribute to the answer.

use crate::error::AvlError;
use crate::node::Node;
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Returns, in preorder, every element lying on a root-to-leaf path as
    /// long as the tree's height.
    ///
    /// A child is only visited when its height is exactly one less than its
    /// parent's, so subtrees too short to reach the bottom are never entered.
    ///
    /// # Examples
    ///
    /// ```text
    ///              10
    ///          /        \
    ///         5          15
    ///       /   \      /    \
    ///      2     7    13    20
    ///     / \   / \     \  / \
    ///    1   4 6   8   14 17  25
    ///   /           \          \
    ///  0             9         30
    /// ```
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree = Tree::from_ordered_insertions([
    ///     10, 5, 15, 2, 7, 13, 20, 1, 4, 6, 8, 14, 17, 25, 0, 9, 30,
    /// ]);
    ///
    /// assert_eq!(
    ///     tree.deepest_branches(),
    ///     [&10, &5, &2, &1, &0, &7, &8, &9, &15, &20, &25, &30],
    /// );
    /// ```
    pub fn deepest_branches(&self) -> Vec<&T> {
        let mut deep = Vec::new();
        if let Some(root) = self.root() {
            collect_deepest(root, &mut deep);
        }
        deep
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Returns, in ascending order, every element strictly between `lower`
    /// and `upper`.
    ///
    /// Only subtrees that may hold elements inside the bounds are visited.
    ///
    /// # Errors
    ///
    /// [`AvlError::InvertedBounds`] if `lower` is greater than `upper`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::{AvlError, Tree};
    ///
    /// let tree = Tree::from_ordered_insertions([
    ///     10, 5, 15, 2, 7, 13, 20, 1, 4, 6, 8, 14, 17, 25, 0, 9, 30,
    /// ]);
    ///
    /// assert_eq!(tree.sorted_in_between(&7, &14), Ok(vec![&8, &9, &10, &13]));
    /// assert_eq!(tree.sorted_in_between(&8, &8), Ok(vec![]));
    /// assert_eq!(tree.sorted_in_between(&9, &3), Err(AvlError::InvertedBounds));
    /// ```
    pub fn sorted_in_between(&self, lower: &T, upper: &T) -> Result<Vec<&T>, AvlError> {
        if lower > upper {
            return Err(AvlError::InvertedBounds);
        }

        let mut sorted = Vec::new();
        if let Some(root) = self.root() {
            collect_in_between(root, lower, upper, &mut sorted);
        }
        Ok(sorted)
    }
}

fn collect_deepest<'a, T>(node: &'a Node<T>, deep: &mut Vec<&'a T>) {
    deep.push(&node.element);
    for child in [node.left(), node.right()].into_iter().flatten() {
        if child.height == node.height - 1 {
            collect_deepest(child, deep);
        }
    }
}

/// In-order walk restricted to the open interval `(lower, upper)`. The left
/// subtree only holds elements below `node.element` so it is skipped once that
/// element is at or below `lower`, and symmetrically for the right.
fn collect_in_between<'a, T>(node: &'a Node<T>, lower: &T, upper: &T, sorted: &mut Vec<&'a T>)
where
    T: Ord,
{
    let element = &node.element;
    let above_lower = lower < element;
    let below_upper = element < upper;

    if above_lower {
        if let Some(left) = node.left() {
            collect_in_between(left, lower, upper, sorted);
        }
    }
    if above_lower && below_upper {
        sorted.push(element);
    }
    if below_upper {
        if let Some(right) = node.right() {
            collect_in_between(right, lower, upper, sorted);
        }
    }
}
