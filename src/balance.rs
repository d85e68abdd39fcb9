//! Restoring the AVL invariant with rotations.
//!
//! See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.

use tracing::trace;

use crate::node::{height, Node};

impl<T> Node<T> {
    /// Rotates this subtree if its (already recomputed) balance factor is out
    /// of range and returns the new subtree root.
    ///
    /// After a single insertion or removal only the lowest unbalanced node is
    /// out of range, and by at most one, so a single or double rotation here
    /// always restores it.
    pub(crate) fn rebalance(self: Box<Self>) -> Box<Self> {
        let node = match self.balance_factor {
            bf if bf > 1 => {
                if self.left.as_ref().map_or(false, |l| l.balance_factor < 0) {
                    trace!(rotation = "left-right", "rebalancing subtree");
                    self.rotate_left_right()
                } else {
                    trace!(rotation = "right", "rebalancing subtree");
                    self.rotate_right()
                }
            }
            bf if bf < -1 => {
                if self.right.as_ref().map_or(false, |r| r.balance_factor > 0) {
                    trace!(rotation = "right-left", "rebalancing subtree");
                    self.rotate_right_left()
                } else {
                    trace!(rotation = "left", "rebalancing subtree");
                    self.rotate_left()
                }
            }
            _ => self,
        };

        if cfg!(debug_assertions) {
            let left_height = height(&node.left);
            let right_height = height(&node.right);
            assert_eq!(node.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        node
    }

    /// Rotate self to the right. This moves the left child up vertically and self down vertically.
    /// Used to rebalance the tree when the left child is too tall. As such, it must only be called
    /// when there _is_ a left child.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///   old_root (i.e. "self")    new_root
    ///    /     \                  /     \
    /// new_root  z     rotate ->  x    old_root
    ///  / \                               /  \
    /// x   y                             y    z
    /// ```
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = self.left.take().expect("Rotate right => left child");
        self.left = new_root.right.take();
        self.recompute();

        new_root.right = Some(self);
        new_root.recompute();
        new_root
    }

    /// Mirror image of [`Node::rotate_right`]: the right child moves up and
    /// adopts its old left subtree as self's new right subtree.
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = self.right.take().expect("Rotate left => right child");
        self.right = new_root.left.take();
        self.recompute();

        new_root.left = Some(self);
        new_root.recompute();
        new_root
    }

    fn rotate_left_right(mut self: Box<Self>) -> Box<Self> {
        let left = self.left.take().expect("Rotate left-right => left child");
        self.left = Some(left.rotate_left());
        self.rotate_right()
    }

    fn rotate_right_left(mut self: Box<Self>) -> Box<Self> {
        let right = self.right.take().expect("Rotate right-left => right child");
        self.right = Some(right.rotate_right());
        self.rotate_left()
    }
}
