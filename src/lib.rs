//! An ordered set backed by an AVL tree, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! ## AVL balancing
//!
//! Searching takes `O(height)` so an unlucky insertion order (e.g. ascending)
//! degrades a plain BST into a linked list. An AVL tree caches on every `Node`
//! its height (a leaf has height `0`, a missing child counts as `-1`) and its
//! balance factor (left height minus right height). After every insertion or
//! removal the nodes on the mutated path are recomputed and, if a balance
//! factor leaves `{-1, 0, 1}`, rotated back into shape. This keeps the height
//! below `1.44 * lg(N + 2)`.
//!
//! The cached heights also let the queries in this crate prune whole subtrees:
//! [`Tree::deepest_branches`] only follows children that can still reach the
//! bottom of the tree and [`Tree::sorted_in_between`] skips subtrees lying
//! outside of its bounds.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(1);
//! tree.insert(2);
//! tree.insert(3);
//!
//! // Ascending insertions got rotated into a balanced tree.
//! assert_eq!(tree.height(), 1);
//! assert_eq!(tree.root().map(|n| *n.element()), Some(2));
//!
//! assert_eq!(tree.remove(&2), Ok(2));
//! assert!(!tree.contains(&2));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod balance;
mod error;
mod iter;
mod node;
mod query;
mod tree;
mod util;


pub use error::AvlError;
pub use iter::Iter;
pub use node::Node;
pub use tree::Tree;
