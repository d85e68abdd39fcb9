use std::cmp::Ordering;
use std::mem;

use tracing::debug;

use crate::error::AvlError;
use crate::iter::Iter;
use crate::node::{self, Link, Node};
use crate::util::DeleteResult;

/// A self-balancing Binary Search Tree (specifically, an AVL tree) storing a
/// set of distinct, ordered elements. This can be used for inserting, finding,
/// and removing elements in `O(lg N)`.
///
/// Elements are compared only through [`Ord`]; two elements comparing
/// [`Equal`](Ordering::Equal) are the same element as far as the tree cares.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// The height of the tree. An empty tree has a height of -1 and a tree
    /// with a single element has a height of 0. This is read from the root
    /// so it is `O(1)`.
    pub fn height(&self) -> isize {
        node::height(&self.root)
    }

    /// The number of elements stored in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the tree stores no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every element from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// The root node of the tree, for inspecting its structure.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Iterates over the elements of the tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree = Tree::from_ordered_insertions([3, 1, 2]);
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.size)
    }

    /// The smallest element in the tree, if there is one.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.element)
    }

    /// The largest element in the tree, if there is one.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.element)
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Builds a tree by inserting `elements` one after another, in order.
    /// Duplicates after the first are ignored.
    pub fn from_ordered_insertions<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        tree.extend(elements);
        tree
    }

    /// Inserts the given element into the tree and returns whether it was
    /// newly added. If an equal element is already stored nothing changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        let (root, inserted) = insert(self.root.take(), element);
        self.root = Some(root);
        if inserted {
            self.size += 1;
            debug!(size = self.size, height = self.height(), "inserted element");
        }
        inserted
    }

    /// Removes the element equal to `element` from the tree and returns the
    /// stored instance. If the tree has no such element it is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::{AvlError, Tree};
    ///
    /// let mut tree = Tree::from_ordered_insertions([1, 2]);
    ///
    /// assert_eq!(tree.remove(&1), Ok(1));
    /// assert_eq!(tree.remove(&1), Err(AvlError::NotFound));
    /// ```
    pub fn remove(&mut self, element: &T) -> Result<T, AvlError> {
        match remove(self.root.take(), element) {
            DeleteResult::NotFound(root) => {
                self.root = root;
                Err(AvlError::NotFound)
            }
            DeleteResult::Deleted { root, element } => {
                self.root = root;
                self.size -= 1;
                debug!(size = self.size, height = self.height(), "removed element");
                Ok(element)
            }
        }
    }

    /// Returns the stored element equal to `element`. The stored element may
    /// be a distinct instance from the one passed in.
    pub fn get(&self, element: &T) -> Result<&T, AvlError> {
        self.root()
            .and_then(|root| root.find(element))
            .ok_or(AvlError::NotFound)
    }

    /// Whether an element equal to `element` is stored in the tree.
    pub fn contains(&self, element: &T) -> bool {
        self.get(element).is_ok()
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        for element in elements {
            self.insert(element);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self::from_ordered_insertions(elements)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Node<T> {
    fn find(&self, element: &T) -> Option<&T>
    where
        T: Ord,
    {
        match element.cmp(&self.element) {
            Ordering::Less => self.left().and_then(|n| n.find(element)),
            Ordering::Equal => Some(&self.element),
            Ordering::Greater => self.right().and_then(|n| n.find(element)),
        }
    }
}

/// Inserts `element` into the subtree and returns the new subtree root along
/// with whether a new node was created.
fn insert<T>(link: Link<T>, element: T) -> (Box<Node<T>>, bool)
where
    T: Ord,
{
    let Some(mut node) = link else {
        return (Node::new_boxed(element), true);
    };

    let inserted = match element.cmp(&node.element) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), element);
            node.left = Some(left);
            inserted
        }
        Ordering::Equal => return (node, false),
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), element);
            node.right = Some(right);
            inserted
        }
    };

    node.recompute();
    (node.rebalance(), inserted)
}

/// Removes the element equal to `target` from the subtree.
fn remove<T>(link: Link<T>, target: &T) -> DeleteResult<T>
where
    T: Ord,
{
    let Some(mut node) = link else {
        return DeleteResult::NotFound(None);
    };

    let removed = match target.cmp(&node.element) {
        Ordering::Less => match remove(node.left.take(), target) {
            DeleteResult::NotFound(left) => {
                node.left = left;
                return DeleteResult::NotFound(Some(node));
            }
            DeleteResult::Deleted { root, element } => {
                node.left = root;
                element
            }
        },
        Ordering::Greater => match remove(node.right.take(), target) {
            DeleteResult::NotFound(right) => {
                node.right = right;
                return DeleteResult::NotFound(Some(node));
            }
            DeleteResult::Deleted { root, element } => {
                node.right = root;
                element
            }
        },
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => {
                let Node { element, .. } = *node;
                return DeleteResult::Deleted {
                    root: None,
                    element,
                };
            }
            (Some(child), None) | (None, Some(child)) => {
                let Node { element, .. } = *node;
                return DeleteResult::Deleted {
                    root: Some(child),
                    element,
                };
            }
            // If we have two children we have to figure out which node to promote. We choose
            // here this node's predecessor. That is, the largest node in this node's left
            // subtree.
            (Some(left), Some(right)) => {
                let (left, predecessor) = remove_largest(left);
                node.left = left;
                node.right = Some(right);
                mem::replace(&mut node.element, predecessor)
            }
        },
    };

    node.recompute();
    DeleteResult::Deleted {
        root: Some(node.rebalance()),
        element: removed,
    }
}

/// Removes the largest node in the subtree by recursing to the right until there is no right
/// child. Returns the rebalanced subtree and the removed element.
fn remove_largest<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.right.take() {
        None => {
            let Node { element, left, .. } = *node;
            (left, element)
        }
        Some(right) => {
            let (right, largest) = remove_largest(right);
            node.right = right;
            node.recompute();
            (Some(node.rebalance()), largest)
        }
    }
}
