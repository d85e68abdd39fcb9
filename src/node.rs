/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single node of a [`Tree`](crate::Tree). Each node owns its element and
/// both of its children so a node is reachable from exactly one parent.
///
/// The height and balance factor are cached. They are only written on the
/// mutation paths (see [`Node::recompute`]) and never recalculated on read.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// Longest path from this node down to a leaf. A node with no children
    /// has a height of 0.
    pub(crate) height: isize,
    /// Height of the left subtree minus height of the right subtree.
    pub(crate) balance_factor: isize,
}

impl<T> Node<T> {
    /// Construct a new leaf holding `element`.
    pub(crate) fn new_boxed(element: T) -> Box<Self> {
        Box::new(Self {
            element,
            left: None,
            right: None,
            height: 0,
            balance_factor: 0,
        })
    }

    /// The element stored in this node.
    pub fn element(&self) -> &T {
        &self.element
    }

    /// The cached height of the subtree rooted at this node.
    pub fn height(&self) -> isize {
        self.height
    }

    /// The cached balance factor of this node. Always one of `-1`, `0` or `1`
    /// between operations.
    pub fn balance_factor(&self) -> isize {
        self.balance_factor
    }

    /// The left child, holding smaller elements.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The right child, holding larger elements.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Refreshes the cached height and balance factor from the children.
    /// Must be called on every node whose subtree may have changed, children
    /// before parents.
    pub(crate) fn recompute(&mut self) {
        let left_height = height(&self.left);
        let right_height = height(&self.right);
        self.height = left_height.max(right_height) + 1;
        self.balance_factor = left_height - right_height;
    }
}

/// Height of a possibly empty subtree. An empty subtree has a height of -1.
pub(crate) fn height<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(-1, |n| n.height)
}
