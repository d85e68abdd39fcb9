use crate::node::Link;

/// What a recursive removal hands back to its caller.
pub(crate) enum DeleteResult<T> {
    /// The element wasn't found so nothing was deleted. The subtree is handed back untouched.
    NotFound(Link<T>),
    /// The element was deleted. `root` is the recomputed and rebalanced subtree that replaces the
    /// one passed in and `element` is the stored element that was removed.
    Deleted { root: Link<T>, element: T },
}
