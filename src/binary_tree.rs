use core::fmt;

use crate::cursor::Cursor;
use crate::node_handle::NodeHandle;

/// The capability set shared by every tree variant in this family.
///
/// The measuring operations (`len`, `is_empty`, `max_len`) have fixed
/// meanings; the three required operations carry each variant's policy:
/// `insert` must preserve the variant's ordering and balancing invariants,
/// `clear` must release every node, and `contains` is the membership test
/// whose cost depends on how well the variant keeps itself balanced —
/// O(log n) for a self-balancing tree, up to O(n) for a plain BST fed
/// sorted input.
///
/// # Examples
///
/// Code written against the trait works with any variant:
///
/// ```
/// use bodhi_tree::{BinaryTree, BstSet};
///
/// fn census(tree: &mut impl BinaryTree<u32>) -> usize {
///     tree.insert_all([3, 1, 4, 1, 5]);
///     tree.len()
/// }
///
/// let mut set = BstSet::new();
/// assert_eq!(census(&mut set), 4); // the duplicate 1 is a no-op
/// assert!(set.contains(&4));
/// ```
pub trait BinaryTree<T: Ord> {
    /// Returns the number of stored values. O(1); the count is maintained by
    /// the node store, never derived by traversal.
    fn len(&self) -> usize;

    /// Returns true iff no values are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the ceiling on the number of values one tree can hold. This is
    /// an implementation limit, not a promise that allocation succeeds all
    /// the way up to it.
    fn max_len(&self) -> usize;

    /// Destroys all nodes and resets the tree to empty.
    fn clear(&mut self);

    /// Inserts one value. Returns false when an equal value was already
    /// present, in which case the tree is unchanged.
    fn insert(&mut self, value: T) -> bool;

    /// Inserts each value in turn; duplicates are no-ops.
    fn insert_all(&mut self, values: impl IntoIterator<Item = T>)
    where
        Self: Sized,
    {
        for value in values {
            self.insert(value);
        }
    }

    /// Returns true iff a value equal to `value` is stored.
    fn contains(&self, value: &T) -> bool;
}

/// The outcome of reinserting an extracted node via
/// [`BstSet::insert_node`](crate::BstSet::insert_node).
///
/// On a duplicate, `position` points at the value already present and the
/// handle comes back in `node` unconsumed; inserting an empty handle yields
/// the end position, `inserted == false`, and an empty handle.
pub struct InsertNode<'a, T> {
    /// Position of the value now representing the insertion.
    pub position: Cursor<'a, T>,
    /// Whether a new node was linked into the tree.
    pub inserted: bool,
    /// The unconsumed handle on a duplicate; empty otherwise.
    pub node: NodeHandle<T>,
}

impl<T: fmt::Debug> fmt::Debug for InsertNode<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertNode")
            .field("position", &self.position)
            .field("inserted", &self.inserted)
            .field("node", &self.node)
            .finish()
    }
}
