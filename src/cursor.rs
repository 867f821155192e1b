//! Bidirectional cursors over a tree's in-order sequence.
//!
//! A cursor wraps a node position and walks the sorted sequence through the
//! parent links alone, with no auxiliary stack. Construction from a tree
//! positions the cursor at the **root**, not the minimum: this is a
//! deliberate low-level primitive, and callers wanting sorted-order
//! traversal from the beginning descend first via [`Cursor::descend_min`].
//!
//! Four variants exist: [`Cursor`], [`CursorMut`], and their reverse
//! counterparts [`RevCursor`] and [`RevCursorMut`], which swap the notions of
//! successor and predecessor. A mutable cursor converts to its shared
//! counterpart ([`CursorMut::as_cursor`], or via `From`) by wrapping the same
//! position, never copying the value.
//!
//! The null position is the end sentinel for both directions; stepping a
//! cursor that is already at the sentinel leaves it there.

use core::fmt;

use crate::raw::{NodeId, RawTree};

#[inline]
fn step_forward<T>(tree: &RawTree<T>, at: Option<NodeId>) -> Option<NodeId> {
    at.and_then(|id| tree.successor(id))
}

#[inline]
fn step_back<T>(tree: &RawTree<T>, at: Option<NodeId>) -> Option<NodeId> {
    at.and_then(|id| tree.predecessor(id))
}

#[inline]
fn descend_left<T>(tree: &RawTree<T>, at: Option<NodeId>) -> Option<NodeId> {
    at.map(|id| tree.leftmost(id))
}

#[inline]
fn descend_right<T>(tree: &RawTree<T>, at: Option<NodeId>) -> Option<NodeId> {
    at.map(|id| tree.rightmost(id))
}

// The four variants differ only in mutability and in which direction counts
// as "next"; the position plumbing is identical and generated once.
macro_rules! shared_cursor_accessors {
    () => {
        /// Returns true iff the cursor sits at the end sentinel.
        #[must_use]
        pub fn is_end(&self) -> bool {
            self.at.is_none()
        }

        /// Moves to the in-order position after the current one, or to the
        /// end sentinel when the sequence is exhausted. A no-op at the
        /// sentinel.
        pub fn move_next(&mut self) {
            self.at = Self::next_position(&*self.tree, self.at);
        }

        /// Moves to the in-order position before the current one, or to the
        /// end sentinel at the front boundary. A no-op at the sentinel.
        pub fn move_prev(&mut self) {
            self.at = Self::prev_position(&*self.tree, self.at);
        }

        /// Applies [`move_next`](Self::move_next) `n` times.
        pub fn advance_by(&mut self, n: usize) {
            for _ in 0..n {
                self.move_next();
            }
        }

        /// Applies [`move_prev`](Self::move_prev) `n` times.
        pub fn rewind_by(&mut self, n: usize) {
            for _ in 0..n {
                self.move_prev();
            }
        }

        /// Descends to the leftmost (smallest) node of the current subtree.
        /// A no-op at the sentinel.
        pub fn descend_min(&mut self) {
            self.at = descend_left(&*self.tree, self.at);
        }

        /// Descends to the rightmost (largest) node of the current subtree.
        /// A no-op at the sentinel.
        pub fn descend_max(&mut self) {
            self.at = descend_right(&*self.tree, self.at);
        }
    };
}

/// A shared cursor over a tree, created at the root.
///
/// # Examples
///
/// ```
/// use bodhi_tree::BstSet;
///
/// let set = BstSet::from([2, 1, 3]);
///
/// let mut cursor = set.cursor(); // positioned at the root
/// cursor.descend_min();
/// assert_eq!(cursor.value(), &1);
///
/// cursor.move_next();
/// assert_eq!(cursor.value(), &2);
///
/// cursor.advance_by(2);
/// assert!(cursor.is_end());
/// ```
pub struct Cursor<'a, T> {
    tree: &'a RawTree<T>,
    at: Option<NodeId>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(tree: &'a RawTree<T>, at: Option<NodeId>) -> Self {
        Self { tree, at }
    }

    fn next_position(tree: &RawTree<T>, at: Option<NodeId>) -> Option<NodeId> {
        step_forward(tree, at)
    }

    fn prev_position(tree: &RawTree<T>, at: Option<NodeId>) -> Option<NodeId> {
        step_back(tree, at)
    }

    shared_cursor_accessors!();

    /// Returns the value at the current position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end sentinel.
    #[must_use]
    pub fn value(&self) -> &'a T {
        match self.try_value() {
            Some(value) => value,
            None => panic!("`Cursor::value()` - cursor is at the end sentinel!"),
        }
    }

    /// Returns the value at the current position, or `None` at the sentinel.
    #[must_use]
    pub fn try_value(&self) -> Option<&'a T> {
        self.at.map(|id| &self.tree.node(id).value)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

/// Position equality: same tree, same node (or both at the sentinel).
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.tree, other.tree) && self.at == other.at
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.try_value()).finish()
    }
}

/// A mutable cursor over a tree, created at the root.
///
/// It is a logic error to modify a value through [`value_mut`] in such a way
/// that its ordering relative to any other value in the tree changes. The
/// behavior resulting from such a logic error is not specified (the tree may
/// return wrong query results or panic) but is not undefined behavior.
///
/// [`value_mut`]: CursorMut::value_mut
pub struct CursorMut<'a, T> {
    tree: &'a mut RawTree<T>,
    at: Option<NodeId>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(tree: &'a mut RawTree<T>, at: Option<NodeId>) -> Self {
        Self { tree, at }
    }

    fn next_position(tree: &RawTree<T>, at: Option<NodeId>) -> Option<NodeId> {
        step_forward(tree, at)
    }

    fn prev_position(tree: &RawTree<T>, at: Option<NodeId>) -> Option<NodeId> {
        step_back(tree, at)
    }

    shared_cursor_accessors!();

    /// Returns the value at the current position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end sentinel.
    #[must_use]
    pub fn value(&self) -> &T {
        match self.try_value() {
            Some(value) => value,
            None => panic!("`CursorMut::value()` - cursor is at the end sentinel!"),
        }
    }

    /// Returns the value at the current position mutably.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end sentinel.
    #[must_use]
    pub fn value_mut(&mut self) -> &mut T {
        match self.at {
            Some(id) => &mut self.tree.node_mut(id).value,
            None => panic!("`CursorMut::value_mut()` - cursor is at the end sentinel!"),
        }
    }

    /// Returns the value at the current position, or `None` at the sentinel.
    #[must_use]
    pub fn try_value(&self) -> Option<&T> {
        self.at.map(|id| &self.tree.node(id).value)
    }

    /// Reborrows this cursor as a shared [`Cursor`] at the same position.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.tree, self.at)
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Cursor::new(cursor.tree, cursor.at)
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.try_value()).finish()
    }
}

/// A shared reverse cursor: `move_next` walks toward smaller values.
///
/// # Examples
///
/// ```
/// use bodhi_tree::BstSet;
///
/// let set = BstSet::from([2, 1, 3]);
///
/// let mut cursor = set.rev_cursor();
/// cursor.descend_max();
/// assert_eq!(cursor.value(), &3);
///
/// cursor.move_next();
/// assert_eq!(cursor.value(), &2);
/// ```
pub struct RevCursor<'a, T> {
    tree: &'a RawTree<T>,
    at: Option<NodeId>,
}

impl<'a, T> RevCursor<'a, T> {
    pub(crate) fn new(tree: &'a RawTree<T>, at: Option<NodeId>) -> Self {
        Self { tree, at }
    }

    // Reverse traversal: successor and predecessor swap roles.
    fn next_position(tree: &RawTree<T>, at: Option<NodeId>) -> Option<NodeId> {
        step_back(tree, at)
    }

    fn prev_position(tree: &RawTree<T>, at: Option<NodeId>) -> Option<NodeId> {
        step_forward(tree, at)
    }

    shared_cursor_accessors!();

    /// Returns the value at the current position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end sentinel.
    #[must_use]
    pub fn value(&self) -> &'a T {
        match self.try_value() {
            Some(value) => value,
            None => panic!("`RevCursor::value()` - cursor is at the end sentinel!"),
        }
    }

    /// Returns the value at the current position, or `None` at the sentinel.
    #[must_use]
    pub fn try_value(&self) -> Option<&'a T> {
        self.at.map(|id| &self.tree.node(id).value)
    }
}

impl<T> Clone for RevCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RevCursor<'_, T> {}

impl<T> PartialEq for RevCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.tree, other.tree) && self.at == other.at
    }
}

impl<T> Eq for RevCursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for RevCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RevCursor").field(&self.try_value()).finish()
    }
}

/// A mutable reverse cursor.
///
/// The ordering caveat of [`CursorMut`] applies to [`value_mut`] here too.
///
/// [`value_mut`]: RevCursorMut::value_mut
pub struct RevCursorMut<'a, T> {
    tree: &'a mut RawTree<T>,
    at: Option<NodeId>,
}

impl<'a, T> RevCursorMut<'a, T> {
    pub(crate) fn new(tree: &'a mut RawTree<T>, at: Option<NodeId>) -> Self {
        Self { tree, at }
    }

    fn next_position(tree: &RawTree<T>, at: Option<NodeId>) -> Option<NodeId> {
        step_back(tree, at)
    }

    fn prev_position(tree: &RawTree<T>, at: Option<NodeId>) -> Option<NodeId> {
        step_forward(tree, at)
    }

    shared_cursor_accessors!();

    /// Returns the value at the current position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end sentinel.
    #[must_use]
    pub fn value(&self) -> &T {
        match self.try_value() {
            Some(value) => value,
            None => panic!("`RevCursorMut::value()` - cursor is at the end sentinel!"),
        }
    }

    /// Returns the value at the current position mutably.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end sentinel.
    #[must_use]
    pub fn value_mut(&mut self) -> &mut T {
        match self.at {
            Some(id) => &mut self.tree.node_mut(id).value,
            None => panic!("`RevCursorMut::value_mut()` - cursor is at the end sentinel!"),
        }
    }

    /// Returns the value at the current position, or `None` at the sentinel.
    #[must_use]
    pub fn try_value(&self) -> Option<&T> {
        self.at.map(|id| &self.tree.node(id).value)
    }

    /// Reborrows this cursor as a shared [`RevCursor`] at the same position.
    #[must_use]
    pub fn as_cursor(&self) -> RevCursor<'_, T> {
        RevCursor::new(&*self.tree, self.at)
    }
}

impl<'a, T> From<RevCursorMut<'a, T>> for RevCursor<'a, T> {
    fn from(cursor: RevCursorMut<'a, T>) -> Self {
        RevCursor::new(cursor.tree, cursor.at)
    }
}

impl<T: fmt::Debug> fmt::Debug for RevCursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RevCursorMut").field(&self.try_value()).finish()
    }
}
