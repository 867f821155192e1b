use super::BstSet;
use crate::raw::RawTree;

impl<T> BstSet<T> {
    /// Creates an empty set with node slots for at least `capacity` values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bodhi_tree::BstSet;
    ///
    /// let set: BstSet<i32> = BstSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BstSet {
            tree: RawTree::with_capacity(capacity),
        }
    }

    /// Returns the number of values the set can hold without growing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bodhi_tree::BstSet;
    ///
    /// let set: BstSet<i32> = BstSet::with_capacity(32);
    /// assert_eq!(set.capacity(), 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }
}
