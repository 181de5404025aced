//! Range and neighbour lookups. These are all answered by walking the sorted items, so they cost
//! `O(n)` rather than `O(height)`.

use crate::tree::Tree;

impl<T> Tree<T>
where
    T: Ord,
{
    /// Returns every stored item `x` with `low <= x <= high`, in sorted order. Both `low` and
    /// `high` must themselves be stored, otherwise `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.range_find(&3, &7), Some(vec![&3, &4, &5, &7]));
    /// assert_eq!(tree.range_find(&2, &7), None);
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Option<Vec<&T>> {
        if !self.contains(low) || !self.contains(high) {
            return None;
        }
        Some(
            self.inorder()
                .skip_while(|x| *x < low)
                .take_while(|x| *x <= high)
                .collect(),
        )
    }

    /// The smallest stored item greater than `item`, whether or not `item` itself is stored.
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&5), Some(&8));
    /// assert_eq!(tree.successor(&6), Some(&8));
    /// assert_eq!(tree.successor(&8), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T> {
        self.inorder().find(|x| *x > item)
    }

    /// The largest stored item smaller than `item`, whether or not `item` itself is stored.
    pub fn predecessor(&self, item: &T) -> Option<&T> {
        self.inorder().take_while(|x| *x < item).last()
    }
}
