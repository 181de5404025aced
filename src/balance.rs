//! Balance detection and on-demand rebuilding.
//!
//! A tree never rebalances itself while items are added or removed. Instead [`Tree::is_balanced`]
//! compares the height against a logarithmic bound on the item count and [`Tree::rebalance`]
//! rebuilds the tree from its sorted items when that bound is exceeded.

use tracing::{debug, enabled, Level};

use crate::node::Node;
use crate::tree::Tree;

impl<T> Tree<T> {
    /// The number of edges on the longest path from the root down to a leaf. A lone root has a
    /// height of 0, and so does an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let chain: Tree<_> = [1, 2, 3, 4, 5].into_iter().collect();
    /// assert_eq!(chain.height(), 4);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|n| (n, 0)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            if node.is_leaf() {
                height = height.max(depth);
            }
            stack.extend(node.children().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Whether the height is below `2 * log2(len + 1) - 1`, i.e. roughly within twice the
    /// smallest possible height for this many items. This is a heuristic over the whole tree,
    /// not a per-node bound like an AVL tree keeps. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        let bound = 2.0 * ((self.len() + 1) as f64).log2() - 1.0;
        (self.height() as f64) < bound
    }

    /// Rebuilds the tree if it isn't [balanced][Tree::is_balanced]. See [`Tree::rebuild`].
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        if self.is_balanced() {
            debug!(size = self.len(), "tree already balanced");
            return;
        }
        self.rebuild();
    }

    /// Tears the tree down and adds its items back median first: the middle item of the sorted
    /// items becomes the root, then the left half and the right half are rebuilt the same way
    /// underneath it. This gives the smallest height possible for distinct items.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [1, 2, 3, 4, 5].into_iter().collect();
    /// tree.rebuild();
    ///
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [3, 2, 1, 5, 4]);
    /// ```
    pub fn rebuild(&mut self)
    where
        T: Ord,
    {
        // Heights cost a full walk each, so only measure them when someone is listening.
        let height_before = enabled!(Level::DEBUG).then(|| self.height());
        let items = self.drain_sorted();
        self.add_median_first(items);
        if let Some(height_before) = height_before {
            debug!(
                size = self.len(),
                height_before,
                height_after = self.height(),
                "rebuilt tree"
            );
        }
    }

    /// Empties the tree, returning its items in sorted order.
    fn drain_sorted(&mut self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len());
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        let mut next = self.root.take();

        loop {
            while let Some(mut node) = next {
                next = node.left.take();
                stack.push(node);
            }
            let Some(mut node) = stack.pop() else {
                break;
            };
            next = node.right.take();
            items.push(node.item);
        }

        self.size = 0;
        items
    }

    /// Adds the middle item before recursing into either half. Adding a half first would hang the
    /// middle item below it instead of above it.
    fn add_median_first(&mut self, mut items: Vec<T>)
    where
        T: Ord,
    {
        if items.is_empty() {
            return;
        }
        let mid = items.len() / 2;
        let right = items.split_off(mid + 1);
        let median = items.pop().expect("split_off(mid + 1) leaves the median last");

        self.add(median);
        self.add_median_first(items);
        self.add_median_first(right);
    }
}
