//! A linked BST that only rebalances when asked to. Duplicate items are allowed: they are routed
//! to the right of an equal item.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.add(1);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Adding an equal item stores it a second time.
//! tree.add(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing returns the stored item.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Err(Error::KeyNotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::trace;

use crate::error::Error;
use crate::node::{Link, Node};

/// A Binary Search Tree storing items of type `T`. Items smaller than a node live in its left
/// subtree, items greater than or equal to it in its right subtree.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    pub(crate) size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone + Ord,
{
    fn clone(&self) -> Self {
        // Re-adding in preorder puts every item back in the slot it came from.
        self.iter().cloned().collect()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size)
            .field("items", &self.inorder().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    /// Draws the tree rotated 90 degrees counter-clockwise: the root sits in the left column and
    /// each level of depth adds a `"| "` prefix.
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.to_string(), "| 3\n2\n| 1\n");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // (node, depth, whether its right subtree has already been pushed)
        let mut stack: Vec<(&Node<T>, usize, bool)> =
            self.root.as_deref().map(|n| (n, 0, false)).into_iter().collect();

        while let Some((node, depth, expanded)) = stack.pop() {
            if expanded {
                writeln!(f, "{}{}", "| ".repeat(depth), node.item)?;
                continue;
            }
            if let Some(left) = node.left() {
                stack.push((left, depth + 1, false));
            }
            stack.push((node, depth, true));
            if let Some(right) = node.right() {
                stack.push((right, depth + 1, false));
            }
        }

        Ok(())
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// How many items are stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree stores no items.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        // Nodes are unlinked one at a time so a long chain doesn't recurse through `Box::drop`.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.size = 0;
    }

    /// Potentially finds the stored item equal to `item`. If nothing matches, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&3), Some(&3));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match item.cmp(&node.item) {
                Ordering::Equal => return Some(&node.item),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether an item equal to `item` is stored.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.find(item).is_some()
    }

    /// Adds `item` to the tree. An item equal to one already stored is added again, to its right.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(2);
    /// tree.add(2);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&2, &2]);
    /// ```
    pub fn add(&mut self, item: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if item < node.item {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Node::new_boxed(item));
        self.size += 1;
    }

    /// Removes one stored item equal to `item` and returns it.
    ///
    /// A node with two children keeps its place: it takes the largest item of its left subtree
    /// and the node that held that item is spliced out instead.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no stored item equals `item`, which includes every item of an
    /// empty tree. The tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Error, Tree};
    ///
    /// let mut tree: Tree<_> = [5, 3, 7, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.preorder().next(), Some(&4));
    /// assert_eq!(tree.remove(&5), Err(Error::KeyNotFound));
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T, Error>
    where
        T: Ord,
    {
        let link = Self::seek(&mut self.root, item);
        let Some(mut node) = link.take() else {
            trace!(size = self.size, "remove of absent item");
            return Err(Error::KeyNotFound);
        };

        let removed = if node.left.is_some() && node.right.is_some() {
            let removed = node.lift_max_in_left();
            *link = Some(node);
            removed
        } else {
            let Node { item, left, right } = *node;
            *link = left.or(right);
            item
        };

        self.size -= 1;
        Ok(removed)
    }

    /// Replaces the stored item equal to `item` with `new_item` and returns the old one, or
    /// `None` if nothing matches.
    ///
    /// If `new_item` orders equal to the old item it takes the old item's place in the same node.
    /// Otherwise the old item is removed and `new_item` added so the ordering stays intact.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.replace(&3, 9), Some(3));
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&5, &8, &9]);
    /// assert_eq!(tree.replace(&3, 1), None);
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T>
    where
        T: Ord,
    {
        let node = Self::seek(&mut self.root, item).as_mut()?;
        if new_item.cmp(&node.item) == Ordering::Equal {
            return Some(mem::replace(&mut node.item, new_item));
        }

        let old = self.remove(item).ok()?;
        self.add(new_item);
        Some(old)
    }

    /// Walks down from `link` to the slot holding an item equal to `item`, or to the empty slot
    /// where it would hang. Passing the root makes the tree itself the parent of the root slot,
    /// so removing the root is no different from removing any other node.
    fn seek<'a>(mut link: &'a mut Link<T>, item: &T) -> &'a mut Link<T>
    where
        T: Ord,
    {
        while link.as_ref().map_or(false, |n| n.item != *item) {
            let node = link.as_mut().expect("checked by loop condition");
            link = if *item < node.item {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        link
    }
}
