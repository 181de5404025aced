//! Lazy traversals over a [`Tree`]. Every call starts a fresh walk that borrows the tree, so a
//! traversal can be restarted at any time and always reflects the tree as it is now.
//!
//! # Examples
//!
//! ```
//! use linked_bst::Tree;
//!
//! let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [5, 3, 1, 4, 8, 7, 9]);
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
//! assert_eq!(tree.postorder().copied().collect::<Vec<_>>(), [1, 4, 3, 7, 9, 8, 5]);
//! assert_eq!(tree.levelorder().copied().collect::<Vec<_>>(), [5, 3, 8, 1, 4, 7, 9]);
//! ```

use std::collections::VecDeque;

use crate::node::Node;
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Iterates over the items in preorder. This is the tree's default iteration order.
    pub fn iter(&self) -> Preorder<'_, T> {
        self.preorder()
    }

    /// Visits a node, then its left subtree, then its right subtree.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Visits a node's left subtree, then the node, then its right subtree. This yields the items
    /// in sorted order.
    pub fn inorder(&self) -> Inorder<'_, T> {
        let mut inorder = Inorder { stack: Vec::new() };
        inorder.push_left_spine(self.root.as_deref());
        inorder
    }

    /// Visits both subtrees of a node, left first, before the node itself.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder {
            stack: self.root.as_deref().map(|n| (n, false)).into_iter().collect(),
        }
    }

    /// Visits nodes level by level from the root down, each level left to right.
    pub fn levelorder(&self) -> Levelorder<'_, T> {
        Levelorder {
            queue: self.root.as_deref().into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Preorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.preorder()
    }
}

/// Preorder iterator created by [`Tree::preorder`] and [`Tree::iter`].
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree pops first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.item)
    }
}

/// Sorted iterator created by [`Tree::inorder`].
pub struct Inorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.item)
    }
}

/// Postorder iterator created by [`Tree::postorder`].
pub struct Postorder<'a, T> {
    /// Nodes still to visit, flagged once their children have been pushed.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&node.item);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
        None
    }
}

/// Breadth first iterator created by [`Tree::levelorder`].
pub struct Levelorder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Iterator for Levelorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(&node.item)
    }
}
