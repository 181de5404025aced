use std::mem;

/// An owning link to a child. The tree's root is a `Link` too, which lets it stand in for the
/// left link of a pseudo-root above the real one.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single vertex of the tree. There is no parent pointer: anything that needs to walk back up
/// keeps its own stack or holds on to the [`Link`] it came through.
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(item: T) -> Box<Self> {
        Box::new(Self {
            item,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The existing children, left first.
    pub(crate) fn children(&self) -> impl Iterator<Item = &Self> {
        self.left().into_iter().chain(self.right())
    }

    /// Replaces this node's item with the largest item of its left subtree and splices the node
    /// that held it out. Returns the item this node held before.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    pub(crate) fn lift_max_in_left(&mut self) -> T {
        let mut link = &mut self.left;
        while link.as_ref().map_or(false, |n| n.right.is_some()) {
            link = &mut link.as_mut().expect("checked by loop condition").right;
        }

        let mut max = link.take().expect("Lifting max in left => left child");
        // The right-most node has no right child, only its left child needs a new home.
        *link = max.left.take();
        mem::replace(&mut self.item, max.item)
    }
}
