//! Capability-polymorphic navigation over binary and n-ary nodes.
//!
//! A navigator pairs a root index with an `is_subtree` flag. When the flag
//! is set the navigator treats `root` as the top of a bounded subtree:
//! `parent(root)` reports absent even if a true parent link exists, so
//! traversal never climbs out of the subtree. The uniform operation set
//! ([`Navigator`]) is shared by both shapes; `left_child` / `right_child`
//! exist only on [`BinaryNavigator`], making a shape mismatch a compile
//! error rather than a runtime fault.

use crate::types::{BinaryLinks, NaryLinks, Store};

/// Uniform navigation operations over one node shape.
pub trait Navigator<N> {
    /// Parent of `node`, absent at the bounded root.
    fn parent<S: Store<N> + ?Sized>(&self, store: &S, node: u32) -> Option<u32>;
    fn first_child<S: Store<N> + ?Sized>(&self, store: &S, node: u32) -> Option<u32>;
    fn last_child<S: Store<N> + ?Sized>(&self, store: &S, node: u32) -> Option<u32>;
    fn next_sibling<S: Store<N> + ?Sized>(&self, store: &S, node: u32) -> Option<u32>;
    fn prev_sibling<S: Store<N> + ?Sized>(&self, store: &S, node: u32) -> Option<u32>;
}

/// Navigator over [`BinaryLinks`] nodes.
///
/// `first_child` maps to the left child if present, else the right child;
/// `last_child` symmetrically. Siblings are derived from the parent's
/// left/right pair.
#[derive(Clone, Copy, Debug)]
pub struct BinaryNavigator {
    pub root: u32,
    pub is_subtree: bool,
}

impl BinaryNavigator {
    /// Navigator bounded to the subtree rooted at `root`.
    pub fn new(root: u32) -> Self {
        Self {
            root,
            is_subtree: true,
        }
    }

    /// Navigator free to ascend past `root` through real parent links.
    pub fn unbounded(root: u32) -> Self {
        Self {
            root,
            is_subtree: false,
        }
    }

    pub fn left_child<N, S>(&self, store: &S, node: u32) -> Option<u32>
    where
        N: BinaryLinks,
        S: Store<N> + ?Sized,
    {
        store.node(node).left()
    }

    pub fn right_child<N, S>(&self, store: &S, node: u32) -> Option<u32>
    where
        N: BinaryLinks,
        S: Store<N> + ?Sized,
    {
        store.node(node).right()
    }
}

impl<N: BinaryLinks> Navigator<N> for BinaryNavigator {
    fn parent<S: Store<N> + ?Sized>(&self, store: &S, node: u32) -> Option<u32> {
        if self.is_subtree && node == self.root {
            None
        } else {
            store.node(node).parent()
        }
    }

    fn first_child<S: Store<N> + ?Sized>(&self, store: &S, node: u32) -> Option<u32> {
        let n = store.node(node);
        n.left().or_else(|| n.right())
    }

    fn last_child<S: Store<N> + ?Sized>(&self, store: &S, node: u32) -> Option<u32> {
        let n = store.node(node);
        n.right().or_else(|| n.left())
    }

    fn next_sibling<S: Store<N> + ?Sized>(&self, store: &S, node: u32) -> Option<u32> {
        let p = self.parent(store, node)?;
        let pn = store.node(p);
        if pn.left() == Some(node) {
            pn.right()
        } else {
            None
        }
    }

    fn prev_sibling<S: Store<N> + ?Sized>(&self, store: &S, node: u32) -> Option<u32> {
        let p = self.parent(store, node)?;
        let pn = store.node(p);
        if pn.right() == Some(node) {
            pn.left()
        } else {
            None
        }
    }
}

/// Navigator over [`NaryLinks`] nodes: direct link reads, with the bounded
/// root reporting no parent and no siblings.
#[derive(Clone, Copy, Debug)]
pub struct NaryNavigator {
    pub root: u32,
    pub is_subtree: bool,
}

impl NaryNavigator {
    /// Navigator bounded to the subtree rooted at `root`.
    pub fn new(root: u32) -> Self {
        Self {
            root,
            is_subtree: true,
        }
    }

    /// Navigator free to ascend past `root` through real parent links.
    pub fn unbounded(root: u32) -> Self {
        Self {
            root,
            is_subtree: false,
        }
    }
}

impl<N: NaryLinks> Navigator<N> for NaryNavigator {
    fn parent<S: Store<N> + ?Sized>(&self, store: &S, node: u32) -> Option<u32> {
        if self.is_subtree && node == self.root {
            None
        } else {
            store.node(node).parent()
        }
    }

    fn first_child<S: Store<N> + ?Sized>(&self, store: &S, node: u32) -> Option<u32> {
        store.node(node).first_child()
    }

    fn last_child<S: Store<N> + ?Sized>(&self, store: &S, node: u32) -> Option<u32> {
        store.node(node).last_child()
    }

    fn next_sibling<S: Store<N> + ?Sized>(&self, store: &S, node: u32) -> Option<u32> {
        if self.is_subtree && node == self.root {
            None
        } else {
            store.node(node).next_sibling()
        }
    }

    fn prev_sibling<S: Store<N> + ?Sized>(&self, store: &S, node: u32) -> Option<u32> {
        if self.is_subtree && node == self.root {
            None
        } else {
            store.node(node).prev_sibling()
        }
    }
}
