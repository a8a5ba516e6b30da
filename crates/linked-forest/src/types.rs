//! Link traits and storage access.
//!
//! Every node "pointer" in this crate is an `Option<u32>` index into a
//! caller-owned arena; `None` is the absent sentinel for a missing parent,
//! child, or sibling. The link traits expose those indices per tree shape,
//! and [`Store`] abstracts over the places the nodes can live.

/// Binary-shape links: `parent`, `left`, `right`.
///
/// `left` and `right` are owning links (the node is responsible for those
/// subtrees); `parent` is a back-reference and must never be followed to
/// free memory.
pub trait BinaryLinks {
    fn parent(&self) -> Option<u32>;
    fn left(&self) -> Option<u32>;
    fn right(&self) -> Option<u32>;
    fn set_parent(&mut self, v: Option<u32>);
    fn set_left(&mut self, v: Option<u32>);
    fn set_right(&mut self, v: Option<u32>);
}

/// N-ary-shape links: `parent`, `first_child`, `last_child`, `next_sibling`,
/// `prev_sibling`.
///
/// Only `first_child` is an owning link. `last_child` is a cache for O(1)
/// append, and the sibling pair forms the doubly-linked child list whose
/// head is the parent's `first_child` and whose tail is its `last_child`.
pub trait NaryLinks {
    fn parent(&self) -> Option<u32>;
    fn first_child(&self) -> Option<u32>;
    fn last_child(&self) -> Option<u32>;
    fn next_sibling(&self) -> Option<u32>;
    fn prev_sibling(&self) -> Option<u32>;
    fn set_parent(&mut self, v: Option<u32>);
    fn set_first_child(&mut self, v: Option<u32>);
    fn set_last_child(&mut self, v: Option<u32>);
    fn set_next_sibling(&mut self, v: Option<u32>);
    fn set_prev_sibling(&mut self, v: Option<u32>);
}

/// Read access to node storage by index.
///
/// Implemented for plain slices and vectors (nodes built by hand) and for
/// [`SlabArena`](crate::slab::SlabArena) (nodes built through the ownership
/// protocol), so navigation code runs over either.
pub trait Store<N> {
    /// Resolves `idx` to a node. Panics if the index does not refer to a
    /// live node; a dangling index is caller error.
    fn node(&self, idx: u32) -> &N;
}

impl<N> Store<N> for [N] {
    fn node(&self, idx: u32) -> &N {
        &self[idx as usize]
    }
}

impl<N> Store<N> for Vec<N> {
    fn node(&self, idx: u32) -> &N {
        &self[idx as usize]
    }
}
